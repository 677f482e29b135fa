//! Query building for restaurant recommendations.

use mongodb::bson::{Document, doc};
use serde::Deserialize;
use time::OffsetDateTime;
use utoipa::IntoParams;

use crate::models::HOUR_FORMAT;

/// Optional recommendation criteria. Empty values are ignored.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecommendationFilter {
    /// Cuisine style, matched after title-casing.
    pub style: Option<String>,
    /// `yes` or `no`, matched after lower-casing.
    pub vegetarian: Option<String>,
    /// Any non-empty value restricts results to restaurants open right now.
    pub open_now: Option<String>,
}

impl RecommendationFilter {
    /// Builds the MongoDB filter document. `now` is the current time as `HH:MM`.
    pub fn to_document(&self, now: &str) -> Document {
        let mut query = Document::new();

        if let Some(style) = non_empty(&self.style) {
            query.insert("style", title_case(style));
        }
        if let Some(vegetarian) = non_empty(&self.vegetarian) {
            query.insert("vegetarian", vegetarian.to_lowercase());
        }
        if non_empty(&self.open_now).is_some() {
            query.insert("open_hour", doc! { "$lte": now });
            query.insert("close_hour", doc! { "$gte": now });
        }

        query
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Upper-cases the first letter of every word and lower-cases the rest.
/// A word starts at any letter that follows a non-letter.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}

/// Current local time as `HH:MM`, falling back to UTC when the local offset is unknown.
pub fn current_hour() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_hour(now)
}

pub fn format_hour(at: OffsetDateTime) -> String {
    at.time()
        .format(HOUR_FORMAT)
        .unwrap_or_else(|_| format!("{:02}:{:02}", at.hour(), at.minute()))
}
