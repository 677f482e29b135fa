use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use time::{Time, format_description::BorrowedFormatItem, macros::format_description};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Wire and storage format for opening hours: zero-padded 24-hour `HH:MM`.
pub const HOUR_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// Boolean-like flag stored as the literal strings `"yes"` / `"no"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

/// A restaurant record without a database id, as inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewRestaurant {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub style: String,
    pub vegetarian: YesNo,
    /// Opening time, `HH:MM`.
    #[validate(custom(function = "validate_hour"))]
    pub open_hour: String,
    /// Closing time, `HH:MM`.
    #[validate(custom(function = "validate_hour"))]
    pub close_hour: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliveries: Option<YesNo>,
}

/// A stored restaurant document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub style: String,
    pub vegetarian: YesNo,
    pub open_hour: String,
    pub close_hour: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliveries: Option<YesNo>,
}

impl NewRestaurant {
    pub fn with_id(self, id: ObjectId) -> Restaurant {
        Restaurant {
            id,
            name: self.name,
            address: self.address,
            style: self.style,
            vegetarian: self.vegetarian,
            open_hour: self.open_hour,
            close_hour: self.close_hour,
            deliveries: self.deliveries,
        }
    }
}

impl Restaurant {
    /// Drops the database id, leaving the inserted fields.
    pub fn into_details(self) -> NewRestaurant {
        NewRestaurant {
            name: self.name,
            address: self.address,
            style: self.style,
            vegetarian: self.vegetarian,
            open_hour: self.open_hour,
            close_hour: self.close_hour,
            deliveries: self.deliveries,
        }
    }
}

fn validate_hour(value: &str) -> Result<(), ValidationError> {
    Time::parse(value, HOUR_FORMAT)
        .map(|_| ())
        .map_err(|_| ValidationError::new("hour_format").with_message("expected HH:MM".into()))
}

/// Restaurant as returned by the API, with the ObjectId rendered as hex.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RestaurantResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub style: String,
    pub vegetarian: YesNo,
    pub open_hour: String,
    pub close_hour: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliveries: Option<YesNo>,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id.to_hex(),
            name: restaurant.name,
            address: restaurant.address,
            style: restaurant.style,
            vegetarian: restaurant.vegetarian,
            open_hour: restaurant.open_hour,
            close_hour: restaurant.close_hour,
            deliveries: restaurant.deliveries,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GeneratedResponse {
    pub message: String,
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VersionResponse {
    pub version: String,
}
