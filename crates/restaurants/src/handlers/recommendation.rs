//! Restaurant recommendation handler.

use axum::{Extension, extract::Query, response::Json};

use crate::{
    database::Database,
    errors::AppError,
    models::RestaurantResponse,
    recommendation::{RecommendationFilter, current_hour},
};

/// Recommend restaurants by style, vegetarian flag and whether they are open now.
#[utoipa::path(
    get,
    path = "/restaurants/recommendation",
    tag = "restaurants",
    params(RecommendationFilter),
    responses(
        (status = 200, description = "Matching restaurants", body = Vec<RestaurantResponse>)
    )
)]
pub async fn recommend_restaurants(
    Extension(db): Extension<Database>,
    Query(filter): Query<RecommendationFilter>,
) -> Result<Json<Vec<RestaurantResponse>>, AppError> {
    let restaurants = db.recommend(&filter, &current_hour()).await?;
    Ok(Json(restaurants.into_iter().map(Into::into).collect()))
}
