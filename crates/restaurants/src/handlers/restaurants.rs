//! Restaurant CRUD and bulk generation handlers.

use axum::{
    Extension,
    extract::{
        Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    database::Database,
    errors::AppError,
    generator::RestaurantGenerator,
    models::{
        CreatedResponse, GeneratedResponse, MessageResponse, NewRestaurant, RestaurantResponse,
    },
};

/// Number of restaurants generated when `count` is omitted.
pub const DEFAULT_GENERATE_COUNT: usize = 5;
/// Upper bound for a single generate request.
pub const MAX_GENERATE_COUNT: usize = 1000;

fn default_generate_count() -> usize {
    DEFAULT_GENERATE_COUNT
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerateQuery {
    /// How many restaurants to create (1-1000).
    #[serde(default = "default_generate_count")]
    pub count: usize,
}

/// Parses a hex ObjectId from a path segment.
pub fn parse_restaurant_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::InvalidInput(format!("Invalid restaurant id: {id}")))
}

/// List all restaurants.
#[utoipa::path(
    get,
    path = "/restaurants",
    tag = "restaurants",
    responses(
        (status = 200, description = "All restaurants", body = Vec<RestaurantResponse>)
    )
)]
pub async fn list_restaurants(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<RestaurantResponse>>, AppError> {
    let restaurants = db.list_restaurants().await?;
    Ok(Json(restaurants.into_iter().map(Into::into).collect()))
}

/// Add a restaurant.
#[utoipa::path(
    post,
    path = "/restaurants",
    tag = "restaurants",
    request_body = NewRestaurant,
    responses(
        (status = 201, description = "Restaurant added", body = CreatedResponse),
        (status = 400, description = "Invalid restaurant")
    )
)]
pub async fn create_restaurant(
    Extension(db): Extension<Database>,
    payload: Result<Json<NewRestaurant>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let Json(restaurant) = payload?;
    restaurant.validate()?;

    let id = db.create_restaurant(&restaurant).await?;
    info!(%id, name = %restaurant.name, "Restaurant added");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: id.to_hex(),
            message: "Restaurant added".to_string(),
        }),
    ))
}

/// Get a restaurant by id.
#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    tag = "restaurants",
    params(("id" = String, Path, description = "Restaurant ObjectId (hex)")),
    responses(
        (status = 200, description = "The restaurant", body = RestaurantResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn get_restaurant(
    Extension(db): Extension<Database>,
    Path(id): Path<String>,
) -> Result<Json<RestaurantResponse>, AppError> {
    let id = parse_restaurant_id(&id)?;
    let restaurant = db.get_restaurant(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(restaurant.into()))
}

/// Delete a restaurant by id.
#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    tag = "restaurants",
    params(("id" = String, Path, description = "Restaurant ObjectId (hex)")),
    responses(
        (status = 200, description = "Restaurant deleted", body = MessageResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn delete_restaurant(
    Extension(db): Extension<Database>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_restaurant_id(&id)?;
    if !db.delete_restaurant(id).await? {
        return Err(AppError::NotFound);
    }

    info!(%id, "Restaurant deleted");
    Ok(Json(MessageResponse {
        message: "Restaurant deleted".to_string(),
    }))
}

/// Insert randomly generated restaurants.
#[utoipa::path(
    post,
    path = "/restaurants/generate",
    tag = "restaurants",
    params(GenerateQuery),
    responses(
        (status = 201, description = "Restaurants generated", body = GeneratedResponse),
        (status = 400, description = "Count missing, malformed or out of range")
    )
)]
pub async fn generate_restaurants(
    Extension(db): Extension<Database>,
    query: Result<Query<GenerateQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<GeneratedResponse>), AppError> {
    let Query(params) = query?;
    if !(1..=MAX_GENERATE_COUNT).contains(&params.count) {
        return Err(AppError::InvalidInput(format!(
            "count must be between 1 and {MAX_GENERATE_COUNT}"
        )));
    }

    let restaurants = {
        let mut rng = rand::thread_rng();
        RestaurantGenerator::new().generate_batch(params.count, &mut rng)
    };
    let ids = db.create_restaurants(&restaurants).await?;
    info!("Generated {} restaurants", ids.len());

    Ok((
        StatusCode::CREATED,
        Json(GeneratedResponse {
            message: format!("Successfully added {} restaurants.", params.count),
            ids: ids.iter().map(|id| id.to_hex()).collect(),
        }),
    ))
}
