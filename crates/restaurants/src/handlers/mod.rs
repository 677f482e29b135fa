//! HTTP request handlers for the restaurants API.

pub mod meta;
pub mod recommendation;
pub mod restaurants;

use utoipa::OpenApi;

pub use meta::{ServiceInfo, health_check, index, version};
pub use recommendation::recommend_restaurants;
pub use restaurants::{
    GenerateQuery, create_restaurant, delete_restaurant, generate_restaurants, get_restaurant,
    list_restaurants,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        meta::index,
        meta::version,
        meta::health_check,
        restaurants::list_restaurants,
        restaurants::create_restaurant,
        restaurants::get_restaurant,
        restaurants::delete_restaurant,
        restaurants::generate_restaurants,
        recommendation::recommend_restaurants,
    ),
    components(schemas(
        crate::models::YesNo,
        crate::models::NewRestaurant,
        crate::models::RestaurantResponse,
        crate::models::CreatedResponse,
        crate::models::GeneratedResponse,
        crate::models::MessageResponse,
        crate::models::VersionResponse,
    )),
    tags(
        (name = "restaurants", description = "Restaurant catalogue endpoints"),
        (name = "meta", description = "Service index, version and health"),
    )
)]
pub struct ApiDoc;
