pub mod database;
pub mod errors;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod recommendation;
pub mod request_id;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    database::Database,
    handlers::{
        ApiDoc, ServiceInfo, create_restaurant, delete_restaurant, generate_restaurants,
        get_restaurant, health_check, index, list_restaurants, recommend_restaurants, version,
    },
    request_id::request_id_middleware,
};

pub fn create_router(db: Database, info: ServiceInfo) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route(
            "/restaurants",
            get(list_restaurants).post(create_restaurant),
        )
        .route("/restaurants/recommendation", get(recommend_restaurants))
        .route("/restaurants/generate", post(generate_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(Extension(db))
        .layer(Extension(info))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

pub async fn run_server(db: Database, info: ServiceInfo, port: u16) -> anyhow::Result<()> {
    let app = create_router(db, info);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!("Server running on http://0.0.0.0:{port}");

    axum::serve(listener, app).await?;

    Ok(())
}
