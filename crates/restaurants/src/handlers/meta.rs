//! Service index, version and health handlers.

use std::path::PathBuf;

use axum::{
    Extension,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{Value, json};
use tracing::warn;

use crate::{database::Database, errors::AppError, models::VersionResponse};

/// Static service metadata shared with handlers.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    /// File whose trimmed contents are reported by `/version`.
    pub version_file: PathBuf,
}

impl ServiceInfo {
    pub fn new(version_file: impl Into<PathBuf>) -> Self {
        Self {
            version_file: version_file.into(),
        }
    }
}

/// Describe the available endpoints.
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "Endpoint index"))
)]
pub async fn index() -> Json<Value> {
    Json(json!({
        "/restaurants": {
            "GET": "Get all restaurants",
            "POST": "Add a new restaurant"
        },
        "/restaurants/{id}": {
            "GET": "Get a restaurant by ID",
            "DELETE": "Delete a restaurant by ID"
        },
        "/restaurants/recommendation": {
            "GET": "Get restaurant recommendations based on query params"
        },
        "/restaurants/generate": {
            "POST": "Generate random restaurants into the database"
        },
        "/version": {
            "GET": "Get the version of the application"
        },
        "/health": {
            "GET": "Health check endpoint"
        }
    }))
}

/// Report the deployed version.
#[utoipa::path(
    get,
    path = "/version",
    tag = "meta",
    responses(
        (status = 200, description = "Application version", body = VersionResponse),
        (status = 500, description = "Version file unreadable")
    )
)]
pub async fn version(
    Extension(info): Extension<ServiceInfo>,
) -> Result<Json<VersionResponse>, AppError> {
    let contents = tokio::fs::read_to_string(&info.version_file).await?;
    Ok(Json(VersionResponse {
        version: contents.trim().to_string(),
    }))
}

/// Healthy when the database answers and holds at least one restaurant.
#[utoipa::path(
    get,
    path = "/health",
    tag = "meta",
    responses(
        (status = 200, description = "Health check passed"),
        (status = 500, description = "Database unreachable or empty")
    )
)]
pub async fn health_check(Extension(db): Extension<Database>) -> Response {
    match db.count_restaurants().await {
        Ok(count) if count > 0 => {
            (StatusCode::OK, Json(json!({ "message": "OK" }))).into_response()
        }
        Ok(_) => {
            warn!("Health check failed: no restaurants in database");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "No data in database" })),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}
