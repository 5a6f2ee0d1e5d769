use crate::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

/// Health probe response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// "ok" when the service can reach its database, "unavailable" otherwise
    #[schema(example = "ok")]
    pub status: String,
    /// ISO 8601 timestamp of the probe
    pub timestamp: String,
}

/// Create the health router
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Liveness and readiness probe. Pings the database so a wedged pool
/// surfaces as 503 instead of a false "ok".
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match crate::db::check_connection(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                timestamp: Utc::now().to_rfc3339(),
            }),
        ),
        Err(e) => {
            error!(error = %e, "health check failed to reach database");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                    timestamp: Utc::now().to_rfc3339(),
                }),
            )
        }
    }
}
