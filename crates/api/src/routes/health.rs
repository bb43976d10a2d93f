//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use restaurant_store::RestaurantStore;
use serde::Serialize;

use super::restaurants::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurants: Option<usize>,
}

/// GET /health — reports whether the store answers, with its record count.
pub async fn check<S: RestaurantStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.service.store().count().await {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                restaurants: Some(count),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "store health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    restaurants: None,
                }),
            )
        }
    }
}
