//! Prometheus metrics endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use restaurant_store::RestaurantStore;

use super::restaurants::AppState;

/// GET /metrics — refreshes the stored-records gauge and renders all metrics.
pub async fn get<S: RestaurantStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> impl IntoResponse {
    match state.service.store().count().await {
        Ok(count) => metrics::gauge!("restaurants_stored").set(count as f64),
        Err(err) => tracing::warn!(error = %err, "could not refresh restaurants_stored"),
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        state.metrics_handle.render(),
    )
}
