//! HTTP API server with observability for the restaurant records service.
//!
//! Provides REST endpoints over a restaurant store, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use restaurant_store::{RestaurantService, RestaurantStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::restaurants::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: RestaurantStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/health", get(routes::health::check::<S>))
        .route("/metrics", get(routes::metrics::get::<S>))
        .route(
            "/restaurants",
            get(routes::restaurants::list::<S>).post(routes::restaurants::create::<S>),
        )
        .route(
            "/restaurants/{id}",
            get(routes::restaurants::get::<S>)
                .put(routes::restaurants::update::<S>)
                .delete(routes::restaurants::delete::<S>),
        )
        .fallback(routes::restaurants::not_found)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around an explicit store handle.
pub fn create_state<S: RestaurantStore + 'static>(
    store: S,
    config: &Config,
    metrics_handle: PrometheusHandle,
) -> Arc<AppState<S>> {
    Arc::new(AppState {
        service: RestaurantService::new(store),
        metrics_handle,
        list_limit: config.list_limit,
    })
}
