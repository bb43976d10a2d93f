//! Restaurant collection endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use common::RestaurantId;
use domain::{NewRestaurant, RestaurantUpdate, RestaurantView};
use metrics_exporter_prometheus::PrometheusHandle;
use restaurant_store::{RestaurantQuery, RestaurantService, RestaurantStore};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: RestaurantStore> {
    pub service: RestaurantService<S>,
    pub metrics_handle: PrometheusHandle,
    /// Page size used when a listing request carries no `limit`.
    pub list_limit: usize,
}

// -- Request types --

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub borough: Option<String>,
    pub cuisine: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRestaurantRequest {
    pub id: Option<String>,
    #[serde(flatten)]
    pub changes: RestaurantUpdate,
}

// -- Response types --

#[derive(Serialize)]
pub struct RestaurantListResponse {
    pub restaurants: Vec<RestaurantView>,
}

// -- Handlers --

/// GET /restaurants — list restaurants, optionally filtered by borough and cuisine.
#[tracing::instrument(skip(state))]
pub async fn list<S: RestaurantStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<ListParams>,
) -> Result<Json<RestaurantListResponse>, ApiError> {
    let mut query = RestaurantQuery::new().limit(params.limit.unwrap_or(state.list_limit));
    if let Some(borough) = params.borough {
        query = query.borough(borough);
    }
    if let Some(cuisine) = params.cuisine {
        query = query.cuisine(cuisine);
    }
    if let Some(offset) = params.offset {
        query = query.offset(offset);
    }

    let restaurants = state.service.list(query).await?;

    Ok(Json(RestaurantListResponse {
        restaurants: restaurants.iter().map(|r| r.to_view()).collect(),
    }))
}

/// GET /restaurants/:id — load a single restaurant.
#[tracing::instrument(skip(state))]
pub async fn get<S: RestaurantStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<RestaurantView>, ApiError> {
    let restaurant_id = parse_restaurant_id(&id)?;
    let restaurant = state.service.get(restaurant_id).await?;
    Ok(Json(restaurant.to_view()))
}

/// POST /restaurants — create a restaurant.
#[tracing::instrument(skip(state, draft))]
pub async fn create<S: RestaurantStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(draft): Json<NewRestaurant>,
) -> Result<(StatusCode, Json<RestaurantView>), ApiError> {
    let restaurant = state.service.create(draft).await?;
    Ok((StatusCode::CREATED, Json(restaurant.to_view())))
}

/// PUT /restaurants/:id — update name, borough, cuisine or address.
///
/// The body must repeat the id from the path.
#[tracing::instrument(skip(state, req))]
pub async fn update<S: RestaurantStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRestaurantRequest>,
) -> Result<StatusCode, ApiError> {
    if req.id.as_deref() != Some(id.as_str()) {
        return Err(ApiError::BadRequest(format!(
            "Request path id ({}) and request body id ({}) must match",
            id,
            req.id.as_deref().unwrap_or("none")
        )));
    }

    let restaurant_id = parse_restaurant_id(&id)?;
    state.service.update(restaurant_id, req.changes).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /restaurants/:id — remove a restaurant. Idempotent.
#[tracing::instrument(skip(state))]
pub async fn delete<S: RestaurantStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let restaurant_id = parse_restaurant_id(&id)?;
    state.service.delete(restaurant_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}

fn parse_restaurant_id(id: &str) -> Result<RestaurantId, ApiError> {
    id.parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid ID format: {e}")))
}
