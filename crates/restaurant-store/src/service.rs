//! Restaurant service providing a validated API over a store.

use domain::{NewRestaurant, Restaurant, RestaurantUpdate};

use crate::store::{RestaurantStore, RestaurantStoreExt};
use crate::{RestaurantId, RestaurantQuery, Result};

/// Service for managing restaurants.
///
/// Wraps a store handle, validates drafts and patches before they reach
/// it, and records write metrics.
pub struct RestaurantService<S: RestaurantStore> {
    store: S,
}

impl<S: RestaurantStore> RestaurantService<S> {
    /// Creates a new restaurant service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a new restaurant.
    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: NewRestaurant) -> Result<Restaurant> {
        draft.validate()?;

        let restaurant = self.store.insert(draft).await?;
        metrics::counter!("restaurants_created_total").increment(1);
        tracing::info!(id = %restaurant.id, "restaurant created");
        Ok(restaurant)
    }

    /// Loads a restaurant, failing with `NotFound` if it doesn't exist.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: RestaurantId) -> Result<Restaurant> {
        self.store.get_required(id).await
    }

    /// Lists restaurants matching a query.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, query: RestaurantQuery) -> Result<Vec<Restaurant>> {
        self.store.query(query).await
    }

    /// Applies a patch to a restaurant.
    #[tracing::instrument(skip(self, update))]
    pub async fn update(&self, id: RestaurantId, update: RestaurantUpdate) -> Result<Restaurant> {
        update.validate()?;

        let restaurant = self.store.update(id, update).await?;
        metrics::counter!("restaurants_updated_total").increment(1);
        tracing::info!("restaurant updated");
        Ok(restaurant)
    }

    /// Deletes a restaurant. Returns whether it existed.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: RestaurantId) -> Result<bool> {
        let removed = self.store.delete(id).await?;
        if removed {
            metrics::counter!("restaurants_deleted_total").increment(1);
            tracing::info!("restaurant deleted");
        } else {
            tracing::debug!("restaurant already absent");
        }
        Ok(removed)
    }
}
