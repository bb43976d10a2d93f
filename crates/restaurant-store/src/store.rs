use std::pin::Pin;

use async_trait::async_trait;
use domain::{NewRestaurant, Restaurant, RestaurantUpdate};
use futures_core::Stream;

use crate::{RestaurantId, RestaurantQuery, Result, StoreError};

/// A stream of restaurants, possibly borrowing the store it reads from.
pub type RestaurantStream<'a> = Pin<Box<dyn Stream<Item = Result<Restaurant>> + Send + 'a>>;

/// Core trait for restaurant store implementations.
///
/// A store owns the persisted records and assigns their ids. All
/// implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// Persists a new restaurant and returns it with its assigned id.
    ///
    /// The draft is expected to be valid; see
    /// [`RestaurantService`](crate::RestaurantService) for the validating
    /// entry point.
    async fn insert(&self, draft: NewRestaurant) -> Result<Restaurant>;

    /// Retrieves a restaurant by id.
    ///
    /// Returns None if no such restaurant exists.
    async fn get(&self, id: RestaurantId) -> Result<Option<Restaurant>>;

    /// Retrieves restaurants matching a query, in insertion order.
    async fn query(&self, query: RestaurantQuery) -> Result<Vec<Restaurant>>;

    /// Applies a patch to an existing restaurant and returns the result.
    ///
    /// Fails with `NotFound` if the restaurant doesn't exist.
    async fn update(&self, id: RestaurantId, update: RestaurantUpdate) -> Result<Restaurant>;

    /// Removes a restaurant.
    ///
    /// Returns whether a restaurant was actually removed.
    async fn delete(&self, id: RestaurantId) -> Result<bool>;

    /// Returns the number of stored restaurants.
    async fn count(&self) -> Result<usize>;

    /// Streams every restaurant in insertion order.
    async fn stream_all<'a>(&'a self) -> Result<RestaurantStream<'a>>;
}

/// Extension trait providing convenience methods for restaurant stores.
#[async_trait]
pub trait RestaurantStoreExt: RestaurantStore {
    /// Checks if a restaurant exists.
    async fn exists(&self, id: RestaurantId) -> Result<bool> {
        Ok(self.get(id).await?.is_some())
    }

    /// Retrieves a restaurant, failing with `NotFound` if it doesn't exist.
    async fn get_required(&self, id: RestaurantId) -> Result<Restaurant> {
        self.get(id).await?.ok_or(StoreError::NotFound(id))
    }
}

// Blanket implementation for all RestaurantStore implementations
impl<T: RestaurantStore + ?Sized> RestaurantStoreExt for T {}
