use std::sync::Arc;

use async_trait::async_trait;
use domain::{NewRestaurant, Restaurant, RestaurantUpdate};
use tokio::sync::RwLock;

use crate::{
    RestaurantId, RestaurantQuery, Result, StoreError,
    store::{RestaurantStore, RestaurantStream},
};

/// In-memory restaurant store.
///
/// Keeps every record in insertion order and provides the same
/// interface as the PostgreSQL implementation. Clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryRestaurantStore {
    restaurants: Arc<RwLock<Vec<Restaurant>>>,
}

impl InMemoryRestaurantStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every restaurant.
    pub async fn clear(&self) {
        self.restaurants.write().await.clear();
    }
}

#[async_trait]
impl RestaurantStore for InMemoryRestaurantStore {
    async fn insert(&self, draft: NewRestaurant) -> Result<Restaurant> {
        let restaurant = draft.into_restaurant(RestaurantId::new());
        self.restaurants.write().await.push(restaurant.clone());
        Ok(restaurant)
    }

    async fn get(&self, id: RestaurantId) -> Result<Option<Restaurant>> {
        let store = self.restaurants.read().await;
        Ok(store.iter().find(|r| r.id == id).cloned())
    }

    async fn query(&self, query: RestaurantQuery) -> Result<Vec<Restaurant>> {
        let store = self.restaurants.read().await;
        let restaurants = store
            .iter()
            .filter(|r| query.matches(r))
            .skip(query.offset.unwrap_or(0))
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(restaurants)
    }

    async fn update(&self, id: RestaurantId, update: RestaurantUpdate) -> Result<Restaurant> {
        let mut store = self.restaurants.write().await;
        let restaurant = store
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        update.apply_to(restaurant);
        Ok(restaurant.clone())
    }

    async fn delete(&self, id: RestaurantId) -> Result<bool> {
        let mut store = self.restaurants.write().await;
        let before = store.len();
        store.retain(|r| r.id != id);
        Ok(store.len() != before)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.restaurants.read().await.len())
    }

    async fn stream_all<'a>(&'a self) -> Result<RestaurantStream<'a>> {
        use futures_util::stream;

        let restaurants = self.restaurants.read().await.clone();
        let stream = stream::iter(restaurants.into_iter().map(Ok));
        Ok(Box::pin(stream))
    }
}
