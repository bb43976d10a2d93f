//! Storage for restaurant records.
//!
//! The store is an explicit handle passed to whatever layer needs it:
//! - [`RestaurantStore`] trait with [`InMemoryRestaurantStore`] and [`PostgresRestaurantStore`]
//! - [`RestaurantQuery`] for filtered listings
//! - [`RestaurantService`] validating drafts and patches before they reach a store

pub mod error;
pub mod memory;
pub mod postgres;
pub mod query;
pub mod service;
pub mod store;

pub use common::RestaurantId;
pub use error::{Result, StoreError};
pub use memory::InMemoryRestaurantStore;
pub use postgres::PostgresRestaurantStore;
pub use query::RestaurantQuery;
pub use service::RestaurantService;
pub use store::{RestaurantStore, RestaurantStoreExt, RestaurantStream};
