//! Shared types for the restaurant records workspace.

mod types;

pub use types::RestaurantId;
