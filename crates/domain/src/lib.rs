//! Domain layer for the restaurant records service.
//!
//! This crate provides the restaurant record model:
//! - [`Restaurant`] with its derived display fields
//! - [`RestaurantView`], the projection sent to external consumers
//! - [`NewRestaurant`] drafts and [`RestaurantUpdate`] patches with validation

pub mod error;
pub mod restaurant;

pub use common::RestaurantId;
pub use error::RestaurantError;
pub use restaurant::{
    Address, GradeEntry, NewRestaurant, Restaurant, RestaurantUpdate, RestaurantView,
};
