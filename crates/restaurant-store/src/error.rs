use domain::RestaurantError;
use thiserror::Error;

use crate::RestaurantId;

/// Errors that can occur when interacting with the restaurant store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No restaurant exists with this id.
    #[error("Restaurant not found: {0}")]
    NotFound(RestaurantId),

    /// A draft or patch failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] RestaurantError),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
