//! Domain error types.

use thiserror::Error;

/// Errors raised when a draft or patch breaks the record invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestaurantError {
    /// A required text field is absent or empty.
    #[error("Missing required field `{field}`")]
    MissingField { field: &'static str },
}
