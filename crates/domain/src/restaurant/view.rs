//! Network-facing projection of a restaurant record.

use serde::{Deserialize, Serialize};

/// The reduced representation of a [`Restaurant`](super::Restaurant).
///
/// Carries exactly `id`, `name`, `cuisine`, `borough`, `grade` and
/// `address`. `grade` is left out of the JSON when the restaurant has
/// never been graded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantView {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub borough: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub address: String,
}
