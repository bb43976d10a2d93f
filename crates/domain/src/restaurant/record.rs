//! The restaurant record and its derived fields.

use common::RestaurantId;
use serde::{Deserialize, Serialize};

use super::{Address, GradeEntry, RestaurantView};

/// One restaurant as held by the store.
///
/// `name`, `borough` and `cuisine` are present on every persisted record.
/// The order of `grades` carries no meaning; only the most recent entry
/// matters for [`Restaurant::current_grade`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub borough: String,
    pub cuisine: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub grades: Vec<GradeEntry>,
}

impl Restaurant {
    /// Human readable address: building and street separated by a space.
    pub fn address_string(&self) -> String {
        self.address.display_line()
    }

    /// Grade of the most recent inspection, or `None` without inspections.
    ///
    /// Entries sharing the latest date resolve to an unspecified one of them.
    pub fn current_grade(&self) -> Option<&str> {
        self.grades
            .iter()
            .max_by_key(|entry| entry.date)
            .map(|entry| entry.grade.as_str())
    }

    /// Projects the record into the representation sent to consumers.
    pub fn to_view(&self) -> RestaurantView {
        RestaurantView {
            id: self.id.to_string(),
            name: self.name.clone(),
            cuisine: self.cuisine.clone(),
            borough: self.borough.clone(),
            grade: self.current_grade().map(str::to_string),
            address: self.address_string(),
        }
    }
}
