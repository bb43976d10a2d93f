//! Value objects embedded in a restaurant record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Postal address of a restaurant. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub building: Option<String>,
    pub street: Option<String>,
    pub zipcode: Option<String>,
    /// Coordinate components as text tokens, e.g. `["-73.856077", "40.848447"]`.
    pub coord: Vec<String>,
}

impl Address {
    /// Creates an address from a building number and a street.
    pub fn new(building: impl Into<String>, street: impl Into<String>) -> Self {
        Self {
            building: Some(building.into()),
            street: Some(street.into()),
            ..Default::default()
        }
    }

    /// Sets the zipcode.
    pub fn with_zipcode(mut self, zipcode: impl Into<String>) -> Self {
        self.zipcode = Some(zipcode.into());
        self
    }

    /// Sets the coordinate tokens.
    pub fn with_coord(mut self, coord: Vec<String>) -> Self {
        self.coord = coord;
        self
    }

    /// Building and street joined by a single space, trimmed.
    ///
    /// Absent parts are treated as empty text, so an empty address
    /// yields an empty string.
    pub fn display_line(&self) -> String {
        let building = self.building.as_deref().unwrap_or_default();
        let street = self.street.as_deref().unwrap_or_default();
        format!("{building} {street}").trim().to_string()
    }
}

/// A single inspection grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeEntry {
    pub date: DateTime<Utc>,
    pub grade: String,
    pub score: f64,
}

impl GradeEntry {
    /// Creates a new grade entry.
    pub fn new(date: DateTime<Utc>, grade: impl Into<String>, score: f64) -> Self {
        Self {
            date,
            grade: grade.into(),
            score,
        }
    }
}
