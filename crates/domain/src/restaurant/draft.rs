//! Creation drafts and update patches.

use common::RestaurantId;
use serde::{Deserialize, Serialize};

use super::{Address, GradeEntry, Restaurant};
use crate::error::RestaurantError;

/// Unvalidated data for a restaurant that does not exist yet.
///
/// Every field defaults when missing from the input so that absent
/// required fields surface as [`RestaurantError::MissingField`] rather
/// than as a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewRestaurant {
    pub name: String,
    pub borough: String,
    pub cuisine: String,
    pub address: Address,
    pub grades: Vec<GradeEntry>,
}

impl NewRestaurant {
    /// Creates a draft with the required fields and no address or grades.
    pub fn new(
        name: impl Into<String>,
        borough: impl Into<String>,
        cuisine: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            borough: borough.into(),
            cuisine: cuisine.into(),
            ..Default::default()
        }
    }

    /// Sets the address.
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Appends an inspection grade.
    pub fn with_grade(mut self, grade: GradeEntry) -> Self {
        self.grades.push(grade);
        self
    }

    /// Checks the required fields in declaration order.
    pub fn validate(&self) -> Result<(), RestaurantError> {
        require("name", &self.name)?;
        require("borough", &self.borough)?;
        require("cuisine", &self.cuisine)
    }

    /// Turns the draft into a record with the given id.
    ///
    /// Does not validate; call [`validate`](Self::validate) first.
    pub fn into_restaurant(self, id: RestaurantId) -> Restaurant {
        Restaurant {
            id,
            name: self.name,
            borough: self.borough,
            cuisine: self.cuisine,
            address: self.address,
            grades: self.grades,
        }
    }
}

/// Changes to apply to an existing restaurant.
///
/// Only the fields present are written. The id and the grades are never
/// touched by an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub borough: Option<String>,
    pub cuisine: Option<String>,
    pub address: Option<Address>,
}

impl RestaurantUpdate {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new borough.
    pub fn borough(mut self, borough: impl Into<String>) -> Self {
        self.borough = Some(borough.into());
        self
    }

    /// Sets the new cuisine.
    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Sets the new address.
    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Rejects present-but-empty required fields.
    pub fn validate(&self) -> Result<(), RestaurantError> {
        if let Some(name) = &self.name {
            require("name", name)?;
        }
        if let Some(borough) = &self.borough {
            require("borough", borough)?;
        }
        if let Some(cuisine) = &self.cuisine {
            require("cuisine", cuisine)?;
        }
        Ok(())
    }

    /// Writes the present fields onto `restaurant`.
    pub fn apply_to(&self, restaurant: &mut Restaurant) {
        if let Some(name) = &self.name {
            restaurant.name.clone_from(name);
        }
        if let Some(borough) = &self.borough {
            restaurant.borough.clone_from(borough);
        }
        if let Some(cuisine) = &self.cuisine {
            restaurant.cuisine.clone_from(cuisine);
        }
        if let Some(address) = &self.address {
            restaurant.address = address.clone();
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<(), RestaurantError> {
    if value.trim().is_empty() {
        return Err(RestaurantError::MissingField { field });
    }
    Ok(())
}
