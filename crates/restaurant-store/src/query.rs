use domain::Restaurant;

/// Builder for constructing restaurant queries.
///
/// Filters are exact matches and combine with AND. Results come back in
/// insertion order, after `offset` records are skipped and capped at
/// `limit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantQuery {
    /// Filter by borough.
    pub borough: Option<String>,

    /// Filter by cuisine.
    pub cuisine: Option<String>,

    /// Maximum number of restaurants to return.
    pub limit: Option<usize>,

    /// Number of restaurants to skip.
    pub offset: Option<usize>,
}

impl RestaurantQuery {
    /// Creates a new query matching every restaurant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by borough.
    pub fn borough(mut self, borough: impl Into<String>) -> Self {
        self.borough = Some(borough.into());
        self
    }

    /// Filters by cuisine.
    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Limits the number of restaurants returned.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skips this many restaurants before returning results.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Returns true if `restaurant` passes every filter of this query.
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if let Some(ref borough) = self.borough
            && &restaurant.borough != borough
        {
            return false;
        }
        if let Some(ref cuisine) = self.cuisine
            && &restaurant.cuisine != cuisine
        {
            return false;
        }
        true
    }
}
