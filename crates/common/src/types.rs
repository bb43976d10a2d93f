use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a restaurant record.
///
/// Assigned by the store when a record is created and never changed
/// afterwards. Consumers should treat it as opaque text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(Uuid);

impl RestaurantId {
    /// Creates a new random restaurant ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a restaurant ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RestaurantId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RestaurantId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for RestaurantId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<RestaurantId> for Uuid {
    fn from(id: RestaurantId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restaurant_id_new_creates_unique_ids() {
        let id1 = RestaurantId::new();
        let id2 = RestaurantId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn restaurant_id_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = RestaurantId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn restaurant_id_serializes_as_plain_string() {
        let id = RestaurantId::new();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
    }

    #[test]
    fn restaurant_id_parses_from_display() {
        let id = RestaurantId::new();
        let parsed: RestaurantId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn restaurant_id_rejects_garbage() {
        assert!("not-an-id".parse::<RestaurantId>().is_err());
    }
}
