//! Landmark definitions for the town.

mod catalogue;

pub use catalogue::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for every landmark placed in a town.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LandmarkId(pub Uuid);

impl LandmarkId {
    /// Create a new random landmark ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a landmark ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a nil/empty landmark ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for LandmarkId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A building occupying one cell of the town grid.
///
/// The display name is unique within a town (except for empty lots) and is what
/// navigation targets refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: LandmarkId,
    pub name: String,
    pub category: LandmarkCategory,
}

impl Landmark {
    /// Create a new landmark with the given name and category.
    pub fn new(name: impl Into<String>, category: LandmarkCategory) -> Self {
        Self {
            id: LandmarkId::new(),
            name: name.into(),
            category,
        }
    }

    /// Create a landmark whose category is recovered from its display name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let category = LandmarkCategory::classify(&name);
        Self::new(name, category)
    }

    /// Use a specific ID instead of a random one.
    pub fn with_id(mut self, id: LandmarkId) -> Self {
        self.id = id;
        self
    }

    /// Check whether this landmark is an empty lot.
    pub fn is_empty_lot(&self) -> bool {
        self.category == LandmarkCategory::EmptyLot
    }

    /// Single-character map code of this landmark's category.
    pub fn code(&self) -> char {
        self.category.code()
    }
}

impl std::fmt::Display for Landmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_landmark_category() {
        let diner = Landmark::named("Luke's Diner");
        assert_eq!(diner.category, LandmarkCategory::Restaurant);
        assert_eq!(diner.code(), 'R');
        assert!(!diner.is_empty_lot());
    }

    #[test]
    fn test_with_id() {
        let id = LandmarkId::nil();
        let park = Landmark::named("River Park").with_id(id);
        assert_eq!(park.id, id);
        assert_eq!(park.to_string(), "River Park");
    }
}
