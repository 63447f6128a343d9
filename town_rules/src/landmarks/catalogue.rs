//! Landmark categories, their map codes and the pools of unique display names.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Generic kinds of buildings that can occupy a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandmarkCategory {
    PostOffice,
    Hospital,
    Municipality,
    Shop,
    Restaurant,
    Park,
    Library,
    Cafe,
    Bank,
    School,
    Museum,
    Apartments,
    /// Filler for cells whose category ran out of unique names.
    EmptyLot,
}

/// Error returned when a category name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown landmark category: {0:?}")]
pub struct CategoryParseError(pub String);

impl LandmarkCategory {
    /// Categories the town generator may place. Empty lots are never rolled directly.
    pub const BUILDABLE: [LandmarkCategory; 12] = [
        LandmarkCategory::PostOffice,
        LandmarkCategory::Hospital,
        LandmarkCategory::Municipality,
        LandmarkCategory::Shop,
        LandmarkCategory::Restaurant,
        LandmarkCategory::Park,
        LandmarkCategory::Library,
        LandmarkCategory::Cafe,
        LandmarkCategory::Bank,
        LandmarkCategory::School,
        LandmarkCategory::Museum,
        LandmarkCategory::Apartments,
    ];

    /// Every category, in map legend order.
    pub const ALL: [LandmarkCategory; 13] = [
        LandmarkCategory::PostOffice,
        LandmarkCategory::Hospital,
        LandmarkCategory::Municipality,
        LandmarkCategory::Shop,
        LandmarkCategory::Restaurant,
        LandmarkCategory::Park,
        LandmarkCategory::Library,
        LandmarkCategory::Cafe,
        LandmarkCategory::Bank,
        LandmarkCategory::School,
        LandmarkCategory::Museum,
        LandmarkCategory::Apartments,
        LandmarkCategory::EmptyLot,
    ];

    /// Human-readable category name.
    pub fn name(&self) -> &'static str {
        match self {
            LandmarkCategory::PostOffice => "Post Office",
            LandmarkCategory::Hospital => "Hospital",
            LandmarkCategory::Municipality => "Municipality",
            LandmarkCategory::Shop => "Shop",
            LandmarkCategory::Restaurant => "Restaurant",
            LandmarkCategory::Park => "Park",
            LandmarkCategory::Library => "Library",
            LandmarkCategory::Cafe => "Cafe",
            LandmarkCategory::Bank => "Bank",
            LandmarkCategory::School => "School",
            LandmarkCategory::Museum => "Museum",
            LandmarkCategory::Apartments => "Apartments",
            LandmarkCategory::EmptyLot => "Empty Lot",
        }
    }

    /// Single-character code used on the town map.
    pub fn code(&self) -> char {
        match self {
            LandmarkCategory::PostOffice => 'P',
            LandmarkCategory::Hospital => 'H',
            LandmarkCategory::Municipality => 'M',
            LandmarkCategory::Shop => 'S',
            LandmarkCategory::Restaurant => 'R',
            LandmarkCategory::Park => 'K',
            LandmarkCategory::Library => 'L',
            LandmarkCategory::Cafe => 'C',
            LandmarkCategory::Bank => 'B',
            // 'S' and 'M' are already taken
            LandmarkCategory::School => 'O',
            LandmarkCategory::Museum => 'U',
            LandmarkCategory::Apartments => 'A',
            LandmarkCategory::EmptyLot => 'X',
        }
    }

    /// Pool of unique display names for this category.
    pub fn name_pool(&self) -> &'static [&'static str] {
        match self {
            LandmarkCategory::PostOffice => {
                &["New Post", "City Mail", "Express Post", "Old Town Post"]
            }
            LandmarkCategory::Hospital => &[
                "General Hospital",
                "City Clinic",
                "Mercy Hospital",
                "St. Jude's Medical",
            ],
            LandmarkCategory::Municipality => &[
                "City Hall",
                "Town Council",
                "Civic Center",
                "Grand Municipality",
            ],
            LandmarkCategory::Shop => &[
                "Corner Mart",
                "Grand Bazaar",
                "Fashion Boutique",
                "Tech Emporium",
                "Book Nook",
                "Green Grocer",
            ],
            LandmarkCategory::Restaurant => &[
                "Luke's Diner",
                "The Golden Spoon",
                "Pizza Palace",
                "Sushi Spot",
                "Burger Joint",
                "The Hungry Bear",
            ],
            LandmarkCategory::Park => &["New Park", "River Park", "Green Oasis", "Rose Garden"],
            LandmarkCategory::Library => &[
                "Main Library",
                "Quiet Reads",
                "Community Library",
                "Knowledge Hub",
            ],
            LandmarkCategory::Cafe => &[
                "The Daily Grind",
                "Coffee Corner",
                "Sweet Treats Cafe",
                "Brew House",
            ],
            LandmarkCategory::Bank => &[
                "First National Bank",
                "Secure Vault Bank",
                "City Bank",
                "Trust Union",
            ],
            LandmarkCategory::School => &[
                "Northwood School",
                "Science Academy",
                "Maple Street School",
                "Bright Minds School",
            ],
            LandmarkCategory::Museum => &[
                "History Museum",
                "Art Gallery",
                "Science Center",
                "Natural History Museum",
            ],
            LandmarkCategory::Apartments => &[
                "City View Apartments",
                "Sunset Towers",
                "Green Valley Homes",
                "Riverwalk Residences",
            ],
            LandmarkCategory::EmptyLot => &["Empty Lot"],
        }
    }

    /// Look up a category by its map code.
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code.to_ascii_uppercase())
    }

    /// Recover the category of a display name.
    ///
    /// Pool names map to their category; overflow names such as `"Restaurant 7"` map
    /// to the category they are prefixed with. Anything else is an empty lot.
    pub fn classify(name: &str) -> Self {
        if let Some(category) = Self::ALL
            .into_iter()
            .find(|c| c.name_pool().contains(&name))
        {
            return category;
        }

        Self::BUILDABLE
            .into_iter()
            .find(|c| {
                name.strip_prefix(c.name())
                    .and_then(|rest| rest.strip_prefix(' '))
                    .is_some_and(|n| !n.is_empty() && n.chars().all(|ch| ch.is_ascii_digit()))
            })
            .unwrap_or(LandmarkCategory::EmptyLot)
    }
}

impl std::fmt::Display for LandmarkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LandmarkCategory {
    type Err = CategoryParseError;

    /// Accepts display names (`"Post Office"`), variant names (`"PostOffice"`) and
    /// map codes (`"P"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        let mut chars = wanted.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            if let Some(category) = Self::from_code(code) {
                return Ok(category);
            }
        }

        Self::ALL
            .into_iter()
            .find(|c| c.name().replace(' ', "").to_ascii_lowercase() == wanted)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        for a in LandmarkCategory::ALL {
            for b in LandmarkCategory::ALL {
                if a != b {
                    assert_ne!(a.code(), b.code(), "{a} and {b} share a code");
                }
            }
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(LandmarkCategory::from_code('O'), Some(LandmarkCategory::School));
        assert_eq!(LandmarkCategory::from_code('u'), Some(LandmarkCategory::Museum));
        assert_eq!(LandmarkCategory::from_code('?'), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(LandmarkCategory::classify("Sushi Spot"), LandmarkCategory::Restaurant);
        assert_eq!(LandmarkCategory::classify("Rose Garden"), LandmarkCategory::Park);
        assert_eq!(LandmarkCategory::classify("Restaurant 7"), LandmarkCategory::Restaurant);
        assert_eq!(LandmarkCategory::classify("Post Office 2"), LandmarkCategory::PostOffice);
        assert_eq!(LandmarkCategory::classify("Restaurant"), LandmarkCategory::EmptyLot);
        assert_eq!(LandmarkCategory::classify("Nowhere"), LandmarkCategory::EmptyLot);
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("Post Office".parse::<LandmarkCategory>(), Ok(LandmarkCategory::PostOffice));
        assert_eq!("postoffice".parse::<LandmarkCategory>(), Ok(LandmarkCategory::PostOffice));
        assert_eq!("R".parse::<LandmarkCategory>(), Ok(LandmarkCategory::Restaurant));
        assert_eq!("empty lot".parse::<LandmarkCategory>(), Ok(LandmarkCategory::EmptyLot));
        assert!("Spaceport".parse::<LandmarkCategory>().is_err());
    }

    #[test]
    fn test_pool_names_unique_across_categories() {
        for a in LandmarkCategory::ALL {
            for name in a.name_pool() {
                assert_eq!(LandmarkCategory::classify(name), a);
            }
        }
    }
}
