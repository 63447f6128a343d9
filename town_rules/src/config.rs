//! Town configuration, loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::grid::MAX_GRID_SIZE;
use crate::landmarks::LandmarkCategory;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("grid_size {0} is outside the supported range 1..={max}", max = MAX_GRID_SIZE)]
    GridSize(usize),

    #[error("{0} cannot be a navigation target")]
    TargetCategory(LandmarkCategory),
}

/// Parameters of a generated town.
///
/// ```toml
/// grid_size = 5
/// target_category = "Restaurant"
/// min_start_distance = 2
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TownConfig {
    /// Number of cells along each side of the town.
    pub grid_size: usize,

    /// Category the player is sent to find.
    pub target_category: LandmarkCategory,

    /// The player starts strictly farther than this (Manhattan, in blocks) from the target.
    pub min_start_distance: usize,

    /// Fixed seed for reproducible towns. Random when absent.
    pub seed: Option<u64>,
}

impl Default for TownConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            target_category: LandmarkCategory::Restaurant,
            min_start_distance: 2,
            seed: None,
        }
    }
}

impl TownConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: TownConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check that the configuration describes a town that can be generated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.target_category == LandmarkCategory::EmptyLot {
            return Err(ConfigError::TargetCategory(self.target_category));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TownConfig::default();
        assert_eq!(config.grid_size, 5);
        assert_eq!(config.target_category, LandmarkCategory::Restaurant);
        assert_eq!(config.min_start_distance, 2);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = TownConfig::from_toml_str("grid_size = 7\nseed = 9\n").unwrap();
        assert_eq!(config.grid_size, 7);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.target_category, LandmarkCategory::Restaurant);
    }

    #[test]
    fn test_parse_target_category() {
        let config = TownConfig::from_toml_str("target_category = \"PostOffice\"").unwrap();
        assert_eq!(config.target_category, LandmarkCategory::PostOffice);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            TownConfig::from_toml_str("grid_size = 0"),
            Err(ConfigError::GridSize(0))
        ));
        assert!(matches!(
            TownConfig::from_toml_str("grid_size = 1000"),
            Err(ConfigError::GridSize(1000))
        ));
        assert!(matches!(
            TownConfig::from_toml_str("target_category = \"EmptyLot\""),
            Err(ConfigError::TargetCategory(LandmarkCategory::EmptyLot))
        ));
        assert!(matches!(
            TownConfig::from_toml_str("grid_size = \"big\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_example_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../town.example.toml");
        assert_eq!(TownConfig::load(path).unwrap(), TownConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = TownConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
