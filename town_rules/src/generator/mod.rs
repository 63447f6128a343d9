//! Town generator - rolls a random town, picks the target and places the player.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Builder;

use crate::config::{ConfigError, TownConfig};
use crate::grid::{Cell, GridError, TownGrid};
use crate::landmarks::{Landmark, LandmarkCategory, LandmarkId};
use crate::movement::{Direction, Pose};

/// Errors raised while generating a town.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("no intersection lies more than {min_distance} blocks from the target")]
    NoStartingIntersection { min_distance: usize },
}

/// A freshly generated town, ready to play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedTown {
    pub grid: TownGrid,
    /// Unique name of the landmark the player must find.
    pub target: String,
    /// Cell holding the target.
    pub target_cell: Cell,
    /// Where the player starts and which way they face.
    pub start: Pose,
}

/// Random town generator.
#[derive(Debug)]
pub struct TownGenerator {
    config: TownConfig,
    rng: StdRng,
}

impl TownGenerator {
    /// Create a generator, seeded from the configuration when it carries a seed.
    pub fn new(config: TownConfig) -> Result<Self, GenerateError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    /// Create a generator with default settings.
    pub fn with_defaults() -> Self {
        Self {
            config: TownConfig::default(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn config(&self) -> &TownConfig {
        &self.config
    }

    /// Generate a complete town.
    pub fn generate(&mut self) -> Result<GeneratedTown, GenerateError> {
        let (cells, target_index) = self.roll_cells();
        let size = self.config.grid_size;
        let target = cells[target_index].name.clone();
        let target_cell = Cell::new(target_index / size, target_index % size);
        let grid = TownGrid::new(size, cells)?;

        let start = self.place_player(&grid, target_cell)?;
        tracing::debug!(%target, ?target_cell, %start, "generated town");

        Ok(GeneratedTown {
            grid,
            target,
            target_cell,
            start,
        })
    }

    /// Fill every cell and choose the target. Returns the row-major cells and the
    /// index of the target cell.
    fn roll_cells(&mut self) -> (Vec<Landmark>, usize) {
        let size = self.config.grid_size;
        let target_category = self.config.target_category;
        let mut used: HashMap<LandmarkCategory, Vec<&'static str>> = HashMap::new();
        let mut cells = Vec::with_capacity(size * size);
        let mut candidates = Vec::new();

        for index in 0..size * size {
            let category = LandmarkCategory::BUILDABLE
                [self.rng.gen_range(0..LandmarkCategory::BUILDABLE.len())];
            let taken = used.entry(category).or_default();
            let available: Vec<&'static str> = category
                .name_pool()
                .iter()
                .copied()
                .filter(|name| !taken.contains(name))
                .collect();

            let landmark = match available.choose(&mut self.rng) {
                Some(name) => {
                    taken.push(*name);
                    if category == target_category {
                        candidates.push(index);
                    }
                    Landmark::new(*name, category)
                }
                None => Landmark::new(
                    LandmarkCategory::EmptyLot.name(),
                    LandmarkCategory::EmptyLot,
                ),
            };
            cells.push(landmark.with_id(self.next_id()));
        }

        let target_index = match candidates.as_slice() {
            [] => {
                let index = self.rng.gen_range(0..size * size);
                let taken = used.entry(target_category).or_default();
                let available: Vec<&'static str> = target_category
                    .name_pool()
                    .iter()
                    .copied()
                    .filter(|name| !taken.contains(name))
                    .collect();
                let name = match available.choose(&mut self.rng) {
                    Some(name) => name.to_string(),
                    None => format!("{} {}", target_category, taken.len() + 1),
                };
                tracing::debug!(%name, index, "no target rolled, forcing one");
                cells[index] = Landmark::new(name, target_category).with_id(self.next_id());
                index
            }
            _ => candidates[self.rng.gen_range(0..candidates.len())],
        };

        (cells, target_index)
    }

    /// Pick a random starting pose far enough from the target.
    fn place_player(&mut self, grid: &TownGrid, target_cell: Cell) -> Result<Pose, GenerateError> {
        let min_distance = self.config.min_start_distance;
        let candidates: Vec<_> = grid
            .intersections()
            .filter(|intersection| intersection.distance_to_cell(target_cell) > min_distance)
            .collect();

        let intersection = candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(GenerateError::NoStartingIntersection { min_distance })?;
        let direction = Direction::from_index(self.rng.gen_range(0..4));

        Ok(Pose::new(intersection, direction))
    }

    fn next_id(&mut self) -> LandmarkId {
        LandmarkId::from_uuid(Builder::from_random_bytes(self.rng.gen()).into_uuid())
    }
}
