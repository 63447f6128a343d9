//! Town grid - the immutable layout of landmarks and the streets between them.
//!
//! Landmarks occupy an N×N matrix of cells. The agent walks on the (N+1)×(N+1)
//! lattice of intersections that bound those cells, so every intersection touches
//! up to four cells.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::landmarks::Landmark;

/// Largest supported cell size. Keeps the pose space of a search small.
pub const MAX_GRID_SIZE: usize = 64;

/// Errors raised while building a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size {size} is outside the supported range 1..={max}", max = MAX_GRID_SIZE)]
    UnsupportedSize { size: usize },

    #[error("expected {expected} cells for the grid, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// A cell coordinate, in `0..N` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A street intersection, in `0..=N` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Intersection {
    pub row: usize,
    pub col: usize,
}

impl Intersection {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset this intersection by a signed delta. `None` if either axis goes negative.
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Intersection> {
        Some(Intersection {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Manhattan distance between this intersection and the top-left corner of a cell.
    pub fn distance_to_cell(&self, cell: Cell) -> usize {
        self.row.abs_diff(cell.row) + self.col.abs_diff(cell.col)
    }
}

impl std::fmt::Display for Intersection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four cells bounding an intersection, named by compass corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellOffset {
    /// Offset (-1, -1).
    NorthWest,
    /// Offset (-1, 0).
    NorthEast,
    /// Offset (0, -1).
    SouthWest,
    /// Offset (0, 0).
    SouthEast,
}

impl CellOffset {
    pub const ALL: [CellOffset; 4] = [
        CellOffset::NorthWest,
        CellOffset::NorthEast,
        CellOffset::SouthWest,
        CellOffset::SouthEast,
    ];

    /// Row and column delta from the intersection to the cell.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            CellOffset::NorthWest => (-1, -1),
            CellOffset::NorthEast => (-1, 0),
            CellOffset::SouthWest => (0, -1),
            CellOffset::SouthEast => (0, 0),
        }
    }
}

/// The immutable town layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TownGrid {
    size: usize,
    /// Row-major, `size * size` entries.
    cells: Vec<Landmark>,
}

impl TownGrid {
    /// Build a grid from row-major cells.
    pub fn new(size: usize, cells: Vec<Landmark>) -> Result<Self, GridError> {
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(GridError::UnsupportedSize { size });
        }
        if cells.len() != size * size {
            return Err(GridError::CellCountMismatch {
                expected: size * size,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Build a grid from a square matrix of landmarks.
    pub fn from_rows(rows: Vec<Vec<Landmark>>) -> Result<Self, GridError> {
        let size = rows.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(GridError::RaggedRow {
                    row,
                    expected: size,
                    actual: cells.len(),
                });
            }
        }
        Self::new(size, rows.into_iter().flatten().collect())
    }

    /// Build a grid from display names, inferring each landmark's category.
    pub fn from_names<R: AsRef<[&'static str]>>(rows: &[R]) -> Result<Self, GridError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.as_ref().iter().map(|name| Landmark::named(*name)).collect())
                .collect(),
        )
    }

    /// Number of cells along each side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of intersections along each side (`size + 1`).
    pub fn intersections_per_side(&self) -> usize {
        self.size + 1
    }

    /// Landmark at a cell, or `None` outside the grid.
    pub fn landmark_at(&self, row: usize, col: usize) -> Option<&Landmark> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    /// Check if an intersection lies on the grid.
    pub fn contains(&self, intersection: Intersection) -> bool {
        intersection.row <= self.size && intersection.col <= self.size
    }

    /// Landmark bounding an intersection at the given corner, if that cell exists.
    pub fn bounding_landmark(
        &self,
        intersection: Intersection,
        offset: CellOffset,
    ) -> Option<&Landmark> {
        let (d_row, d_col) = offset.delta();
        let cell = intersection.offset(d_row, d_col)?;
        self.landmark_at(cell.row, cell.col)
    }

    /// Check if any of the cells bounding `intersection` holds the named landmark.
    pub fn is_adjacent(&self, intersection: Intersection, landmark_name: &str) -> bool {
        CellOffset::ALL.iter().any(|offset| {
            self.bounding_landmark(intersection, *offset)
                .is_some_and(|landmark| landmark.name == landmark_name)
        })
    }

    /// Find the first cell (row-major) holding the named landmark.
    pub fn find_landmark(&self, landmark_name: &str) -> Option<(Cell, &Landmark)> {
        self.cells
            .iter()
            .position(|landmark| landmark.name == landmark_name)
            .map(|index| {
                (
                    Cell::new(index / self.size, index % self.size),
                    &self.cells[index],
                )
            })
    }

    /// Iterate over rows of landmarks.
    pub fn rows(&self) -> impl Iterator<Item = &[Landmark]> {
        self.cells.chunks(self.size)
    }

    /// Iterate over every landmark with its cell coordinate.
    pub fn landmarks(&self) -> impl Iterator<Item = (Cell, &Landmark)> {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, landmark)| (Cell::new(index / size, index % size), landmark))
    }

    /// Iterate over every intersection, row-major.
    pub fn intersections(&self) -> impl Iterator<Item = Intersection> {
        let side = self.intersections_per_side();
        (0..side).flat_map(move |row| (0..side).map(move |col| Intersection::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> TownGrid {
        TownGrid::from_names(&[
            ["City Hall", "Corner Mart"],
            ["Luke's Diner", "River Park"],
        ])
        .unwrap()
    }

    #[test]
    fn test_landmark_at() {
        let grid = sample_grid();
        assert_eq!(grid.landmark_at(1, 0).unwrap().name, "Luke's Diner");
        assert!(grid.landmark_at(2, 0).is_none());
        assert!(grid.landmark_at(0, 2).is_none());
    }

    #[test]
    fn test_adjacency_corners() {
        let grid = sample_grid();
        // Luke's Diner is cell (1, 0): bounded by intersections (1,0), (1,1), (2,0), (2,1).
        for (row, col) in [(1, 0), (1, 1), (2, 0), (2, 1)] {
            assert!(grid.is_adjacent(Intersection::new(row, col), "Luke's Diner"));
        }
        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)] {
            assert!(!grid.is_adjacent(Intersection::new(row, col), "Luke's Diner"));
        }
    }

    #[test]
    fn test_adjacency_missing_landmark() {
        let grid = sample_grid();
        assert!(grid
            .intersections()
            .all(|i| !grid.is_adjacent(i, "The Golden Spoon")));
    }

    #[test]
    fn test_find_landmark() {
        let grid = sample_grid();
        let (cell, landmark) = grid.find_landmark("River Park").unwrap();
        assert_eq!(cell, Cell::new(1, 1));
        assert_eq!(landmark.name, "River Park");
        assert!(grid.find_landmark("Nowhere").is_none());
    }

    #[test]
    fn test_rejects_bad_sizes() {
        assert_eq!(
            TownGrid::new(0, vec![]),
            Err(GridError::UnsupportedSize { size: 0 })
        );
        assert!(matches!(
            TownGrid::new(MAX_GRID_SIZE + 1, vec![]),
            Err(GridError::UnsupportedSize { .. })
        ));
        assert!(matches!(
            TownGrid::new(2, vec![Landmark::named("City Hall")]),
            Err(GridError::CellCountMismatch {
                expected: 4,
                actual: 1
            })
        ));
        let ragged = vec![
            vec![Landmark::named("City Hall"), Landmark::named("Corner Mart")],
            vec![Landmark::named("River Park")],
        ];
        assert!(matches!(
            TownGrid::from_rows(ragged),
            Err(GridError::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_intersection_count() {
        let grid = sample_grid();
        assert_eq!(grid.intersections().count(), 9);
        assert!(grid.contains(Intersection::new(2, 2)));
        assert!(!grid.contains(Intersection::new(3, 0)));
    }
}
