//! Visibility: which landmarks the agent sees ahead of it from a pose.

use serde::{Deserialize, Serialize};

use crate::grid::{CellOffset, TownGrid};
use crate::landmarks::Landmark;
use crate::movement::{Direction, Pose};

/// A bounding cell labeled relative to the agent's facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

impl Quadrant {
    /// Relative position of a bounding cell when facing `direction`.
    pub fn of(direction: Direction, offset: CellOffset) -> Self {
        use CellOffset::*;
        use Quadrant::*;

        match (direction, offset) {
            (Direction::North, NorthWest) => FrontLeft,
            (Direction::North, NorthEast) => FrontRight,
            (Direction::North, SouthWest) => BackLeft,
            (Direction::North, SouthEast) => BackRight,

            (Direction::East, NorthWest) => BackLeft,
            (Direction::East, NorthEast) => FrontLeft,
            (Direction::East, SouthWest) => BackRight,
            (Direction::East, SouthEast) => FrontRight,

            (Direction::South, NorthWest) => BackRight,
            (Direction::South, NorthEast) => BackLeft,
            (Direction::South, SouthWest) => FrontRight,
            (Direction::South, SouthEast) => FrontLeft,

            (Direction::West, NorthWest) => FrontRight,
            (Direction::West, NorthEast) => BackRight,
            (Direction::West, SouthWest) => FrontLeft,
            (Direction::West, SouthEast) => BackLeft,
        }
    }

    /// The bounding cell that sits in this quadrant when facing `direction`.
    pub fn offset_for(&self, direction: Direction) -> CellOffset {
        CellOffset::ALL
            .into_iter()
            .find(|offset| Quadrant::of(direction, *offset) == *self)
            .unwrap_or_else(|| unreachable!("every direction maps all four quadrants"))
    }

    pub fn is_front(&self) -> bool {
        matches!(self, Quadrant::FrontLeft | Quadrant::FrontRight)
    }
}

/// Landmarks ahead-left and ahead-right of a pose. `None` means the edge of town.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleLandmarks<'a> {
    pub left: Option<&'a Landmark>,
    pub right: Option<&'a Landmark>,
}

impl<'a> VisibleLandmarks<'a> {
    /// Check whether nothing at all is visible ahead.
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Visible landmarks in left-then-right order, each paired with its side.
    pub fn sides(&self) -> impl Iterator<Item = (Side, &'a Landmark)> {
        [(Side::Left, self.left), (Side::Right, self.right)]
            .into_iter()
            .filter_map(|(side, landmark)| landmark.map(|l| (side, l)))
    }
}

/// Which hand a visible landmark is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TownGrid {
    /// Landmark in a given quadrant of a pose, if that cell exists.
    pub fn landmark_in_quadrant(&self, pose: Pose, quadrant: Quadrant) -> Option<&Landmark> {
        self.bounding_landmark(pose.intersection, quadrant.offset_for(pose.direction))
    }

    /// Landmarks visible ahead-left and ahead-right of `pose`.
    pub fn visible_landmarks(&self, pose: Pose) -> VisibleLandmarks<'_> {
        VisibleLandmarks {
            left: self.landmark_in_quadrant(pose, Quadrant::FrontLeft),
            right: self.landmark_in_quadrant(pose, Quadrant::FrontRight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Intersection;
    use std::collections::HashSet;

    fn grid() -> TownGrid {
        TownGrid::from_names(&[
            ["City Hall", "Corner Mart", "New Post"],
            ["Luke's Diner", "River Park", "City Bank"],
            ["Main Library", "Brew House", "Art Gallery"],
        ])
        .unwrap()
    }

    fn names(visible: VisibleLandmarks<'_>) -> (Option<&str>, Option<&str>) {
        (
            visible.left.map(|l| l.name.as_str()),
            visible.right.map(|l| l.name.as_str()),
        )
    }

    #[test]
    fn test_each_direction_has_one_of_each_quadrant() {
        for direction in Direction::ALL {
            let quadrants: HashSet<_> = CellOffset::ALL
                .into_iter()
                .map(|offset| Quadrant::of(direction, offset))
                .collect();
            assert_eq!(quadrants.len(), 4);
            assert_eq!(quadrants.iter().filter(|q| q.is_front()).count(), 2);
        }
    }

    #[test]
    fn test_visible_from_center() {
        let grid = grid();
        let center = Intersection::new(1, 1);

        let north = grid.visible_landmarks(Pose::new(center, Direction::North));
        assert_eq!(names(north), (Some("City Hall"), Some("Corner Mart")));

        let east = grid.visible_landmarks(Pose::new(center, Direction::East));
        assert_eq!(names(east), (Some("Corner Mart"), Some("River Park")));

        let south = grid.visible_landmarks(Pose::new(center, Direction::South));
        assert_eq!(names(south), (Some("River Park"), Some("Luke's Diner")));

        let west = grid.visible_landmarks(Pose::new(center, Direction::West));
        assert_eq!(names(west), (Some("Luke's Diner"), Some("City Hall")));
    }

    #[test]
    fn test_edge_of_town() {
        let grid = grid();
        let pose = Pose::new(Intersection::new(0, 1), Direction::North);
        let visible = grid.visible_landmarks(pose);
        assert!(visible.is_empty());

        let pose = Pose::new(Intersection::new(0, 3), Direction::South);
        let visible = grid.visible_landmarks(pose);
        assert_eq!(names(visible), (None, Some("New Post")));
        assert_eq!(visible.sides().count(), 1);
    }

    #[test]
    fn test_visibility_is_pose_pure() {
        let grid = grid();
        let pose = Pose::new(Intersection::new(2, 2), Direction::West);
        assert_eq!(grid.visible_landmarks(pose), grid.visible_landmarks(pose));
    }

    #[test]
    fn test_back_quadrants() {
        let grid = grid();
        let pose = Pose::new(Intersection::new(1, 1), Direction::North);
        assert_eq!(
            grid.landmark_in_quadrant(pose, Quadrant::BackLeft).map(|l| l.name.as_str()),
            Some("Luke's Diner")
        );
        assert_eq!(
            grid.landmark_in_quadrant(pose, Quadrant::BackRight).map(|l| l.name.as_str()),
            Some("River Park")
        );
    }
}
