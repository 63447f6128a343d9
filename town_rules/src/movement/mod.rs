//! Movement rules: facing directions, actions and the pose state machine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Intersection, TownGrid};

/// Compass directions, in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position in the clockwise cycle, North = 0.
    pub fn index(&self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Direction at a cycle position (taken mod 4).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Row and column change of one step forward.
    pub fn vector(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Direction after a left turn.
    pub fn left(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Direction after a right turn.
    pub fn right(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Side of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
}

impl Turn {
    pub fn name(&self) -> &'static str {
        match self {
            Turn::Left => "left",
            Turn::Right => "right",
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single move of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Forward,
    TurnLeft,
    TurnRight,
}

impl Action {
    /// Every action, in the order searches expand them.
    pub const ALL: [Action; 3] = [Action::Forward, Action::TurnLeft, Action::TurnRight];

    /// The turn this action performs, if it is one.
    pub fn turn(&self) -> Option<Turn> {
        match self {
            Action::Forward => None,
            Action::TurnLeft => Some(Turn::Left),
            Action::TurnRight => Some(Turn::Right),
        }
    }
}

/// Errors raised by checked pose transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{action:?} is not legal from {pose}")]
    IllegalAction { pose: Pose, action: Action },
}

/// The complete navigational state: where the agent stands and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    pub intersection: Intersection,
    pub direction: Direction,
}

impl Pose {
    pub fn new(intersection: Intersection, direction: Direction) -> Self {
        Self {
            intersection,
            direction,
        }
    }

    /// Intersection one block ahead, if it exists on the grid.
    pub fn ahead(&self, grid: &TownGrid) -> Option<Intersection> {
        let (d_row, d_col) = self.direction.vector();
        self.intersection
            .offset(d_row, d_col)
            .filter(|next| grid.contains(*next))
    }

    /// Check if `action` may be taken from this pose.
    pub fn is_legal(&self, grid: &TownGrid, action: Action) -> bool {
        match action {
            Action::Forward => self.ahead(grid).is_some(),
            Action::TurnLeft | Action::TurnRight => true,
        }
    }

    /// Legal actions from this pose, in expansion order.
    pub fn legal_actions(&self, grid: &TownGrid) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.is_legal(grid, *action))
            .collect()
    }

    /// Apply an action, returning an error if it is not legal.
    pub fn try_apply(&self, grid: &TownGrid, action: Action) -> Result<Pose, MoveError> {
        let illegal = MoveError::IllegalAction {
            pose: *self,
            action,
        };
        match action {
            Action::Forward => self
                .ahead(grid)
                .map(|intersection| Pose::new(intersection, self.direction))
                .ok_or(illegal),
            Action::TurnLeft => Ok(Pose::new(self.intersection, self.direction.left())),
            Action::TurnRight => Ok(Pose::new(self.intersection, self.direction.right())),
        }
    }

    /// Apply an action that the caller has already established is legal.
    ///
    /// # Panics
    ///
    /// Panics if `action` is not in [`Pose::legal_actions`]. Callers offering moves to
    /// a player must validate with [`Pose::try_apply`] instead.
    pub fn apply(&self, grid: &TownGrid, action: Action) -> Pose {
        match self.try_apply(grid, action) {
            Ok(pose) => pose,
            Err(err) => panic!("contract violation: {err}"),
        }
    }
}

impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} facing {}", self.intersection, self.direction)
    }
}
