//! Game session - the player's pose in a generated town and the moves that change it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use town_rules::{
    Action, CellOffset, Direction, GeneratedTown, Intersection, Pose, Side, TownGrid, Turn,
};

use crate::compiler::{InstructionCompiler, Narration};

/// Error returned for input that is not a move command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid command {0:?}, use 'f', 'l' or 'r'")]
pub struct CommandParseError(pub String);

/// A move requested by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Forward,
    Left,
    Right,
}

impl Command {
    pub fn action(&self) -> Action {
        match self {
            Command::Forward => Action::Forward,
            Command::Left => Action::TurnLeft,
            Command::Right => Action::TurnRight,
        }
    }
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" => Ok(Command::Forward),
            "l" => Ok(Command::Left),
            "r" => Ok(Command::Right),
            _ => Err(CommandParseError(s.to_string())),
        }
    }
}

/// What happened when a command was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Moved(Pose),
    Turned { turn: Turn, pose: Pose },
    /// Forward was requested facing the edge of town; the pose is unchanged.
    BlockedByEdge,
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Moved(_) => write!(f, "You moved forward one block."),
            MoveOutcome::Turned { turn, .. } => write!(f, "You turned {turn}."),
            MoveOutcome::BlockedByEdge => write!(
                f,
                "You hit the edge of the town! Cannot move further in that direction."
            ),
        }
    }
}

/// Live description of what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub facing: Direction,
    pub left: Option<String>,
    pub right: Option<String>,
    /// False only where no cell at all bounds the intersection.
    pub near_buildings: bool,
}

impl StatusReport {
    /// Build the status for a pose.
    pub fn observe(grid: &TownGrid, pose: Pose) -> Self {
        let visible = grid.visible_landmarks(pose);
        let near_buildings = CellOffset::ALL
            .iter()
            .any(|offset| grid.bounding_landmark(pose.intersection, *offset).is_some());

        Self {
            facing: pose.direction,
            left: visible.left.map(|l| l.name.clone()),
            right: visible.right.map(|l| l.name.clone()),
            near_buildings,
        }
    }
}

impl std::fmt::Display for StatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Now, you are facing {}.", self.facing)?;
        writeln!(f, "In front of you, you can see:")?;

        if !self.near_buildings {
            return writeln!(f, "  (No buildings immediately visible from this edge of town)");
        }

        for side in Side::BOTH {
            let seen = match side {
                Side::Left => &self.left,
                Side::Right => &self.right,
            };
            match seen {
                Some(name) => writeln!(f, "  - {name} on your {side}.")?,
                None => writeln!(f, "  - The edge of the town on your {side}.")?,
            }
        }
        Ok(())
    }
}

/// A running game: one town, one target and the player's current pose.
#[derive(Debug, Clone)]
pub struct Session {
    town: GeneratedTown,
    pose: Pose,
    trace: Vec<Intersection>,
    compiler: InstructionCompiler,
}

impl Session {
    /// Start a session at the town's starting pose.
    pub fn new(town: GeneratedTown) -> Self {
        Self::with_compiler(town, InstructionCompiler::with_defaults())
    }

    pub fn with_compiler(town: GeneratedTown, compiler: InstructionCompiler) -> Self {
        let pose = town.start;
        Self {
            town,
            pose,
            trace: vec![pose.intersection],
            compiler,
        }
    }

    pub fn grid(&self) -> &TownGrid {
        &self.town.grid
    }

    pub fn town(&self) -> &GeneratedTown {
        &self.town
    }

    /// Unique name of the landmark to find.
    pub fn target(&self) -> &str {
        &self.town.target
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Intersections visited so far, starting with the first.
    pub fn trace(&self) -> &[Intersection] {
        &self.trace
    }

    /// Perform a player command. Walking into the edge of town leaves the pose as is.
    pub fn perform(&mut self, command: Command) -> MoveOutcome {
        let action = command.action();
        let Ok(next) = self.pose.try_apply(&self.town.grid, action) else {
            tracing::debug!(pose = %self.pose, "blocked by the edge of town");
            return MoveOutcome::BlockedByEdge;
        };

        self.pose = next;
        tracing::debug!(?action, pose = %next, "player moved");
        match action.turn() {
            Some(turn) => MoveOutcome::Turned { turn, pose: next },
            None => {
                self.trace.push(next.intersection);
                MoveOutcome::Moved(next)
            }
        }
    }

    /// What the player currently sees.
    pub fn status(&self) -> StatusReport {
        StatusReport::observe(&self.town.grid, self.pose)
    }

    /// Check whether the player stands next to the target.
    pub fn has_arrived(&self) -> bool {
        self.town.grid.is_adjacent(self.pose.intersection, &self.town.target)
    }

    /// Directions from the current pose to the target.
    pub fn directions(&self) -> Narration {
        self.compiler
            .directions(&self.town.grid, self.pose, &self.town.target)
    }
}
