//! Run-length grouping of raw paths into route steps.

use serde::{Deserialize, Serialize};
use town_rules::{Pose, Turn};

use crate::search::Path;

/// A human-sized piece of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteStep {
    /// A run of forward moves in one direction, ending at `end`.
    Straight { blocks: usize, end: Pose },
    /// A single turn in place, ending at `pose`.
    Turn { turn: Turn, pose: Pose },
}

impl RouteStep {
    /// Pose the agent holds once this step is done.
    pub fn end_pose(&self) -> Pose {
        match self {
            RouteStep::Straight { end, .. } => *end,
            RouteStep::Turn { pose, .. } => *pose,
        }
    }
}

/// Group a raw path: consecutive forward moves collapse into one straight step,
/// every turn stays its own step.
pub fn group_path(path: &Path) -> Vec<RouteStep> {
    coalesce(path.steps().iter().map(|step| match step.action.turn() {
        None => RouteStep::Straight {
            blocks: 1,
            end: step.pose,
        },
        Some(turn) => RouteStep::Turn {
            turn,
            pose: step.pose,
        },
    }))
}

/// Merge adjacent straight steps that keep the same facing.
///
/// Grouping an already grouped sequence returns it unchanged.
pub fn coalesce(steps: impl IntoIterator<Item = RouteStep>) -> Vec<RouteStep> {
    let mut grouped: Vec<RouteStep> = Vec::new();

    for step in steps {
        match (grouped.last_mut(), step) {
            (
                Some(RouteStep::Straight { blocks, end }),
                RouteStep::Straight {
                    blocks: more,
                    end: next_end,
                },
            ) if end.direction == next_end.direction => {
                *blocks += more;
                *end = next_end;
            }
            _ => grouped.push(step),
        }
    }

    grouped
}
