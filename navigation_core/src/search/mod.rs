//! Route search - breadth-first search over the pose state space.
//!
//! Every pose (intersection × facing) is a node; each legal action is an edge of
//! cost 1. The first pose dequeued whose intersection touches the target landmark
//! ends the search, so the returned path has the fewest possible actions.
//! Successors are expanded Forward, TurnLeft, TurnRight, which makes the choice
//! between equally short routes deterministic.

mod path;

pub use path::*;

use std::collections::VecDeque;
use thiserror::Error;
use town_rules::{Action, Pose, TownGrid};

/// Errors returned by [`search`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no route to {target} from {start}")]
    NotFound { target: String, start: Pose },
}

/// Dense integer keys for every pose of a grid.
#[derive(Debug, Clone, Copy)]
struct PoseSpace {
    side: usize,
}

impl PoseSpace {
    fn new(grid: &TownGrid) -> Self {
        Self {
            side: grid.intersections_per_side(),
        }
    }

    /// Number of distinct poses: `(N+1)² × 4`.
    fn len(&self) -> usize {
        self.side * self.side * 4
    }

    fn key(&self, pose: Pose) -> usize {
        pose.intersection.row * self.side * 4
            + pose.intersection.col * 4
            + pose.direction.index()
    }
}

/// Find a shortest action sequence from `start` to any intersection adjacent to the
/// landmark named `target`.
///
/// Returns an empty path when `start` already touches the target, and
/// [`SearchError::NotFound`] when the target is missing from the grid or no adjacent
/// intersection can be reached.
#[tracing::instrument(level = "debug", skip(grid), fields(size = grid.size()))]
pub fn search(grid: &TownGrid, start: Pose, target: &str) -> Result<Path, SearchError> {
    let not_found = || SearchError::NotFound {
        target: target.to_string(),
        start,
    };

    if !grid.contains(start.intersection) {
        tracing::debug!("start pose lies outside the grid");
        return Err(not_found());
    }
    if grid.find_landmark(target).is_none() {
        tracing::debug!("target is not in the grid");
        return Err(not_found());
    }

    let space = PoseSpace::new(grid);
    let mut visited = vec![false; space.len()];
    let mut parents: Vec<Option<(Pose, Action)>> = vec![None; space.len()];
    let mut queue = VecDeque::new();

    visited[space.key(start)] = true;
    queue.push_back(start);
    let mut explored = 0usize;

    while let Some(pose) = queue.pop_front() {
        explored += 1;

        if grid.is_adjacent(pose.intersection, target) {
            let path = reconstruct(&space, &parents, pose);
            tracing::debug!(steps = path.len(), explored, "route found");
            return Ok(path);
        }

        for action in Action::ALL {
            let Ok(next) = pose.try_apply(grid, action) else {
                continue;
            };
            let key = space.key(next);
            if !visited[key] {
                visited[key] = true;
                parents[key] = Some((pose, action));
                queue.push_back(next);
            }
        }
    }

    tracing::debug!(explored, "search space exhausted");
    Err(not_found())
}

/// Walk parent links back from `goal` to the start pose (the only visited pose
/// without a parent).
fn reconstruct(space: &PoseSpace, parents: &[Option<(Pose, Action)>], goal: Pose) -> Path {
    let mut steps = Vec::new();
    let mut current = goal;

    while let Some((previous, action)) = parents[space.key(current)] {
        steps.push(PathStep {
            action,
            pose: current,
        });
        current = previous;
    }

    steps.reverse();
    Path::new(steps)
}
