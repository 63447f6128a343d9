//! Paths produced by the route search.

use serde::{Deserialize, Serialize};
use town_rules::{Action, Pose, TownGrid};

/// One action of a path and the pose it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub action: Action,
    pub pose: Pose,
}

/// An ordered sequence of actions. Empty means the start already satisfies the goal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    pub fn new(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }

    /// Build a path by applying `actions` one after another from `start`.
    ///
    /// # Panics
    ///
    /// Panics if any action is illegal at the pose it is applied to.
    pub fn from_actions(
        grid: &TownGrid,
        start: Pose,
        actions: impl IntoIterator<Item = Action>,
    ) -> Self {
        let mut pose = start;
        let steps = actions
            .into_iter()
            .map(|action| {
                pose = pose.apply(grid, action);
                PathStep { action, pose }
            })
            .collect();
        Self { steps }
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.steps.iter().map(|step| step.action)
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Pose after the last step, or `start` for an empty path.
    pub fn end_pose(&self, start: Pose) -> Pose {
        self.steps.last().map(|step| step.pose).unwrap_or(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use town_rules::{Direction, Intersection};

    #[test]
    fn test_from_actions() {
        let grid = TownGrid::from_names(&[["City Hall", "Corner Mart"], ["New Park", "City Bank"]])
            .unwrap();
        let start = Pose::new(Intersection::new(0, 0), Direction::South);
        let path = Path::from_actions(
            &grid,
            start,
            [Action::Forward, Action::TurnLeft, Action::Forward],
        );

        assert_eq!(path.len(), 3);
        assert_eq!(
            path.end_pose(start),
            Pose::new(Intersection::new(1, 1), Direction::East)
        );
        assert_eq!(
            path.actions().collect::<Vec<_>>(),
            vec![Action::Forward, Action::TurnLeft, Action::Forward]
        );
    }

    #[test]
    fn test_empty_path_ends_at_start() {
        let start = Pose::new(Intersection::new(2, 1), Direction::West);
        let path = Path::default();
        assert!(path.is_empty());
        assert_eq!(path.end_pose(start), start);
    }
}
