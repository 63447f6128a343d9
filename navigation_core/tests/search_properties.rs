//! Property tests for the route search.
//!
//! Towns are generated from random seeds and sizes; routes are checked against an
//! independent shortest-distance computation that relaxes every pose edge until
//! nothing changes.

use std::collections::HashMap;

use navigation_core::{coalesce, group_path, search, InstructionCompiler};
use proptest::prelude::*;
use town_rules::{Action, Direction, Intersection, Pose, TownConfig, TownGenerator, TownGrid};

fn town(seed: u64, size: usize) -> TownGrid {
    TownGenerator::new(TownConfig {
        grid_size: size,
        min_start_distance: 0,
        seed: Some(seed),
        ..Default::default()
    })
    .unwrap()
    .generate()
    .unwrap()
    .grid
}

/// Shortest action count from `start` to any pose touching `target`, by repeated
/// edge relaxation over the whole pose space.
fn brute_force_distance(grid: &TownGrid, start: Pose, target: &str) -> Option<usize> {
    let mut dist: HashMap<Pose, usize> = HashMap::new();
    dist.insert(start, 0);

    loop {
        let mut changed = false;
        for intersection in grid.intersections() {
            for direction in Direction::ALL {
                let pose = Pose::new(intersection, direction);
                let Some(&d) = dist.get(&pose) else {
                    continue;
                };
                for action in pose.legal_actions(grid) {
                    let next = pose.apply(grid, action);
                    let entry = dist.entry(next).or_insert(usize::MAX);
                    if d + 1 < *entry {
                        *entry = d + 1;
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }

    dist.into_iter()
        .filter(|(pose, _)| grid.is_adjacent(pose.intersection, target))
        .map(|(_, d)| d)
        .min()
}

fn start_pose(grid: &TownGrid, row: usize, col: usize, dir: usize) -> Pose {
    let side = grid.intersections_per_side();
    Pose::new(
        Intersection::new(row % side, col % side),
        Direction::from_index(dir),
    )
}

fn pick_target(grid: &TownGrid, pick: usize) -> String {
    let landmarks: Vec<_> = grid.landmarks().collect();
    landmarks[pick % landmarks.len()].1.name.clone()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn route_is_shortest(
        seed in any::<u64>(),
        size in 1usize..=6,
        row in 0usize..7,
        col in 0usize..7,
        dir in 0usize..4,
        pick in 0usize..36,
    ) {
        let grid = town(seed, size);
        let start = start_pose(&grid, row, col, dir);
        let target = pick_target(&grid, pick);

        let path = search(&grid, start, &target).unwrap();
        prop_assert_eq!(Some(path.len()), brute_force_distance(&grid, start, &target));
    }

    #[test]
    fn replaying_route_reaches_target(
        seed in any::<u64>(),
        size in 1usize..=6,
        row in 0usize..7,
        col in 0usize..7,
        dir in 0usize..4,
        pick in 0usize..36,
    ) {
        let grid = town(seed, size);
        let start = start_pose(&grid, row, col, dir);
        let target = pick_target(&grid, pick);

        let path = search(&grid, start, &target).unwrap();
        let mut pose = start;
        for step in path.steps() {
            prop_assert!(pose.legal_actions(&grid).contains(&step.action));
            pose = pose.apply(&grid, step.action);
            prop_assert_eq!(pose, step.pose);
        }
        prop_assert!(grid.is_adjacent(pose.intersection, &target));
    }

    #[test]
    fn grouping_is_idempotent(
        seed in any::<u64>(),
        size in 2usize..=6,
        row in 0usize..7,
        col in 0usize..7,
        dir in 0usize..4,
        pick in 0usize..36,
    ) {
        let grid = town(seed, size);
        let start = start_pose(&grid, row, col, dir);
        let target = pick_target(&grid, pick);

        let path = search(&grid, start, &target).unwrap();
        let grouped = group_path(&path);
        prop_assert_eq!(coalesce(grouped.clone()), grouped.clone());

        let forward_moves = path.actions().filter(|a| *a == Action::Forward).count();
        let grouped_blocks: usize = grouped
            .iter()
            .map(|step| match step {
                navigation_core::RouteStep::Straight { blocks, .. } => *blocks,
                navigation_core::RouteStep::Turn { .. } => 0,
            })
            .sum();
        prop_assert_eq!(forward_moves, grouped_blocks);
    }

    #[test]
    fn narration_ends_with_arrival(
        seed in any::<u64>(),
        size in 1usize..=6,
        row in 0usize..7,
        col in 0usize..7,
        dir in 0usize..4,
        pick in 0usize..36,
    ) {
        let grid = town(seed, size);
        let start = start_pose(&grid, row, col, dir);
        let target = pick_target(&grid, pick);

        let narration = InstructionCompiler::with_defaults().directions(&grid, start, &target);
        let lines = narration.lines();
        prop_assert!(lines.len() >= 2);
        prop_assert_eq!(lines.last().cloned(), Some(format!("You will arrive near {}.", target)));
    }

    #[test]
    fn absent_target_is_not_found(
        seed in any::<u64>(),
        size in 1usize..=6,
        row in 0usize..7,
        col in 0usize..7,
        dir in 0usize..4,
    ) {
        let grid = town(seed, size);
        let start = start_pose(&grid, row, col, dir);
        prop_assert!(search(&grid, start, "Nowhere In Particular").is_err());
    }
}
