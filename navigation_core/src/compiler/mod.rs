//! Instruction compiler - turns a raw action path into turn-by-turn narration.
//!
//! The compiler works as follows:
//! 1. **Orientation**: describe the starting facing and what is visible ahead
//! 2. **Grouping**: collapse forward runs into single "go straight" steps
//! 3. **Turns**: around every turn, describe the landmarks seen before and after it
//! 4. **Arrival**: name the destination

mod grouping;

pub use grouping::*;

use serde::{Deserialize, Serialize};
use town_rules::{Direction, Pose, Side, TownGrid, Turn};

use crate::search::{search, Path, SearchError};

/// Configuration for the instruction compiler.
#[derive(Debug, Clone, Default)]
pub struct CompilerConfig {
    /// Say "go straight 3 blocks" instead of "several blocks".
    pub exact_block_counts: bool,
}

/// A landmark seen on one side of the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sighting {
    pub side: Side,
    pub landmark: String,
}

/// One line of narration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Where the agent faces at the start and what it sees ahead.
    Orientation {
        facing: Direction,
        visible: Vec<Sighting>,
    },
    /// A run of forward moves.
    GoStraight {
        blocks: usize,
        exact: bool,
    },
    /// What the agent sees at the end of a run, just before turning.
    Landmarks { visible: Vec<Sighting> },
    Turn(Turn),
    /// The new facing after a turn and what it reveals.
    Facing {
        facing: Direction,
        visible: Vec<Sighting>,
    },
    Arrival { destination: String },
    NoRoute,
}

fn describe_sightings(visible: &[Sighting]) -> String {
    visible
        .iter()
        .map(|s| format!("the {} on your {}", s.landmark, s.side))
        .collect::<Vec<_>>()
        .join(", ")
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Orientation { facing, visible } if visible.is_empty() => write!(
                f,
                "You are facing {facing}. In front of your current position, no buildings are in front of you."
            ),
            Instruction::Orientation { facing, visible } => write!(
                f,
                "You are facing {facing}. In front of your current position, you can see {}.",
                describe_sightings(visible)
            ),
            Instruction::GoStraight { blocks: 1, .. } => write!(f, "Go straight one block."),
            Instruction::GoStraight { blocks, exact: true } => {
                write!(f, "Go straight {blocks} blocks.")
            }
            Instruction::GoStraight { .. } => write!(f, "Go straight several blocks."),
            Instruction::Landmarks { visible } => {
                write!(f, "You will see {}.", describe_sightings(visible))
            }
            Instruction::Turn(turn) => write!(f, "Turn {turn}."),
            Instruction::Facing { facing, visible } => write!(
                f,
                "You will face {facing}, and you will see {}.",
                describe_sightings(visible)
            ),
            Instruction::Arrival { destination } => {
                write!(f, "You will arrive near {destination}.")
            }
            Instruction::NoRoute => write!(
                f,
                "I cannot find a clear path to that destination from your current location."
            ),
        }
    }
}

/// Compiled directions to a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narration {
    pub destination: String,
    pub instructions: Vec<Instruction>,
}

impl Narration {
    /// Narration for a destination that cannot be reached.
    pub fn no_route(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            instructions: vec![Instruction::NoRoute],
        }
    }

    pub fn is_route(&self) -> bool {
        !matches!(self.instructions.as_slice(), [Instruction::NoRoute])
    }

    /// Each instruction as a plain line of text.
    pub fn lines(&self) -> Vec<String> {
        self.instructions.iter().map(|i| i.to_string()).collect()
    }

    /// Format the full message shown to the player.
    pub fn render(&self) -> String {
        if !self.is_route() {
            return self.lines().join("\n");
        }

        let mut text = format!(
            "Here is how to go to the {}. Make sure to read and remember this carefully:\n",
            self.destination
        );
        for line in self.lines() {
            text.push('\n');
            text.push_str(&line);
            text.push('\n');
        }
        text
    }
}

/// The instruction compiler.
#[derive(Debug, Clone, Default)]
pub struct InstructionCompiler {
    config: CompilerConfig,
}

impl InstructionCompiler {
    /// Create a new compiler with the given configuration.
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Create a compiler with default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Compile a found path into narration.
    #[tracing::instrument(level = "debug", skip(self, grid, path), fields(steps = path.len()))]
    pub fn compile(&self, grid: &TownGrid, path: &Path, start: Pose, destination: &str) -> Narration {
        let mut instructions = vec![Instruction::Orientation {
            facing: start.direction,
            visible: sightings(grid, start),
        }];

        let steps = group_path(path);
        let mut previous: Option<&RouteStep> = None;

        for step in &steps {
            match step {
                RouteStep::Straight { blocks, .. } => {
                    instructions.push(Instruction::GoStraight {
                        blocks: *blocks,
                        exact: self.config.exact_block_counts,
                    });
                }
                RouteStep::Turn { turn, pose } => {
                    if let Some(RouteStep::Straight { end, .. }) = previous {
                        let visible = sightings(grid, *end);
                        if !visible.is_empty() {
                            instructions.push(Instruction::Landmarks { visible });
                        }
                    }

                    instructions.push(Instruction::Turn(*turn));

                    let visible = sightings(grid, *pose);
                    if !visible.is_empty() {
                        instructions.push(Instruction::Facing {
                            facing: pose.direction,
                            visible,
                        });
                    }
                }
            }
            previous = Some(step);
        }

        instructions.push(Instruction::Arrival {
            destination: destination.to_string(),
        });

        Narration {
            destination: destination.to_string(),
            instructions,
        }
    }

    /// Compile the outcome of a search. A failed search becomes a single "no route" line.
    pub fn compile_outcome(
        &self,
        grid: &TownGrid,
        outcome: &Result<Path, SearchError>,
        start: Pose,
        destination: &str,
    ) -> Narration {
        match outcome {
            Ok(path) => self.compile(grid, path, start, destination),
            Err(err) => {
                tracing::debug!(%err, "no route to narrate");
                Narration::no_route(destination)
            }
        }
    }

    /// Search for a route and narrate it.
    pub fn directions(&self, grid: &TownGrid, start: Pose, destination: &str) -> Narration {
        let outcome = search(grid, start, destination);
        self.compile_outcome(grid, &outcome, start, destination)
    }
}

/// Landmarks visible from a pose, left before right.
fn sightings(grid: &TownGrid, pose: Pose) -> Vec<Sighting> {
    grid.visible_landmarks(pose)
        .sides()
        .map(|(side, landmark)| Sighting {
            side,
            landmark: landmark.name.clone(),
        })
        .collect()
}
