//! # Navigation Core
//!
//! The navigation engine. This crate reads a `town_rules` grid, finds the shortest
//! sequence of moves to a landmark, and narrates that route as turn-by-turn
//! directions.
//!
//! ## Core Components
//!
//! - **search**: Breadth-first search over poses (intersection × facing)
//! - **compiler**: Groups raw paths into steps and narrates them with landmarks
//! - **session**: A running game - player pose, moves, live status and win check
//!
//! ## Design Philosophy
//!
//! - **Pure**: Search and compilation never mutate the grid; poses are plain values
//! - **Deterministic**: Equal-length routes are broken by a fixed expansion order
//! - **Value errors**: An unreachable target is a returned value, never a panic

pub mod compiler;
pub mod search;
pub mod session;

pub use compiler::*;
pub use search::*;
pub use session::*;
