//! # Town Rules
//!
//! The rules of the town - the street grid, its landmarks, how the agent moves and
//! what it can see. This crate is the single source of truth for town state and
//! contains no route planning.

pub mod config;
pub mod generator;
pub mod grid;
pub mod landmarks;
pub mod movement;
pub mod visibility;

pub use config::*;
pub use generator::*;
pub use grid::*;
pub use landmarks::*;
pub use movement::*;
pub use visibility::*;
