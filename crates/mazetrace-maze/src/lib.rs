//! Walled grid mazes for mazetrace.
//!
//! A [`Maze`] is a rectangle of cells separated by walls. It implements
//! [`mazetrace_paths::Pather`] so it can be handed straight to the search
//! engine, and it can be read from or written to a block diagram where `#`
//! is solid rock and `.` is floor.

pub mod error;
pub mod maze;
pub mod walls;

pub use error::MazeError;
pub use maze::Maze;
pub use walls::{Direction, Walls};
