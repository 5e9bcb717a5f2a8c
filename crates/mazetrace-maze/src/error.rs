use std::fmt;

use mazetrace_core::{Point, Range};

/// Errors from building or parsing a [`Maze`](crate::Maze).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The text diagram contains no cells.
    Empty,
    /// A line of the diagram differs in width from the first one.
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `#`, `.` or space was found.
    InvalidChar { ch: char, pos: Point },
    /// The cell, or the neighbor on the requested side, is outside the maze.
    OutOfBounds(Point),
    /// The cell, or the neighbor on the requested side, is solid rock.
    Solid(Point),
    /// Stored cells do not exactly cover a `[0, w) x [0, h)` bounds.
    Malformed { bounds: Range, cells: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("maze: empty diagram"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "maze: line {line} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "maze: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::OutOfBounds(p) => write!(f, "maze: {p} is out of bounds"),
            Self::Solid(p) => write!(f, "maze: {p} is solid"),
            Self::Malformed { bounds, cells } => {
                write!(f, "maze: {cells} cells do not fill bounds {bounds}")
            }
        }
    }
}

impl std::error::Error for MazeError {}
