//! A rectangular maze of walled cells.

use std::fmt;
use std::str::FromStr;

use mazetrace_core::{Point, Range};
use mazetrace_paths::Pather;

use crate::error::MazeError;
use crate::walls::{Direction, Walls};

/// A `width x height` grid of cells, each carrying its own [`Walls`].
///
/// Walls are kept consistent on both sides: carving or building a wall
/// between two cells updates both of them. Movement is 4-connected, never
/// crosses a wall, never enters a [solid](Walls::SOLID) cell and never
/// leaves the maze bounds, whether or not a border wall bit is set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MazeRepr"))]
pub struct Maze {
    bounds: Range,
    cells: Vec<Walls>,
}

/// Unchecked wire form of a [`Maze`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MazeRepr {
    bounds: Range,
    cells: Vec<Walls>,
}

#[cfg(feature = "serde")]
impl TryFrom<MazeRepr> for Maze {
    type Error = MazeError;

    fn try_from(repr: MazeRepr) -> Result<Self, MazeError> {
        let MazeRepr { bounds, cells } = repr;
        if bounds != Range::sized(bounds.max.x, bounds.max.y) || cells.len() != bounds.len() {
            return Err(MazeError::Malformed {
                bounds,
                cells: cells.len(),
            });
        }
        Ok(Self { bounds, cells })
    }
}

impl Maze {
    /// A maze with every wall standing, ready to be carved.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Walls::ALL)
    }

    /// A maze without any walls.
    pub fn open(width: i32, height: i32) -> Self {
        Self::filled(width, height, Walls::NONE)
    }

    fn filled(width: i32, height: i32, walls: Walls) -> Self {
        let bounds = Range::sized(width, height);
        Self {
            bounds,
            cells: vec![walls; bounds.len()],
        }
    }

    /// Parse a block diagram: `#` is solid, `.` or space is floor.
    ///
    /// Leading and trailing blank lines are ignored; every remaining line
    /// must have the same width.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let s = s.trim_matches(&['\n', '\r'][..]);
        if s.is_empty() {
            return Err(MazeError::Empty);
        }

        let lines: Vec<&str> = s.lines().collect();
        let width = lines[0].chars().count();
        for (i, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::InconsistentSize {
                    line: i + 1,
                    expected: width,
                    found,
                });
            }
        }

        let mut maze = Self::open(width as i32, lines.len() as i32);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    '#' => maze.block(p)?,
                    '.' | ' ' => {}
                    _ => return Err(MazeError::InvalidChar { ch, pos: p }),
                }
            }
        }

        log::debug!(
            "parsed {}x{} maze with {} floor cells",
            maze.width(),
            maze.height(),
            maze.floor().count()
        );
        Ok(maze)
    }

    /// The rectangle covered by the maze.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is a cell of this maze.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Walls of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn walls(&self, p: Point) -> Option<Walls> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Whether the `dir` side of `p` has a wall. Out-of-bounds cells report
    /// every wall.
    pub fn has_wall(&self, p: Point, dir: Direction) -> bool {
        self.walls(p).is_none_or(|w| w.contains(dir.wall()))
    }

    /// Whether `p` cannot be entered: solid or out of bounds.
    pub fn is_solid(&self, p: Point) -> bool {
        self.walls(p).is_none_or(|w| w.contains(Walls::SOLID))
    }

    /// Every enterable cell, in row-major order.
    pub fn floor(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds.iter().filter(|&p| !self.is_solid(p))
    }

    /// Remove the wall between `p` and its neighbor in direction `dir`.
    pub fn carve(&mut self, p: Point, dir: Direction) -> Result<(), MazeError> {
        let (i, n) = self.passage(p, dir)?;
        let ni = self.bounds.index(n).ok_or(MazeError::OutOfBounds(n))?;
        if self.cells[ni].contains(Walls::SOLID) {
            return Err(MazeError::Solid(n));
        }
        self.cells[i].remove(dir.wall());
        self.cells[ni].remove(dir.opposite().wall());
        Ok(())
    }

    /// Put up the wall on the `dir` side of `p`, and the facing wall of the
    /// neighbor if there is one.
    pub fn build(&mut self, p: Point, dir: Direction) -> Result<(), MazeError> {
        let i = self.bounds.index(p).ok_or(MazeError::OutOfBounds(p))?;
        self.cells[i].insert(dir.wall());
        if let Some(ni) = self.bounds.index(p + dir.delta()) {
            self.cells[ni].insert(dir.opposite().wall());
        }
        Ok(())
    }

    /// Turn `p` into solid rock, walling it off from every neighbor.
    pub fn block(&mut self, p: Point) -> Result<(), MazeError> {
        let i = self.bounds.index(p).ok_or(MazeError::OutOfBounds(p))?;
        self.cells[i] = Walls::ALL | Walls::SOLID;
        for dir in Direction::ALL {
            if let Some(ni) = self.bounds.index(p + dir.delta()) {
                self.cells[ni].insert(dir.opposite().wall());
            }
        }
        Ok(())
    }

    fn passage(&self, p: Point, dir: Direction) -> Result<(usize, Point), MazeError> {
        let i = self.bounds.index(p).ok_or(MazeError::OutOfBounds(p))?;
        if self.cells[i].contains(Walls::SOLID) {
            return Err(MazeError::Solid(p));
        }
        Ok((i, p + dir.delta()))
    }
}

impl Pather for Maze {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let Some(walls) = self.walls(p) else {
            return;
        };
        if walls.contains(Walls::SOLID) {
            return;
        }
        for dir in Direction::ALL {
            if walls.contains(dir.wall()) {
                continue;
            }
            let n = p + dir.delta();
            if !self.is_solid(n) {
                buf.push(n);
            }
        }
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, MazeError> {
        Self::parse(s)
    }
}

/// Block diagram form, the inverse of [`Maze::parse`]. Only solidity is
/// drawn; walls between two floor cells are not shown.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in self.bounds.min.y..self.bounds.max.y {
            if y > self.bounds.min.y {
                f.write_str("\n")?;
            }
            for x in self.bounds.min.x..self.bounds.max.x {
                let ch = if self.is_solid(Point::new(x, y)) { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_round_trip() {
        let mut maze = Maze::new(3, 2);
        maze.carve(Point::new(0, 0), Direction::East).unwrap();
        maze.block(Point::new(2, 1)).unwrap();
        let json = serde_json::to_string(&maze).unwrap();
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(maze, back);
    }

    #[test]
    fn cells_must_fill_bounds() {
        let short = r#"{"bounds":{"min":{"x":0,"y":0},"max":{"x":3,"y":3}},"cells":[0]}"#;
        let err = serde_json::from_str::<Maze>(short).unwrap_err();
        assert!(err.to_string().contains("1 cells do not fill"));

        let shifted = r#"{"bounds":{"min":{"x":1,"y":0},"max":{"x":2,"y":1}},"cells":[0]}"#;
        assert!(serde_json::from_str::<Maze>(shifted).is_err());

        let ok = r#"{"bounds":{"min":{"x":0,"y":0},"max":{"x":1,"y":1}},"cells":[15]}"#;
        let maze: Maze = serde_json::from_str(ok).unwrap();
        assert_eq!(maze.walls(Point::new(0, 0)), Some(Walls::ALL));
    }
}
