//! Cardinal [`Direction`]s and the per-cell [`Walls`] bitmask.

use std::fmt;
use std::ops::BitOr;

use mazetrace_core::Point;

/// One of the four grid directions. Y grows downward, so north is `y - 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in neighbor enumeration order.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Unit offset for one step in this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::North => Point::new(0, -1),
            Self::East => Point::new(1, 0),
            Self::South => Point::new(0, 1),
            Self::West => Point::new(-1, 0),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// The wall bit on this side of a cell.
    #[inline]
    pub const fn wall(self) -> Walls {
        match self {
            Self::North => Walls::NORTH,
            Self::East => Walls::EAST,
            Self::South => Walls::SOUTH,
            Self::West => Walls::WEST,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        })
    }
}

/// Bitmask of the walls around one maze cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walls(pub u8);

impl Walls {
    pub const NONE: Self = Self(0);
    pub const NORTH: Self = Self(1 << 0);
    pub const EAST: Self = Self(1 << 1);
    pub const SOUTH: Self = Self(1 << 2);
    pub const WEST: Self = Self(1 << 3);
    /// All four sides.
    pub const ALL: Self = Self(0b1111);
    /// The cell itself is rock and cannot be entered.
    pub const SOLID: Self = Self(1 << 4);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for Walls {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
