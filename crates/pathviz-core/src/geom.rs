//! Grid coordinates: [`Point`].
//!
//! Positions are `(row, col)` pairs with row 0 at the top. Rows grow down,
//! columns grow right.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid position.
///
/// Components are signed so that direction offsets and rays stepping past an
/// edge can be expressed without wrapping; [`Board::contains`] decides
/// whether a point is actually on the board.
///
/// [`Board::contains`]: crate::Board::contains
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// One row down.
    pub const DOWN: Self = Self { row: 1, col: 0 };
    /// One row up.
    pub const UP: Self = Self { row: -1, col: 0 };
    /// One column right.
    pub const RIGHT: Self = Self { row: 0, col: 1 };
    /// One column left.
    pub const LEFT: Self = Self { row: 0, col: -1 };

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours in enumeration order: down, up,
    /// right, left.
    ///
    /// Every search relies on this order for its tie-breaking, so it must
    /// not change.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            self + Self::DOWN,
            self + Self::UP,
            self + Self::RIGHT,
            self + Self::LEFT,
        ]
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_adjacent_4(self, other: Point) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }

    /// Whether `other` is one king move away (orthogonal or diagonal).
    #[inline]
    pub fn is_adjacent_8(self, other: Point) -> bool {
        self != other && (self.row - other.row).abs() <= 1 && (self.col - other.col).abs() <= 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Error returned when a `"row,col"` string cannot be read as a [`Point`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected \"row,col\", got {0:?}")]
pub struct ParsePointError(pub String);

impl FromStr for Point {
    type Err = ParsePointError;

    /// Parse `"row,col"`; whitespace around either number is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePointError(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Self::new(row, col))
    }
}
