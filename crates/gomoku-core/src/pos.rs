//! Board coordinates.

use std::fmt;

/// A cell on the board, 0-indexed as `(row, col)`.
///
/// A `Pos` carries no board size; bounds are checked by [`Board`](crate::Board).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    /// Create a position from a row and column.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Pos {
        Pos { row, col }
    }

    /// Create a position from signed coordinates, returning `None` if either is
    /// negative or does not fit in a `u8`.
    #[inline]
    pub fn from_signed(row: isize, col: isize) -> Option<Pos> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Some(Pos { row, col })
    }

    /// Return the position shifted by `(dr, dc) * steps`, as signed coordinates.
    #[inline]
    pub const fn offset(self, dr: isize, dc: isize, steps: isize) -> (isize, isize) {
        (self.row as isize + dr * steps, self.col as isize + dc * steps)
    }

    /// Chebyshev (king-move) distance to `other`.
    #[inline]
    pub fn chebyshev(self, other: Pos) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Row-major index on a board of side length `size`.
    #[inline]
    pub const fn index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos{}", self)
    }
}
