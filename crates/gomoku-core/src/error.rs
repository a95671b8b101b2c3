//! Error types for board construction, stone placement, and notation parsing.

use crate::pos::Pos;

/// Errors from board construction and stone placement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The requested side length cannot hold a winning line plus a border.
    #[error("board size {size} is outside {min}..={max}")]
    InvalidSize {
        /// The rejected side length.
        size: usize,
        /// Smallest accepted side length.
        min: usize,
        /// Largest accepted side length.
        max: usize,
    },
    /// The target cell lies outside the board.
    #[error("{pos} is outside a {size}x{size} board")]
    OutOfBounds {
        /// The rejected position.
        pos: Pos,
        /// Side length of the board.
        size: usize,
    },
    /// The target cell already holds a stone.
    #[error("{pos} is already occupied")]
    Occupied {
        /// The occupied position.
        pos: Pos,
    },
}

/// Errors that occur when parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The input contains no rows.
    #[error("board notation is empty")]
    Empty,
    /// A row's length differs from the number of rows.
    #[error("row {row} has {length} cells, expected {expected}")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found.
        length: usize,
        /// Number of cells expected (the row count).
        expected: usize,
    },
    /// A cell symbol is not `.`, `X` or `O`.
    #[error("invalid cell '{symbol}' at row {row}, column {col}")]
    InvalidCell {
        /// The offending symbol.
        symbol: String,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },
    /// The parsed grid is not a valid board.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, NotationError};
    use crate::pos::Pos;

    #[test]
    fn board_error_display() {
        let err = BoardError::Occupied { pos: Pos::new(2, 3) };
        assert_eq!(format!("{err}"), "(2, 3) is already occupied");

        let err = BoardError::InvalidSize { size: 4, min: 6, max: 32 };
        assert_eq!(format!("{err}"), "board size 4 is outside 6..=32");
    }

    #[test]
    fn notation_error_display() {
        let err = NotationError::BadRowLength { row: 1, length: 8, expected: 9 };
        assert_eq!(format!("{err}"), "row 1 has 8 cells, expected 9");
    }

    #[test]
    fn notation_error_from_board_error() {
        let board_err = BoardError::InvalidSize { size: 3, min: 6, max: 32 };
        let err: NotationError = board_err.into();
        assert!(matches!(err, NotationError::InvalidBoard { .. }));
    }
}
