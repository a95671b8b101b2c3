//! Text notation for [`Board`].
//!
//! A board is written as its rows, top to bottom, separated by `/` or
//! whitespace. Each row holds one character per cell: `.` for empty, `X` or
//! `O` for a stone. A 6x6 board with one stone in the middle:
//!
//! ```text
//! ....../....../...X../....../....../......
//! ```

use std::str::FromStr;

use crate::board::Board;
use crate::error::NotationError;
use crate::pos::Pos;
use crate::side::Side;

/// Character used for an empty cell.
pub const EMPTY_SYMBOL: char = '.';

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Board, NotationError> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(NotationError::Empty);
        }

        let size = rows.len();
        let mut board = Board::new(size)?;

        for (r, row) in rows.iter().enumerate() {
            let length = row.chars().count();
            if length != size {
                return Err(NotationError::BadRowLength {
                    row: r,
                    length,
                    expected: size,
                });
            }
            for (c, symbol) in row.chars().enumerate() {
                if symbol == EMPTY_SYMBOL {
                    continue;
                }
                let side = Side::from_symbol(symbol).ok_or_else(|| NotationError::InvalidCell {
                    symbol: symbol.to_string(),
                    row: r,
                    col: c,
                })?;
                board.apply(Pos::new(r as u8, c as u8), side)?;
            }
        }

        Ok(board)
    }
}

impl Board {
    /// Serialize the board to `/`-separated row notation.
    pub fn to_notation(&self) -> String {
        let mut out = String::with_capacity(self.size() * (self.size() + 1));
        for row in 0..self.size() {
            if row > 0 {
                out.push('/');
            }
            for col in 0..self.size() {
                out.push(match self.get(Pos::new(row as u8, col as u8)) {
                    Some(side) => side.symbol(),
                    None => EMPTY_SYMBOL,
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::error::{BoardError, NotationError};
    use crate::pos::Pos;
    use crate::side::Side;

    #[test]
    fn parse_slash_separated() {
        let board: Board = "....../....../...X../....../....O./......".parse().unwrap();
        assert_eq!(board.size(), 6);
        assert_eq!(board.stone_count(), 2);
        assert_eq!(board.get(Pos::new(2, 3)), Some(Side::X));
        assert_eq!(board.get(Pos::new(4, 4)), Some(Side::O));
    }

    #[test]
    fn parse_multiline() {
        let board: Board = "
            ......
            .X....
            ......
            ......
            ......
            .....o
        "
        .parse()
        .unwrap();
        assert_eq!(board.get(Pos::new(1, 1)), Some(Side::X));
        assert_eq!(board.get(Pos::new(5, 5)), Some(Side::O));
    }

    #[test]
    fn notation_roundtrip() {
        let text = "X...../.O..../......./....../....X./.....O";
        // Row 2 is too long on purpose: make sure it is rejected first.
        assert!(text.parse::<Board>().is_err());

        let text = "X...../.O..../....../....../....X./.....O";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.to_notation(), text);
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!("".parse::<Board>(), Err(NotationError::Empty));
        assert_eq!("  / ".parse::<Board>(), Err(NotationError::Empty));
    }

    #[test]
    fn parse_bad_row_length() {
        let result = "....../...../....../....../....../......".parse::<Board>();
        assert_eq!(
            result,
            Err(NotationError::BadRowLength {
                row: 1,
                length: 5,
                expected: 6,
            })
        );
    }

    #[test]
    fn parse_invalid_cell() {
        let result = "....../..Z.../....../....../....../......".parse::<Board>();
        assert!(matches!(
            result,
            Err(NotationError::InvalidCell { row: 1, col: 2, .. })
        ));
    }

    #[test]
    fn parse_too_small() {
        let result = "...../...../...../...../.....".parse::<Board>();
        assert!(matches!(
            result,
            Err(NotationError::InvalidBoard {
                source: BoardError::InvalidSize { size: 5, .. }
            })
        ));
    }

    #[test]
    fn debug_uses_notation() {
        let board: Board = "X...../....../....../....../....../......".parse().unwrap();
        assert_eq!(
            format!("{board:?}"),
            "Board(\"X...../....../....../....../....../......\")"
        );
    }
}
