//! The Gomoku board: a square grid of stones with in-place place/undo.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::error::BoardError;
use crate::pos::Pos;
use crate::side::Side;

/// Number of same-side stones in a line needed to win.
pub const WIN_LENGTH: usize = 5;

/// Largest supported side length.
pub const MAX_BOARD_SIZE: usize = 32;

/// The four line directions: vertical, horizontal, diagonal, anti-diagonal.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// An N x N Gomoku board.
///
/// Cells are stored row-major; `None` marks an empty cell. The board is
/// mutated in place by [`apply`](Board::apply) and [`undo`](Board::undo), or
/// scoped with [`place`](Board::place).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Side length.
    size: usize,
    /// Row-major cells, `size * size` long.
    cells: Vec<Option<Side>>,
    /// Number of occupied cells, cached for `is_full` / `is_empty`.
    stones: usize,
}

impl Board {
    /// Create an empty board with side length `size`.
    ///
    /// The size must exceed [`WIN_LENGTH`] and be at most [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Board, BoardError> {
        if size <= WIN_LENGTH || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize {
                size,
                min: WIN_LENGTH + 1,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Board {
            size,
            cells: vec![None; size * size],
            stones: 0,
        })
    }

    /// Build a board from a square grid of cells.
    pub fn from_rows(rows: &[Vec<Option<Side>>]) -> Result<Board, crate::NotationError> {
        let size = rows.len();
        if size == 0 {
            return Err(crate::NotationError::Empty);
        }
        let mut board = Board::new(size)?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(crate::NotationError::BadRowLength {
                    row: r,
                    length: row.len(),
                    expected: size,
                });
            }
            for (c, cell) in row.iter().enumerate() {
                if let Some(side) = *cell {
                    board.apply(Pos::new(r as u8, c as u8), side)?;
                }
            }
        }
        Ok(board)
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The center cell (rounded down on even sizes).
    #[inline]
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }

    /// Return `true` if the signed coordinates lie on the board.
    #[inline]
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Return `true` if `pos` lies on the board.
    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Return the stone at `pos`, or `None` if the cell is empty or off the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Side> {
        if self.in_bounds(pos) {
            self.cells[pos.index(self.size)]
        } else {
            None
        }
    }

    /// Look up signed coordinates: `None` off the board, `Some(cell)` on it.
    #[inline]
    pub fn at(&self, row: isize, col: isize) -> Option<Option<Side>> {
        if self.contains(row, col) {
            Some(self.cells[row as usize * self.size + col as usize])
        } else {
            None
        }
    }

    /// Return `true` if `pos` is on the board and empty.
    #[inline]
    pub fn is_vacant(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.cells[pos.index(self.size)].is_none()
    }

    /// Put a stone for `side` on `pos`.
    ///
    /// Fails without touching the board if `pos` is off the board or occupied.
    pub fn apply(&mut self, pos: Pos, side: Side) -> Result<(), BoardError> {
        if !self.in_bounds(pos) {
            return Err(BoardError::OutOfBounds {
                pos,
                size: self.size,
            });
        }
        let cell = &mut self.cells[pos.index(self.size)];
        if cell.is_some() {
            return Err(BoardError::Occupied { pos });
        }
        *cell = Some(side);
        self.stones += 1;
        Ok(())
    }

    /// Clear the stone on `pos`.
    ///
    /// Callers must only undo cells they legally occupied; anything else is a
    /// bug and trips a debug assertion.
    pub fn undo(&mut self, pos: Pos) {
        debug_assert!(self.in_bounds(pos), "undo off the board at {pos}");
        let idx = pos.index(self.size);
        debug_assert!(self.cells[idx].is_some(), "undo on empty cell {pos}");
        if self.cells[idx].take().is_some() {
            self.stones -= 1;
        }
    }

    /// Place a stone for the lifetime of the returned guard.
    ///
    /// The guard dereferences to the board and clears the stone when dropped.
    pub fn place(&mut self, pos: Pos, side: Side) -> Result<PlacedStone<'_>, BoardError> {
        self.apply(pos, side)?;
        Ok(PlacedStone { board: self, pos })
    }

    /// Count consecutive `side` stones from `pos` (exclusive) along `(dr, dc)`.
    fn run_from(&self, pos: Pos, dr: isize, dc: isize, side: Side) -> usize {
        let mut count = 0;
        let mut step = 1;
        loop {
            let (r, c) = pos.offset(dr, dc, step);
            match self.at(r, c) {
                Some(Some(s)) if s == side => count += 1,
                _ => return count,
            }
            step += 1;
        }
    }

    /// Return `true` if a `side` stone on `pos` would sit in a line of at
    /// least [`WIN_LENGTH`], counting `pos` itself whatever it holds.
    fn completes_line(&self, pos: Pos, side: Side) -> bool {
        DIRECTIONS.iter().any(|&(dr, dc)| {
            1 + self.run_from(pos, dr, dc, side) + self.run_from(pos, -dr, -dc, side) >= WIN_LENGTH
        })
    }

    /// Return `true` if the stone on `pos` is part of a line of at least
    /// [`WIN_LENGTH`] same-side stones.
    ///
    /// Returns `false` for an empty or off-board cell.
    pub fn check_win(&self, pos: Pos) -> bool {
        match self.get(pos) {
            Some(side) => self.completes_line(pos, side),
            None => false,
        }
    }

    /// Return `true` if playing `side` on the empty cell `pos` would win.
    ///
    /// Returns `false` if `pos` is occupied or off the board.
    pub fn would_win(&self, pos: Pos, side: Side) -> bool {
        self.is_vacant(pos) && self.completes_line(pos, side)
    }

    /// Return `true` if `side` has a completed line anywhere on the board.
    pub fn has_five(&self, side: Side) -> bool {
        self.stones().any(|(pos, s)| s == side && self.check_win(pos))
    }

    /// Return `true` if no empty cell remains.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// Return `true` if no stone has been placed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stones == 0
    }

    /// Number of stones on the board.
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// Iterate over occupied cells in row-major order.
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Side)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|side| (Pos::new((idx / size) as u8, (idx % size) as u8), side))
        })
    }

    /// Iterate over empty cells in row-major order.
    pub fn vacancies(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(idx, _)| Pos::new((idx / size) as u8, (idx % size) as u8))
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.to_notation())
    }
}

/// A stone placed for a bounded scope. Dropping it clears the cell.
pub struct PlacedStone<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl PlacedStone<'_> {
    /// Where the stone sits.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for PlacedStone<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for PlacedStone<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PlacedStone<'_> {
    fn drop(&mut self) {
        self.board.undo(self.pos);
    }
}

/// Wrapper for pretty-printing a board as a grid with row and column indices.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        write!(f, "  ")?;
        for col in 0..board.size() {
            write!(f, "{:>3}", col)?;
        }
        for row in 0..board.size() {
            writeln!(f)?;
            write!(f, "{:>2}", row)?;
            for col in 0..board.size() {
                let c = match board.get(Pos::new(row as u8, col as u8)) {
                    Some(side) => side.symbol(),
                    None => '.',
                };
                write!(f, "{:>3}", c)?;
            }
        }
        Ok(())
    }
}
