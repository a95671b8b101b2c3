//! Candidate move generation.
//!
//! Search breadth is limited to empty cells near existing stones. Cells far
//! from every stone are dropped outright rather than ordered last.

use crate::board::Board;
use crate::pos::Pos;

/// Default Chebyshev distance from an existing stone for a cell to be a candidate.
pub const DEFAULT_RADIUS: u8 = 2;

/// Half-width of the opening neighborhood around the center on an empty board.
const OPENING_RADIUS: isize = 2;

/// Ordered list of candidate cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Pos>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList { moves: Vec::new() }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, pos: Pos) {
        self.moves.push(pos);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return `true` if `pos` is in the list.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.moves.contains(&pos)
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Pos] {
        &self.moves
    }

    /// Iterate over the moves in generation order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Pos> {
        self.moves.iter()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Pos;
    #[inline]
    fn index(&self, index: usize) -> &Pos {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Pos;
    type IntoIter = std::slice::Iter<'a, Pos>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Generate the cells worth searching, in row-major order.
///
/// - Empty board: the cells within 2 of the center.
/// - Otherwise: every empty cell with a stone within Chebyshev distance `radius`.
/// - If that leaves nothing, the center cell if it is still empty.
pub fn generate_candidates(board: &Board, radius: u8) -> MoveList {
    let mut list = MoveList::new();

    if board.is_empty() {
        let center = board.center();
        for dr in -OPENING_RADIUS..=OPENING_RADIUS {
            for dc in -OPENING_RADIUS..=OPENING_RADIUS {
                let (r, c) = center.offset(dr, dc, 1);
                if board.contains(r, c) {
                    list.push(Pos::new(r as u8, c as u8));
                }
            }
        }
        return list;
    }

    for pos in board.vacancies() {
        if has_neighbor(board, pos, radius) {
            list.push(pos);
        }
    }

    if list.is_empty() && board.is_vacant(board.center()) {
        list.push(board.center());
    }

    list
}

/// Return `true` if any stone lies within Chebyshev distance `radius` of `pos`.
fn has_neighbor(board: &Board, pos: Pos, radius: u8) -> bool {
    let radius = radius as isize;
    for dr in -radius..=radius {
        for dc in -radius..=radius {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (r, c) = pos.offset(dr, dc, 1);
            if let Some(Some(_)) = board.at(r, c) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_RADIUS, generate_candidates};
    use crate::board::Board;
    use crate::pos::Pos;
    use crate::side::Side;

    #[test]
    fn empty_board_uses_center_neighborhood() {
        let board = Board::new(9).unwrap();
        let moves = generate_candidates(&board, DEFAULT_RADIUS);
        assert_eq!(moves.len(), 25);
        for pos in &moves {
            assert!(pos.chebyshev(Pos::new(4, 4)) <= 2, "{pos} too far from center");
        }
    }

    #[test]
    fn empty_board_neighborhood_is_row_major() {
        let board = Board::new(15).unwrap();
        let moves = generate_candidates(&board, DEFAULT_RADIUS);
        assert_eq!(moves[0], Pos::new(5, 5));
        assert_eq!(moves[24], Pos::new(9, 9));
        assert!(moves.as_slice().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn single_stone_radius_one() {
        let mut board = Board::new(9).unwrap();
        board.apply(Pos::new(4, 4), Side::X).unwrap();
        let moves = generate_candidates(&board, 1);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(Pos::new(4, 4)));
        assert!(moves.contains(Pos::new(3, 3)));
        assert!(moves.contains(Pos::new(5, 5)));
        assert!(!moves.contains(Pos::new(2, 2)));
    }

    #[test]
    fn single_stone_radius_two() {
        let mut board = Board::new(9).unwrap();
        board.apply(Pos::new(4, 4), Side::X).unwrap();
        let moves = generate_candidates(&board, 2);
        assert_eq!(moves.len(), 24);
        assert!(moves.contains(Pos::new(2, 2)));
        assert!(!moves.contains(Pos::new(1, 1)));
    }

    #[test]
    fn corner_stone_is_clipped() {
        let mut board = Board::new(9).unwrap();
        board.apply(Pos::new(0, 0), Side::O).unwrap();
        let moves = generate_candidates(&board, 2);
        // 3x3 block minus the stone itself.
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn candidates_are_empty_cells() {
        let board: Board = "
            .........
            .........
            ...XO....
            ...OX....
            .....X...
            .........
            .........
            .........
            ........."
            .parse()
            .unwrap();
        let moves = generate_candidates(&board, DEFAULT_RADIUS);
        assert!(!moves.is_empty());
        for pos in &moves {
            assert!(board.is_vacant(*pos));
        }
    }

    #[test]
    fn full_board_has_no_candidates() {
        let mut board = Board::new(6).unwrap();
        let cells: Vec<Pos> = board.vacancies().collect();
        for (i, pos) in cells.into_iter().enumerate() {
            let side = if i % 2 == 0 { Side::X } else { Side::O };
            board.apply(pos, side).unwrap();
        }
        assert!(generate_candidates(&board, DEFAULT_RADIUS).is_empty());
    }

    #[test]
    fn last_empty_cell_is_found() {
        let mut board = Board::new(6).unwrap();
        let cells: Vec<Pos> = board.vacancies().collect();
        for (i, pos) in cells.into_iter().enumerate() {
            if pos == Pos::new(0, 5) {
                continue;
            }
            let side = if i % 2 == 0 { Side::X } else { Side::O };
            board.apply(pos, side).unwrap();
        }
        let moves = generate_candidates(&board, 1);
        assert_eq!(moves.as_slice(), &[Pos::new(0, 5)]);
    }
}
