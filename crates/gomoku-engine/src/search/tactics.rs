//! One-ply tactical move selection.

use gomoku_core::{Board, Pos, Side, generate_candidates};

/// Return a cell that wins immediately for `side`, else a cell that stops an
/// immediate win by the opponent, else `None`.
///
/// Candidates are scanned in row-major order and the first hit is returned.
pub fn tactical_move(board: &Board, side: Side, radius: u8) -> Option<Pos> {
    let candidates = generate_candidates(board, radius);
    let find = |mover: Side| {
        candidates
            .iter()
            .copied()
            .find(|&pos| board.would_win(pos, mover))
    };
    find(side).or_else(|| find(!side))
}
