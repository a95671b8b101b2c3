//! Uniform random move selection.

use gomoku_core::{Board, Pos};
use rand::Rng;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Pick an empty cell uniformly at random, or `None` on a full board.
pub fn random_move(board: &Board) -> Option<Pos> {
    random_move_with(board, &mut thread_rng())
}

/// [`random_move`] drawing from a caller-supplied generator.
pub fn random_move_with<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Pos> {
    let vacancies: Vec<Pos> = board.vacancies().collect();
    vacancies.choose(rng).copied()
}
