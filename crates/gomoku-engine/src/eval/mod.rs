//! Static evaluation by line-pattern scoring.
//!
//! Every stone contributes one pattern per direction. Own patterns add their
//! shape weight; opponent patterns subtract a configurable share of theirs,
//! so the evaluator leans toward attack.

pub mod pattern;
pub mod weights;

use gomoku_core::{Board, DIRECTIONS, Side};

use crate::config::EvalConfig;
use pattern::{classify, extract};

/// Score of a completed five found by search. Dominates every positional score.
pub const WIN_SCORE: i32 = 1_000_000_000;

/// Evaluate `board` from the point of view of `side`.
///
/// Positive scores favor `side`. The board is only read.
pub fn evaluate(board: &Board, side: Side, config: &EvalConfig) -> i32 {
    let mut own: i64 = 0;
    let mut theirs: i64 = 0;

    for (pos, occupant) in board.stones() {
        for dir in DIRECTIONS {
            let pattern = extract(board, pos, dir, occupant);
            let value = classify(&pattern).map_or(0, |shape| config.weights.score(shape)) as i64;
            if occupant == side {
                own += value;
            } else {
                theirs += value;
            }
        }
    }

    let score = own - theirs * config.defense_percent as i64 / 100;
    score.clamp(-(WIN_SCORE as i64) + 1, WIN_SCORE as i64 - 1) as i32
}
