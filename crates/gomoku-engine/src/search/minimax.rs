//! Fixed-depth minimax with alpha-beta pruning.

use gomoku_core::{Board, Pos, Side, generate_candidates};

use crate::config::EngineConfig;
use crate::eval::{WIN_SCORE, evaluate};

/// Score outside every reachable result, used as the initial window.
pub const INF: i32 = WIN_SCORE + 1;

/// Mutable state threaded through one search.
pub(super) struct SearchContext<'a> {
    /// Total nodes visited.
    pub nodes: u64,
    /// Engine settings for this search.
    pub config: &'a EngineConfig,
}

/// Minimax search with alpha-beta pruning.
///
/// Scores are always from `side`'s point of view; `maximizing` tells whether
/// `side` is the one to move at this node. Returns the node score and the
/// move that achieves it, or `None` at a leaf or when nothing can be played.
///
/// A candidate that completes five ends the node at once with `±WIN_SCORE`.
/// Ties keep the first move found. The board is restored before returning.
pub(super) fn minimax(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    side: Side,
    ctx: &mut SearchContext<'_>,
) -> (i32, Option<Pos>) {
    ctx.nodes += 1;

    if depth == 0 {
        return (evaluate(board, side, &ctx.config.eval), None);
    }

    let mover = if maximizing { side } else { !side };
    let moves = generate_candidates(board, ctx.config.radius);

    let mut best_score = if maximizing { -INF } else { INF };
    let mut best_move = None;

    for &mv in &moves {
        let Ok(mut child) = board.place(mv, mover) else {
            continue;
        };

        if child.check_win(mv) {
            let score = if maximizing { WIN_SCORE } else { -WIN_SCORE };
            return (score, Some(mv));
        }

        let (score, _) = minimax(&mut child, depth - 1, alpha, beta, !maximizing, side, ctx);
        drop(child);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            break;
        }
    }

    match best_move {
        Some(_) => (best_score, best_move),
        // Nothing playable: score the position as it stands.
        None => (evaluate(board, side, &ctx.config.eval), None),
    }
}
