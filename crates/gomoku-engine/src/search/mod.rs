//! Move search.

pub mod minimax;
pub mod random;
pub mod tactics;

use std::time::Instant;

use gomoku_core::{Board, Pos, Side, generate_candidates};
use tracing::debug;

use crate::config::{EngineConfig, Strategy};
use crate::error::{ConfigError, SearchError};
use crate::eval::WIN_SCORE;
use minimax::{INF, SearchContext};
use random::random_move;
use tactics::tactical_move;

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, or `None` when nothing can be played.
    pub best_move: Option<Pos>,
    /// Score from the searching side's point of view.
    pub score: i32,
    /// Total nodes visited during the search.
    pub nodes: u64,
    /// Depth searched.
    pub depth: u8,
}

/// Fixed-depth alpha-beta searcher.
///
/// Holds only its configuration, so one searcher can serve any number of
/// boards and threads.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: EngineConfig,
}

impl Searcher {
    /// Create a searcher after validating `config`.
    pub fn new(config: EngineConfig) -> Result<Searcher, ConfigError> {
        config.validate()?;
        Ok(Searcher { config })
    }

    /// The configuration this searcher was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Search `board` to `depth` plies for `side`.
    ///
    /// The board is mutated during the search and restored before this
    /// returns. A depth of zero only evaluates the position.
    pub fn search(&self, board: &mut Board, side: Side, depth: u8) -> SearchResult {
        let start = Instant::now();

        // An immediate five is played without searching.
        if depth > 0 {
            let winning = generate_candidates(board, self.config.radius)
                .iter()
                .copied()
                .find(|&pos| board.would_win(pos, side));
            if let Some(pos) = winning {
                debug!(%side, depth, best_move = %pos, "immediate win");
                return SearchResult {
                    best_move: Some(pos),
                    score: WIN_SCORE,
                    nodes: 1,
                    depth,
                };
            }
        }

        let mut ctx = SearchContext {
            nodes: 0,
            config: &self.config,
        };

        let (score, best_move) = minimax::minimax(board, depth, -INF, INF, true, side, &mut ctx);

        debug!(
            %side,
            depth,
            nodes = ctx.nodes,
            score,
            best_move = ?best_move,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search finished"
        );

        SearchResult {
            best_move,
            score,
            nodes: ctx.nodes,
            depth,
        }
    }

    /// Return the best move for `side` at `depth`.
    ///
    /// Searches a private copy, so `board` is never touched.
    pub fn best_move(&self, board: &Board, side: Side, depth: u8) -> Result<Pos, SearchError> {
        if depth == 0 {
            return Err(SearchError::ZeroDepth);
        }
        let mut scratch = board.clone();
        self.search(&mut scratch, side, depth)
            .best_move
            .ok_or(SearchError::NoMove)
    }

    /// Pick a move with the configured [`Strategy`].
    ///
    /// `depth` overrides the configured default for minimax and is ignored
    /// by the other strategies.
    pub fn choose_move(
        &self,
        board: &Board,
        side: Side,
        depth: Option<u8>,
    ) -> Result<Pos, SearchError> {
        match self.config.strategy {
            Strategy::Minimax => self.best_move(board, side, depth.unwrap_or(self.config.depth)),
            Strategy::Tactical => tactical_move(board, side, self.config.radius)
                .or_else(|| random_move(board))
                .ok_or(SearchError::NoMove),
            Strategy::Random => random_move(board).ok_or(SearchError::NoMove),
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }
}
