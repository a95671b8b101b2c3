//! Engine errors.

/// Reasons a search cannot produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// No empty cell is left to play.
    #[error("no move available")]
    NoMove,
    /// A depth of zero only evaluates the position and never yields a move.
    #[error("search depth must be at least 1")]
    ZeroDepth,
}

/// Rejected engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Opponent patterns must be weighted strictly below own patterns.
    #[error("defense weight {percent}% must be below 100%")]
    DefenseWeightTooHigh {
        /// The rejected percentage.
        percent: u8,
    },
    /// A zero candidate radius would leave nothing to search on a non-empty board.
    #[error("candidate radius must be at least 1")]
    ZeroRadius,
    /// The default search depth must be at least one ply.
    #[error("default search depth must be at least 1")]
    ZeroDepth,
    /// A full board of five-patterns could reach the terminal win score.
    #[error("five weight {five} lets positional scores reach the win score")]
    WeightsExceedWinScore {
        /// The rejected five-in-a-row weight.
        five: i32,
    },
    /// Shape weights must not increase from stronger to weaker shapes.
    #[error("weight for {weaker} exceeds weight for {stronger}")]
    UnorderedWeights {
        /// Name of the stronger shape.
        stronger: &'static str,
        /// Name of the weaker shape with the larger weight.
        weaker: &'static str,
    },
    /// The strategy name is not recognized.
    #[error("unknown strategy '{name}' (expected minimax, tactical or random)")]
    UnknownStrategy {
        /// The rejected name.
        name: String,
    },
}
