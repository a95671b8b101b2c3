//! Protocol errors.

use gomoku_core::NotationError;
use gomoku_engine::SearchError;

/// Errors that can occur while handling a move request.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The line is not valid JSON or lacks a required field.
    #[error("malformed request: {source}")]
    Json {
        /// The underlying parse error.
        #[from]
        source: serde_json::Error,
    },

    /// The `type` field is not `request_move`.
    #[error("unexpected message type: {kind}")]
    UnexpectedType {
        /// The type that was sent.
        kind: String,
    },

    /// The `player` field is neither `X` nor `O`.
    #[error("invalid player: {player}")]
    InvalidPlayer {
        /// The rejected player string.
        player: String,
    },

    /// A board cell is not `.`, `X` or `O`.
    #[error("invalid cell '{symbol}' at row {row}, column {col}")]
    InvalidCell {
        /// The rejected cell string.
        symbol: String,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },

    /// The requested depth exceeds [`MAX_REQUEST_DEPTH`](crate::message::MAX_REQUEST_DEPTH).
    #[error("depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge {
        /// The requested depth.
        depth: u8,
        /// The largest depth a request may ask for.
        max: u8,
    },

    /// The grid does not form a valid board.
    #[error("invalid board: {source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: NotationError,
    },

    /// The engine could not produce a move.
    #[error("search failed: {source}")]
    Search {
        /// The underlying search error.
        #[from]
        source: SearchError,
    },

    /// Reading a request or writing a response failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
