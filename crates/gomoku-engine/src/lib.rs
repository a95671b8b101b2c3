//! Pattern evaluation and minimax search for the Gomoku engine.

pub mod config;
pub mod error;
pub mod eval;
pub mod search;

pub use config::{EngineConfig, EvalConfig, Strategy};
pub use error::{ConfigError, SearchError};
pub use eval::{WIN_SCORE, evaluate};
pub use search::random::random_move;
pub use search::tactics::tactical_move;
pub use search::{SearchResult, Searcher};
