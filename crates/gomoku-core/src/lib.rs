//! Core Gomoku types: board representation, candidate generation, and win detection.

mod board;
mod error;
mod movegen;
mod notation;
mod pos;
mod side;

pub use board::{Board, DIRECTIONS, MAX_BOARD_SIZE, PlacedStone, PrettyBoard, WIN_LENGTH};
pub use error::{BoardError, NotationError};
pub use movegen::{DEFAULT_RADIUS, MoveList, generate_candidates};
pub use pos::Pos;
pub use side::Side;
