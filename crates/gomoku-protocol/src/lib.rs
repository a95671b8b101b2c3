//! Line-delimited JSON move protocol for the Gomoku engine.

pub mod error;
pub mod message;
pub mod server;

pub use error::ProtocolError;
pub use message::{MAX_REQUEST_DEPTH, MoveRequest, Request, Response, Status, parse_request};
pub use server::Server;
