//! Request and response messages.
//!
//! Each message is one JSON object on one line:
//!
//! ```text
//! {"type":"request_move","board":[[".","X",...],...],"player":"O","depth":2}
//! {"type":"response_move","row":7,"col":8,"status":"success"}
//! ```

use gomoku_core::{Board, Pos, Side};
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// `type` of a move request.
pub const REQUEST_MOVE: &str = "request_move";

/// `type` of every response.
pub const RESPONSE_MOVE: &str = "response_move";

/// Largest depth a request may ask for. Searches have no timeout.
pub const MAX_REQUEST_DEPTH: u8 = 6;

/// A move request exactly as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Message type; must be [`REQUEST_MOVE`].
    #[serde(rename = "type")]
    pub kind: String,
    /// Rows of cells, each `"."`, `"X"` or `"O"`.
    pub board: Vec<Vec<String>>,
    /// Side to move, `"X"` or `"O"`.
    pub player: String,
    /// Search depth for this request only, at most [`MAX_REQUEST_DEPTH`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u8>,
}

/// A validated move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Position to search.
    pub board: Board,
    /// Side to move.
    pub side: Side,
    /// Depth override.
    pub depth: Option<u8>,
}

impl TryFrom<MoveRequest> for Request {
    type Error = ProtocolError;

    fn try_from(msg: MoveRequest) -> Result<Request, ProtocolError> {
        if msg.kind != REQUEST_MOVE {
            return Err(ProtocolError::UnexpectedType { kind: msg.kind });
        }
        let side = parse_side(&msg.player).ok_or(ProtocolError::InvalidPlayer {
            player: msg.player,
        })?;
        if let Some(depth) = msg.depth.filter(|&d| d > MAX_REQUEST_DEPTH) {
            return Err(ProtocolError::DepthTooLarge {
                depth,
                max: MAX_REQUEST_DEPTH,
            });
        }

        let mut rows = Vec::with_capacity(msg.board.len());
        for (r, row) in msg.board.iter().enumerate() {
            let mut cells = Vec::with_capacity(row.len());
            for (c, symbol) in row.iter().enumerate() {
                let cell = match symbol.as_str() {
                    "." => None,
                    other => Some(parse_side(other).ok_or_else(|| ProtocolError::InvalidCell {
                        symbol: symbol.clone(),
                        row: r,
                        col: c,
                    })?),
                };
                cells.push(cell);
            }
            rows.push(cells);
        }
        let board = Board::from_rows(&rows)?;

        Ok(Request {
            board,
            side,
            depth: msg.depth,
        })
    }
}

/// Strict wire spelling of a side: upper-case only.
fn parse_side(s: &str) -> Option<Side> {
    match s {
        "X" => Some(Side::X),
        "O" => Some(Side::O),
        _ => None,
    }
}

/// Parse and validate one request line.
pub fn parse_request(line: &str) -> Result<Request, ProtocolError> {
    let msg: MoveRequest = serde_json::from_str(line)?;
    Request::try_from(msg)
}

/// Outcome of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// A response line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Always [`RESPONSE_MOVE`].
    #[serde(rename = "type")]
    pub kind: String,
    /// Row of the chosen move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<u8>,
    /// Column of the chosen move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<u8>,
    /// Whether a move was produced.
    pub status: Status,
    /// Why the request failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Response {
    /// A successful reply carrying `pos`.
    pub fn success(pos: Pos) -> Response {
        Response {
            kind: RESPONSE_MOVE.to_string(),
            row: Some(pos.row),
            col: Some(pos.col),
            status: Status::Success,
            message: None,
        }
    }

    /// A failed reply carrying a human-readable reason.
    pub fn error(message: impl Into<String>) -> Response {
        Response {
            kind: RESPONSE_MOVE.to_string(),
            row: None,
            col: None,
            status: Status::Error,
            message: Some(message.into()),
        }
    }

    /// The move carried by a successful reply.
    pub fn pos(&self) -> Option<Pos> {
        match (self.status, self.row, self.col) {
            (Status::Success, Some(row), Some(col)) => Some(Pos::new(row, col)),
            _ => None,
        }
    }
}

impl From<&ProtocolError> for Response {
    fn from(err: &ProtocolError) -> Response {
        Response::error(err.to_string())
    }
}
