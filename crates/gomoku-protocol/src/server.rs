//! Request/response loop over line-oriented streams.

use std::io::{BufRead, Write};

use gomoku_engine::Searcher;
use tracing::{debug, info, warn};

use crate::error::ProtocolError;
use crate::message::{Response, parse_request};

/// Serves move requests with a single [`Searcher`].
///
/// Requests are handled strictly one at a time; a bad request gets an error
/// response and the loop keeps going.
#[derive(Debug, Clone, Default)]
pub struct Server {
    searcher: Searcher,
}

impl Server {
    /// Create a server around a configured searcher.
    pub fn new(searcher: Searcher) -> Server {
        Server { searcher }
    }

    /// The searcher answering requests.
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Answer one request line.
    pub fn handle_line(&self, line: &str) -> Response {
        match self.try_handle(line) {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "rejected request");
                Response::from(&err)
            }
        }
    }

    fn try_handle(&self, line: &str) -> Result<Response, ProtocolError> {
        let request = parse_request(line)?;
        debug!(
            side = %request.side,
            size = request.board.size(),
            stones = request.board.stone_count(),
            depth = ?request.depth,
            "move requested"
        );
        let pos = self
            .searcher
            .choose_move(&request.board, request.side, request.depth)?;
        debug!(%pos, "move chosen");
        Ok(Response::success(pos))
    }

    /// Read requests from `input` until it closes, writing one response line
    /// per request to `output`.
    ///
    /// Blank lines are skipped. Only I/O failures end the loop early.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<(), ProtocolError> {
        let mut served: u64 = 0;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let response = self.handle_line(trimmed);
            let text = serde_json::to_string(&response)?;
            writeln!(output, "{text}")?;
            output.flush()?;
            served += 1;
        }

        info!(served, "input closed");
        Ok(())
    }
}
