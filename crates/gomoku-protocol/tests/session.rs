//! Full request/response sessions through [`Server::run`].

use std::io::Cursor;

use gomoku_core::{Board, Pos, Side};
use gomoku_engine::{EngineConfig, Searcher, Strategy};
use gomoku_protocol::{MAX_REQUEST_DEPTH, MoveRequest, Response, Server, Status};

fn request(board: &Board, player: &str, depth: Option<u8>) -> String {
    let rows = (0..board.size())
        .map(|r| {
            (0..board.size())
                .map(|c| match board.get(Pos::new(r as u8, c as u8)) {
                    Some(side) => side.symbol().to_string(),
                    None => ".".to_string(),
                })
                .collect()
        })
        .collect();
    serde_json::to_string(&MoveRequest {
        kind: "request_move".to_string(),
        board: rows,
        player: player.to_string(),
        depth,
    })
    .unwrap()
}

fn serve(server: &Server, lines: &[String]) -> Vec<Response> {
    let input = Cursor::new(lines.join("\n"));
    let mut output = Vec::new();
    server.run(input, &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn full_board() -> Board {
    let mut board = Board::new(6).unwrap();
    for row in 0..6u8 {
        for col in 0..6u8 {
            let side = if (col / 2 + row) % 2 == 0 { Side::X } else { Side::O };
            board.apply(Pos::new(row, col), side).unwrap();
        }
    }
    board
}

#[test]
fn plays_a_short_game() {
    let server = Server::default();
    let mut board = Board::new(9).unwrap();
    let mut side = Side::X;

    for _ in 0..6 {
        let line = request(&board, &side.to_string(), Some(1));
        let responses = serve(&server, &[line]);
        assert_eq!(responses.len(), 1);
        let pos = responses[0].pos().expect("a move");
        assert!(board.is_vacant(pos), "{pos} already taken");
        board.apply(pos, side).unwrap();
        side = !side;
    }
    assert_eq!(board.stone_count(), 6);
}

#[test]
fn errors_do_not_stop_the_session() {
    let server = Server::default();
    let empty = Board::new(9).unwrap();
    let lines = vec![
        request(&empty, "X", Some(1)),
        request(&empty, "Q", Some(1)),
        request(&full_board(), "O", Some(1)),
        "[1, 2, 3]".to_string(),
        request(&empty, "O", Some(1)),
    ];

    let responses = serve(&server, &lines);
    let statuses: Vec<Status> = responses.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        [
            Status::Success,
            Status::Error,
            Status::Error,
            Status::Error,
            Status::Success,
        ]
    );
    assert_eq!(
        responses[2].message.as_deref(),
        Some("search failed: no move available")
    );
    assert!(responses.iter().all(|r| r.kind == "response_move"));
}

#[test]
fn oversized_depth_is_refused_and_the_session_continues() {
    let server = Server::default();
    let empty = Board::new(9).unwrap();
    let lines = vec![
        request(&empty, "X", Some(50)),
        request(&empty, "X", Some(MAX_REQUEST_DEPTH + 1)),
        request(&empty, "X", Some(1)),
    ];

    let responses = serve(&server, &lines);
    assert_eq!(responses.len(), 3);
    assert_eq!(
        responses[0].message.as_deref(),
        Some("depth 50 exceeds the maximum of 6")
    );
    assert_eq!(responses[1].status, Status::Error);
    assert!(responses[2].pos().is_some());
}

#[test]
fn random_server_plays_empty_cells() {
    let config = EngineConfig {
        strategy: Strategy::Random,
        ..EngineConfig::default()
    };
    let server = Server::new(Searcher::new(config).unwrap());
    let mut board = Board::new(6).unwrap();
    let mut side = Side::X;
    for _ in 0..10 {
        let responses = serve(&server, &[request(&board, &side.to_string(), None)]);
        let pos = responses[0].pos().expect("a move");
        assert!(board.is_vacant(pos), "{pos} already taken");
        board.apply(pos, side).unwrap();
        side = !side;
    }

    let responses = serve(&server, &[request(&full_board(), "X", None)]);
    assert_eq!(
        responses[0].message.as_deref(),
        Some("search failed: no move available")
    );
}

#[test]
fn tactical_server_blocks() {
    let config = EngineConfig {
        strategy: Strategy::Tactical,
        ..EngineConfig::default()
    };
    let server = Server::new(Searcher::new(config).unwrap());
    let board: Board = "
        ........
        ........
        ..OOOO..
        ........
        ...X....
        ....X...
        ........
        ........"
        .parse()
        .unwrap();
    let responses = serve(&server, &[request(&board, "X", None)]);
    let pos = responses[0].pos().expect("a move");
    assert!(pos == Pos::new(2, 1) || pos == Pos::new(2, 6), "unexpected {pos}");
}

#[test]
fn empty_input_produces_no_output() {
    let mut output = Vec::new();
    Server::default().run(Cursor::new(""), &mut output).unwrap();
    assert!(output.is_empty());
}
