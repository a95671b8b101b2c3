use std::io;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use gomoku_core::{Board, DEFAULT_RADIUS, Side};
use gomoku_engine::config::DEFAULT_DEPTH;
use gomoku_engine::{EngineConfig, Searcher, Strategy};
use gomoku_protocol::Server;
use tracing::{Level, info};

/// Gomoku engine answering move requests as line-delimited JSON.
#[derive(Parser, Debug)]
#[command(name = "gomoku", version, about, long_about = None)]
struct Cli {
    /// Most verbose level written to stderr (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value_t = Level::INFO)]
    log_level: Level,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve move requests on stdin/stdout (the default).
    Serve(EngineArgs),
    /// Search one position and print the result.
    Analyze {
        /// Board rows separated by `/`, e.g. `....../..X.../...`.
        notation: String,
        /// Side to move.
        #[arg(long, value_parser = parse_side)]
        side: Side,
        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// Search depth in plies when a request does not name one.
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,
    /// Chebyshev distance from existing stones for candidate moves.
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    radius: u8,
    /// Move selection strategy (minimax, tactical or random).
    #[arg(long, default_value_t = Strategy::Minimax)]
    strategy: Strategy,
}

impl Default for EngineArgs {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            depth: config.depth,
            radius: config.radius,
            strategy: config.strategy,
        }
    }
}

impl EngineArgs {
    fn searcher(&self) -> Result<Searcher> {
        let config = EngineConfig {
            depth: self.depth,
            radius: self.radius,
            strategy: self.strategy,
            ..EngineConfig::default()
        };
        Searcher::new(config).context("invalid engine configuration")
    }
}

fn parse_side(s: &str) -> Result<Side, String> {
    let mut chars = s.chars();
    match (chars.next().and_then(Side::from_symbol), chars.next()) {
        (Some(side), None) => Ok(side),
        _ => Err(format!("expected X or O, got '{s}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "gomoku starting");

    match cli.command.unwrap_or_else(|| Command::Serve(EngineArgs::default())) {
        Command::Serve(args) => serve(&args)?,
        Command::Analyze {
            notation,
            side,
            engine,
        } => analyze(&notation, side, &engine)?,
    }

    info!("gomoku exiting");
    Ok(())
}

fn serve(args: &EngineArgs) -> Result<()> {
    let searcher = args.searcher()?;
    info!(
        depth = args.depth,
        radius = args.radius,
        strategy = %args.strategy,
        "serving move requests"
    );
    let server = Server::new(searcher);
    server
        .run(io::stdin().lock(), io::stdout().lock())
        .context("protocol loop failed")
}

fn analyze(notation: &str, side: Side, args: &EngineArgs) -> Result<()> {
    let mut board: Board = notation.parse().context("invalid board notation")?;
    let searcher = args.searcher()?;
    let result = searcher.search(&mut board, side, args.depth);

    println!("{}", board.pretty());
    println!();
    let Some(best) = result.best_move else {
        bail!("no move available for {side}");
    };
    println!("side:  {side}");
    println!("move:  {best}");
    println!("score: {}", result.score);
    println!("nodes: {}", result.nodes);
    println!("depth: {}", result.depth);
    Ok(())
}
