//! Dots-and-boxes console
//!
//! - `dots play`: a human against an engine on an N x M board
//! - `dots match`: two engines against each other, with a text or JSON report

mod config;
mod engines;
mod game;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use match_runner::{MatchConfig, MatchReport, MatchRunner};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{FirstPlayer, GameConfig, search_limits};
use crate::engines::create_engine;
use crate::game::ConsoleGame;

#[derive(Parser)]
#[command(name = "dots")]
#[command(version, about = "Dots and boxes against an alpha-beta engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play(PlayArgs),

    /// Run a match between two engines
    Match(MatchArgs),
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Board height in cells (prompted for if not given)
    #[arg(long, short = 'r')]
    rows: Option<usize>,

    /// Board width in cells (prompted for if not given)
    #[arg(long, short = 'c')]
    cols: Option<usize>,

    /// Who draws the first edge (prompted for if not given)
    #[arg(long, value_enum)]
    first: Option<FirstPlayer>,

    /// Computer thinking time per move in milliseconds, 0 for no limit
    #[arg(long)]
    think_ms: Option<u64>,

    /// Cap on the iterative-deepening depth
    #[arg(long)]
    max_depth: Option<u32>,

    /// Computer engine: alphabeta (ab, minimax) or random
    #[arg(long)]
    engine: Option<String>,

    /// TOML file with default settings; flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// First engine
    engine1: String,

    /// Second engine
    engine2: String,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 10)]
    games: u32,

    #[arg(long, short = 'r', default_value_t = 3)]
    rows: usize,

    #[arg(long, short = 'c', default_value_t = 3)]
    cols: usize,

    /// Thinking time per move in milliseconds, 0 for no limit
    #[arg(long, default_value_t = 1000)]
    think_ms: u64,

    /// Cap on the iterative-deepening depth
    #[arg(long)]
    max_depth: Option<u32>,

    /// Let engine 1 move first in every game
    #[arg(long)]
    no_alternate: bool,

    /// Seed for random engines
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play(args),
        Commands::Match(args) => run_match(args),
    }
}

fn play(args: PlayArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    config.rows = args.rows.or(config.rows);
    config.cols = args.cols.or(config.cols);
    config.first = args.first.or(config.first);
    config.max_depth = args.max_depth.or(config.max_depth);
    if let Some(think_ms) = args.think_ms {
        config.think_ms = think_ms;
    }
    if let Some(engine) = args.engine {
        config.engine = engine;
    }

    let engine = create_engine(&config.engine, None)?;
    let stdin = io::stdin();
    let mut game = ConsoleGame::new(stdin.lock(), io::stdout(), engine, config);
    game.run()?;
    Ok(())
}

fn run_match(args: MatchArgs) -> Result<()> {
    let mut engine1 = create_engine(&args.engine1, args.seed)?;
    // Distinct streams when both sides are random.
    let mut engine2 = create_engine(&args.engine2, args.seed.map(|s| s.wrapping_add(1)))?;

    let limits = search_limits(args.think_ms, args.max_depth);
    let config = MatchConfig {
        games: args.games,
        rows: args.rows,
        cols: args.cols,
        time_per_move: limits.move_time,
        max_depth: limits.max_depth,
        alternate_first: !args.no_alternate,
        verbose: !args.json,
    };

    info!(
        engine1 = engine1.name(),
        engine2 = engine2.name(),
        games = config.games,
        "match started"
    );
    let runner = MatchRunner::new(config.clone());
    let result = runner
        .run_match(engine1.as_mut(), engine2.as_mut())
        .context("match aborted")?;

    let report = MatchReport::new(engine1.name(), engine2.name(), config, result);
    if args.json {
        println!("{}", report.to_json().context("failed to serialize report")?);
    } else {
        report.print_report();
    }
    Ok(())
}
