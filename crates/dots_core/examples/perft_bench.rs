//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p dots_core -- [depth] [rows] [cols]
//!
//! Examples:
//!   # Default: depth 5 over the standard board sizes
//!   cargo flamegraph --example perft_bench -p dots_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p dots_core -- 6
//!
//!   # Custom depth and board
//!   cargo flamegraph --example perft_bench -p dots_core -- 5 4 4

use dots_core::{Board, Player, perft};
use std::env;
use std::time::Instant;

/// Board sizes for comprehensive profiling
const TEST_BOARDS: &[(&str, usize, usize)] = &[
    ("2x2", 2, 2),
    ("3x3", 3, 3),
    ("3x5", 3, 5),
    ("4x4", 4, 4),
    ("5x5", 5, 5),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);

    // If a board size is provided, use single board mode
    let rows = args.get(2).and_then(|s| s.parse().ok());
    let cols = args.get(3).and_then(|s| s.parse().ok());
    if let (Some(rows), Some(cols)) = (rows, cols) {
        run_single_board(rows, cols, depth);
    } else {
        run_all_boards(depth);
    }
}

fn run_single_board(rows: usize, cols: usize, depth: u8) {
    let mut board = match Board::new(rows, cols) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    println!("Board: {rows}x{cols}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&mut board, Player::A, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let nodes = perft(&mut board, Player::A, depth);
    let elapsed = start.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
}

fn run_all_boards(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for &(name, rows, cols) in TEST_BOARDS {
        let Ok(mut board) = Board::new(rows, cols) else {
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&mut board, Player::A, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
