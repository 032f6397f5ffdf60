//! Match Runner for ML-dots
//!
//! This crate provides infrastructure for:
//! - Playing complete games between two engines on an N x M board
//! - Alternating which engine draws the first edge
//! - Generating text and JSON reports of the outcome
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta against the random baseline, 20 games on a 3x3 board
//! cargo run -p dots_cli -- match alphabeta random --games 20 --rows 3 --cols 3
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
