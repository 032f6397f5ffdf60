//! Game settings read from a TOML file and overridden by command-line flags.
//!
//! ```toml
//! rows = 3
//! cols = 3
//! first = "human"
//! think_ms = 20000
//! max_depth = 12
//! engine = "alphabeta"
//! ```

use anyhow::{Context, Result};
use clap::ValueEnum;
use dots_core::SearchLimits;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Who draws the first edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Computer,
    Human,
}

impl FirstPlayer {
    /// Lenient form used at the interactive prompt.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "c" | "computer" | "1" => Some(FirstPlayer::Computer),
            "h" | "human" | "2" => Some(FirstPlayer::Human),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Board height in cells; prompted for when missing
    pub rows: Option<usize>,
    /// Board width in cells; prompted for when missing
    pub cols: Option<usize>,
    /// Prompted for when missing
    pub first: Option<FirstPlayer>,
    /// Computer thinking time per move in milliseconds, 0 for no limit
    pub think_ms: u64,
    pub max_depth: Option<u32>,
    /// Engine playing the computer side
    pub engine: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: None,
            cols: None,
            first: None,
            think_ms: 20_000,
            max_depth: None,
            engine: "alphabeta".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid game config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn search_limits(&self) -> SearchLimits {
        search_limits(self.think_ms, self.max_depth)
    }
}

/// Limits for a per-move budget in milliseconds (0 = none) and an optional
/// depth cap.
pub fn search_limits(think_ms: u64, max_depth: Option<u32>) -> SearchLimits {
    let time = (think_ms > 0).then(|| Duration::from_millis(think_ms));
    match (max_depth, time) {
        (Some(depth), Some(time)) => SearchLimits::depth_and_time(depth, time),
        (Some(depth), None) => SearchLimits::depth(depth),
        (None, Some(time)) => SearchLimits::time(time),
        (None, None) => SearchLimits::unlimited(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
