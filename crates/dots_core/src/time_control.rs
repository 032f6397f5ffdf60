//! Time control and search limits for engines.
//!
//! This module provides shared time management functionality that can be used
//! by any engine implementation to respect a wall-clock deadline during search.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Search limits that control when an engine should stop searching.
///
/// Iterative deepening keeps raising the depth limit until the game tree is
/// solved, `max_depth` is reached or time runs out. The time limit takes
/// precedence: once it expires the engine must return the best move found so
/// far.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Highest depth limit to try (None = until solved)
    pub max_depth: Option<u32>,
    /// Maximum time allowed for this move (None = infinite)
    pub move_time: Option<Duration>,
    /// Time controller for checking if search should stop
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// No depth cap and no deadline: search until the game is solved.
    pub fn unlimited() -> Self {
        Self {
            max_depth: None,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Create limits with only depth constraint (no time limit).
    pub fn depth(max_depth: u32) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Self::unlimited()
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(max_depth: u32, move_time: Duration) -> Self {
        Self {
            max_depth: Some(max_depth),
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Create limits with only time constraint (infinite depth).
    pub fn time(move_time: Duration) -> Self {
        Self {
            max_depth: None,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Check if search should stop due to time limit.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Start the time control clock. Call this when search begins.
    pub fn start(&mut self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::time(Duration::from_secs(20))
    }
}

/// Time controller that tracks whether search should stop.
///
/// The stop flag is shared between clones, so another thread may call
/// [`TimeControl::stop`] on a clone while the search runs. The
/// `is_stopped()` check is a relaxed atomic load and can be called on every
/// node.
#[derive(Debug, Clone)]
pub struct TimeControl {
    /// Shared stop flag
    stopped: Arc<AtomicBool>,
    /// Start time of the search
    start_time: Instant,
    /// Time limit for this search (None = infinite)
    time_limit: Option<Duration>,
    /// How often to check the clock (in nodes).
    check_interval: u64,
    /// Node budget for the whole search (None = unlimited)
    max_nodes: Option<u64>,
}

impl TimeControl {
    /// Create a new time controller. The clock starts immediately and is
    /// restarted by [`TimeControl::start`].
    ///
    /// # Arguments
    /// * `time_limit` - Maximum time allowed for search (None = infinite)
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Instant::now(),
            time_limit,
            check_interval: 256,
            max_nodes: None,
        }
    }

    /// Read the clock every `interval` nodes instead of the default.
    pub fn with_check_interval(mut self, interval: u64) -> Self {
        self.check_interval = interval.max(1);
        self
    }

    /// Stop once the search has entered `max_nodes` nodes.
    pub fn with_node_limit(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// True once `nodes` has reached the node budget; raises the stop flag.
    #[inline]
    pub fn check_nodes(&self, nodes: u64) -> bool {
        if let Some(max) = self.max_nodes
            && nodes >= max
        {
            self.stop();
            return true;
        }
        false
    }

    /// Start the clock. Should be called when search begins.
    pub fn start(&mut self) {
        self.start_time = Instant::now();
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force stop the search immediately.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Check if search should stop.
    ///
    /// This is a fast atomic load, suitable for calling frequently.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Check time and update stopped flag if time expired.
    ///
    /// This does the actual clock check. Call this periodically (e.g., every N nodes)
    /// rather than on every node to avoid performance overhead.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(limit) = self.time_limit
            && self.start_time.elapsed() >= limit
        {
            self.stop();
            return true;
        }

        false
    }

    /// Check if it's time to check the clock based on node count.
    ///
    /// Returns true every `check_interval` nodes.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes.is_multiple_of(self.check_interval)
    }

    /// Get elapsed time since search started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Wall-clock instant after which the search must stop.
    pub fn deadline(&self) -> Option<Instant> {
        self.time_limit.map(|limit| self.start_time + limit)
    }

    /// Get remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
