//! Shared cumulative scoring state.
//!
//! The original model kept a process-wide mutable total behind the player
//! type. Here that state is an explicit handle: whoever constructs players
//! decides which tally they credit, and nothing mutates hidden globals.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

/// Cumulative points across every fully-signed player.
///
/// Cloning the handle shares the underlying counter: all clones observe and
/// update the same total. Credits are atomic adds, so full signings from
/// several threads cannot lose updates.
#[derive(Debug, Clone, Default)]
pub struct PointsTally {
    total: Arc<AtomicU64>,
}

impl PointsTally {
    /// Fresh tally starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cumulative total.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::SeqCst)
    }

    /// Adds `points` and returns the updated total.
    pub fn credit(&self, points: u32) -> u64 {
        let updated =
            self.total.fetch_add(u64::from(points), Ordering::SeqCst) + u64::from(points);
        debug!(points, total = updated, "credited points tally");
        updated
    }

    /// Overwrites the total, for external adjustment.
    ///
    /// Normal operation never decrements or resets; this is the one
    /// explicit overwrite path.
    pub fn set_total(&self, value: u64) {
        self.total.store(value, Ordering::SeqCst);
    }
}
