//! Wait time estimate for the next walk-in party
//!
//! A step heuristic rather than a queueing model: once nobody can be seated
//! right away, the estimate climbs one tier per occupied table and stops at
//! the last tier.

use crate::floor::{ServerRoster, TableRegistry};
use std::time::Duration;
use tracing::debug;

/// Wait tiers in minutes, indexed by occupied tables minus one
pub const WAIT_TIERS_MINUTES: [u64; 7] = [10, 15, 20, 30, 45, 60, 90];

/// Trait for estimating how long a new party will wait
pub trait WaitTimeEstimator: Send + Sync {
    fn estimate(&self, registry: &TableRegistry, roster: &ServerRoster) -> Duration;
}

/// Estimator backed by [`WAIT_TIERS_MINUTES`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredWaitTimeEstimator;

impl TieredWaitTimeEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Tier for a given occupied-table count
    ///
    /// Zero occupied tables means seating is blocked by staffing alone, which
    /// maps to the last tier.
    pub fn tier_minutes(occupied: usize) -> u64 {
        let last = WAIT_TIERS_MINUTES.len() - 1;
        let index = occupied.checked_sub(1).map_or(last, |i| i.min(last));
        WAIT_TIERS_MINUTES[index]
    }
}

impl WaitTimeEstimator for TieredWaitTimeEstimator {
    fn estimate(&self, registry: &TableRegistry, roster: &ServerRoster) -> Duration {
        if registry.has_free_table() && roster.any_spare_capacity() {
            return Duration::ZERO;
        }

        let occupied = registry.occupied_count();
        let minutes = Self::tier_minutes(occupied);
        debug!(
            "Wait estimate {} minutes ({} tables occupied, {} servers)",
            minutes,
            occupied,
            roster.len()
        );
        Duration::from_secs(minutes * 60)
    }
}
