//! Store-wide popularity aggregation. Purchase quantities accumulate in
//! a concurrent map; selections only ever consume immutable snapshots
//! published from it.

use dashmap::DashMap;
use hunt_core::types::{PopularitySnapshot, PurchaseEvent};
use std::collections::HashMap;
use tracing::debug;

/// Running per-item purchase counts. Increments are cheap and safe from
/// concurrent writers; readers get a consistent view only through
/// [`PopularityTracker::snapshot`], never the live map.
pub struct PopularityTracker {
    counts: DashMap<String, u64>,
}

impl PopularityTracker {
    pub fn new() -> Self {
        Self {
            counts: DashMap::new(),
        }
    }

    /// Fold one purchase into the running counts.
    pub fn record_purchase(&self, event: &PurchaseEvent) {
        let quantity = u64::from(event.quantity);
        self.counts
            .entry(event.item_id.clone())
            .and_modify(|count| *count += quantity)
            .or_insert(quantity);
    }

    /// Publish an immutable snapshot of the current counts. In-flight
    /// selections keep the snapshot they were handed; increments that
    /// land afterwards only show up in later snapshots.
    pub fn snapshot(&self) -> PopularitySnapshot {
        let counts: HashMap<String, u64> = self
            .counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        debug!(items = counts.len(), "Popularity snapshot published");
        PopularitySnapshot::from_counts(counts)
    }

    pub fn tracked_items(&self) -> usize {
        self.counts.len()
    }
}

impl Default for PopularityTracker {
    fn default() -> Self {
        Self::new()
    }
}
