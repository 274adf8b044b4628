//! Per-category diversity cap over a ranked candidate list.

use hunt_core::types::CatalogSnapshot;
use std::collections::HashMap;

/// Walk a best-first ranking and keep the longest subsequence with at
/// most `cap` items per category. Greedy, single pass: an id skipped at
/// the cap is never reconsidered, even if accepting it later would
/// improve overall diversity. Accepted ids keep their input order. Ids
/// missing from the catalog are dropped.
pub fn cap_by_category(ranked: &[String], catalog: &CatalogSnapshot, cap: usize) -> Vec<String> {
    if cap == 0 {
        return Vec::new();
    }

    let mut taken: HashMap<&str, usize> = HashMap::new();
    let mut kept = Vec::new();
    for id in ranked {
        let item = match catalog.get(id) {
            Some(item) => item,
            None => continue,
        };
        let count = taken.entry(item.category.as_str()).or_insert(0);
        if *count < cap {
            *count += 1;
            kept.push(id.clone());
        }
    }
    kept
}
