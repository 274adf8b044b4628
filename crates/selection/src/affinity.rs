//! Purchase-recency affinity scoring with exponential time decay.

use chrono::{DateTime, Utc};
use hunt_core::types::PurchaseEvent;
use std::collections::HashMap;

/// Fallback half-life applied when the configured value is unusable.
pub const DEFAULT_HALF_LIFE_DAYS: f64 = 30.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Score a user's purchase history by recency-weighted frequency.
///
/// Each event contributes `quantity * exp(-ln(2) / half_life * age_days)`
/// to its item's score; repeated purchases of the same item add up.
/// Future-dated events simply weigh above their quantity. Scores are
/// comparable only within a single call; an empty history yields an
/// empty map, which callers must treat as "no signal" rather than an
/// error.
pub fn affinity_scores(
    events: &[PurchaseEvent],
    now: DateTime<Utc>,
    half_life_days: f64,
) -> HashMap<String, f64> {
    let half_life = if half_life_days.is_finite() && half_life_days > 0.0 {
        half_life_days
    } else {
        DEFAULT_HALF_LIFE_DAYS
    };
    let decay_rate = std::f64::consts::LN_2 / half_life;

    let mut scores: HashMap<String, f64> = HashMap::new();
    for event in events {
        let age_days = (now - event.purchased_at).num_milliseconds() as f64 / MILLIS_PER_DAY;
        let weight = event.quantity as f64 * (-decay_rate * age_days).exp();
        *scores.entry(event.item_id.clone()).or_insert(0.0) += weight;
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn event(item_id: &str, quantity: u32, days_ago: i64, now: DateTime<Utc>) -> PurchaseEvent {
        PurchaseEvent {
            user_id: "user-1".to_string(),
            item_id: item_id.to_string(),
            quantity,
            unit_price: 3.99,
            purchased_at: now - Duration::days(days_ago),
        }
    }

    #[test]
    fn test_empty_history_yields_empty_map() {
        let scores = affinity_scores(&[], Utc::now(), 30.0);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_fresh_purchase_scores_its_quantity() {
        let now = Utc::now();
        let scores = affinity_scores(&[event("milk", 3, 0, now)], now, 30.0);
        assert!((scores["milk"] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_half_life_halves_the_weight() {
        let now = Utc::now();
        let scores = affinity_scores(&[event("milk", 2, 30, now)], now, 30.0);
        assert!((scores["milk"] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_recency_bias_is_monotone() {
        let now = Utc::now();
        let mut previous = f64::INFINITY;
        for days_ago in [0, 7, 30, 120, 365] {
            let scores = affinity_scores(&[event("milk", 1, days_ago, now)], now, 30.0);
            let score = scores["milk"];
            assert!(score >= 0.0);
            assert!(score <= previous);
            previous = score;
        }
    }

    #[test]
    fn test_repeated_purchases_accumulate() {
        let now = Utc::now();
        let events = vec![event("milk", 1, 0, now), event("milk", 2, 0, now)];
        let scores = affinity_scores(&events, now, 30.0);
        assert!((scores["milk"] - 3.0).abs() < 1e-9);
        assert_eq!(scores.len(), 1);
    }

    #[test]
    fn test_future_timestamp_weighs_above_quantity() {
        let now = Utc::now();
        let scores = affinity_scores(&[event("milk", 1, -30, now)], now, 30.0);
        assert!(scores["milk"] > 1.0);
    }

    #[test]
    fn test_unusable_half_life_falls_back_to_default() {
        let now = Utc::now();
        let events = vec![event("milk", 1, 30, now)];
        let defaulted = affinity_scores(&events, now, DEFAULT_HALF_LIFE_DAYS);
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let scores = affinity_scores(&events, now, bad);
            assert!((scores["milk"] - defaulted["milk"]).abs() < 1e-12);
        }
    }
}
