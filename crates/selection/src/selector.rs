//! Challenge item selection — composes affinity scoring, candidate
//! partitioning, diversity capping, and promotional sampling into one
//! pure, per-call computation over explicit snapshots.

use chrono::{DateTime, Utc};
use hunt_core::config::SelectionConfig;
use hunt_core::types::{CatalogItem, CatalogSnapshot, PopularitySnapshot, PurchaseEvent};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, info};
use uuid::Uuid;

use crate::affinity::affinity_scores;
use crate::diversity::cap_by_category;
use crate::partition::partition;
use crate::sampler::sample_weighted;

/// One selection request. Catalog, popularity, and history snapshots
/// are passed alongside the request so every call sees a consistent,
/// immutable view of the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub request_id: Uuid,
    pub user_id: String,
    pub item_count: usize,
    /// Categories eligible for the challenge; `None` opens the whole
    /// catalog.
    pub categories: Option<Vec<String>>,
    /// Reference timestamp for recency weighting.
    pub now: DateTime<Utc>,
}

/// Stateless selection engine holding only its tunables. Safe to share
/// across concurrent requests; the caller supplies a random source per
/// call.
pub struct SelectionEngine {
    config: SelectionConfig,
}

impl SelectionEngine {
    pub fn new(config: &SelectionConfig) -> Self {
        info!(
            half_life_days = config.half_life_days,
            promo_ratio = config.promo_ratio,
            category_cap = config.category_cap,
            "Selection engine initialized"
        );
        Self {
            config: config.clone(),
        }
    }

    /// Select challenge items for a user.
    ///
    /// Degenerate inputs (empty catalog, no promo items, no history)
    /// degrade to fewer results; this never errors. The returned order
    /// is shuffled and carries no ranking semantics.
    pub fn select<R: Rng>(
        &self,
        request: &SelectionRequest,
        catalog: &CatalogSnapshot,
        popularity: &PopularitySnapshot,
        history: &[PurchaseEvent],
        rng: &mut R,
    ) -> Vec<CatalogItem> {
        let count = request
            .item_count
            .max(self.config.min_items)
            .min(self.config.max_items);
        let promo_ratio = self.config.promo_ratio.clamp(0.0, 1.0);

        let themed = match &request.categories {
            Some(categories) => catalog.restrict_to(categories),
            None => catalog.clone(),
        };

        let pools = partition(&themed);

        let n_promo = ((count as f64 * promo_ratio).round() as usize).min(pools.promo.len());
        let n_regular = count.saturating_sub(n_promo);

        let ranked = self.rank_regular(&pools.regular, history, popularity, request.now, rng);
        let mut selected = cap_by_category(&ranked, &themed, self.config.category_cap);
        selected.truncate(n_regular);

        selected.extend(sample_weighted(&pools.promo, popularity, n_promo, rng));
        selected.truncate(count);
        // Final presentation shuffle so promo items are not always trailing.
        selected.shuffle(rng);

        debug!(
            request_id = %request.request_id,
            user_id = %request.user_id,
            themed_catalog = themed.len(),
            selected = selected.len(),
            "Challenge items selected"
        );

        selected
            .iter()
            .filter_map(|id| themed.get(id).cloned())
            .collect()
    }

    /// Rank the regular pool best-first: purchase affinity when the
    /// user has history (store popularity breaking ties), store
    /// popularity on cold start, and random order when neither signal
    /// exists. Each fallback engages only when the previous stage has
    /// nothing to say.
    fn rank_regular<R: Rng>(
        &self,
        pool: &[String],
        history: &[PurchaseEvent],
        popularity: &PopularitySnapshot,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<String> {
        let mut ranked = pool.to_vec();

        if !history.is_empty() {
            let scores = affinity_scores(history, now, self.config.half_life_days);
            ranked.sort_by(|a, b| {
                let score_a = scores.get(a).copied().unwrap_or(0.0);
                let score_b = scores.get(b).copied().unwrap_or(0.0);
                score_b
                    .partial_cmp(&score_a)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| popularity.count(b).cmp(&popularity.count(a)))
            });
        } else if pool.iter().any(|id| popularity.count(id) > 0) {
            ranked.sort_by(|a, b| popularity.count(b).cmp(&popularity.count(a)));
        } else {
            ranked.shuffle(rng);
        }

        ranked
    }
}
