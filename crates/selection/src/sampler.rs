//! Weighted random sampling without replacement for promotional items.

use hunt_core::types::PopularitySnapshot;
use rand::Rng;

/// Draw weight for a promo item: its store-wide purchase count with a
/// floor of 1 so unpurchased items stay drawable.
fn draw_weight(popularity: &PopularitySnapshot, item_id: &str) -> f64 {
    popularity.count(item_id).max(1) as f64
}

/// Draw up to `k` distinct ids from `pool` without replacement, with
/// draw probability at each step proportional to the remaining items'
/// renormalized weights.
///
/// Each round normalizes the remaining weights to probabilities, draws
/// `r` in [0,1), and walks the pool accumulating probabilities until
/// the sum reaches `r`; if floating-point drift leaves the walk short,
/// the last remaining item is taken. Iterative rather than
/// reservoir-based, since pools here are catalog-scale. Stops early if
/// the pool empties, returning fewer than `k` ids.
pub fn sample_weighted<R: Rng>(
    pool: &[String],
    popularity: &PopularitySnapshot,
    k: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut remaining: Vec<(String, f64)> = pool
        .iter()
        .map(|id| (id.clone(), draw_weight(popularity, id)))
        .collect();

    let mut drawn = Vec::with_capacity(k.min(remaining.len()));
    while drawn.len() < k && !remaining.is_empty() {
        let total: f64 = remaining.iter().map(|(_, weight)| weight).sum();
        let r: f64 = rng.gen();

        let mut selected = remaining.len() - 1;
        let mut cumulative = 0.0;
        for (i, (_, weight)) in remaining.iter().enumerate() {
            cumulative += weight / total;
            if cumulative >= r {
                selected = i;
                break;
            }
        }
        drawn.push(remaining.remove(selected).0);
    }
    drawn
}
