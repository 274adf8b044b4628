//! Challenge assembly — resolves a theme, runs the selection engine,
//! and totals up the points for the issued challenge.

use chrono::Utc;
use hunt_core::config::{ChallengeConfig, SelectionConfig};
use hunt_core::error::{HuntError, HuntResult};
use hunt_core::types::{CatalogSnapshot, Challenge, PopularitySnapshot, PurchaseEvent};
use hunt_selection::{SelectionEngine, SelectionRequest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use uuid::Uuid;

use crate::templates::TemplateRegistry;

/// Builds personalized challenges. Stateless apart from its config and
/// the read-only template registry, so a single instance serves
/// concurrent requests.
pub struct ChallengeBuilder {
    engine: SelectionEngine,
    templates: TemplateRegistry,
    config: ChallengeConfig,
}

impl ChallengeBuilder {
    pub fn new(
        selection: &SelectionConfig,
        config: &ChallengeConfig,
        templates: TemplateRegistry,
    ) -> Self {
        info!(
            templates = templates.len(),
            items_per_challenge = config.items_per_challenge,
            "Challenge builder initialized"
        );
        Self {
            engine: SelectionEngine::new(selection),
            templates,
            config: config.clone(),
        }
    }

    /// Assemble a personalized challenge for a user.
    ///
    /// The only caller-facing error is an unknown template id; thin or
    /// empty snapshots degrade to a smaller item list.
    pub fn build(
        &self,
        user_id: &str,
        template_id: &str,
        catalog: &CatalogSnapshot,
        popularity: &PopularitySnapshot,
        history: &[PurchaseEvent],
    ) -> HuntResult<Challenge> {
        // Fresh generator per challenge; builds may run concurrently.
        let mut rng = StdRng::from_entropy();
        self.build_with_rng(user_id, template_id, catalog, popularity, history, &mut rng)
    }

    /// Same as [`ChallengeBuilder::build`] with a caller-supplied
    /// random source, for reproducible selections.
    pub fn build_with_rng<R: Rng>(
        &self,
        user_id: &str,
        template_id: &str,
        catalog: &CatalogSnapshot,
        popularity: &PopularitySnapshot,
        history: &[PurchaseEvent],
        rng: &mut R,
    ) -> HuntResult<Challenge> {
        let template = self
            .templates
            .get(template_id)
            .ok_or_else(|| HuntError::UnknownTemplate(template_id.to_string()))?;

        let request = SelectionRequest {
            request_id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            item_count: self.config.items_per_challenge,
            categories: template.categories.clone(),
            now: Utc::now(),
        };

        let items = self.engine.select(&request, catalog, popularity, history, rng);
        let total_points: u32 = items.iter().map(|item| item.points).sum();

        metrics::counter!("challenges.issued").increment(1);
        metrics::counter!("challenges.items_selected").increment(items.len() as u64);

        info!(
            user_id = %user_id,
            template_id = %template_id,
            request_id = %request.request_id,
            items = items.len(),
            points = total_points,
            "Challenge issued"
        );

        Ok(Challenge {
            id: template.id.clone(),
            title: template.title.clone(),
            description: template.description.clone(),
            points: total_points,
            time_remaining: template.time_remaining.clone(),
            color: template.color.clone(),
            items,
            current_points: 0,
            completed: false,
        })
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunt_core::types::CatalogItem;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn item(id: &str, category: &str, points: u32, is_promo: bool) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            category: category.to_string(),
            location: "Aisle 10".to_string(),
            points,
            price: 7.99,
            is_promo,
        }
    }

    fn health_catalog() -> CatalogSnapshot {
        CatalogSnapshot::from_items(vec![
            item("26", "Health", 90, false),
            item("27", "Health", 110, false),
            item("28", "Health", 120, false),
            item("30", "Dairy", 75, false),
            item("39", "Dairy", 70, false),
            item("31", "Dairy", 85, true),
            item("38", "Health", 150, true),
            // Outside the Health & Wellness theme entirely.
            item("16", "Meat", 150, false),
        ])
    }

    fn builder() -> ChallengeBuilder {
        ChallengeBuilder::new(
            &SelectionConfig::default(),
            &ChallengeConfig::default(),
            TemplateRegistry::with_builtin_themes(),
        )
    }

    #[test]
    fn test_unknown_template_errors() {
        let result = builder().build(
            "user-1",
            "999",
            &health_catalog(),
            &PopularitySnapshot::default(),
            &[],
        );
        assert!(matches!(result, Err(HuntError::UnknownTemplate(_))));
    }

    #[test]
    fn test_challenge_carries_template_metadata() {
        let mut rng = StdRng::seed_from_u64(5);
        let challenge = builder()
            .build_with_rng(
                "user-1",
                "4",
                &health_catalog(),
                &PopularitySnapshot::default(),
                &[],
                &mut rng,
            )
            .unwrap();

        assert_eq!(challenge.id, "4");
        assert_eq!(challenge.title, "Health & Wellness");
        assert_eq!(challenge.time_remaining, "3h 00m");
        assert_eq!(challenge.current_points, 0);
        assert!(!challenge.completed);
    }

    #[test]
    fn test_points_total_is_the_sum_of_item_points() {
        let mut rng = StdRng::seed_from_u64(6);
        let challenge = builder()
            .build_with_rng(
                "user-1",
                "4",
                &health_catalog(),
                &PopularitySnapshot::default(),
                &[],
                &mut rng,
            )
            .unwrap();

        let expected: u32 = challenge.items.iter().map(|i| i.points).sum();
        assert_eq!(challenge.points, expected);
        assert!(!challenge.items.is_empty());
    }

    #[test]
    fn test_theme_filter_excludes_other_categories() {
        let mut rng = StdRng::seed_from_u64(7);
        let challenge = builder()
            .build_with_rng(
                "user-1",
                "4",
                &health_catalog(),
                &PopularitySnapshot::default(),
                &[],
                &mut rng,
            )
            .unwrap();

        assert!(challenge
            .items
            .iter()
            .all(|i| i.category == "Health" || i.category == "Dairy"));
    }

    #[test]
    fn test_empty_catalog_issues_an_empty_challenge() {
        let mut rng = StdRng::seed_from_u64(8);
        let challenge = builder()
            .build_with_rng(
                "user-1",
                "5",
                &CatalogSnapshot::new(),
                &PopularitySnapshot::default(),
                &[],
                &mut rng,
            )
            .unwrap();

        assert!(challenge.items.is_empty());
        assert_eq!(challenge.points, 0);
    }
}
