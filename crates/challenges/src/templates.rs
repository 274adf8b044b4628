//! Challenge theme definitions and the registry that serves them.

use hunt_core::types::ChallengeTemplate;
use std::collections::HashMap;

const STORE_GRADIENT: &str = "from-[var(--store-gradient-from)] to-[var(--store-gradient-to)]";

/// Registry of challenge themes. Loaded once at startup and read-only
/// afterwards; template lookup precedes every selection call.
pub struct TemplateRegistry {
    templates: HashMap<String, ChallengeTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Registry pre-loaded with the store's built-in themes.
    pub fn with_builtin_themes() -> Self {
        let mut registry = Self::new();
        for template in builtin_themes() {
            registry.register(template);
        }
        registry
    }

    pub fn register(&mut self, template: ChallengeTemplate) {
        self.templates.insert(template.id.clone(), template);
    }

    pub fn get(&self, id: &str) -> Option<&ChallengeTemplate> {
        self.templates.get(id)
    }

    /// All registered themes, in id order.
    pub fn list(&self) -> Vec<&ChallengeTemplate> {
        let mut all: Vec<&ChallengeTemplate> = self.templates.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_builtin_themes()
    }
}

fn categories(raw: &[&str]) -> Option<Vec<String>> {
    Some(raw.iter().map(|s| s.to_string()).collect())
}

fn builtin_themes() -> Vec<ChallengeTemplate> {
    vec![
        ChallengeTemplate {
            id: "4".to_string(),
            title: "Health & Wellness".to_string(),
            description: "Pick up vitamins and supplements".to_string(),
            color: STORE_GRADIENT.to_string(),
            points: 300,
            time_remaining: "3h 00m".to_string(),
            categories: categories(&["Health", "Dairy"]),
        },
        ChallengeTemplate {
            id: "5".to_string(),
            title: "Weekend BBQ".to_string(),
            description: "Everything you need for a backyard BBQ".to_string(),
            color: STORE_GRADIENT.to_string(),
            points: 750,
            time_remaining: "6h 30m".to_string(),
            categories: categories(&["Meat", "Bakery", "Condiments", "Produce", "Dairy"]),
        },
        ChallengeTemplate {
            id: "6".to_string(),
            title: "Baking Bonanza".to_string(),
            description: "Gather supplies for weekend baking".to_string(),
            color: STORE_GRADIENT.to_string(),
            points: 400,
            time_remaining: "4h 20m".to_string(),
            categories: categories(&["Baking", "Dairy"]),
        },
    ]
}
