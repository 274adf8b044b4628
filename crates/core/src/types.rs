use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A single product in the store catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Shelf location shown to the shopper, e.g. "Aisle 10, Left".
    pub location: String,
    pub points: u32,
    pub price: f64,
    #[serde(default)]
    pub is_promo: bool,
}

/// Immutable catalog view handed to each selection call.
///
/// Backed by a `BTreeMap` so iteration always follows identifier order,
/// keeping selections reproducible across runs with identical input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    items: BTreeMap<String, CatalogItem>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    pub fn from_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        Self {
            items: items.into_iter().map(|i| (i.id.clone(), i)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CatalogItem)> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The slice of the catalog belonging to the given categories.
    pub fn restrict_to(&self, categories: &[String]) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|(_, item)| categories.contains(&item.category))
                .map(|(id, item)| (id.clone(), item.clone()))
                .collect(),
        }
    }
}

/// One historical purchase line for a user. Owned by the external
/// purchase store; the engine only ever reads these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseEvent {
    pub user_id: String,
    pub item_id: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub purchased_at: DateTime<Utc>,
}

/// Store-wide purchase counts at a point in time. Absent entries imply
/// zero. Published by the analytics aggregator and never mutated in
/// place while selections read it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopularitySnapshot {
    counts: HashMap<String, u64>,
}

impl PopularitySnapshot {
    pub fn from_counts(counts: HashMap<String, u64>) -> Self {
        Self { counts }
    }

    pub fn count(&self, item_id: &str) -> u64 {
        self.counts.get(item_id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }
}

/// A challenge theme. Static configuration, loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeTemplate {
    pub id: String,
    pub title: String,
    pub description: String,
    /// UI gradient token rendered by the frontend.
    pub color: String,
    /// Default point total shown before a challenge is issued.
    pub points: u32,
    pub time_remaining: String,
    /// Categories eligible for this theme; `None` opens the whole catalog.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

/// An issued challenge: theme metadata plus the personalized item list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Sum of the selected items' point values.
    pub points: u32,
    pub time_remaining: String,
    pub color: String,
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub current_points: u32,
    #[serde(default)]
    pub completed: bool,
}
