use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `COUPON_HUNT__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub challenges: ChallengeConfig,
}

/// Tunables for the challenge item selection engine.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    /// Half-life in days for purchase-recency weighting.
    #[serde(default = "default_half_life_days")]
    pub half_life_days: f64,
    /// Fraction of a challenge reserved for promotional items.
    #[serde(default = "default_promo_ratio")]
    pub promo_ratio: f64,
    /// Maximum items selected from any single category.
    #[serde(default = "default_category_cap")]
    pub category_cap: usize,
    #[serde(default = "default_min_items")]
    pub min_items: usize,
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeConfig {
    /// Number of items issued per challenge.
    #[serde(default = "default_items_per_challenge")]
    pub items_per_challenge: usize,
}

// Default functions
fn default_half_life_days() -> f64 {
    30.0
}
fn default_promo_ratio() -> f64 {
    0.25
}
fn default_category_cap() -> usize {
    3
}
fn default_min_items() -> usize {
    1
}
fn default_max_items() -> usize {
    20
}
fn default_items_per_challenge() -> usize {
    6
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            half_life_days: default_half_life_days(),
            promo_ratio: default_promo_ratio(),
            category_cap: default_category_cap(),
            min_items: default_min_items(),
            max_items: default_max_items(),
        }
    }
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            items_per_challenge: default_items_per_challenge(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            selection: SelectionConfig::default(),
            challenges: ChallengeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("COUPON_HUNT")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
