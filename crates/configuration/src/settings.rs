use core_types::JoinKey;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataSettings,
    pub highlights: HighlightSettings,
    pub logging: LoggingSettings,
}

/// Where the two input tables live and how they are joined.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// The promo-period summary table (one row per item and promotion).
    pub promo_periods_path: PathBuf,
    /// The per-day sales table.
    pub sales_path: PathBuf,
    /// The key used to match a selected sales item to its promotions.
    pub join_key: JoinKey,
}

/// Controls how many best and worst items are emphasised.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HighlightSettings {
    /// How many Star items to surface, best profit first.
    pub stars: usize,
    /// How many Risk items to surface, worst profit first.
    pub risks: usize,
    /// The minimum-promotions threshold used when none is supplied.
    pub default_min_promos: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive. `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs go to a daily-rolling file in this directory instead of stderr.
    pub directory: Option<PathBuf>,
}

// --- Default Implementations ---
// These allow every section (or the whole file) to be omitted.

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            promo_periods_path: PathBuf::from("data/promo_period.csv"),
            sales_path: PathBuf::from("data/skinny_sales_data.csv"),
            join_key: JoinKey::DisplayName,
        }
    }
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            stars: 2,
            risks: 2,
            default_min_promos: 1,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
