use serde::{Deserialize, Serialize};
use std::fmt;

/// The four promo-performance quadrants an item or a single promotion can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Star,
    Risk,
    HighLiftInefficient,
    EfficientLowLift,
}

impl Classification {
    /// The label shown to merchandisers.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Star => "Star",
            Classification::Risk => "Risk",
            Classification::HighLiftInefficient => "High-Lift-Inefficient",
            Classification::EfficientLowLift => "Efficient-Low-Lift",
        }
    }

    /// Short guidance attached to the quadrant.
    pub fn guidance(&self) -> &'static str {
        match self {
            Classification::Star => "maintain pricing & replicate success.",
            Classification::Risk => "review pricing or discontinue.",
            Classification::HighLiftInefficient => "optimize cost or price.",
            Classification::EfficientLowLift => "consider targeted promotions.",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a selected sales item is matched to its promo-period rows.
///
/// The promo and sales tables share a display name column and, optionally,
/// a UPC column. Display names are not guaranteed unique across products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum JoinKey {
    #[default]
    DisplayName,
    Upc,
}

impl fmt::Display for JoinKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinKey::DisplayName => f.write_str("display_name"),
            JoinKey::Upc => f.write_str("upc"),
        }
    }
}
