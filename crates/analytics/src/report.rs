use crate::classifier::classify;
use core_types::Classification;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-item summary of every promotion recorded for one UPC.
///
/// This is the output of `AnalyticsEngine::aggregate` and the row type of the
/// profit-versus-lift scatter. It is rebuilt from scratch on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAggregate {
    pub upc: String,
    /// Display name of the first promotion row seen for this UPC.
    pub item_name: String,
    /// Mean of `profit_difference` over the item's promotions.
    pub avg_profit: Decimal,
    /// Mean of `lift` over the item's promotions.
    pub avg_lift: Decimal,
    pub total_revenue: Decimal,
    pub total_profit: Decimal,
    pub promo_count: usize,
}

impl ItemAggregate {
    pub fn classification(&self) -> Classification {
        classify(self.avg_lift, self.avg_profit)
    }
}

/// The closed range a chart axis has to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: Decimal,
    pub max: Decimal,
}

impl AxisDomain {
    /// The smallest range containing every value, or `None` when there are none.
    pub fn spanning<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Decimal>,
    {
        values.into_iter().fold(None, |domain, value| match domain {
            None => Some(Self { min: value, max: value }),
            Some(d) => Some(Self {
                min: d.min.min(value),
                max: d.max.max(value),
            }),
        })
    }
}
