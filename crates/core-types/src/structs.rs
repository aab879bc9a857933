use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Largest absolute value accepted for any loaded money, ratio or unit field.
///
/// Keeps per-item sums far below `Decimal::MAX` (~7.9e28) for any realistic
/// number of rows.
pub const MAX_METRIC_MAGNITUDE: Decimal = dec!(1000000000000000);

/// One promotion period for one item, with the metrics computed upstream.
///
/// Records are never mutated after loading. `profit_difference` is expected to
/// equal `promo_profit - preceding_non_promo_profit`; it is carried as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoRecord {
    pub upc: String,
    pub item_name: String,
    pub sale_period: u32,
    pub promo_start: NaiveDate,
    pub promo_end: NaiveDate,
    /// Length of the promotion in days.
    pub promo_length: u32,
    pub promo_revenue: Decimal,
    pub preceding_non_promo_revenue: Decimal,
    /// Ratio against the preceding non-promo period; 1.0 means no change.
    pub lift: Decimal,
    pub promo_profit: Decimal,
    pub preceding_non_promo_profit: Decimal,
    pub profit_difference: Decimal,
}

/// Units sold for one item on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub upc: Option<String>,
    pub item_name: String,
    pub sale_date: NaiveDate,
    pub items_sold: Decimal,
    pub current_price: Decimal,
    pub regular_price: Decimal,
}
