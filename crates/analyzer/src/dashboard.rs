//! View models handed to the presentation layer.
//!
//! Both views are rebuilt from the immutable `Dataset` for every request and
//! hold no references back into it.

use crate::{Highlight, HighlightSelector, filter_by_min_promos};
use analytics::{AnalyticsEngine, AxisDomain, ItemAggregate, Recommendation, max_promo_count, recommend};
use chrono::NaiveDate;
use configuration::HighlightSettings;
use core_types::{JoinKey, PromoRecord, SalesRecord};
use dataset::Dataset;
use serde::Serialize;

/// Everything the profit-versus-lift overview needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioView {
    /// The threshold actually applied.
    pub min_promos: usize,
    /// Inclusive bounds of the minimum-promotions control.
    pub min_promos_range: (usize, usize),
    /// Every item, unfiltered.
    pub items: Vec<ItemAggregate>,
    /// Items passing the minimum-promotions filter; the scatter points.
    pub filtered: Vec<ItemAggregate>,
    pub profit_domain: Option<AxisDomain>,
    pub lift_domain: Option<AxisDomain>,
    pub highlights: Vec<Highlight>,
}

impl PortfolioView {
    pub fn build(dataset: &Dataset, settings: &HighlightSettings, min_promos: usize) -> Self {
        let items = AnalyticsEngine::new().aggregate(dataset.promotions());
        let filtered = filter_by_min_promos(&items, min_promos);
        let highlights = HighlightSelector::new(settings.clone()).select(&items, min_promos);

        Self {
            min_promos,
            min_promos_range: (1, max_promo_count(&items)),
            profit_domain: AxisDomain::spanning(filtered.iter().map(|a| a.avg_profit)),
            lift_domain: AxisDomain::spanning(filtered.iter().map(|a| a.avg_lift)),
            items,
            filtered,
            highlights,
        }
    }
}

/// A promotion's date range, for shading on the units-sold chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromoWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Everything the single-item drill-down needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub item_name: String,
    pub join_key: JoinKey,
    pub promotions: Vec<PromoRecord>,
    /// Daily sales, oldest first.
    pub sales: Vec<SalesRecord>,
    pub promo_windows: Vec<PromoWindow>,
    pub recommendation: Recommendation,
}

impl ItemView {
    pub fn build(dataset: &Dataset, item_name: &str, join_key: JoinKey) -> Self {
        let promotions = dataset.promotions_for(item_name, join_key);
        let sales = dataset.sales_for(item_name);
        let promo_windows = promotions
            .iter()
            .map(|p| PromoWindow {
                start: p.promo_start,
                end: p.promo_end,
            })
            .collect();
        let recommendation = recommend(&promotions);

        tracing::info!(
            item = %item_name,
            %join_key,
            promotions = promotions.len(),
            sales_days = sales.len(),
            "Built item view."
        );

        Self {
            item_name: item_name.to_string(),
            join_key,
            promotions,
            sales,
            promo_windows,
            recommendation,
        }
    }

    pub fn has_promotions(&self) -> bool {
        !self.promotions.is_empty()
    }
}
