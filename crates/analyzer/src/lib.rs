use analytics::ItemAggregate;
use configuration::HighlightSettings;
use core_types::Classification;
use serde::Serialize;

pub mod dashboard;

pub use dashboard::{ItemView, PortfolioView, PromoWindow};

/// An aggregate picked for emphasis, together with its quadrant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub classification: Classification,
    pub item: ItemAggregate,
}

/// Picks the best Star items and the worst Risk items.
pub struct HighlightSelector {
    config: HighlightSettings,
}

impl HighlightSelector {
    pub fn new(config: HighlightSettings) -> Self {
        Self { config }
    }

    /// Filters, ranks and truncates the aggregates into the highlight list.
    ///
    /// Stars come first, highest average profit first; Risks follow, lowest
    /// average profit first. Equal profits keep their input order.
    pub fn select(&self, aggregates: &[ItemAggregate], min_promos: usize) -> Vec<Highlight> {
        // 1. Filter
        let eligible = filter_by_min_promos(aggregates, min_promos);
        if eligible.is_empty() {
            return vec![];
        }

        // 2. Rank
        let mut stars: Vec<&ItemAggregate> = eligible
            .iter()
            .filter(|a| a.classification() == Classification::Star)
            .collect();
        stars.sort_by(|a, b| b.avg_profit.cmp(&a.avg_profit));

        let mut risks: Vec<&ItemAggregate> = eligible
            .iter()
            .filter(|a| a.classification() == Classification::Risk)
            .collect();
        risks.sort_by(|a, b| a.avg_profit.cmp(&b.avg_profit));

        // 3. Truncate
        let highlights: Vec<Highlight> = stars
            .into_iter()
            .take(self.config.stars)
            .chain(risks.into_iter().take(self.config.risks))
            .map(|item| Highlight {
                classification: item.classification(),
                item: item.clone(),
            })
            .collect();

        tracing::debug!(
            eligible = eligible.len(),
            highlighted = highlights.len(),
            min_promos,
            "Selected highlight items."
        );
        highlights
    }
}

/// Keeps the aggregates with at least `min_promos` promotions.
pub fn filter_by_min_promos(aggregates: &[ItemAggregate], min_promos: usize) -> Vec<ItemAggregate> {
    aggregates
        .iter()
        .filter(|a| a.promo_count >= min_promos)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn item(upc: &str, avg_lift: Decimal, avg_profit: Decimal, promo_count: usize) -> ItemAggregate {
        ItemAggregate {
            upc: upc.to_string(),
            item_name: format!("Item {upc}"),
            avg_profit,
            avg_lift,
            total_revenue: dec!(1000),
            total_profit: dec!(100),
            promo_count,
        }
    }

    fn selector() -> HighlightSelector {
        HighlightSelector::new(HighlightSettings::default())
    }

    fn upcs(highlights: &[Highlight]) -> Vec<&str> {
        highlights.iter().map(|h| h.item.upc.as_str()).collect()
    }

    #[test]
    fn picks_top_two_stars_and_bottom_two_risks() {
        let aggregates = vec![
            item("1", dec!(1.5), dec!(100), 2),
            item("2", dec!(1.3), dec!(300), 2),
            item("3", dec!(2.0), dec!(200), 2),
            item("4", dec!(0.9), dec!(-10), 2),
            item("5", dec!(1.0), dec!(-500), 2),
            item("6", dec!(1.1), dec!(-250), 2),
            item("7", dec!(1.5), dec!(-999), 2),
        ];
        let highlights = selector().select(&aggregates, 1);
        assert_eq!(upcs(&highlights), vec!["2", "3", "5", "6"]);
        assert_eq!(highlights[0].classification, Classification::Star);
        assert_eq!(highlights[3].classification, Classification::Risk);
    }

    #[test]
    fn returns_fewer_when_fewer_qualify() {
        let aggregates = vec![
            item("1", dec!(1.5), dec!(100), 1),
            item("2", dec!(1.0), dec!(50), 1),
            item("3", dec!(0.8), dec!(-5), 1),
        ];
        let highlights = selector().select(&aggregates, 1);
        assert_eq!(upcs(&highlights), vec!["1", "3"]);
    }

    #[test]
    fn min_promos_filters_before_ranking() {
        let aggregates = vec![
            item("1", dec!(1.5), dec!(900), 1),
            item("2", dec!(1.5), dec!(100), 3),
        ];
        let highlights = selector().select(&aggregates, 2);
        assert_eq!(upcs(&highlights), vec!["2"]);
    }

    #[test]
    fn boundary_items_follow_the_quadrant_rules() {
        let aggregates = vec![
            item("1", dec!(1.2), dec!(0.01), 1),
            item("2", dec!(1.2), Decimal::ZERO, 1),
            item("3", dec!(1.19), dec!(-0.01), 1),
            item("4", dec!(1.2), dec!(-0.01), 1),
        ];
        let highlights = selector().select(&aggregates, 1);
        assert_eq!(upcs(&highlights), vec!["1", "3"]);
        for highlight in &highlights {
            assert_eq!(highlight.classification, highlight.item.classification());
        }
    }

    #[test]
    fn nothing_eligible_gives_empty_list() {
        let aggregates = vec![item("1", dec!(1.5), dec!(900), 1)];
        assert!(selector().select(&aggregates, 5).is_empty());
        assert!(selector().select(&[], 1).is_empty());
    }

    #[test]
    fn zero_threshold_keeps_everything() {
        let aggregates = vec![item("1", dec!(1.5), dec!(900), 1)];
        assert_eq!(filter_by_min_promos(&aggregates, 0).len(), 1);
    }

    #[test]
    fn equal_profits_keep_input_order() {
        let aggregates = vec![
            item("9", dec!(1.5), dec!(100), 1),
            item("8", dec!(1.6), dec!(100), 1),
            item("7", dec!(1.7), dec!(100), 1),
        ];
        let highlights = selector().select(&aggregates, 1);
        assert_eq!(upcs(&highlights), vec!["9", "8"]);
    }

    #[test]
    fn never_more_than_configured_counts() {
        let aggregates: Vec<ItemAggregate> = (0..20)
            .map(|i| {
                let profit = Decimal::from(i) - dec!(10);
                let lift = if i % 2 == 0 { dec!(1.5) } else { dec!(0.5) };
                item(&i.to_string(), lift, profit, 1)
            })
            .collect();
        let highlights = selector().select(&aggregates, 1);
        assert!(highlights.len() <= 4);
        let stars = highlights
            .iter()
            .filter(|h| h.classification == Classification::Star)
            .count();
        assert_eq!(stars, 2);
    }
}
