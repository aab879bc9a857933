use crate::report::ItemAggregate;
use core_types::PromoRecord;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::HashMap;

/// A stateless calculator that summarises promotions per item.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

/// Running totals for one UPC while the records are scanned.
struct Accumulator<'a> {
    upc: &'a str,
    item_name: &'a str,
    profit_difference_sum: Decimal,
    lift_sum: Decimal,
    total_revenue: Decimal,
    total_profit: Decimal,
    promo_count: usize,
}

impl<'a> Accumulator<'a> {
    fn start(record: &'a PromoRecord) -> Self {
        Self {
            upc: &record.upc,
            item_name: &record.item_name,
            profit_difference_sum: Decimal::ZERO,
            lift_sum: Decimal::ZERO,
            total_revenue: Decimal::ZERO,
            total_profit: Decimal::ZERO,
            promo_count: 0,
        }
    }

    fn add(&mut self, record: &PromoRecord) {
        self.profit_difference_sum += record.profit_difference;
        self.lift_sum += record.lift;
        self.total_revenue += record.promo_revenue;
        self.total_profit += record.promo_profit;
        self.promo_count += 1;
    }

    fn finish(self) -> ItemAggregate {
        // promo_count >= 1: an accumulator only exists once a record was added.
        let count = Decimal::from(self.promo_count);
        ItemAggregate {
            upc: self.upc.to_string(),
            item_name: self.item_name.to_string(),
            avg_profit: self.profit_difference_sum / count,
            avg_lift: self.lift_sum / count,
            total_revenue: self.total_revenue,
            total_profit: self.total_profit,
            promo_count: self.promo_count,
        }
    }
}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups promo records by UPC and summarises each group.
    ///
    /// # Arguments
    ///
    /// * `records` - Every promotion row, in table order. The order decides which
    ///   display name an item keeps when its rows disagree. Metric values are
    ///   expected within `MAX_METRIC_MAGNITUDE`, as the loader guarantees.
    ///
    /// # Returns
    ///
    /// One `ItemAggregate` per distinct UPC, ordered by UPC. Empty input gives an
    /// empty result.
    pub fn aggregate(&self, records: &[PromoRecord]) -> Vec<ItemAggregate> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<Accumulator<'_>> = Vec::new();

        for record in records {
            let slot = *index.entry(record.upc.as_str()).or_insert_with(|| {
                groups.push(Accumulator::start(record));
                groups.len() - 1
            });
            groups[slot].add(record);
        }

        let mut aggregates: Vec<ItemAggregate> =
            groups.into_iter().map(Accumulator::finish).collect();
        aggregates.sort_by(|a, b| compare_upc(&a.upc, &b.upc));

        tracing::debug!(
            records = records.len(),
            items = aggregates.len(),
            "Aggregated promotions per item."
        );
        aggregates
    }
}

/// The largest number of promotions any single item has.
///
/// This is the upper end of the minimum-promotions filter; it is 1 when there
/// are no items so the filter range never collapses.
pub fn max_promo_count(aggregates: &[ItemAggregate]) -> usize {
    aggregates
        .iter()
        .map(|a| a.promo_count)
        .max()
        .unwrap_or(1)
        .max(1)
}

/// Numeric order for all-digit UPCs, plain string order otherwise.
fn compare_upc(a: &str, b: &str) -> Ordering {
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|c| c.is_ascii_digit());
    if numeric(a) && numeric(b) {
        let (a_trim, b_trim) = (a.trim_start_matches('0'), b.trim_start_matches('0'));
        a_trim
            .len()
            .cmp(&b_trim.len())
            .then_with(|| a_trim.cmp(b_trim))
            .then_with(|| a.cmp(b))
    } else {
        a.cmp(b)
    }
}
