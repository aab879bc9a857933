use crate::classifier::classify;
use crate::format::{format_lift, format_money};
use chrono::NaiveDate;
use core_types::{Classification, PromoRecord};
use serde::Serialize;

pub const NO_PROMOTIONS_MESSAGE: &str = "no promotions found";

/// Advice for one item, based on its most recent promotion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Recommendation {
    Advice {
        classification: Classification,
        text: String,
        /// Start of the promotion the advice was derived from.
        promo_start: NaiveDate,
    },
    /// The item has no promotion rows. Not an error.
    NoPromotions,
}

impl Recommendation {
    pub fn classification(&self) -> Option<Classification> {
        match self {
            Recommendation::Advice { classification, .. } => Some(*classification),
            Recommendation::NoPromotions => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Recommendation::Advice { text, .. } => text,
            Recommendation::NoPromotions => NO_PROMOTIONS_MESSAGE,
        }
    }
}

/// Classifies the item's latest promotion and phrases advice for it.
///
/// The latest promotion is the one with the greatest `promo_start`; when
/// several share that date the first one in input order is used.
pub fn recommend<'a, I>(records: I) -> Recommendation
where
    I: IntoIterator<Item = &'a PromoRecord>,
{
    let latest = records.into_iter().fold(None::<&PromoRecord>, |best, record| match best {
        Some(b) if record.promo_start <= b.promo_start => Some(b),
        _ => Some(record),
    });

    let Some(latest) = latest else {
        return Recommendation::NoPromotions;
    };

    let classification = classify(latest.lift, latest.profit_difference);
    let lift = format_lift(latest.lift);
    let profit = format_money(latest.profit_difference);
    let text = match classification {
        Classification::Star => format!(
            "This item shows strong performance with {lift}x lift and a profit gain of {profit}. \
             Keep promoting and consider increasing support."
        ),
        Classification::Risk => format!(
            "Low lift ({lift}x) and a profit loss of {profit}. Consider discontinuing promotions."
        ),
        Classification::HighLiftInefficient => format!(
            "{lift}x lift but costs {profit} in profit. \
             Consider reducing discount depth or adjusting price."
        ),
        Classification::EfficientLowLift => format!(
            "{profit} profit gain but only {lift}x lift. \
             Consider targeted campaigns to improve sales."
        ),
    };

    tracing::debug!(
        upc = %latest.upc,
        promo_start = %latest.promo_start,
        %classification,
        "Recommendation derived from latest promotion."
    );

    Recommendation::Advice {
        classification,
        text,
        promo_start: latest.promo_start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn promo(start: (i32, u32, u32), lift: Decimal, profit_diff: Decimal) -> PromoRecord {
        let day = NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap();
        PromoRecord {
            upc: "123".to_string(),
            item_name: "Cola 12pk".to_string(),
            sale_period: 1,
            promo_start: day,
            promo_end: day,
            promo_length: 7,
            promo_revenue: dec!(1000),
            preceding_non_promo_revenue: dec!(800),
            lift,
            promo_profit: dec!(400),
            preceding_non_promo_profit: dec!(400) - profit_diff,
            profit_difference: profit_diff,
        }
    }

    #[test]
    fn empty_records_signal_no_data() {
        let records: [PromoRecord; 0] = [];
        let recommendation = recommend(&records);
        assert_eq!(recommendation, Recommendation::NoPromotions);
        assert_eq!(recommendation.classification(), None);
        assert_eq!(recommendation.text(), "no promotions found");
    }

    #[test]
    fn uses_the_latest_promotion() {
        let records = [
            promo((2024, 5, 1), dec!(0.9), dec!(-200)),
            promo((2024, 1, 1), dec!(1.5), dec!(300)),
        ];
        let recommendation = recommend(&records);
        assert_eq!(recommendation.classification(), Some(Classification::Risk));
        assert_eq!(
            recommendation.text(),
            "Low lift (0.9x) and a profit loss of $-200.00. Consider discontinuing promotions."
        );
    }

    #[test]
    fn ties_on_start_date_keep_the_first_row() {
        let records = [
            promo((2024, 5, 1), dec!(1.5), dec!(1300)),
            promo((2024, 5, 1), dec!(0.9), dec!(-200)),
        ];
        assert_eq!(recommend(&records).classification(), Some(Classification::Star));
    }

    #[test]
    fn star_text() {
        let records = [promo((2024, 5, 1), dec!(1.5), dec!(1300))];
        assert_eq!(
            recommend(&records).text(),
            "This item shows strong performance with 1.5x lift and a profit gain of $1,300.00. \
             Keep promoting and consider increasing support."
        );
    }

    #[test]
    fn high_lift_inefficient_text() {
        let records = [promo((2024, 5, 1), dec!(2), dec!(-75.5))];
        assert_eq!(
            recommend(&records).text(),
            "2.0x lift but costs $-75.50 in profit. Consider reducing discount depth or adjusting price."
        );
    }

    #[test]
    fn efficient_low_lift_text() {
        let records = [promo((2024, 5, 1), dec!(1.04), dec!(0))];
        assert_eq!(
            recommend(&records).text(),
            "$0.00 profit gain but only 1.0x lift. Consider targeted campaigns to improve sales."
        );
    }
}
