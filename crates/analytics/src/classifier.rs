use core_types::Classification;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Lift at or above this ratio counts as a strong sales response.
pub const LIFT_THRESHOLD: Decimal = dec!(1.2);

/// One entry of the ordered quadrant table.
pub struct QuadrantRule {
    pub classification: Classification,
    pub matches: fn(lift: Decimal, profit_diff: Decimal) -> bool,
}

/// Evaluated top to bottom; the first match wins.
///
/// The table does not partition the plane: `profit_diff == 0` matches nothing
/// and falls through to `EfficientLowLift`, whatever the lift.
pub const QUADRANT_RULES: [QuadrantRule; 3] = [
    QuadrantRule {
        classification: Classification::Star,
        matches: |lift, profit_diff| lift >= LIFT_THRESHOLD && profit_diff > Decimal::ZERO,
    },
    QuadrantRule {
        classification: Classification::Risk,
        matches: |lift, profit_diff| lift < LIFT_THRESHOLD && profit_diff < Decimal::ZERO,
    },
    QuadrantRule {
        classification: Classification::HighLiftInefficient,
        matches: |lift, profit_diff| lift >= LIFT_THRESHOLD && profit_diff < Decimal::ZERO,
    },
];

const FALLBACK: Classification = Classification::EfficientLowLift;

/// Assigns a (lift, profit difference) pair to its performance quadrant.
pub fn classify(lift: Decimal, profit_diff: Decimal) -> Classification {
    QUADRANT_RULES
        .iter()
        .find(|rule| (rule.matches)(lift, profit_diff))
        .map_or(FALLBACK, |rule| rule.classification)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_points_land_in_their_quadrant() {
        assert_eq!(classify(dec!(1.5), dec!(300)), Classification::Star);
        assert_eq!(classify(dec!(0.9), dec!(-50)), Classification::Risk);
        assert_eq!(classify(dec!(2.0), dec!(-10)), Classification::HighLiftInefficient);
        assert_eq!(classify(dec!(1.0), dec!(25)), Classification::EfficientLowLift);
    }

    #[test]
    fn threshold_lift_counts_as_high() {
        assert_eq!(classify(dec!(1.2), dec!(0.01)), Classification::Star);
        assert_eq!(classify(dec!(1.2), dec!(-0.01)), Classification::HighLiftInefficient);
        assert_eq!(classify(dec!(1.19), dec!(-0.01)), Classification::Risk);
    }

    #[test]
    fn zero_profit_falls_through_to_efficient_low_lift() {
        assert_eq!(classify(dec!(1.2), Decimal::ZERO), Classification::EfficientLowLift);
        assert_eq!(classify(dec!(3.0), Decimal::ZERO), Classification::EfficientLowLift);
        assert_eq!(classify(dec!(0.5), Decimal::ZERO), Classification::EfficientLowLift);
    }

    #[test]
    fn every_sampled_point_gets_a_label() {
        let lifts = [dec!(0), dec!(0.5), dec!(1.19), dec!(1.2), dec!(1.21), dec!(4)];
        let profits = [dec!(-1000), dec!(-0.01), dec!(0), dec!(0.01), dec!(1000)];
        for lift in lifts {
            for profit in profits {
                let first = QUADRANT_RULES
                    .iter()
                    .position(|rule| (rule.matches)(lift, profit));
                let label = classify(lift, profit);
                match first {
                    Some(i) => assert_eq!(label, QUADRANT_RULES[i].classification),
                    None => assert_eq!(label, Classification::EfficientLowLift),
                }
            }
        }
    }
}
