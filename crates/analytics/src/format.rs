//! Display conventions for money and lift.
//!
//! Money is rendered as `$`, an optional leading minus, a comma-grouped integer
//! part and two decimals: `$1,234.50`, `$-200.00`. Rounding is half-to-even.

use rust_decimal::{Decimal, RoundingStrategy};

pub fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    format!("${}{}.{}", sign, group_thousands(whole), cents)
}

/// One decimal place, no suffix: `1.5`.
pub fn format_lift(lift: Decimal) -> String {
    let rounded = lift.round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven);
    format!("{:.1}", rounded)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
