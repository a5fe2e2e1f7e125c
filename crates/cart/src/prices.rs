//! Price normalization and display.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso};

/// Parse a price out of free text by stripping every character that is not a
/// digit or a decimal point (`"120 DH"` becomes `120`).
///
/// Returns `None` when nothing parseable remains. The same rule applies at
/// cart-insertion time and at total computation, so the two can never round
/// differently.
#[must_use]
pub fn normalize_price(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    cleaned.parse::<Decimal>().ok()
}

/// Render a dirham amount (`120` becomes the MAD-formatted string).
#[must_use]
pub fn format_mad(amount: Decimal) -> String {
    let minor = (amount * Decimal::ONE_HUNDRED).round().to_i64().unwrap_or(0);

    Money::from_minor(minor, iso::MAD).to_string()
}
