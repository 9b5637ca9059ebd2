//! Field normalization applied before validation and persistence.

use std::str::FromStr;

use larder_core::{AppError, AppResult};
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits kept for money and quantity values.
pub const DECIMAL_PLACES: u32 = 2;

/// Rounds a decimal half-up to exactly two fractional digits.
///
/// The result always carries a scale of two, so `10.5` renders as `10.50`.
#[must_use]
pub fn format_amount(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DECIMAL_PLACES);
    rounded
}

/// Parses decimal text, ignoring surrounding whitespace.
pub fn parse_decimal(value: &str) -> AppResult<Decimal> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| AppError::NumberFormat(format!("'{value}' is not a valid number")))
}

/// Re-renders a decimal string with exactly two fractional digits.
pub fn format_dollar_value(value: &str) -> AppResult<String> {
    parse_decimal(value).map(|parsed| format_amount(parsed).to_string())
}

/// Returns the upper-cased form of a string field.
#[must_use]
pub fn uppercase(value: &str) -> String {
    value.to_uppercase()
}

/// Trims a string field, collapsing blank values to `None`.
#[must_use]
pub fn trim_to_option(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim().to_owned();
        (!trimmed.is_empty()).then_some(trimmed)
    })
}
