//! Money helpers using rust_decimal for precision
//!
//! All monetary arithmetic runs on `Decimal`; `f64` only appears at the
//! storage/serialization boundary. Figures are rounded to two decimal
//! places half-up, exactly once per figure.

use rust_decimal::prelude::*;

/// Rounding precision for monetary values
const DECIMAL_PLACES: u32 = 2;

/// Convert an f64 from storage/input into a Decimal
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert a Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round2(value)
        .to_f64()
        .unwrap_or_else(|| {
            tracing::error!(value = ?value, "Decimal out of f64 range, defaulting to zero");
            0.0
        })
}

/// Round to 2 decimal places, half-up
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
