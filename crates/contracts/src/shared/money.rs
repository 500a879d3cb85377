//! Money helpers.
//!
//! Prices are persisted as integer minor units (cents) so that every SQL
//! aggregate over `quantity * unit_price_cents` stays exact. Values cross the
//! API boundary as `Decimal` with two decimal places.

use rust_decimal::prelude::*;

/// Number of decimal places for monetary values
pub const MONEY_SCALE: u32 = 2;

/// Number of decimal places for average quantities
pub const QUANTITY_AVG_SCALE: u32 = 4;

/// Highest storable unit price in cents. A sale of `i32::MAX` units at this
/// price still fits the `i64` SQLite uses for integer arithmetic.
pub const MAX_UNIT_PRICE_CENTS: i64 = i64::MAX / i32::MAX as i64;

/// Convert minor units into a money value (`1234` -> `12.34`)
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, MONEY_SCALE)
}

/// Convert a money value into minor units.
///
/// Returns `None` when the value carries more than two decimal places or does
/// not fit into `i64`.
pub fn to_cents(amount: Decimal) -> Option<i64> {
    if amount.normalize().scale() > MONEY_SCALE {
        return None;
    }
    amount.checked_mul(Decimal::ONE_HUNDRED)?.trunc().to_i64()
}

/// Round half away from zero to two decimal places
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Arithmetic mean of `total` over `count` items, zero for an empty set
pub fn mean(total: Decimal, count: i64) -> Decimal {
    if count <= 0 {
        return Decimal::ZERO;
    }
    total / Decimal::from(count)
}

/// Mean quantity rounded the way the reports present it
pub fn mean_quantity(total_quantity: i64, count: i64) -> Decimal {
    mean(Decimal::from(total_quantity), count)
        .round_dp_with_strategy(QUANTITY_AVG_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
