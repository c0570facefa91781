//! Wage computation functionality.
//!
//! This module computes the wage for a resolved duration. The formula is
//! deliberately simple: decimal hours times the hourly rate, floored to a
//! whole currency unit, never rounded up. A manual override is handled at
//! the record level ([`crate::models::WorkRecord::total_wage`]) and bypasses
//! this formula entirely; the engine never reconciles or flags divergence
//! between the computed and overridden value.

use rust_decimal::Decimal;

/// Computes the wage for a worked duration at an hourly rate.
///
/// The product is floored to a whole currency unit. Negative hours or a
/// negative rate are coerced to zero rather than rejected, matching the
/// permissive-input philosophy of the rest of the engine.
///
/// # Example
///
/// ```
/// use wagebook::calculation::compute_wage;
/// use rust_decimal::Decimal;
///
/// let wage = compute_wage(Decimal::new(75, 1), Decimal::new(20000, 0));
/// assert_eq!(wage, Decimal::new(150000, 0));
/// ```
pub fn compute_wage(decimal_hours: Decimal, rate: Decimal) -> Decimal {
    let hours = decimal_hours.max(Decimal::ZERO);
    let rate = rate.max(Decimal::ZERO);
    (hours * rate).floor()
}
