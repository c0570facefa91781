//! Period statement model.
//!
//! This module contains the [`PeriodStatement`] type: the statement-level
//! statistics computed over an arbitrary sub-collection of work records,
//! typically a month or a filtered date range. A statement is ephemeral; it
//! is produced on demand and never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Statement-level statistics over a sub-collection of work records.
///
/// # Example
///
/// ```
/// use wagebook::models::PeriodStatement;
/// use rust_decimal::Decimal;
///
/// let statement = PeriodStatement {
///     start_label: "5 Jan".to_string(),
///     end_label: "30 Jan".to_string(),
///     day_count: 20,
///     total_hours: Decimal::new(1600, 1),
///     total_wage: Decimal::new(1600000, 0),
///     average_rate: Decimal::new(10000, 0),
/// };
/// assert_eq!(statement.day_count, 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodStatement {
    /// Short calendar label of the earliest record in the period.
    pub start_label: String,
    /// Short calendar label of the latest record in the period.
    pub end_label: String,
    /// Number of statement lines, one per record. Multiple records logged on
    /// the same calendar day are not merged into one line.
    pub day_count: usize,
    /// Sum of worked decimal hours over the period.
    pub total_hours: Decimal,
    /// Sum of effective wages over the period.
    pub total_wage: Decimal,
    /// Effective average hourly rate over the period, rounded to a whole
    /// currency unit. When the period has no worked hours this equals the
    /// total wage.
    pub average_rate: Decimal,
}
