//! Period statement aggregation.
//!
//! This module computes the statement-level statistics for a periodic wage
//! statement over an arbitrary sub-collection of records, typically the
//! filtered (pre-pagination) result of the query pipeline.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{PeriodStatement, WorkRecord};

/// Computes a period statement over a sub-collection of records.
///
/// The input is expected to be sorted ascending by date; the start and end
/// labels come from the first and last record. The day count is one line per
/// record; multiple records on the same calendar day are not merged. The
/// effective average rate is the total wage divided by the total hours,
/// rounded to a whole currency unit; a degenerate window with zero total
/// hours divides by 1 instead, so its average rate equals the total wage.
///
/// An empty collection returns a statement with default-zero fields; guarding
/// against producing a statement from no data is the caller's concern.
///
/// # Example
///
/// ```
/// use wagebook::calculation::summarize_period;
/// use wagebook::models::{SessionInput, WorkRecord};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let records = vec![WorkRecord {
///     id: "rec_001".to_string(),
///     date: NaiveDateTime::parse_from_str("2026-01-05 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     input: SessionInput::Duration { hours: 8, minutes: 0 },
///     rate: Decimal::new(10000, 0),
///     wage_override: None,
/// }];
///
/// let statement = summarize_period(&records);
/// assert_eq!(statement.day_count, 1);
/// assert_eq!(statement.average_rate, Decimal::new(10000, 0));
/// ```
pub fn summarize_period(records: &[WorkRecord]) -> PeriodStatement {
    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        return PeriodStatement::default();
    };

    let total_hours: Decimal = records.iter().map(|r| r.total_hours()).sum();
    let total_wage: Decimal = records.iter().map(|r| r.total_wage()).sum();

    let divisor = if total_hours.is_zero() {
        Decimal::ONE
    } else {
        total_hours
    };
    let average_rate =
        (total_wage / divisor).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    PeriodStatement {
        start_label: first.date.format("%-d %b").to_string(),
        end_label: last.date.format("%-d %b").to_string(),
        day_count: records.len(),
        total_hours,
        total_wage,
        average_rate,
    }
}
