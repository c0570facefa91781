//! Work record model and related types.
//!
//! This module defines the [`WorkRecord`] and [`SessionInput`] types for
//! representing logged work sessions. A record stores only the raw inputs of
//! its entry mode; worked hours and the wage are derived on read so the
//! persisted data can never desynchronize from the inputs it was entered
//! with. The one exception is the explicit wage override, which is stored as
//! an override and never reconciled against the computed value.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{compute_wage, resolve_duration, resolve_range};

/// The mode-specific raw inputs of a work session.
///
/// The two variants are mutually exclusive: a session is either defined by a
/// wall-clock range (with a break deduction) or by an explicit elapsed
/// hours/minutes pair. The variant determines which fields are authoritative
/// for deriving the worked duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SessionInput {
    /// A session defined by start/end wall-clock times plus a break deduction.
    Range {
        /// The wall-clock start time as "HH:MM".
        start_time: String,
        /// The wall-clock end time as "HH:MM". An end that reads earlier than
        /// the start is treated as falling on the next calendar day.
        end_time: String,
        /// Unpaid break minutes subtracted from the raw span.
        #[serde(default)]
        break_minutes: u32,
    },
    /// A session defined by an explicit elapsed hours/minutes pair.
    Duration {
        /// Whole elapsed hours entered directly.
        hours: u32,
        /// Additional elapsed minutes entered directly. Values of 60 or more
        /// are accepted and simply contribute `minutes / 60` hours.
        minutes: u32,
    },
}

/// One logged work session.
///
/// # Example
///
/// ```
/// use wagebook::models::{SessionInput, WorkRecord};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let record = WorkRecord {
///     id: "rec_001".to_string(),
///     date: NaiveDateTime::parse_from_str("2026-01-15 08:02:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     input: SessionInput::Range {
///         start_time: "08:00".to_string(),
///         end_time: "17:00".to_string(),
///         break_minutes: 60,
///     },
///     rate: Decimal::new(10000, 0),
///     wage_override: None,
/// };
/// assert_eq!(record.total_hours(), Decimal::new(80, 1)); // 8.0
/// assert_eq!(record.total_wage(), Decimal::new(80000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// Opaque unique identifier, assigned at creation, immutable.
    pub id: String,
    /// Timestamp the session was logged against, used for sorting and
    /// day-bucketing.
    pub date: NaiveDateTime,
    /// The mode-specific raw inputs of the session.
    #[serde(flatten)]
    pub input: SessionInput,
    /// The hourly rate effective for this record. A snapshot taken at entry
    /// time, not a live reference to any profile default.
    pub rate: Decimal,
    /// A manually entered total wage that takes precedence over the computed
    /// `duration × rate` value. `None` means the wage is derived.
    #[serde(default)]
    pub wage_override: Option<Decimal>,
}

impl WorkRecord {
    /// Returns the worked duration in decimal hours, derived from the raw
    /// inputs of the record's entry mode.
    pub fn total_hours(&self) -> Decimal {
        match &self.input {
            SessionInput::Range {
                start_time,
                end_time,
                break_minutes,
            } => resolve_range(start_time, end_time, i64::from(*break_minutes)).decimal,
            SessionInput::Duration { hours, minutes } => {
                resolve_duration(i64::from(*hours), i64::from(*minutes)).decimal
            }
        }
    }

    /// Returns the wage computed from the worked duration and the hourly
    /// rate, floored to a whole currency unit. Ignores any override.
    pub fn computed_wage(&self) -> Decimal {
        compute_wage(self.total_hours(), self.rate)
    }

    /// Returns the effective total wage: the override verbatim when one is
    /// present, otherwise the computed wage.
    pub fn total_wage(&self) -> Decimal {
        self.wage_override.unwrap_or_else(|| self.computed_wage())
    }

    /// Returns the break minutes recorded against this session. Sessions
    /// entered as an elapsed duration carry no break time by definition.
    pub fn break_minutes(&self) -> u32 {
        match &self.input {
            SessionInput::Range { break_minutes, .. } => *break_minutes,
            SessionInput::Duration { .. } => 0,
        }
    }

    /// Returns the calendar day this record belongs to.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Returns true for a range session whose end reads earlier than its
    /// start, meaning the shift wrapped past midnight.
    pub fn is_overnight(&self) -> bool {
        match &self.input {
            SessionInput::Range {
                start_time,
                end_time,
                ..
            } => {
                use crate::calculation::clock_minutes;
                clock_minutes(end_time) < clock_minutes(start_time)
            }
            SessionInput::Duration { .. } => false,
        }
    }
}
