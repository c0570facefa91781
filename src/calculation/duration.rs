//! Duration resolution functionality.
//!
//! This module converts raw work-session inputs into a canonical decimal-hour
//! duration. Two entry modes are supported: a wall-clock start/end pair with
//! an unpaid break deduction, and an explicit elapsed hours/minutes pair.
//!
//! A range whose end reads earlier than its start is treated as wrapping past
//! midnight onto the next calendar day. This is inferred from the time
//! comparison alone; callers never supply a "next day" flag.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Minutes in one calendar day, added to the end time of an overnight range.
pub const MINUTES_PER_DAY: i64 = 1440;

const MINUTES_PER_HOUR: i64 = 60;

/// A resolved work duration.
///
/// The decimal value is canonical; the hour/minute pair is the display form
/// derived from it and is normalized so that `minutes` is always below 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDuration {
    /// Whole hours of the duration.
    pub hours: u32,
    /// Remaining minutes of the duration, always in `0..60`.
    pub minutes: u32,
    /// The duration in decimal hours (e.g. 7.5 for 7h30m).
    pub decimal: Decimal,
}

impl ResolvedDuration {
    /// Derives the display hour/minute pair from a decimal-hour value.
    ///
    /// Minutes are rounded half away from zero. Rounding the fractional part
    /// of a decimal just below an integer boundary (e.g. 2.999...) can yield
    /// 60 minutes; that case is normalized by carrying into the hour so the
    /// pair never reads as "2h 60m".
    ///
    /// # Example
    ///
    /// ```
    /// use wagebook::calculation::ResolvedDuration;
    /// use rust_decimal::Decimal;
    ///
    /// let resolved = ResolvedDuration::from_decimal(Decimal::new(775, 2)); // 7.75
    /// assert_eq!((resolved.hours, resolved.minutes), (7, 45));
    /// ```
    pub fn from_decimal(decimal: Decimal) -> Self {
        let decimal = if decimal < Decimal::ZERO {
            Decimal::ZERO
        } else {
            decimal
        };

        let whole = decimal.floor();
        let mut hours = whole.to_u32().unwrap_or(0);
        let mut minutes = ((decimal - whole) * Decimal::from(MINUTES_PER_HOUR))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0);

        if minutes == 60 {
            hours += 1;
            minutes = 0;
        }

        Self {
            hours,
            minutes,
            decimal,
        }
    }
}

/// Parses a wall-clock "HH:MM" string into minutes since midnight.
///
/// Parsing is permissive: a missing or non-numeric component reads as zero,
/// so a malformed string degrades to "00:00" rather than an error. Values
/// outside the clock range (e.g. an hour of 25) are not rejected.
pub fn clock_minutes(time: &str) -> i64 {
    let mut parts = time.split(':');
    let hours = parts
        .next()
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(0);
    let minutes = parts
        .next()
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(0);
    hours * MINUTES_PER_HOUR + minutes
}

/// Resolves a wall-clock range with a break deduction into a duration.
///
/// When the end reads earlier than the start, the end is taken to fall on
/// the next calendar day. The break is subtracted from the raw span and the
/// result is floored at zero, so an oversized break never produces a
/// negative duration. Negative break minutes are coerced to zero.
///
/// # Example
///
/// ```
/// use wagebook::calculation::resolve_range;
/// use rust_decimal::Decimal;
///
/// // Overnight shift: 22:00 to 06:00 with a 30 minute break.
/// let resolved = resolve_range("22:00", "06:00", 30);
/// assert_eq!(resolved.decimal, Decimal::new(75, 1)); // 7.5 hours
/// ```
pub fn resolve_range(start_time: &str, end_time: &str, break_minutes: i64) -> ResolvedDuration {
    let start = clock_minutes(start_time);
    let mut end = clock_minutes(end_time);

    if end < start {
        end += MINUTES_PER_DAY;
    }

    // Deduct in the minute domain before dividing, so the decimal is the
    // exact quotient of the worked minutes.
    let worked = (end - start - break_minutes.max(0)).max(0);

    ResolvedDuration::from_decimal(Decimal::from(worked) / Decimal::from(MINUTES_PER_HOUR))
}

/// Resolves an explicit elapsed hours/minutes pair into a duration.
///
/// These are elapsed values, not wall-clock anchored ones, so no overnight
/// logic applies. Negative inputs are coerced to zero; a minutes value of 60
/// or more simply contributes `minutes / 60` hours.
///
/// # Example
///
/// ```
/// use wagebook::calculation::resolve_duration;
/// use rust_decimal::Decimal;
///
/// let resolved = resolve_duration(7, 45);
/// assert_eq!(resolved.decimal, Decimal::new(775, 2)); // 7.75
/// ```
pub fn resolve_duration(hours: i64, minutes: i64) -> ResolvedDuration {
    let decimal = Decimal::from(hours.max(0))
        + Decimal::from(minutes.max(0)) / Decimal::from(MINUTES_PER_HOUR);
    ResolvedDuration::from_decimal(decimal)
}
