//! Aggregate summaries over a record collection.
//!
//! This module computes the read-only summaries consumed by dashboard-style
//! views: grand totals over the full collection, a bounded recent-wage
//! series for bar charts, per-day buckets for calendar grids, and the
//! work/break time ratio. All functions take the collection as a read-only
//! slice and never mutate it.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::WorkRecord;

/// The number of records in the recent-wage chart window in the reference
/// behavior.
pub const CHART_WINDOW: usize = 7;

/// Scalar totals over the full record collection.
#[derive(Debug, Clone, PartialEq)]
pub struct GrandTotals {
    /// Sum of effective wages over all records.
    pub total_wage: Decimal,
    /// Sum of worked decimal hours over all records.
    pub total_hours: Decimal,
    /// Number of records in the collection.
    pub record_count: usize,
    /// Average wage per record, zero for an empty collection.
    pub average_wage_per_day: Decimal,
}

/// One bar of the recent-wage chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Short calendar label of the record (e.g. "15 Jan").
    pub label: String,
    /// The effective wage of the record.
    pub wage: Decimal,
}

/// The recent-wage chart series: the last N records by date, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// The windowed points in ascending date order.
    pub points: Vec<ChartPoint>,
    /// The maximum wage in the window, floored at 1 so consumers can divide
    /// by it for bar scaling without a zero check.
    pub max_wage: Decimal,
}

/// Per-day totals for one calendar day with at least one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayBucket {
    /// Sum of worked decimal hours on the day.
    pub total_hours: Decimal,
    /// Sum of effective wages on the day.
    pub total_wage: Decimal,
    /// Number of records logged on the day.
    pub record_count: usize,
}

/// Computes grand totals over the full record collection.
pub fn grand_totals(records: &[WorkRecord]) -> GrandTotals {
    let total_wage: Decimal = records.iter().map(|r| r.total_wage()).sum();
    let total_hours: Decimal = records.iter().map(|r| r.total_hours()).sum();
    let record_count = records.len();

    let average_wage_per_day = if record_count == 0 {
        Decimal::ZERO
    } else {
        total_wage / Decimal::from(record_count as u64)
    };

    GrandTotals {
        total_wage,
        total_hours,
        record_count,
        average_wage_per_day,
    }
}

/// Computes the recent-wage chart series.
///
/// Records are sorted ascending by date and the last `window` of them form
/// the series, still in ascending order. A window of zero yields an empty
/// series with `max_wage` of 1.
pub fn recent_wage_series(records: &[WorkRecord], window: usize) -> ChartSeries {
    let mut sorted: Vec<&WorkRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let start = sorted.len().saturating_sub(window);
    let points: Vec<ChartPoint> = sorted[start..]
        .iter()
        .map(|r| ChartPoint {
            label: r.date.format("%-d %b").to_string(),
            wage: r.total_wage(),
        })
        .collect();

    let max_wage = points
        .iter()
        .map(|p| p.wage)
        .max()
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ONE);

    ChartSeries { points, max_wage }
}

/// Groups records by calendar day, summing hours and wages per day.
///
/// Only the date component of each record's timestamp matters. Days with no
/// records are absent from the map rather than present with zero values, so
/// callers can distinguish "no data" from "zero recorded work".
pub fn bucket_by_day(records: &[WorkRecord]) -> BTreeMap<NaiveDate, DayBucket> {
    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for record in records {
        let bucket = buckets.entry(record.day()).or_default();
        bucket.total_hours += record.total_hours();
        bucket.total_wage += record.total_wage();
        bucket.record_count += 1;
    }

    buckets
}

/// Computes the work/break time ratio as a percentage.
///
/// Break time is summed over range records only; duration records carry no
/// break time by definition. When neither work nor break time has been
/// recorded the ratio is defined as 100 (all work, no break) rather than a
/// division by zero.
pub fn work_break_ratio(records: &[WorkRecord]) -> Decimal {
    let work_hours: Decimal = records.iter().map(|r| r.total_hours()).sum();
    let break_hours: Decimal = records
        .iter()
        .map(|r| Decimal::from(r.break_minutes()))
        .sum::<Decimal>()
        / Decimal::from(60);

    let total = work_hours + break_hours;
    if total.is_zero() {
        return Decimal::ONE_HUNDRED;
    }

    work_hours / total * Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionInput;
    use chrono::NaiveDateTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn range_record(id: &str, date: &str, start: &str, end: &str, break_m: u32) -> WorkRecord {
        WorkRecord {
            id: id.to_string(),
            date: make_datetime(date, "12:00:00"),
            input: SessionInput::Range {
                start_time: start.to_string(),
                end_time: end.to_string(),
                break_minutes: break_m,
            },
            rate: dec("10000"),
            wage_override: None,
        }
    }

    fn duration_record(id: &str, date: &str, hours: u32, minutes: u32) -> WorkRecord {
        WorkRecord {
            id: id.to_string(),
            date: make_datetime(date, "12:00:00"),
            input: SessionInput::Duration { hours, minutes },
            rate: dec("10000"),
            wage_override: None,
        }
    }

    /// AG-001: grand totals sum wages and hours over all records
    #[test]
    fn test_grand_totals() {
        let records = vec![
            range_record("a", "2026-01-05", "08:00", "16:00", 0), // 8h, 80000
            duration_record("b", "2026-01-06", 4, 30),            // 4.5h, 45000
        ];

        let totals = grand_totals(&records);
        assert_eq!(totals.total_hours, dec("12.5"));
        assert_eq!(totals.total_wage, dec("125000"));
        assert_eq!(totals.record_count, 2);
        assert_eq!(totals.average_wage_per_day, dec("62500"));
    }

    /// AG-002: empty collection yields all-zero totals
    #[test]
    fn test_grand_totals_empty() {
        let totals = grand_totals(&[]);
        assert_eq!(totals.total_wage, Decimal::ZERO);
        assert_eq!(totals.total_hours, Decimal::ZERO);
        assert_eq!(totals.record_count, 0);
        assert_eq!(totals.average_wage_per_day, Decimal::ZERO);
    }

    /// AG-003: chart window keeps the last N records in ascending order
    #[test]
    fn test_recent_wage_series_window() {
        let records: Vec<WorkRecord> = (1..=10)
            .map(|day| duration_record(&format!("r{day}"), &format!("2026-01-{day:02}"), day, 0))
            .collect();

        let series = recent_wage_series(&records, 7);
        assert_eq!(series.points.len(), 7);
        // Oldest point in the window is day 4 (4h * 10000).
        assert_eq!(series.points[0].wage, dec("40000"));
        assert_eq!(series.points[0].label, "4 Jan");
        // Newest is day 10.
        assert_eq!(series.points[6].wage, dec("100000"));
        assert_eq!(series.max_wage, dec("100000"));
    }

    /// AG-004: max wage is floored at 1 to keep scaling divisions safe
    #[test]
    fn test_recent_wage_series_max_floor() {
        let empty = recent_wage_series(&[], 7);
        assert!(empty.points.is_empty());
        assert_eq!(empty.max_wage, Decimal::ONE);

        let zero_wage = vec![duration_record("z", "2026-01-05", 0, 0)];
        let series = recent_wage_series(&zero_wage, 7);
        assert_eq!(series.max_wage, Decimal::ONE);
    }

    /// AG-005: day buckets group by date component only
    #[test]
    fn test_bucket_by_day() {
        let mut records = vec![
            range_record("a", "2026-01-05", "08:00", "12:00", 0), // 4h
            duration_record("b", "2026-01-05", 3, 0),             // same day, 3h
            duration_record("c", "2026-01-07", 5, 0),
        ];
        // Different time of day must land in the same bucket.
        records[1].date = make_datetime("2026-01-05", "20:15:00");

        let buckets = bucket_by_day(&records);
        assert_eq!(buckets.len(), 2);

        let jan5 = &buckets[&NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()];
        assert_eq!(jan5.total_hours, dec("7"));
        assert_eq!(jan5.total_wage, dec("70000"));
        assert_eq!(jan5.record_count, 2);

        // A day with no records is absent, not zero.
        assert!(
            !buckets.contains_key(&NaiveDate::from_ymd_opt(2026, 1, 6).unwrap())
        );
    }

    /// AG-006: bucket totals sum back to the grand totals
    #[test]
    fn test_bucket_totals_match_grand_totals() {
        let records: Vec<WorkRecord> = (0..10)
            .map(|i| {
                duration_record(
                    &format!("r{i}"),
                    &format!("2026-02-{:02}", (i % 3) + 1),
                    i + 1,
                    15,
                )
            })
            .collect();

        let buckets = bucket_by_day(&records);
        assert_eq!(buckets.len(), 3);

        let bucket_hours: Decimal = buckets.values().map(|b| b.total_hours).sum();
        let bucket_wage: Decimal = buckets.values().map(|b| b.total_wage).sum();
        let totals = grand_totals(&records);
        assert_eq!(bucket_hours, totals.total_hours);
        assert_eq!(bucket_wage, totals.total_wage);
    }

    /// AG-007: work/break ratio counts break time from range records only
    #[test]
    fn test_work_break_ratio() {
        let records = vec![
            range_record("a", "2026-01-05", "08:00", "17:00", 60), // 8h work, 1h break
            duration_record("b", "2026-01-06", 3, 0),              // 3h work, no break
        ];

        // 11 work hours out of 12 total.
        let ratio = work_break_ratio(&records);
        assert_eq!(ratio, dec("11") / dec("12") * Decimal::ONE_HUNDRED);
    }

    /// AG-008: ratio defaults to 100 when nothing has been recorded
    #[test]
    fn test_work_break_ratio_empty() {
        assert_eq!(work_break_ratio(&[]), Decimal::ONE_HUNDRED);

        let zero = vec![duration_record("z", "2026-01-05", 0, 0)];
        assert_eq!(work_break_ratio(&zero), Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_wage_override_flows_into_totals() {
        let mut record = duration_record("o", "2026-01-05", 8, 0);
        record.wage_override = Some(dec("123456"));

        let totals = grand_totals(std::slice::from_ref(&record));
        assert_eq!(totals.total_wage, dec("123456"));

        let series = recent_wage_series(std::slice::from_ref(&record), 7);
        assert_eq!(series.points[0].wage, dec("123456"));
    }
}
