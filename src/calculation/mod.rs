//! Calculation logic for the Time-and-Wage Accounting Engine.
//!
//! This module contains all the calculation functions of the engine:
//! duration resolution (wall-clock ranges with overnight handling and break
//! deduction, or explicit hours/minutes pairs), wage computation with
//! flooring to whole currency units, aggregate summaries (grand totals,
//! per-day buckets, chart series, work/break ratio), the record query
//! pipeline (filter, sort, paginate), and period statement aggregation.
//!
//! Every function here is pure and infallible: malformed numeric input is
//! coerced to zero and every division-by-zero site has a guarded default.

mod aggregate;
mod duration;
mod period_slip;
mod query;
mod wage;

pub use aggregate::{
    CHART_WINDOW, ChartPoint, ChartSeries, DayBucket, GrandTotals, bucket_by_day, grand_totals,
    recent_wage_series, work_break_ratio,
};
pub use duration::{
    MINUTES_PER_DAY, ResolvedDuration, clock_minutes, resolve_duration, resolve_range,
};
pub use period_slip::summarize_period;
pub use query::{filter_and_sort, query};
pub use wage::compute_wage;
