//! Time-and-Wage Accounting Engine
//!
//! This crate turns raw work-session inputs (a wall-clock start/end range with
//! a break deduction, or an explicit hours/minutes pair) into decimal-hour
//! durations and wage amounts, and computes the read-side views over the
//! resulting record collection: grand totals, per-day calendar buckets, chart
//! series, filtered and paginated listings, and period statements.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
