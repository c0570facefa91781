//! Core data models for the Time-and-Wage Accounting Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod period_statement;
mod query;
mod work_record;

pub use period_statement::PeriodStatement;
pub use query::{DEFAULT_PAGE_SIZE, QueryState, RecordPage, SortDirection};
pub use work_record::{SessionInput, WorkRecord};
