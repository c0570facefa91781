//! HTTP API module for the Time-and-Wage Accounting Engine.
//!
//! This module provides the REST endpoints for managing work records and
//! reading the derived summaries, calendar buckets and period statements.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ListParams, RecordRequest};
pub use response::{
    ApiError, CalendarResponse, RecordPageResponse, RecordResponse, StatementResponse,
    SummaryResponse,
};
pub use state::AppState;
