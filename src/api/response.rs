//! Response types for the wage accounting API.
//!
//! This module defines the JSON response structures for the record
//! endpoints, along with the error envelope and its mapping from engine
//! errors.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{ChartSeries, DayBucket, GrandTotals};
use crate::config::Profile;
use crate::error::EngineError;
use crate::models::{PeriodStatement, SessionInput, WorkRecord};

/// A work record with its derived figures.
///
/// The stored record carries only the raw session input; the decimal hours
/// and effective wage are computed on the way out so a stored record can
/// never disagree with its derived figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    /// The record identifier.
    pub id: String,
    /// Timestamp of the record.
    pub date: NaiveDateTime,
    /// The raw session input.
    #[serde(flatten)]
    pub input: SessionInput,
    /// Hourly rate snapshot.
    pub rate: Decimal,
    /// Manual wage, when one was set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wage_override: Option<Decimal>,
    /// Derived decimal hours.
    pub total_hours: Decimal,
    /// Derived effective wage.
    pub total_wage: Decimal,
    /// Whether a range session wraps past midnight.
    pub overnight: bool,
}

impl From<&WorkRecord> for RecordResponse {
    fn from(record: &WorkRecord) -> Self {
        Self {
            id: record.id.clone(),
            date: record.date,
            input: record.input.clone(),
            rate: record.rate,
            wage_override: record.wage_override,
            total_hours: record.total_hours(),
            total_wage: record.total_wage(),
            overnight: record.is_overnight(),
        }
    }
}

/// One page of the record listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPageResponse {
    /// The records on the requested page.
    pub records: Vec<RecordResponse>,
    /// Total pages in the filtered collection, at least 1.
    pub total_pages: usize,
}

/// One bar of the recent-wage chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPointResponse {
    /// Short calendar label (e.g. "15 Jan").
    pub label: String,
    /// The effective wage of the record.
    pub wage: Decimal,
}

/// The recent-wage chart series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse {
    /// The windowed points, oldest first.
    pub points: Vec<ChartPointResponse>,
    /// The maximum wage in the window, floored at 1.
    pub max_wage: Decimal,
}

impl From<ChartSeries> for ChartResponse {
    fn from(series: ChartSeries) -> Self {
        Self {
            points: series
                .points
                .into_iter()
                .map(|p| ChartPointResponse {
                    label: p.label,
                    wage: p.wage,
                })
                .collect(),
            max_wage: series.max_wage,
        }
    }
}

/// Dashboard summary over the full record collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Sum of effective wages.
    pub total_wage: Decimal,
    /// Sum of worked decimal hours.
    pub total_hours: Decimal,
    /// Number of records.
    pub record_count: usize,
    /// Average wage per record, zero when empty.
    pub average_wage_per_day: Decimal,
    /// Work time as a percentage of work plus break time.
    pub work_break_ratio: Decimal,
    /// The recent-wage chart series.
    pub chart: ChartResponse,
}

impl SummaryResponse {
    /// Assembles the summary from its computed parts.
    pub fn new(totals: GrandTotals, ratio: Decimal, chart: ChartSeries) -> Self {
        Self {
            total_wage: totals.total_wage,
            total_hours: totals.total_hours,
            record_count: totals.record_count,
            average_wage_per_day: totals.average_wage_per_day,
            work_break_ratio: ratio,
            chart: chart.into(),
        }
    }
}

/// Per-day totals for the calendar view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayBucketResponse {
    /// Sum of worked decimal hours on the day.
    pub total_hours: Decimal,
    /// Sum of effective wages on the day.
    pub total_wage: Decimal,
    /// Number of records logged on the day.
    pub record_count: usize,
}

/// The calendar view: one bucket per day with at least one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// Day buckets keyed by calendar date, in date order.
    pub days: BTreeMap<NaiveDate, DayBucketResponse>,
}

impl From<BTreeMap<NaiveDate, DayBucket>> for CalendarResponse {
    fn from(buckets: BTreeMap<NaiveDate, DayBucket>) -> Self {
        Self {
            days: buckets
                .into_iter()
                .map(|(day, bucket)| {
                    (
                        day,
                        DayBucketResponse {
                            total_hours: bucket.total_hours,
                            total_wage: bucket.total_wage,
                            record_count: bucket.record_count,
                        },
                    )
                })
                .collect(),
        }
    }
}

/// A period wage statement with the profile fields printed on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementResponse {
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's role or title.
    pub employee_role: String,
    /// The employee identifier.
    pub employee_id: String,
    /// The company name.
    pub company_name: String,
    /// The company address.
    pub company_address: String,
    /// Short label of the first record in the window (e.g. "5 Jan").
    pub start_label: String,
    /// Short label of the last record in the window.
    pub end_label: String,
    /// Number of wage lines in the window.
    pub day_count: usize,
    /// Sum of worked decimal hours in the window.
    pub total_hours: Decimal,
    /// Sum of effective wages in the window.
    pub total_wage: Decimal,
    /// Effective average rate, rounded to a whole currency unit.
    pub average_rate: Decimal,
}

impl StatementResponse {
    /// Stamps the profile onto a computed period statement.
    pub fn new(profile: &Profile, statement: PeriodStatement) -> Self {
        Self {
            employee_name: profile.employee_name.clone(),
            employee_role: profile.employee_role.clone(),
            employee_id: profile.employee_id.clone(),
            company_name: profile.company_name.clone(),
            company_address: profile.company_address.clone(),
            start_label: statement.start_label,
            end_label: statement.end_label,
            day_count: statement.day_count,
            total_hours: statement.total_hours,
            total_wage: statement.total_wage,
            average_rate: statement.average_rate,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a record not found error response.
    pub fn record_not_found(id: &str) -> Self {
        Self::with_details(
            "RECORD_NOT_FOUND",
            format!("Work record not found: {}", id),
            format!("No work record with id '{}' exists in the collection", id),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::StoreReadError { collection, message, .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    format!("Failed to read collection '{}'", collection),
                    message,
                ),
            },
            EngineError::StoreWriteError { collection, message, .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    format!("Failed to write collection '{}'", collection),
                    message,
                ),
            },
            EngineError::SerializationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Failed to convert record data",
                    message,
                ),
            },
            EngineError::RecordNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::record_not_found(&id),
            },
        }
    }
}
