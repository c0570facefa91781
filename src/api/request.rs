//! Request types for the wage accounting API.
//!
//! This module defines the JSON body for the record endpoints and the
//! query parameters for the listing endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{QueryState, SessionInput, SortDirection};

/// Request body for creating or replacing a work record.
///
/// The session input is flattened into the body, so the JSON carries a
/// `mode` discriminator alongside the mode's own fields:
///
/// ```json
/// {
///     "date": "2026-01-05T09:00:00",
///     "mode": "range",
///     "start_time": "09:00",
///     "end_time": "17:00",
///     "break_minutes": 30,
///     "rate": "10000"
/// }
/// ```
///
/// An omitted `date` defaults to the current time on create, and to the
/// stored record's date on replace. An omitted `rate` defaults to the
/// profile's default rate on create, and to the stored rate on replace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    /// Timestamp of the record.
    #[serde(default)]
    pub date: Option<NaiveDateTime>,
    /// The session input in either entry mode.
    #[serde(flatten)]
    pub input: SessionInput,
    /// Hourly rate snapshot for this record.
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// Manual wage that bypasses the computation when present.
    #[serde(default)]
    pub wage_override: Option<Decimal>,
}

/// Query parameters shared by the listing, calendar and statement
/// endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Inclusive start of the date-range filter.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Inclusive end of the date-range filter.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Free-text filter on date labels and wage amounts.
    #[serde(default)]
    pub search: Option<String>,
    /// Sort direction by record date.
    #[serde(default)]
    pub sort: Option<SortDirection>,
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<usize>,
    /// Page size override.
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl ListParams {
    /// Converts the parameters into a query state, filling omitted values
    /// with the configured defaults.
    pub fn into_query_state(self, default_page_size: usize) -> QueryState {
        QueryState {
            date_range_start: self.start_date,
            date_range_end: self.end_date,
            search_text: self.search.unwrap_or_default(),
            sort_direction: self.sort.unwrap_or_default(),
            page_number: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(default_page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_range_record_request() {
        let json = r#"{
            "date": "2026-01-05T09:00:00",
            "mode": "range",
            "start_time": "09:00",
            "end_time": "17:00",
            "break_minutes": 30,
            "rate": "10000"
        }"#;

        let request: RecordRequest = serde_json::from_str(json).unwrap();
        assert!(request.date.is_some());
        assert_eq!(request.rate, Some(Decimal::from_str("10000").unwrap()));
        assert!(matches!(
            request.input,
            SessionInput::Range { break_minutes: 30, .. }
        ));
    }

    #[test]
    fn test_deserialize_duration_record_request_with_defaults() {
        let json = r#"{
            "mode": "duration",
            "hours": 7,
            "minutes": 30
        }"#;

        let request: RecordRequest = serde_json::from_str(json).unwrap();
        assert!(request.date.is_none());
        assert!(request.rate.is_none());
        assert!(request.wage_override.is_none());
        assert_eq!(
            request.input,
            SessionInput::Duration { hours: 7, minutes: 30 }
        );
    }

    #[test]
    fn test_list_params_fill_defaults() {
        let state = ListParams::default().into_query_state(7);
        assert_eq!(state.page_number, 1);
        assert_eq!(state.page_size, 7);
        assert_eq!(state.sort_direction, SortDirection::Ascending);
        assert!(state.search_text.is_empty());
    }

    #[test]
    fn test_list_params_override_defaults() {
        let params = ListParams {
            search: Some("monday".to_string()),
            sort: Some(SortDirection::Descending),
            page: Some(3),
            page_size: Some(10),
            ..ListParams::default()
        };

        let state = params.into_query_state(7);
        assert_eq!(state.search_text, "monday");
        assert_eq!(state.sort_direction, SortDirection::Descending);
        assert_eq!(state.page_number, 3);
        assert_eq!(state.page_size, 10);
    }
}
