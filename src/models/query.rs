//! Query state and pagination models.
//!
//! This module defines the caller-held [`QueryState`] that drives the record
//! query engine, and the [`RecordPage`] it produces. The query engine is a
//! pure function of `(records, state)`; the state lives with the caller and
//! is never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::WorkRecord;

/// The number of records shown per page in the reference behavior.
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Direction of the date sort applied before pagination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Oldest records first. The reference default.
    #[default]
    Ascending,
    /// Newest records first.
    Descending,
}

/// Filter, sort and pagination state for a record listing.
///
/// Changing any filter field should be accompanied by a reset of
/// `page_number` to 1; the engine never errors on an out-of-range page but
/// will return an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Keep records dated on or after this calendar day, when set.
    pub date_range_start: Option<NaiveDate>,
    /// Keep records dated on or before this calendar day (inclusive of the
    /// whole day), when set.
    pub date_range_end: Option<NaiveDate>,
    /// Case-insensitive substring matched against the long-form date label
    /// or the wage amount. Empty matches everything.
    pub search_text: String,
    /// Direction of the date sort.
    pub sort_direction: SortDirection,
    /// 1-based page number into the filtered, sorted collection.
    pub page_number: usize,
    /// Number of records per page.
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            date_range_start: None,
            date_range_end: None,
            search_text: String::new(),
            sort_direction: SortDirection::default(),
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a filtered, sorted record listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPage {
    /// The records on the requested page, in sorted order.
    pub records: Vec<WorkRecord>,
    /// Total number of pages for the filtered collection, at least 1.
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_state() {
        let state = QueryState::default();
        assert_eq!(state.date_range_start, None);
        assert_eq!(state.date_range_end, None);
        assert!(state.search_text.is_empty());
        assert_eq!(state.sort_direction, SortDirection::Ascending);
        assert_eq!(state.page_number, 1);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_sort_direction_serialization() {
        assert_eq!(
            serde_json::to_string(&SortDirection::Ascending).unwrap(),
            "\"ascending\""
        );
        assert_eq!(
            serde_json::to_string(&SortDirection::Descending).unwrap(),
            "\"descending\""
        );
    }

    #[test]
    fn test_query_state_deserialization() {
        let json = r#"{
            "date_range_start": "2026-01-01",
            "date_range_end": "2026-01-31",
            "search_text": "monday",
            "sort_direction": "descending",
            "page_number": 2,
            "page_size": 7
        }"#;

        let state: QueryState = serde_json::from_str(json).unwrap();
        assert_eq!(
            state.date_range_start,
            Some(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        );
        assert_eq!(state.sort_direction, SortDirection::Descending);
        assert_eq!(state.page_number, 2);
    }
}
