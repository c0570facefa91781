//! Record query pipeline: filter, sort and paginate.
//!
//! This module implements the listing pipeline applied to a record
//! collection for display, independent of aggregation. The stages run in a
//! fixed order: date-range filter, text filter, stable date sort, then
//! pagination. The engine is a pure function of `(records, state)` and holds
//! no state of its own; resetting the page number when a filter changes is
//! the caller's responsibility.

use crate::models::{QueryState, RecordPage, SortDirection, WorkRecord};

/// Applies the filter and sort stages of the pipeline, without pagination.
///
/// This is the sub-collection a period statement is computed over, so it is
/// exposed separately from [`query`].
///
/// The date-range bounds compare calendar days: the end bound is inclusive
/// of the whole day, so a same-day range keeps that day's records. The text
/// filter keeps records whose long-form date label (e.g. "Monday, 5 January
/// 2026") or wage amount contains the search text case-insensitively; an
/// empty search matches everything. The sort is stable, preserving the
/// original relative order of records sharing a timestamp.
pub fn filter_and_sort(records: &[WorkRecord], state: &QueryState) -> Vec<WorkRecord> {
    let needle = state.search_text.to_lowercase();

    let mut result: Vec<WorkRecord> = records
        .iter()
        .filter(|r| {
            if let Some(start) = state.date_range_start {
                if r.day() < start {
                    return false;
                }
            }
            if let Some(end) = state.date_range_end {
                if r.day() > end {
                    return false;
                }
            }
            if needle.is_empty() {
                return true;
            }
            let date_label = r.date.format("%A, %-d %B %Y").to_string().to_lowercase();
            let wage_label = r.total_wage().normalize().to_string();
            date_label.contains(&needle) || wage_label.contains(&needle)
        })
        .cloned()
        .collect();

    match state.sort_direction {
        SortDirection::Ascending => result.sort_by(|a, b| a.date.cmp(&b.date)),
        SortDirection::Descending => result.sort_by(|a, b| b.date.cmp(&a.date)),
    }

    result
}

/// Runs the full pipeline and returns the requested page.
///
/// `total_pages` is the page count of the filtered collection with a floor
/// of 1, so a pager always has a page to stand on. A `page_number` beyond
/// the last page returns an empty page alongside the correct `total_pages`;
/// it is never an error.
pub fn query(records: &[WorkRecord], state: &QueryState) -> RecordPage {
    let filtered = filter_and_sort(records, state);

    let page_size = state.page_size.max(1);
    let total_pages = filtered.len().div_ceil(page_size).max(1);

    // Saturate so an absurd page number lands past the end instead of
    // overflowing the offset arithmetic.
    let start = state.page_number.max(1).saturating_sub(1).saturating_mul(page_size);
    let page_records = if start >= filtered.len() {
        Vec::new()
    } else {
        let end = (start + page_size).min(filtered.len());
        filtered[start..end].to_vec()
    };

    RecordPage {
        records: page_records,
        total_pages,
    }
}
