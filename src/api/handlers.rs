//! HTTP request handlers for the wage accounting API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    bucket_by_day, filter_and_sort, grand_totals, query, recent_wage_series, summarize_period,
    work_break_ratio,
};
use crate::models::{SortDirection, WorkRecord};

use super::request::{ListParams, RecordRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalendarResponse, RecordPageResponse, RecordResponse,
    StatementResponse, SummaryResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/records", post(create_record_handler).get(list_records_handler))
        .route(
            "/records/:id",
            put(replace_record_handler).delete(delete_record_handler),
        )
        .route("/summary", get(summary_handler))
        .route("/calendar", get(calendar_handler))
        .route("/statement", get(statement_handler))
        .with_state(state)
}

/// Unpacks a JSON body, mapping rejections onto the error envelope.
fn triage_json(
    correlation_id: Uuid,
    payload: Result<Json<RecordRequest>, JsonRejection>,
) -> Result<RecordRequest, ApiError> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => Err(match rejection {
            JsonRejection::JsonDataError(err) => {
                // The body text carries the detailed error from serde
                let body_text = err.body_text();
                warn!(
                    correlation_id = %correlation_id,
                    error = %body_text,
                    "JSON data error"
                );
                if body_text.contains("missing field") {
                    ApiError::new("VALIDATION_ERROR", body_text)
                } else {
                    ApiError::malformed_json(body_text)
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "JSON syntax error"
                );
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
            }
            _ => ApiError::malformed_json("Failed to parse request body"),
        }),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error(error: crate::error::EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Rejects a record whose session resolves to zero worked time and that
/// carries no manual wage either.
fn validate_record(record: &WorkRecord) -> Result<(), ApiError> {
    if record.total_hours().is_zero() && record.wage_override.is_none() {
        return Err(ApiError::validation_error(
            "Session resolves to zero worked time and no wage override was provided",
        ));
    }
    Ok(())
}

/// Handler for POST /records.
///
/// Creates a work record from the raw session input. The rate defaults to
/// the profile's default rate and the date to the current time.
async fn create_record_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecordRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing record creation");

    let request = match triage_json(correlation_id, payload) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let record = WorkRecord {
        id: Uuid::new_v4().to_string(),
        date: request.date.unwrap_or_else(|| Utc::now().naive_utc()),
        input: request.input,
        rate: request.rate.unwrap_or(state.config().profile.default_rate),
        wage_override: request.wage_override,
    };

    if let Err(error) = validate_record(&record) {
        warn!(
            correlation_id = %correlation_id,
            record_id = %record.id,
            "Record rejected: zero worked time"
        );
        return bad_request(error);
    }

    let response = RecordResponse::from(&record);
    match state.repository().insert(record) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                record_id = %response.id,
                total_wage = %response.total_wage,
                "Record created"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Record creation failed");
            engine_error(err)
        }
    }
}

/// Handler for GET /records.
///
/// Runs the filter, sort and pagination pipeline over the stored
/// collection and returns the requested page with derived figures.
async fn list_records_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let records = match state.repository().load() {
        Ok(records) => records,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Record listing failed");
            return engine_error(err);
        }
    };

    let query_state = params.into_query_state(state.config().settings.page_size);
    let page = query(&records, &query_state);

    info!(
        correlation_id = %correlation_id,
        page = query_state.page_number,
        total_pages = page.total_pages,
        "Record listing completed"
    );

    let response = RecordPageResponse {
        records: page.records.iter().map(RecordResponse::from).collect(),
        total_pages: page.total_pages,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for PUT /records/:id.
///
/// Replaces a record wholesale, keeping its identifier and position.
/// Omitted date and rate fall back to the stored record's values; the wage
/// override is taken as sent, so omitting it clears a previous override.
async fn replace_record_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RecordRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, record_id = %id, "Processing record replacement");

    let request = match triage_json(correlation_id, payload) {
        Ok(request) => request,
        Err(error) => return bad_request(error),
    };

    let existing = match state.repository().find(&id) {
        Ok(existing) => existing,
        Err(err) => {
            warn!(correlation_id = %correlation_id, record_id = %id, "Record not found");
            return engine_error(err);
        }
    };

    let record = WorkRecord {
        id: existing.id,
        date: request.date.unwrap_or(existing.date),
        input: request.input,
        rate: request.rate.unwrap_or(existing.rate),
        wage_override: request.wage_override,
    };

    if let Err(error) = validate_record(&record) {
        warn!(
            correlation_id = %correlation_id,
            record_id = %id,
            "Replacement rejected: zero worked time"
        );
        return bad_request(error);
    }

    match state.repository().replace(&id, record) {
        Ok(replaced) => {
            let response = RecordResponse::from(&replaced);
            info!(
                correlation_id = %correlation_id,
                record_id = %response.id,
                total_wage = %response.total_wage,
                "Record replaced"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Record replacement failed");
            engine_error(err)
        }
    }
}

/// Handler for DELETE /records/:id.
async fn delete_record_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    match state.repository().remove(&id) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, record_id = %id, "Record deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, record_id = %id, error = %err, "Record deletion failed");
            engine_error(err)
        }
    }
}

/// Handler for GET /summary.
///
/// Computes the dashboard summary over the full collection: grand totals,
/// the work/break ratio and the recent-wage chart series.
async fn summary_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let records = match state.repository().load() {
        Ok(records) => records,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Summary failed");
            return engine_error(err);
        }
    };

    let totals = grand_totals(&records);
    let ratio = work_break_ratio(&records);
    let chart = recent_wage_series(&records, state.config().settings.chart_window);

    info!(
        correlation_id = %correlation_id,
        record_count = totals.record_count,
        total_wage = %totals.total_wage,
        "Summary completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(SummaryResponse::new(totals, ratio, chart)),
    )
        .into_response()
}

/// Handler for GET /calendar.
///
/// Groups the filtered collection by calendar day. Days with no records
/// are absent from the response rather than present with zeros.
async fn calendar_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let records = match state.repository().load() {
        Ok(records) => records,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calendar failed");
            return engine_error(err);
        }
    };

    let query_state = params.into_query_state(state.config().settings.page_size);
    let filtered = filter_and_sort(&records, &query_state);
    let buckets = bucket_by_day(&filtered);

    info!(
        correlation_id = %correlation_id,
        day_count = buckets.len(),
        "Calendar completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(CalendarResponse::from(buckets)),
    )
        .into_response()
}

/// Handler for GET /statement.
///
/// Computes a period wage statement over the filtered collection. The
/// window is always summarized in ascending date order so the labels span
/// from the earliest to the latest record.
async fn statement_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let records = match state.repository().load() {
        Ok(records) => records,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Statement failed");
            return engine_error(err);
        }
    };

    let mut query_state = params.into_query_state(state.config().settings.page_size);
    query_state.sort_direction = SortDirection::Ascending;
    let filtered = filter_and_sort(&records, &query_state);
    let statement = summarize_period(&filtered);

    info!(
        correlation_id = %correlation_id,
        day_count = statement.day_count,
        total_wage = %statement.total_wage,
        "Statement completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(StatementResponse::new(&state.config().profile, statement)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EngineSettings, Profile, WagebookConfig};
    use crate::store::{MemoryStore, RecordRepository};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let repository = RecordRepository::new(Arc::new(MemoryStore::new()), "budi");
        let config = WagebookConfig {
            profile: Profile {
                employee_name: "Budi Santoso".to_string(),
                employee_role: "Staff Operasional".to_string(),
                employee_id: "TM-0042".to_string(),
                company_name: "PT. TimeMaster Indonesia".to_string(),
                company_address: "Malang, Jawa Timur".to_string(),
                default_rate: Decimal::from_str("10000").unwrap(),
                monthly_target: None,
            },
            settings: EngineSettings::default(),
        };
        AppState::new(repository, config)
    }

    fn post_record(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/records")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_record_returns_201_with_derived_figures() {
        let router = create_router(create_test_state());

        let body = r#"{
            "date": "2026-01-05T09:00:00",
            "mode": "range",
            "start_time": "09:00",
            "end_time": "17:30",
            "break_minutes": 30
        }"#;

        let response = router.oneshot(post_record(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let record: RecordResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(record.total_hours, Decimal::from_str("8").unwrap());
        // Default rate applied from the profile
        assert_eq!(record.rate, Decimal::from_str("10000").unwrap());
        assert_eq!(record.total_wage, Decimal::from_str("80000").unwrap());
        assert!(!record.overnight);
    }

    #[tokio::test]
    async fn test_create_record_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router.oneshot(post_record("{invalid json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_create_zero_duration_record_returns_400() {
        let router = create_router(create_test_state());

        let body = r#"{
            "mode": "range",
            "start_time": "09:00",
            "end_time": "09:30",
            "break_minutes": 60
        }"#;

        let response = router.oneshot(post_record(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_zero_duration_with_wage_override_is_accepted() {
        let router = create_router(create_test_state());

        let body = r#"{
            "mode": "duration",
            "hours": 0,
            "minutes": 0,
            "wage_override": "150000"
        }"#;

        let response = router.oneshot(post_record(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let record: RecordResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(record.total_wage, Decimal::from_str("150000").unwrap());
    }

    #[tokio::test]
    async fn test_replace_unknown_record_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/records/ghost")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"mode": "duration", "hours": 1, "minutes": 0}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "RECORD_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_delete_unknown_record_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/records/ghost")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_summary_on_empty_store() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/summary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let summary: SummaryResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.total_wage, Decimal::ZERO);
        assert_eq!(summary.work_break_ratio, Decimal::ONE_HUNDRED);
        assert_eq!(summary.chart.max_wage, Decimal::ONE);
        assert!(summary.chart.points.is_empty());
    }
}
