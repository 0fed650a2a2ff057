//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_attendance, calculate_stats};
use crate::models::{AttendanceReport, UserRecord};

use super::request::{CalculateRequest, SaveRecordRequest};
use super::response::{ApiError, ApiErrorResponse, SaveRecordResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/records", get(list_records_handler).post(save_record_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection onto an API error body.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
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
    }
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a date range plus user records and returns the computed
/// timeline and aggregate statistics.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let records: Vec<UserRecord> = request.records.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let timeline = calculate_attendance(
        request.start_date,
        request.end_date,
        &records,
        state.calendar(),
    );
    let stats = calculate_stats(&timeline);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        start_date = %request.start_date,
        end_date = %request.end_date,
        records_count = records.len(),
        timeline_days = timeline.len(),
        percentage = %stats.percentage,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    let report = AttendanceReport {
        report_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        start_date: request.start_date,
        end_date: request.end_date,
        timeline,
        stats,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

/// Handler for GET /records endpoint.
///
/// Returns all persisted user records.
async fn list_records_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let store = state.store().lock().await;
    match store.read() {
        Ok(records) => {
            info!(
                correlation_id = %correlation_id,
                records_count = records.len(),
                "Fetched records"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(records),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Failed to fetch records");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /records endpoint.
///
/// Upserts the record for a date (last write wins), or deletes it when the
/// requested status is `null`.
async fn save_record_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRecordRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let store = state.store().lock().await;
    let result = match request.status {
        Some(status) => store
            .upsert(UserRecord {
                date: request.date,
                status,
            })
            .map(|saved| SaveRecordResponse {
                date: saved.date,
                status: Some(saved.status),
            }),
        None => store.delete(request.date).map(|()| SaveRecordResponse {
            date: request.date,
            status: None,
        }),
    };

    match result {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                date = %response.date,
                deleted = response.status.is_none(),
                "Record saved"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Failed to save record");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CalendarMetadata, HolidayCalendar};
    use crate::models::HolidayEntry;
    use crate::storage::FileRecordStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use tower::ServiceExt;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn test_calendar() -> HolidayCalendar {
        HolidayCalendar::new(
            CalendarMetadata {
                name: "Test Calendar".to_string(),
                year: 2026,
                region: "national".to_string(),
            },
            vec![HolidayEntry {
                date: make_date("2026-12-25"),
                name: "Christmas".to_string(),
            }],
        )
    }

    fn create_test_state() -> AppState {
        let store_path = std::env::temp_dir()
            .join(format!("attendance-api-{}", Uuid::new_v4()))
            .join("records.json");
        AppState::new(test_calendar(), FileRecordStore::new(store_path))
    }

    #[tokio::test]
    async fn test_api_001_valid_calculate_returns_200() {
        let router = create_router(create_test_state());

        let body = r#"{
            "start_date": "2026-01-12",
            "end_date": "2026-01-16",
            "records": []
        }"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        // Verify Content-Type header
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let report: AttendanceReport = serde_json::from_slice(&body).unwrap();

        assert_eq!(report.timeline.len(), 5);
        assert_eq!(report.stats.present_days, 5);
        assert_eq!(report.stats.percentage, "100.00");
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_start_date_returns_400() {
        let router = create_router(create_test_state());

        let body = r#"{ "end_date": "2026-01-16" }"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("start_date"),
            "Expected error message to mention missing field or start_date, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_inverted_range_returns_empty_timeline() {
        let router = create_router(create_test_state());

        let body = r#"{ "start_date": "2026-01-16", "end_date": "2026-01-12" }"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let report: AttendanceReport = serde_json::from_slice(&body).unwrap();

        assert!(report.timeline.is_empty());
        assert_eq!(report.stats.percentage, "100.00");
        assert_eq!(report.stats.buffer, 0);
    }

    #[tokio::test]
    async fn test_records_upsert_and_list() {
        let state = create_test_state();
        let router = create_router(state);

        let save_body = r#"{ "date": "2026-01-09", "status": "LEAVE_FULL" }"#;
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/records")
                    .header("Content-Type", "application/json")
                    .body(Body::from(save_body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/records")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let records: Vec<UserRecord> = serde_json::from_slice(&body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, make_date("2026-01-09"));
    }

    #[tokio::test]
    async fn test_records_null_status_deletes() {
        let state = create_test_state();
        let router = create_router(state);

        let save_body = r#"{ "date": "2026-01-09", "status": "LEAVE_FULL" }"#;
        router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/records")
                    .header("Content-Type", "application/json")
                    .body(Body::from(save_body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let delete_body = r#"{ "date": "2026-01-09", "status": null }"#;
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/records")
                    .header("Content-Type", "application/json")
                    .body(Body::from(delete_body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let saved: SaveRecordResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(saved.status, None);

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/records")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let records: Vec<UserRecord> = serde_json::from_slice(&body).unwrap();
        assert!(records.is_empty());
    }
}
