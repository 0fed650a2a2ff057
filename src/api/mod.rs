//! HTTP API layer for the attendance engine.
//!
//! This module provides the REST API endpoints for attendance calculation
//! and record persistence, built on the Axum web framework.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculateRequest, SaveRecordRequest, UserRecordRequest};
pub use response::{ApiError, ApiErrorResponse, SaveRecordResponse};
pub use state::AppState;
