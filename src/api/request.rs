//! Request types for the attendance engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/records` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{RecordStatus, UserRecord};

/// Request body for the `/calculate` endpoint.
///
/// Contains the inclusive date range and the user records to apply. An
/// `end_date` before `start_date` produces an empty timeline, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// The start of the range (inclusive).
    pub start_date: NaiveDate,
    /// The end of the range (inclusive).
    pub end_date: NaiveDate,
    /// User-entered overrides; need not be sorted or deduplicated.
    #[serde(default)]
    pub records: Vec<UserRecordRequest>,
}

/// A user record in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecordRequest {
    /// The calendar day the override applies to.
    pub date: NaiveDate,
    /// The user-entered status.
    pub status: RecordStatus,
}

impl From<UserRecordRequest> for UserRecord {
    fn from(req: UserRecordRequest) -> Self {
        UserRecord {
            date: req.date,
            status: req.status,
        }
    }
}

/// Request body for `POST /records`.
///
/// A `null` status deletes the record for the date; any other status
/// upserts it (last write wins per date).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRecordRequest {
    /// The calendar day the mutation applies to.
    pub date: NaiveDate,
    /// The status to store, or `null` to delete.
    pub status: Option<RecordStatus>,
}
