//! Attendance report envelope.
//!
//! This module defines the [`AttendanceReport`] returned by the `/calculate`
//! endpoint: the computed timeline, its aggregate statistics, and metadata
//! identifying the calculation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AttendanceStats, DayInfo};

/// The full result of an attendance calculation.
///
/// Created fresh on every request; the timeline is discarded and recomputed
/// whenever the input range or record set changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// Unique identifier for this calculation.
    pub report_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the report.
    pub engine_version: String,
    /// The start of the requested range (inclusive).
    pub start_date: NaiveDate,
    /// The end of the requested range (inclusive).
    pub end_date: NaiveDate,
    /// One entry per calendar day in the range, chronological.
    pub timeline: Vec<DayInfo>,
    /// Aggregate statistics over the timeline.
    pub stats: AttendanceStats,
}
