//! User record model and related types.
//!
//! This module defines the [`UserRecord`] struct and [`RecordStatus`] enum
//! representing user-entered per-day attendance overrides.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The status a user can assign to a single day.
///
/// These are the raw, user-entered statuses as persisted by the record
/// store. The timeline builder maps them onto computed [`DayStatus`]
/// values (both half-leave variants collapse to `LEAVE_HALF`).
///
/// [`DayStatus`]: crate::models::DayStatus
///
/// # Example
///
/// ```
/// use attendance_engine::models::RecordStatus;
///
/// let json = serde_json::to_string(&RecordStatus::LeaveHalfMorning).unwrap();
/// assert_eq!(json, "\"LEAVE_HALF_MORNING\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    /// Explicitly present, clearing an OFF default on a holiday or weekend.
    Present,
    /// A full day of leave (1 leave unit).
    LeaveFull,
    /// Morning half-day leave (0.5 leave units).
    LeaveHalfMorning,
    /// Afternoon half-day leave (0.5 leave units).
    LeaveHalfAfternoon,
}

impl RecordStatus {
    /// Returns the leave units charged for this status.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::RecordStatus;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(RecordStatus::LeaveFull.leave_amount(), Decimal::ONE);
    /// assert_eq!(RecordStatus::LeaveHalfMorning.leave_amount(), Decimal::new(5, 1));
    /// assert_eq!(RecordStatus::Present.leave_amount(), Decimal::ZERO);
    /// ```
    pub fn leave_amount(&self) -> Decimal {
        match self {
            RecordStatus::Present => Decimal::ZERO,
            RecordStatus::LeaveFull => Decimal::ONE,
            RecordStatus::LeaveHalfMorning | RecordStatus::LeaveHalfAfternoon => Decimal::new(5, 1),
        }
    }

    /// Returns true for either half-leave variant.
    pub fn is_half_leave(&self) -> bool {
        matches!(
            self,
            RecordStatus::LeaveHalfMorning | RecordStatus::LeaveHalfAfternoon
        )
    }
}

/// A user-entered attendance override for one calendar day.
///
/// The record store enforces at most one record per date (last write wins);
/// the timeline builder takes the first match when handed duplicates.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{RecordStatus, UserRecord};
/// use chrono::NaiveDate;
///
/// let record = UserRecord {
///     date: NaiveDate::from_ymd_opt(2026, 1, 9).unwrap(),
///     status: RecordStatus::LeaveFull,
/// };
/// assert_eq!(record.status, RecordStatus::LeaveFull);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// The calendar day the override applies to (date-only semantics).
    pub date: NaiveDate,
    /// The user-entered status for the day.
    pub status: RecordStatus,
}
