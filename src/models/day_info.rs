//! Computed day model.
//!
//! This module defines the [`DayInfo`] struct and [`DayStatus`] enum, the
//! per-day unit produced by the timeline builder and consumed by the stats
//! aggregator and callers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RecordStatus;

/// The computed status of a single calendar day.
///
/// Both user-entered half-leave variants collapse to [`DayStatus::LeaveHalf`]
/// here; the raw variant survives in [`DayInfo::original_status`].
///
/// # Example
///
/// ```
/// use attendance_engine::models::DayStatus;
///
/// let json = serde_json::to_string(&DayStatus::SandwichLeave).unwrap();
/// assert_eq!(json, "\"SANDWICH_LEAVE\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayStatus {
    /// A holiday or weekend with no overriding record.
    Off,
    /// A full day of leave.
    LeaveFull,
    /// A half day of leave (morning or afternoon).
    LeaveHalf,
    /// An off day promoted to a full leave by the sandwich rule.
    SandwichLeave,
    /// A working day attended (or an off day explicitly marked worked).
    Present,
}

/// The computed result for exactly one calendar day.
///
/// Built fresh on every calculation; never mutated after the sandwich pass
/// completes.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{DayInfo, DayStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = DayInfo {
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     status: DayStatus::Present,
///     is_weekend: false,
///     is_holiday: false,
///     is_sandwich: false,
///     leave_amount: Decimal::ZERO,
///     holiday_name: None,
///     original_status: None,
/// };
/// assert_eq!(day.status, DayStatus::Present);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInfo {
    /// The calendar date.
    pub date: NaiveDate,
    /// The computed status for the day.
    pub status: DayStatus,
    /// True for Sundays and 2nd/4th Saturdays, independent of `status`.
    pub is_weekend: bool,
    /// True if the day matched a holiday entry, independent of `status`.
    pub is_holiday: bool,
    /// True only if the sandwich rule promoted this day.
    pub is_sandwich: bool,
    /// Leave units charged for the day: 0, 0.5, or 1.
    pub leave_amount: Decimal,
    /// The holiday display name, present iff the day matched a holiday entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    /// The raw user record status if a record existed for the day.
    ///
    /// Preserved so callers can implement status-cycling without
    /// re-deriving it from the computed status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_status: Option<RecordStatus>,
}
