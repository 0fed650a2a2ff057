//! Timeline building logic.
//!
//! This module expands an inclusive date range into one [`DayInfo`] per
//! calendar day, applying holiday/weekend defaults and user-record
//! overrides. The sandwich rule is applied as a second pass by
//! [`calculate_attendance`].

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::HolidayCalendar;
use crate::models::{DayInfo, DayStatus, RecordStatus, UserRecord};

use super::sandwich::apply_sandwich_rule;
use super::weekend::is_weekend_off;

/// Builds the raw per-day timeline for an inclusive date range.
///
/// Produces one [`DayInfo`] per calendar day in `[start, end]`, ordered
/// chronologically with no gaps and no duplicates. An `end` before `start`
/// yields an empty vector, not an error.
///
/// Per day:
/// - the day is a holiday iff its date matches a calendar entry;
/// - the day is a weekend iff it is a Sunday or a 2nd/4th Saturday;
/// - the default status is `OFF` for holidays/weekends, `PRESENT` otherwise;
/// - a matching [`UserRecord`] overrides the default regardless of the
///   holiday/weekend flags (an explicit `PRESENT` record clears an `OFF`
///   default, letting a user mark a holiday as worked);
/// - `holiday_name` and `original_status` are recorded unconditionally, so
///   a day can be simultaneously a holiday and a leave day.
///
/// Records need not be sorted or deduplicated; when the one-record-per-date
/// invariant is violated the first match wins.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::build_timeline;
/// use attendance_engine::config::{CalendarMetadata, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(
///     CalendarMetadata {
///         name: "Empty".to_string(),
///         year: 2026,
///         region: "national".to_string(),
///     },
///     vec![],
/// );
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
/// let timeline = build_timeline(start, end, &[], &calendar);
/// assert_eq!(timeline.len(), 5);
/// ```
pub fn build_timeline(
    start: NaiveDate,
    end: NaiveDate,
    records: &[UserRecord],
    calendar: &HolidayCalendar,
) -> Vec<DayInfo> {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| build_day(day, records, calendar))
        .collect()
}

/// Classifies a single calendar day.
fn build_day(day: NaiveDate, records: &[UserRecord], calendar: &HolidayCalendar) -> DayInfo {
    let holiday = calendar.holiday_on(day);
    let weekend = is_weekend_off(day);
    let is_off = holiday.is_some() || weekend;

    let record = records.iter().find(|r| r.date == day);

    let mut status = if is_off {
        DayStatus::Off
    } else {
        DayStatus::Present
    };
    let mut leave_amount = Decimal::ZERO;

    if let Some(record) = record {
        match record.status {
            RecordStatus::LeaveFull => {
                status = DayStatus::LeaveFull;
                leave_amount = Decimal::ONE;
            }
            RecordStatus::LeaveHalfMorning | RecordStatus::LeaveHalfAfternoon => {
                status = DayStatus::LeaveHalf;
                leave_amount = Decimal::new(5, 1);
            }
            RecordStatus::Present => {
                status = DayStatus::Present;
                leave_amount = Decimal::ZERO;
            }
        }
    }

    DayInfo {
        date: day,
        status,
        is_weekend: weekend,
        is_holiday: holiday.is_some(),
        is_sandwich: false,
        leave_amount,
        holiday_name: holiday.map(|h| h.name.clone()),
        original_status: record.map(|r| r.status),
    }
}

/// Computes the full attendance timeline for a date range.
///
/// Composes [`build_timeline`] with the sandwich rule pass: contiguous runs
/// of `OFF` days bordered on both sides by leave are promoted to
/// `SANDWICH_LEAVE`. This is the engine's primary entry point; the result
/// feeds [`calculate_stats`].
///
/// [`calculate_stats`]: crate::calculation::calculate_stats
pub fn calculate_attendance(
    start: NaiveDate,
    end: NaiveDate,
    records: &[UserRecord],
    calendar: &HolidayCalendar,
) -> Vec<DayInfo> {
    let mut timeline = build_timeline(start, end, records, calendar);
    apply_sandwich_rule(&mut timeline);
    timeline
}
