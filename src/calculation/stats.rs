//! Stats aggregation logic.
//!
//! This module reduces a finished timeline into the aggregate attendance
//! metrics: percentage, leave count, working-day count, and the safe
//! buffer against the 80% threshold.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{AttendanceStats, DayInfo, DayStatus};

/// The attendance threshold the buffer is computed against.
const ATTENDANCE_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 1); // 0.8

/// Reduces a finished timeline into aggregate attendance statistics.
///
/// A pure reduction with no failure modes; the empty timeline yields 100%
/// and a zero buffer via the `working_days == 0` special case.
///
/// - `present_days` counts days with status `PRESENT`. Half-leave days do
///   not contribute partial presence.
/// - `leaves` is the sum of `leave_amount` over all days; off days not
///   promoted by the sandwich rule contribute 0.
/// - `working_days = present_days + leaves`, the effective denominator.
/// - `percentage = 100 · present_days / working_days`, formatted to two
///   decimal places ("100.00" when the denominator is zero).
/// - `buffer` solves `present_days / (working_days + X) >= 0.8` for the
///   maximal integer `X`, i.e. `floor(present_days / 0.8 − working_days)`,
///   clamped to zero when attendance is already below the threshold.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{calculate_attendance, calculate_stats};
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
/// // Mon 2026-01-12 through Fri 2026-01-16, all present
/// let timeline = calculate_attendance(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     &[],
///     &calendar,
/// );
/// let stats = calculate_stats(&timeline);
/// assert_eq!(stats.percentage, "100.00");
/// assert_eq!(stats.present_days, 5);
/// // floor(5 / 0.8 - 5) = floor(1.25) = 1
/// assert_eq!(stats.buffer, 1);
/// ```
pub fn calculate_stats(timeline: &[DayInfo]) -> AttendanceStats {
    let present_days = timeline
        .iter()
        .filter(|d| d.status == DayStatus::Present)
        .count() as u32;

    let leaves: Decimal = timeline.iter().map(|d| d.leave_amount).sum();

    let present = Decimal::from(present_days);
    let working_days = present + leaves;

    let percentage = if working_days.is_zero() {
        Decimal::from(100)
    } else {
        (Decimal::from(100) * present / working_days)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };

    let buffer = if working_days.is_zero() {
        0
    } else {
        let raw = (present / ATTENDANCE_THRESHOLD - working_days).floor();
        raw.to_i64().unwrap_or(0).max(0)
    };

    AttendanceStats {
        percentage: format!("{:.2}", percentage),
        present_days,
        leaves,
        working_days,
        buffer,
    }
}
