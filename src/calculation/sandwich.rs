//! Sandwich leave inference.
//!
//! An off day (holiday/weekend) that falls between two leave days is
//! charged as a full leave, to discourage leave-bracketing abuse. This
//! module implements that rule as a single in-place pass over an
//! already-built timeline.

use rust_decimal::Decimal;

use crate::models::{DayInfo, DayStatus};

/// Promotes sandwiched `OFF` runs to `SANDWICH_LEAVE`, in place.
///
/// A maximal contiguous run of `OFF`-status days triggers iff a day exists
/// immediately before the run AND immediately after it, and both boundary
/// days have `leave_amount > 0`. Half-leave boundaries (amount 0.5) qualify;
/// the rule is literal, any nonzero amount on both sides is sufficient.
///
/// When triggered, every day of the run becomes `SANDWICH_LEAVE` with
/// `is_sandwich = true` and a full leave unit charged, regardless of run
/// length. Runs touching either end of the timeline never trigger. The pass
/// is idempotent: promoted runs no longer exist as `OFF`, so a second pass
/// finds nothing to change.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{apply_sandwich_rule, calculate_attendance};
/// use attendance_engine::config::{CalendarMetadata, HolidayCalendar};
/// use attendance_engine::models::{DayStatus, RecordStatus, UserRecord};
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
/// let records = vec![
///     // Friday before the 2nd Saturday of January 2026
///     UserRecord {
///         date: NaiveDate::from_ymd_opt(2026, 1, 9).unwrap(),
///         status: RecordStatus::LeaveFull,
///     },
///     UserRecord {
///         date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///         status: RecordStatus::LeaveFull,
///     },
/// ];
///
/// let timeline = calculate_attendance(
///     NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     &records,
///     &calendar,
/// );
/// // Sat 10th and Sun 11th are bracketed by leave on both sides
/// assert_eq!(timeline[5].status, DayStatus::SandwichLeave);
/// assert_eq!(timeline[6].status, DayStatus::SandwichLeave);
/// ```
pub fn apply_sandwich_rule(timeline: &mut [DayInfo]) {
    let mut i = 0;
    while i < timeline.len() {
        if timeline[i].status != DayStatus::Off {
            i += 1;
            continue;
        }

        // Maximal OFF run is [i, j)
        let mut j = i;
        while j < timeline.len() && timeline[j].status == DayStatus::Off {
            j += 1;
        }

        let bounded_before = i > 0 && timeline[i - 1].leave_amount > Decimal::ZERO;
        let bounded_after = j < timeline.len() && timeline[j].leave_amount > Decimal::ZERO;

        if bounded_before && bounded_after {
            for day in &mut timeline[i..j] {
                day.status = DayStatus::SandwichLeave;
                day.is_sandwich = true;
                day.leave_amount = Decimal::ONE;
            }
        }

        // Resume past the run; runs never overlap or re-trigger
        i = j;
    }
}
