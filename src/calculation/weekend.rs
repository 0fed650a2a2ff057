//! Weekend detection logic.
//!
//! This module determines which calendar days count as weekend off days
//! under the fixed business rule: every Sunday is off, and Saturdays are
//! off only when they are the 2nd or 4th Saturday of their month. 1st,
//! 3rd, and 5th Saturdays are working days.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns the week number of a date within its month.
///
/// Computed as `ceil(day_of_month / 7)`: days 1-7 are week 1, days 8-14
/// are week 2, and so on.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::week_of_month;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
/// assert_eq!(week_of_month(date), 2);
/// ```
pub fn week_of_month(date: NaiveDate) -> u32 {
    date.day().div_ceil(7)
}

/// Checks whether a date is the 2nd or 4th Saturday of its month.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::is_second_or_fourth_saturday;
/// use chrono::NaiveDate;
///
/// // 2026-01-10 is the 2nd Saturday of January
/// let second = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
/// assert!(is_second_or_fourth_saturday(second));
///
/// // 2026-01-17 is the 3rd Saturday - a working day
/// let third = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert!(!is_second_or_fourth_saturday(third));
/// ```
pub fn is_second_or_fourth_saturday(date: NaiveDate) -> bool {
    if date.weekday() != Weekday::Sat {
        return false;
    }
    let week = week_of_month(date);
    week == 2 || week == 4
}

/// Checks whether a date is a weekend off day.
///
/// A day is a weekend iff it is a Sunday, or a Saturday that is the 2nd or
/// 4th Saturday of its month.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::is_weekend_off;
/// use chrono::NaiveDate;
///
/// // 2026-01-11 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap();
/// assert!(is_weekend_off(sunday));
///
/// // 2026-01-12 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert!(!is_weekend_off(monday));
/// ```
pub fn is_weekend_off(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun || is_second_or_fourth_saturday(date)
}
