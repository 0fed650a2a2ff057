//! Holiday reference data model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single entry in the holiday calendar.
///
/// Static reference data: loaded once, immutable, not user-editable by the
/// engine. The reference list is assumed to contain at most one entry per
/// calendar date.
///
/// # Example
///
/// ```
/// use attendance_engine::models::HolidayEntry;
/// use chrono::NaiveDate;
///
/// let holiday = HolidayEntry {
///     date: NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
///     name: "Christmas".to_string(),
/// };
/// assert_eq!(holiday.name, "Christmas");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The display name of the holiday (e.g., "Republic Day").
    pub name: String,
}
