//! Holiday calendar configuration types.
//!
//! This module contains the strongly-typed calendar structures that are
//! deserialized from YAML calendar files.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::HolidayEntry;

/// Metadata about a holiday calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarMetadata {
    /// The human-readable name of the calendar.
    pub name: String,
    /// The calendar year the holiday list covers.
    pub year: i32,
    /// The region the list applies to (e.g., "gujarat", "national").
    pub region: String,
}

/// Calendar configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarFile {
    /// Calendar metadata.
    pub calendar: CalendarMetadata,
    /// The holiday entries for the year.
    pub holidays: Vec<HolidayEntry>,
}

/// An immutable holiday calendar injected into the timeline builder.
///
/// Modeled as a configuration value rather than a process-wide constant so
/// the holiday list can change year over year without code changes, and so
/// tests can construct calendars directly.
///
/// # Example
///
/// ```
/// use attendance_engine::config::{CalendarMetadata, HolidayCalendar};
/// use attendance_engine::models::HolidayEntry;
/// use chrono::NaiveDate;
///
/// let christmas = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
/// let calendar = HolidayCalendar::new(
///     CalendarMetadata {
///         name: "Test".to_string(),
///         year: 2026,
///         region: "national".to_string(),
///     },
///     vec![HolidayEntry { date: christmas, name: "Christmas".to_string() }],
/// );
///
/// assert!(calendar.is_holiday(christmas));
/// assert_eq!(calendar.holiday_on(christmas).unwrap().name, "Christmas");
/// ```
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    /// Calendar metadata.
    metadata: CalendarMetadata,
    /// Holiday entries, at most one per calendar date.
    holidays: Vec<HolidayEntry>,
}

impl HolidayCalendar {
    /// Creates a calendar from its component parts.
    pub fn new(metadata: CalendarMetadata, holidays: Vec<HolidayEntry>) -> Self {
        Self { metadata, holidays }
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        &self.metadata
    }

    /// Returns all holiday entries.
    pub fn holidays(&self) -> &[HolidayEntry] {
        &self.holidays
    }

    /// Looks up the holiday entry for a calendar date, if any.
    ///
    /// Matching is by date-only equality; the reference list is assumed to
    /// contain at most one entry per date, and the first match wins.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&HolidayEntry> {
        self.holidays.iter().find(|h| h.date == date)
    }

    /// Checks whether a date is a holiday in this calendar.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_on(date).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn test_calendar() -> HolidayCalendar {
        HolidayCalendar::new(
            CalendarMetadata {
                name: "Test Calendar".to_string(),
                year: 2026,
                region: "national".to_string(),
            },
            vec![
                HolidayEntry {
                    date: make_date("2026-01-26"),
                    name: "Republic Day".to_string(),
                },
                HolidayEntry {
                    date: make_date("2026-12-25"),
                    name: "Christmas".to_string(),
                },
            ],
        )
    }

    #[test]
    fn test_holiday_on_matching_date() {
        let calendar = test_calendar();
        let entry = calendar.holiday_on(make_date("2026-01-26"));
        assert_eq!(entry.map(|h| h.name.as_str()), Some("Republic Day"));
    }

    #[test]
    fn test_holiday_on_non_matching_date() {
        let calendar = test_calendar();
        assert!(calendar.holiday_on(make_date("2026-01-27")).is_none());
    }

    #[test]
    fn test_is_holiday() {
        let calendar = test_calendar();
        assert!(calendar.is_holiday(make_date("2026-12-25")));
        assert!(!calendar.is_holiday(make_date("2026-12-24")));
    }

    #[test]
    fn test_empty_calendar_matches_nothing() {
        let calendar = HolidayCalendar::new(
            CalendarMetadata {
                name: "Empty".to_string(),
                year: 2026,
                region: "national".to_string(),
            },
            vec![],
        );
        assert!(!calendar.is_holiday(make_date("2026-01-26")));
    }

    #[test]
    fn test_calendar_file_deserializes_from_yaml() {
        let yaml = r#"
calendar:
  name: "Gujarat / National Holidays"
  year: 2026
  region: "gujarat"
holidays:
  - date: "2026-01-14"
    name: "Makar Sankranti"
  - date: "2026-12-25"
    name: "Christmas"
"#;
        let file: CalendarFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.calendar.year, 2026);
        assert_eq!(file.holidays.len(), 2);
        assert_eq!(file.holidays[0].name, "Makar Sankranti");
    }
}
