//! Calendar loading functionality.
//!
//! This module provides the [`CalendarLoader`] type for loading holiday
//! calendars from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CalendarFile, HolidayCalendar};

/// Loads a holiday calendar from a YAML file.
///
/// # File Structure
///
/// ```text
/// config/holidays/2026.yaml
/// ├── calendar:        # name, year, region
/// └── holidays:        # list of { date, name } entries
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::CalendarLoader;
/// use chrono::NaiveDate;
///
/// let loader = CalendarLoader::load("./config/holidays/2026.yaml").unwrap();
/// let calendar = loader.calendar();
///
/// let republic_day = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
/// assert!(calendar.is_holiday(republic_day));
/// ```
#[derive(Debug, Clone)]
pub struct CalendarLoader {
    calendar: HolidayCalendar,
}

impl CalendarLoader {
    /// Loads a calendar from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the calendar file (e.g., "./config/holidays/2026.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `CalendarLoader` instance on success, or an error if the
    /// file is missing or contains invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::CalendarLoader;
    ///
    /// let loader = CalendarLoader::load("./config/holidays/2026.yaml")?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::CalendarNotFound {
            path: path_str.clone(),
        })?;

        let file: CalendarFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::CalendarParse {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self {
            calendar: HolidayCalendar::new(file.calendar, file.holidays),
        })
    }

    /// Returns the loaded calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Consumes the loader, returning the calendar.
    pub fn into_calendar(self) -> HolidayCalendar {
        self.calendar
    }
}
