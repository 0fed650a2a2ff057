//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day_info;
mod holiday;
mod record;
mod report;
mod stats;

pub use day_info::{DayInfo, DayStatus};
pub use holiday::HolidayEntry;
pub use record::{RecordStatus, UserRecord};
pub use report::AttendanceReport;
pub use stats::AttendanceStats;
