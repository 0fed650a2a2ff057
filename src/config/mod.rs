//! Holiday calendar configuration for the attendance engine.
//!
//! The holiday list is injected, immutable reference data: the core never
//! reads it from a global. Calendars are loaded from YAML files via
//! [`CalendarLoader`] or built directly with [`HolidayCalendar::new`].

mod loader;
mod types;

pub use loader::CalendarLoader;
pub use types::{CalendarFile, CalendarMetadata, HolidayCalendar};
