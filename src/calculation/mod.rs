//! Calculation logic for the attendance engine.
//!
//! This module contains the core passes: timeline building over an
//! inclusive date range, the sandwich leave rule that promotes bracketed
//! off-day runs, stats aggregation against the 80% threshold, weekend
//! detection under the 2nd/4th-Saturday rule, and the record status cycle.

mod cycle;
mod sandwich;
mod stats;
mod timeline;
mod weekend;

pub use cycle::{RecordAction, next_record_action};
pub use sandwich::apply_sandwich_rule;
pub use stats::calculate_stats;
pub use timeline::{build_timeline, calculate_attendance};
pub use weekend::{is_second_or_fourth_saturday, is_weekend_off, week_of_month};
