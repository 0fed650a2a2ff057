//! Attendance Timeline Engine
//!
//! This crate builds day-by-day attendance timelines from a date range, user
//! leave records, and a holiday calendar, applies the sandwich-leave rule to
//! off days bracketed by leave, and aggregates attendance statistics against
//! an 80% threshold.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
