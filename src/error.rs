//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the engine's collaborator boundaries (calendar loading and record
//! storage). The core calculation functions are total over well-typed
//! inputs and never return these errors.

use thiserror::Error;

/// The main error type for the attendance engine.
///
/// Only the collaborator layers (configuration loading, record storage,
/// HTTP API) produce errors; the timeline, sandwich, and stats calculations
/// are pure and total.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::CalendarNotFound {
///     path: "/missing/2026.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Holiday calendar not found: /missing/2026.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Holiday calendar file was not found at the specified path.
    #[error("Holiday calendar not found: {path}")]
    CalendarNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Holiday calendar file could not be parsed.
    #[error("Failed to parse holiday calendar '{path}': {message}")]
    CalendarParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Reading or writing the record store failed.
    #[error("Record store I/O error at '{path}': {message}")]
    StorageIo {
        /// The path of the store file involved.
        path: String,
        /// A description of the I/O error.
        message: String,
    },

    /// The persisted record file contained malformed JSON.
    #[error("Failed to parse persisted records '{path}': {message}")]
    RecordParse {
        /// The path of the store file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
