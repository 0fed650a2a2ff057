//! Application state for the attendance engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::HolidayCalendar;
use crate::storage::FileRecordStore;

/// Shared application state.
///
/// Contains the immutable holiday calendar and the record store. The store
/// is behind a mutex so concurrent record mutations serialize; the calendar
/// needs no locking.
#[derive(Clone)]
pub struct AppState {
    /// The injected holiday calendar.
    calendar: Arc<HolidayCalendar>,
    /// The file-backed record store.
    store: Arc<Mutex<FileRecordStore>>,
}

impl AppState {
    /// Creates a new application state from a calendar and a record store.
    pub fn new(calendar: HolidayCalendar, store: FileRecordStore) -> Self {
        Self {
            calendar: Arc::new(calendar),
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Returns a reference to the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the record store handle.
    pub fn store(&self) -> &Arc<Mutex<FileRecordStore>> {
        &self.store
    }
}
