//! Record persistence for the attendance engine.
//!
//! The store supplies and accepts [`UserRecord`] values keyed by date with
//! last-write-wins semantics per date. The core never touches storage; the
//! API layer reads records here and hands them to the calculation as plain
//! values.
//!
//! [`UserRecord`]: crate::models::UserRecord

mod file_store;

pub use file_store::FileRecordStore;
