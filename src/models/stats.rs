//! Aggregate attendance statistics model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate statistics derived from a finished timeline.
///
/// Produced by [`calculate_stats`]; all fields are reductions over the
/// timeline against the 80% attendance threshold.
///
/// [`calculate_stats`]: crate::calculation::calculate_stats
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceStats;
/// use rust_decimal::Decimal;
///
/// let stats = AttendanceStats {
///     percentage: "100.00".to_string(),
///     present_days: 23,
///     leaves: Decimal::ZERO,
///     working_days: Decimal::from(23),
///     buffer: 5,
/// };
/// assert_eq!(stats.percentage, "100.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceStats {
    /// Attendance percentage formatted to two decimal places.
    pub percentage: String,
    /// Count of days with computed status `PRESENT`.
    pub present_days: u32,
    /// Sum of leave units charged across the timeline.
    pub leaves: Decimal,
    /// Effective denominator: present days plus charged leave units.
    pub working_days: Decimal,
    /// Additional full-day leaves affordable while staying at or above 80%.
    ///
    /// Clamped to zero when attendance is already below the threshold.
    pub buffer: i64,
}
