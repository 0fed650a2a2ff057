//! Status cycling logic.
//!
//! When a user clicks a day, the UI cycles its record through a fixed
//! sequence. This module models that transition as an explicit function of
//! the day's raw record status and computed status, decoupled from any
//! rendering concern.

use crate::models::{DayStatus, RecordStatus};

/// The record mutation a status cycle produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    /// Upsert a record with the given status for the day.
    Set(RecordStatus),
    /// Delete the day's record, returning it to its computed default.
    Clear,
}

/// Returns the next record action for a clicked day.
///
/// The existing record drives the cycle when present:
/// `LEAVE_FULL` → `LEAVE_HALF_MORNING` → `LEAVE_HALF_AFTERNOON` → cleared,
/// and an explicit `PRESENT` record cycles back to `LEAVE_FULL`. Without a
/// record, the computed status decides: an `OFF` or `SANDWICH_LEAVE` day is
/// overridden to `PRESENT`, any other day starts a leave cycle with
/// `LEAVE_FULL`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{next_record_action, RecordAction};
/// use attendance_engine::models::{DayStatus, RecordStatus};
///
/// // Clicking an untouched working day starts a full leave
/// assert_eq!(
///     next_record_action(None, DayStatus::Present),
///     RecordAction::Set(RecordStatus::LeaveFull)
/// );
///
/// // A third click on the same day clears the record
/// assert_eq!(
///     next_record_action(Some(RecordStatus::LeaveHalfAfternoon), DayStatus::LeaveHalf),
///     RecordAction::Clear
/// );
/// ```
pub fn next_record_action(
    original: Option<RecordStatus>,
    computed: DayStatus,
) -> RecordAction {
    match original {
        Some(RecordStatus::LeaveFull) => RecordAction::Set(RecordStatus::LeaveHalfMorning),
        Some(RecordStatus::LeaveHalfMorning) => {
            RecordAction::Set(RecordStatus::LeaveHalfAfternoon)
        }
        Some(RecordStatus::LeaveHalfAfternoon) => RecordAction::Clear,
        Some(RecordStatus::Present) => RecordAction::Set(RecordStatus::LeaveFull),
        None => match computed {
            DayStatus::Off | DayStatus::SandwichLeave => {
                RecordAction::Set(RecordStatus::Present)
            }
            _ => RecordAction::Set(RecordStatus::LeaveFull),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_cycle_progression() {
        assert_eq!(
            next_record_action(Some(RecordStatus::LeaveFull), DayStatus::LeaveFull),
            RecordAction::Set(RecordStatus::LeaveHalfMorning)
        );
        assert_eq!(
            next_record_action(Some(RecordStatus::LeaveHalfMorning), DayStatus::LeaveHalf),
            RecordAction::Set(RecordStatus::LeaveHalfAfternoon)
        );
        assert_eq!(
            next_record_action(Some(RecordStatus::LeaveHalfAfternoon), DayStatus::LeaveHalf),
            RecordAction::Clear
        );
    }

    #[test]
    fn test_explicit_present_cycles_to_full_leave() {
        assert_eq!(
            next_record_action(Some(RecordStatus::Present), DayStatus::Present),
            RecordAction::Set(RecordStatus::LeaveFull)
        );
    }

    #[test]
    fn test_untouched_off_day_is_overridden_to_present() {
        assert_eq!(
            next_record_action(None, DayStatus::Off),
            RecordAction::Set(RecordStatus::Present)
        );
        assert_eq!(
            next_record_action(None, DayStatus::SandwichLeave),
            RecordAction::Set(RecordStatus::Present)
        );
    }

    #[test]
    fn test_untouched_working_day_starts_leave_cycle() {
        assert_eq!(
            next_record_action(None, DayStatus::Present),
            RecordAction::Set(RecordStatus::LeaveFull)
        );
    }

    #[test]
    fn test_record_takes_precedence_over_computed_status() {
        // A half-morning record on a day the sandwich rule would otherwise
        // cover still advances the cycle, because the record exists.
        assert_eq!(
            next_record_action(Some(RecordStatus::LeaveHalfMorning), DayStatus::Off),
            RecordAction::Set(RecordStatus::LeaveHalfAfternoon)
        );
    }

    #[test]
    fn test_four_clicks_return_to_cleared() {
        // PRESENT computed, no record: four clicks walk the full cycle
        let mut original = None;
        let mut clicks = Vec::new();
        for _ in 0..4 {
            let action = next_record_action(original, DayStatus::Present);
            clicks.push(action);
            original = match action {
                RecordAction::Set(status) => Some(status),
                RecordAction::Clear => None,
            };
        }

        assert_eq!(
            clicks,
            vec![
                RecordAction::Set(RecordStatus::LeaveFull),
                RecordAction::Set(RecordStatus::LeaveHalfMorning),
                RecordAction::Set(RecordStatus::LeaveHalfAfternoon),
                RecordAction::Clear,
            ]
        );
        assert_eq!(original, None);
    }
}
