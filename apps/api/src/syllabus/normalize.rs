//! Normalization of validated model events into canonical assignments.
//!
//! Total over the validator's output: every placeable `ModelEvent` produces
//! a well-formed `Assignment`, never an error.

use crate::syllabus::models::{Assignment, ModelEvent};

/// Maps a validated event to the canonical record.
///
/// Precedence rules:
/// - `due_date` comes from `date_start` when it is a well-formed date.
/// - `all_day` beats an incidental `time_start`; `due_time` stays unset.
/// - `notes` falls back to `source_excerpt` so a human-readable
///   justification survives whenever the source produced one.
/// - Absent optionals stay absent — never empty strings or empty sets.
pub fn to_assignment(event: ModelEvent) -> Assignment {
    let due_date = event.absolute_date().map(str::to_owned);

    let due_time = if event.all_day {
        None
    } else {
        event.time_start.filter(|t| !t.trim().is_empty())
    };

    let notes = event
        .notes
        .filter(|n| !n.trim().is_empty())
        .or(event.source_excerpt.filter(|s| !s.trim().is_empty()));

    let days = event.days.filter(|d| !d.is_empty());

    Assignment {
        title: event.title,
        due_date,
        due_time,
        notes,
        week: event.week,
        days,
        class_time: event.class_time,
        date_inferred: event.date_inferred,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllabus::models::DayCode;

    fn event(json: &str) -> ModelEvent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_all_day_beats_time_start() {
        let a = to_assignment(event(
            r#"{"title":"Quiz","date_start":"2025-09-10","time_start":"09:00","all_day":true}"#,
        ));
        assert_eq!(a.due_date.as_deref(), Some("2025-09-10"));
        assert_eq!(a.due_time, None);
    }

    #[test]
    fn test_time_start_kept_when_not_all_day() {
        let a = to_assignment(event(
            r#"{"title":"Final","date_start":"2025-12-12","time_start":"13:30","all_day":false}"#,
        ));
        assert_eq!(a.due_time.as_deref(), Some("13:30"));
    }

    #[test]
    fn test_notes_fall_back_to_source_excerpt() {
        let a = to_assignment(event(
            r#"{"title":"X","week":1,"days":["M"],"notes":null,"source_excerpt":"M: Read Ch.1"}"#,
        ));
        assert_eq!(a.notes.as_deref(), Some("M: Read Ch.1"));
    }

    #[test]
    fn test_explicit_notes_win_over_excerpt() {
        let a = to_assignment(event(
            r#"{"title":"X","week":1,"notes":"closed book","source_excerpt":"Midterm"}"#,
        ));
        assert_eq!(a.notes.as_deref(), Some("closed book"));
    }

    #[test]
    fn test_empty_notes_string_treated_as_absent() {
        let a = to_assignment(event(
            r#"{"title":"X","week":1,"notes":"  ","source_excerpt":"W: Lab 2"}"#,
        ));
        assert_eq!(a.notes.as_deref(), Some("W: Lab 2"));
    }

    #[test]
    fn test_no_notes_and_no_excerpt_stays_unset() {
        let a = to_assignment(event(r#"{"title":"X","week":1}"#));
        assert_eq!(a.notes, None);
    }

    #[test]
    fn test_relative_fields_carried_through() {
        let a = to_assignment(event(
            r#"{"title":"X","week":3,"days":["M","W"],"class_time":"10:00-11:15"}"#,
        ));
        assert_eq!(a.due_date, None);
        assert_eq!(a.week, Some(3));
        assert_eq!(a.days, Some(vec![DayCode::M, DayCode::W]));
        assert_eq!(a.class_time.as_deref(), Some("10:00-11:15"));
    }

    #[test]
    fn test_empty_day_set_normalized_to_unset() {
        let a = to_assignment(event(r#"{"title":"X","week":1,"days":[]}"#));
        assert_eq!(a.days, None);
    }

    #[test]
    fn test_relative_fields_kept_alongside_absolute_date() {
        let a = to_assignment(event(
            r#"{"title":"X","date_start":"2025-09-10","week":2,"days":["W"]}"#,
        ));
        assert_eq!(a.due_date.as_deref(), Some("2025-09-10"));
        assert_eq!(a.week, Some(2));
        assert_eq!(a.days, Some(vec![DayCode::W]));
    }

    #[test]
    fn test_date_inferred_carried_when_set() {
        let a = to_assignment(event(
            r#"{"title":"X","date_start":"2025-09-08","date_inferred":true}"#,
        ));
        assert_eq!(a.date_inferred, Some(true));
    }
}
