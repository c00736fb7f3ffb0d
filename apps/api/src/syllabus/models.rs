//! Domain types for syllabus parsing: the untrusted event shape returned by
//! the model and the canonical `Assignment` record the rest of the system
//! (and the client) consumes.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Weekday codes used by relative scheduling (`week` + `days`).
///
/// Declaration order is column order: derived `Ord` keeps grid columns in
/// Monday-first display order, and the serde names are the wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayCode {
    M,
    Tu,
    W,
    Th,
    F,
    Sa,
    Su,
}

impl DayCode {
    /// All codes in fixed column order.
    pub const WEEK: [DayCode; 7] = [
        DayCode::M,
        DayCode::Tu,
        DayCode::W,
        DayCode::Th,
        DayCode::F,
        DayCode::Sa,
        DayCode::Su,
    ];

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayCode::M,
            Weekday::Tue => DayCode::Tu,
            Weekday::Wed => DayCode::W,
            Weekday::Thu => DayCode::Th,
            Weekday::Fri => DayCode::F,
            Weekday::Sat => DayCode::Sa,
            Weekday::Sun => DayCode::Su,
        }
    }
}

/// One event as emitted by the completion service. Untrusted: every field is
/// optional on the wire and the whole element may be garbage. Elements that
/// fail to decode, or decode but fail [`ModelEvent::is_placeable`], are
/// dropped by the validator.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelEvent {
    #[serde(default)]
    pub title: String,

    // Absolute window
    #[serde(default)]
    pub date_start: Option<String>,
    #[serde(default)]
    pub date_end: Option<String>,
    #[serde(default)]
    pub time_start: Option<String>,
    #[serde(default)]
    pub time_end: Option<String>,
    #[serde(default)]
    pub all_day: bool,

    // Relative window
    #[serde(default)]
    pub week: Option<u32>,
    #[serde(default)]
    pub days: Option<Vec<DayCode>>,
    #[serde(default)]
    pub class_time: Option<String>,
    #[serde(default)]
    pub date_inferred: Option<bool>,

    // Descriptive metadata
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub weighting: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub source_excerpt: Option<String>,
}

impl ModelEvent {
    /// Returns `date_start` only when it is a real `YYYY-MM-DD` calendar
    /// date. Anything else is treated as absent, so downstream code can use
    /// the value verbatim.
    pub fn absolute_date(&self) -> Option<&str> {
        self.date_start
            .as_deref()
            .filter(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok())
    }

    /// The per-event invariant: a non-empty title plus at least one way to
    /// place the event — an absolute date, a week number, or a non-empty day
    /// set. Events that satisfy neither arm cannot be placed and are dropped.
    pub fn is_placeable(&self) -> bool {
        let has_title = !self.title.trim().is_empty();
        let has_absolute = self.absolute_date().is_some();
        let has_relative =
            self.week.is_some() || self.days.as_ref().is_some_and(|d| !d.is_empty());
        has_title && (has_absolute || has_relative)
    }
}

/// The canonical, display-ready assignment record. Field names keep the
/// client-facing camelCase wire shape (`dueDate`, `classTime`, ...).
///
/// Invariant (mirrors `ModelEvent`): `due_date` or `week`/`days` is set;
/// without any of them the grid can only use its fallback bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<DayCode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_inferred: Option<bool>,
}

impl Assignment {
    /// Weekday of `due_date`, when present and well-formed.
    pub fn due_weekday(&self) -> Option<DayCode> {
        self.due_date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
            .map(|d| DayCode::from_weekday(d.weekday()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_code_wire_names() {
        let codes: Vec<DayCode> = serde_json::from_str(r#"["M","Tu","W","Th","F","Sa","Su"]"#)
            .unwrap();
        assert_eq!(codes, DayCode::WEEK.to_vec());
        assert_eq!(serde_json::to_string(&DayCode::Th).unwrap(), "\"Th\"");
    }

    #[test]
    fn test_day_code_ordering_is_column_order() {
        assert!(DayCode::M < DayCode::Tu);
        assert!(DayCode::F < DayCode::Sa);
        assert!(DayCode::Sa < DayCode::Su);
    }

    #[test]
    fn test_model_event_decodes_with_all_fields_missing() {
        let event: ModelEvent = serde_json::from_str("{}").unwrap();
        assert!(event.title.is_empty());
        assert!(!event.is_placeable());
    }

    #[test]
    fn test_model_event_decodes_with_explicit_nulls() {
        let event: ModelEvent = serde_json::from_str(
            r#"{"title":"Quiz 1","date_start":null,"week":2,"days":null,"all_day":true}"#,
        )
        .unwrap();
        assert!(event.is_placeable());
        assert_eq!(event.week, Some(2));
    }

    #[test]
    fn test_placeable_requires_title() {
        let event: ModelEvent =
            serde_json::from_str(r#"{"title":"  ","week":1,"days":["M"]}"#).unwrap();
        assert!(!event.is_placeable());
    }

    #[test]
    fn test_placeable_rejects_empty_day_set_without_week() {
        let event: ModelEvent = serde_json::from_str(r#"{"title":"X","days":[]}"#).unwrap();
        assert!(!event.is_placeable());
    }

    #[test]
    fn test_malformed_date_start_does_not_satisfy_absolute_arm() {
        let event: ModelEvent =
            serde_json::from_str(r#"{"title":"X","date_start":"next Tuesday"}"#).unwrap();
        assert!(event.absolute_date().is_none());
        assert!(!event.is_placeable());
    }

    #[test]
    fn test_absolute_date_requires_real_calendar_date() {
        let event: ModelEvent =
            serde_json::from_str(r#"{"title":"X","date_start":"2025-13-40"}"#).unwrap();
        assert!(event.absolute_date().is_none());
    }

    #[test]
    fn test_due_weekday_from_date() {
        let a = Assignment {
            title: "X".to_string(),
            due_date: Some("2025-09-08".to_string()), // a Monday
            due_time: None,
            notes: None,
            week: None,
            days: None,
            class_time: None,
            date_inferred: None,
        };
        assert_eq!(a.due_weekday(), Some(DayCode::M));
    }

    #[test]
    fn test_assignment_serializes_camel_case_and_skips_unset() {
        let a = Assignment {
            title: "Quiz".to_string(),
            due_date: Some("2025-09-10".to_string()),
            due_time: None,
            notes: None,
            week: None,
            days: None,
            class_time: None,
            date_inferred: None,
        };
        let value = serde_json::to_value(&a).unwrap();
        assert_eq!(value["dueDate"], "2025-09-10");
        assert!(value.get("dueTime").is_none());
        assert!(value.get("classTime").is_none());
    }
}
