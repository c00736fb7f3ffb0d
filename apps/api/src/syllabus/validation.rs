//! Validation of the completion service's response.
//!
//! The response is adversarial input: the only hard failure is JSON that
//! cannot be parsed at all. Everything past that point is per-element — an
//! element that fails to decode or fails the placeability invariant is
//! dropped without voiding the rest of the batch, and zero survivors is a
//! valid (empty) result.

use serde_json::Value;

use crate::llm_client::strip_json_fences;
use crate::syllabus::models::ModelEvent;

/// Decodes the raw completion text into the surviving events.
///
/// `Err` means the text was not parseable JSON (`InvalidModelOutput` at the
/// handler layer). `Ok` carries the elements that decoded and satisfied the
/// invariant, in source order, possibly empty.
pub fn decode_events(raw: &str) -> Result<Vec<ModelEvent>, serde_json::Error> {
    let value: Value = serde_json::from_str(strip_json_fences(raw))?;
    Ok(collect_events(value))
}

/// Narrows a parsed JSON value to the surviving events. Total: any shape
/// that is not a bare array or an object with an `events` array yields an
/// empty list.
pub fn collect_events(value: Value) -> Vec<ModelEvent> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("events") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<ModelEvent>(item).ok())
        .filter(ModelEvent::is_placeable)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparseable_text_is_an_error() {
        assert!(decode_events("the syllabus has three quizzes").is_err());
        assert!(decode_events("{\"events\": [").is_err());
    }

    #[test]
    fn test_wrapper_and_bare_array_produce_identical_output() {
        let bare = decode_events(r#"[{"title":"X","week":1,"days":["M"]}]"#).unwrap();
        let wrapped = decode_events(r#"{"events":[{"title":"X","week":1,"days":["M"]}]}"#).unwrap();
        assert_eq!(bare.len(), 1);
        assert_eq!(wrapped.len(), 1);
        assert_eq!(bare[0].title, wrapped[0].title);
        assert_eq!(bare[0].week, wrapped[0].week);
        assert_eq!(bare[0].days, wrapped[0].days);
    }

    #[test]
    fn test_event_without_date_week_or_days_is_dropped() {
        let events = decode_events(r#"{"events":[{"title":"X"}]}"#).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_bad_elements_do_not_void_the_batch() {
        let raw = r#"{"events":[
            {"title":"Keep me","week":2,"days":["Tu"]},
            {"title":"No placement info"},
            {"title":"Bad week","week":"three"},
            {"title":"Bad day code","week":1,"days":["Monday"]},
            "not even an object",
            {"title":"Keep me too","date_start":"2025-09-10"}
        ]}"#;
        let events = decode_events(raw).unwrap();
        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Keep me", "Keep me too"]);
    }

    #[test]
    fn test_object_without_events_array_yields_empty() {
        assert!(decode_events(r#"{"message":"no events found"}"#)
            .unwrap()
            .is_empty());
        assert!(decode_events(r#"{"events":"none"}"#).unwrap().is_empty());
        assert!(decode_events("42").unwrap().is_empty());
    }

    #[test]
    fn test_fenced_output_is_accepted() {
        let raw = "```json\n{\"events\":[{\"title\":\"X\",\"week\":1,\"days\":[\"M\"]}]}\n```";
        assert_eq!(decode_events(raw).unwrap().len(), 1);
    }

    #[test]
    fn test_source_order_is_preserved() {
        let raw = r#"[
            {"title":"A","week":1,"days":["M"]},
            {"title":"B","week":1,"days":["M"]},
            {"title":"C","week":1,"days":["M"]}
        ]"#;
        let titles: Vec<String> = decode_events(raw)
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }
}
