// Syllabus extractor prompt templates and the outbound message builder.
// All prompts for the syllabus module are defined here.

use crate::llm_client::ChatMessage;

pub const EXTRACTOR_SYSTEM: &str = r#"
You are a syllabus event extractor.

GOAL
Given the full text of a course syllabus, return academic obligations as JSON under {"events":[...]}.
You MUST return events even if the syllabus only lists weeks and day codes (M/Tu/W/Th/F). Use relative fields when dates are missing.

WHAT TO INCLUDE
- Deliverables: assignment, paper, brief, project, report, draft, memo, lab, problem set, portfolio.
- Exams/assessments: quiz, midterm, final, oral/presentation/arguments.
- Class-meeting tasks when no dates exist: readings, case prep, in-class quiz, topic review.
- Multi-day windows/blocks: exam windows, oral argument ranges.

DATES & RELATIVE SCHEDULING
- If absolute dates exist, use them (YYYY-MM-DD). If a time exists, use HH:MM (24h). Otherwise set time_start to null and all_day=true.
- If NO calendar dates exist, STILL emit events with relative fields:
  - "week": integer (1-based)
  - "days": array of codes from {"M","Tu","W","Th","F","Sa","Su"}
  - "class_time": "HH:MM-HH:MM|null" if inferable
  - Set "date_start": null (and "date_end": null)
- If an ANCHOR is supplied in the user message as:
    ANCHOR_WEEK1_MONDAY: YYYY-MM-DD
  convert week/day -> absolute dates and set "date_inferred": true.

OUTPUT SCHEMA
Return ONLY:
{
  "events": [
    {
      "title": "string",
      "date_start": "YYYY-MM-DD|null",
      "date_end": "YYYY-MM-DD|null",
      "time_start": "HH:MM|null",
      "time_end": "HH:MM|null",
      "all_day": true|false,
      "timezone": "string|null",
      "location": "string|null",
      "course": "string|null",
      "weighting": "string|null",
      "notes": "string|null",
      "source_excerpt": "string",
      "week": 0|null,
      "days": ["M","Tu","W","Th","F","Sa","Su"] | null,
      "class_time": "string|null",
      "date_inferred": true|false|null
    }
  ]
}

STRICTNESS
- Do NOT skip week/day rows just because they only say readings or topic; emit them as class-meeting tasks when that's all that exists.
- Prefer concise titles: e.g., "Week 3 — M — Read Ch. 4–5".
- Always include a short "source_excerpt" confirming the event.
"#;

/// Few-shot example input: a dateless week/day syllabus fragment.
const FEWSHOT_USER: &str = "EXAMPLE INPUT:\n\
    Week 1\n\
    M: Read Ch.1–3\n\
    W: Case brief workshop\n\
    F: Quiz 1\n\
    \n\
    Week 7\n\
    M: Midterm (closed book)";

/// Few-shot example output demonstrating relative-field extraction.
const FEWSHOT_ASSISTANT: &str = r#"{"events":[
    {"title":"Week 1 — M — Read Ch.1–3","date_start":null,"date_end":null,"time_start":null,"time_end":null,"all_day":true,"timezone":null,"location":null,"course":null,"weighting":null,"notes":null,"source_excerpt":"M: Read Ch.1–3","week":1,"days":["M"],"class_time":null,"date_inferred":null},
    {"title":"Week 1 — W — Case brief workshop","date_start":null,"date_end":null,"time_start":null,"time_end":null,"all_day":true,"timezone":null,"location":null,"course":null,"weighting":null,"notes":null,"source_excerpt":"W: Case brief workshop","week":1,"days":["W"],"class_time":null,"date_inferred":null},
    {"title":"Week 1 — F — Quiz 1","date_start":null,"date_end":null,"time_start":null,"time_end":null,"all_day":true,"timezone":null,"location":null,"course":null,"weighting":null,"notes":null,"source_excerpt":"F: Quiz 1","week":1,"days":["F"],"class_time":null,"date_inferred":null},
    {"title":"Week 7 — M — Midterm","date_start":null,"date_end":null,"time_start":null,"time_end":null,"all_day":true,"timezone":null,"location":null,"course":null,"weighting":"15%","notes":"closed book","source_excerpt":"Week 7 — M: Midterm (closed book)","week":7,"days":["M"],"class_time":null,"date_inferred":null}
]}"#;

/// Builds the full chat transcript for one parse request: system prompt,
/// few-shot pair, then the syllabus text with the optional anchor line.
pub fn build_parse_messages(full_text: &str, anchor_date: Option<&str>) -> Vec<ChatMessage> {
    let anchor_line = anchor_date
        .map(|d| format!("\nANCHOR_WEEK1_MONDAY: {d}\n"))
        .unwrap_or_default();

    vec![
        ChatMessage::system(EXTRACTOR_SYSTEM),
        ChatMessage::user(FEWSHOT_USER),
        ChatMessage::assistant(FEWSHOT_ASSISTANT),
        ChatMessage::user(format!(
            "COURSE SYLLABUS FULL TEXT:\n{full_text}{anchor_line}\n\nOUTPUT: {{\"events\":[...]}} only."
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_order_and_roles() {
        let messages = build_parse_messages("Week 1\nM: Read Ch.1", None);
        let roles: Vec<&str> = messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, ["system", "user", "assistant", "user"]);
    }

    #[test]
    fn test_anchor_line_included_when_supplied() {
        let messages = build_parse_messages("text", Some("2025-09-08"));
        assert!(messages[3]
            .content
            .contains("ANCHOR_WEEK1_MONDAY: 2025-09-08"));
    }

    #[test]
    fn test_anchor_line_absent_by_default() {
        let messages = build_parse_messages("text", None);
        assert!(!messages[3].content.contains("ANCHOR_WEEK1_MONDAY"));
    }

    #[test]
    fn test_user_message_carries_full_text() {
        let messages = build_parse_messages("Week 3\nF: Quiz 2", None);
        assert!(messages[3].content.contains("Week 3\nF: Quiz 2"));
    }

    #[test]
    fn test_fewshot_assistant_is_valid_schema_output() {
        let value: serde_json::Value = serde_json::from_str(FEWSHOT_ASSISTANT).unwrap();
        let events = value["events"].as_array().unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0]["week"], 1);
        assert_eq!(events[3]["weighting"], "15%");
    }
}
