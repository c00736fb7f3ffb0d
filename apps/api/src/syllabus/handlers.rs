use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;
use crate::syllabus::grid::{place, Matrix};
use crate::syllabus::models::Assignment;
use crate::syllabus::normalize::to_assignment;
use crate::syllabus::prompts::build_parse_messages;
use crate::syllabus::validation::decode_events;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Extracted syllabus plain text. `fullText` accepted for older clients.
    #[serde(default, alias = "fullText")]
    pub text: String,
    /// Monday of week 1, `YYYY-MM-DD`. Lets the model convert week/day
    /// pairs into absolute dates.
    #[serde(default, rename = "anchorDate")]
    pub anchor_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParsedSyllabus {
    pub assignments: Vec<Assignment>,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub syllabus: ParsedSyllabus,
    pub grid: Matrix,
}

/// POST /api/v1/parse
///
/// Full pipeline: prompt build → completion call → decode/validate →
/// normalize → grid placement. A batch where every element was dropped is a
/// success with an empty assignment list, by design.
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::Validation("No syllabus text provided".to_string()));
    }

    debug!(chars = req.text.len(), anchored = req.anchor_date.is_some(), "parsing syllabus");

    let messages = build_parse_messages(&req.text, req.anchor_date.as_deref());
    let raw = state
        .llm
        .complete(&messages)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let events = decode_events(&raw).map_err(|_| AppError::InvalidModelOutput)?;
    let assignments: Vec<Assignment> = events.into_iter().map(to_assignment).collect();

    debug!(count = assignments.len(), "normalized assignments");

    let grid = place(&assignments);

    Ok(Json(ParseResponse {
        syllabus: ParsedSyllabus { assignments },
        grid,
    }))
}
