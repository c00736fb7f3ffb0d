//! Syllabus parsing pipeline: prompt construction, model-response
//! validation, normalization into canonical assignments, and week × weekday
//! grid placement.

pub mod grid;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod prompts;
pub mod validation;
