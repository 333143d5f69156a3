//! Prompt templates for the two generation stages.
//!
//! Both prompts ask for compact, minified JSON and carry a worked example;
//! the extractor copes with whatever comes back anyway.

use crate::{error::Result, models::ScheduleDay};

const SCHEDULE_EXAMPLE: &str = r#"[{"day":1,"topic":"Intro to AI","prerequisites":[]},{"day":2,"topic":"History of AI","prerequisites":["Intro to AI"]},{"day":3,"topic":"AI Applications","prerequisites":["History of AI"]},{"day":4,"topic":"Machine Learning Basics","prerequisites":["AI Applications"]},{"day":5,"topic":"Neural Networks","prerequisites":["Machine Learning Basics"]},{"day":6,"topic":"Deep Learning","prerequisites":["Neural Networks"]},{"day":7,"topic":"AI Ethics","prerequisites":["Deep Learning"]},{"day":8,"topic":"Future of AI","prerequisites":["AI Ethics"]}]"#;

const ENRICHMENT_EXAMPLE: &str = r#"[{"day":1,"topic":"C Language Basics","prerequisites":[],"materials":["article","quiz"],"resources":[{"type":"article","title":"C Language Basics","url":"https://en.wikipedia.org/wiki/C_(programming_language)"}]},{"day":2,"topic":"Variables and Data Types","prerequisites":["C Language Basics"],"materials":["video","article"],"resources":[{"type":"youtube","title":"Variables and Data Types","url":"https://www.youtube.com/watch?v=KJGSYHN4J3w"}]}]"#;

/// Stage 1: ask for exactly `timeframe` contiguous schedule days.
pub fn schedule_prompt(topic: &str, timeframe: u32) -> String {
    format!(
        "You are an expert learning path AI. Given the topic '{topic}' and a desired study span of \
EXACTLY {timeframe} days, return ONLY a valid, compact, minified JSON array with EXACTLY \
{timeframe} objects, one for each day, numbered 1 to {timeframe}. Do NOT group days. Do NOT skip \
days. Each object must have a unique 'day' from 1 to {timeframe}, a 'topic', and a \
'prerequisites' field (list of strings, can be empty). No resources, no explanation, no \
pretty-printing, no Markdown, no newlines, no extra spaces. Ensure every object and array is \
valid JSON with all commas and brackets closed. Follow the format in the example exactly, and do \
not add any extra text.\nExample: {SCHEDULE_EXAMPLE}\n"
    )
}

/// Stage 2: ask for materials and resources for one batch of days.
///
/// # Errors
///
/// Returns `RoadmapError::Serialization` if the batch cannot be encoded.
pub fn enrichment_prompt(days: &[ScheduleDay]) -> Result<String> {
    let days = serde_json::to_string(days)?;
    Ok(format!(
        "You are an expert learning path AI. For the following days and topics, return ONLY a \
valid, compact, minified JSON array with for each day: 'day', 'topic', 'prerequisites' (list), \
'materials' (list), and 'resources' (list of dicts with type/title/url). No explanation, no \
Markdown, no pretty-printing, no newlines, no extra spaces. Ensure every object and array is \
valid JSON with all commas and brackets closed. Follow the format in the example exactly, and do \
not add any extra text.\nExample: {ENRICHMENT_EXAMPLE}\nDays: {days}\n"
    ))
}
