//! Tolerant recovery of JSON objects from model output.
//!
//! Model text is supposed to be a JSON array of flat objects but often comes
//! back fenced in markdown, wrapped in prose, truncated mid-object, or
//! written in literal syntax. Recovery runs in two strictly ordered tiers:
//!
//! 1. Strip code-fence markers and parse the whole text as one array.
//! 2. Otherwise salvage every brace-delimited *flat* object (no nested
//!    braces), parsing each as JSON and then as permissive literal syntax,
//!    skipping the ones that fail both.
//!
//! Tier 2 deliberately never recovers nested objects: the schedule and
//! enrichment rows it exists for are flat, and anything deeper is left to
//! tier 1.

pub mod literal;

use std::sync::OnceLock;

use log::{info, warn};
use regex::Regex;
use serde_json::Value;

use crate::{
    error::{Result, RoadmapError},
    models::RawObject,
};

const PREVIEW_CHARS: usize = 200;

fn fence_regex() -> &'static Regex {
    static FENCE_RE: OnceLock<Regex> = OnceLock::new();
    FENCE_RE.get_or_init(|| Regex::new(r"(?i)```(?:json)?").expect("fence regex must compile"))
}

fn flat_object_regex() -> &'static Regex {
    static FLAT_OBJECT_RE: OnceLock<Regex> = OnceLock::new();
    FLAT_OBJECT_RE
        .get_or_init(|| Regex::new(r"\{[^{}]*\}").expect("flat object regex must compile"))
}

/// Recover as many objects as possible from `text`, in order of appearance.
///
/// A well-formed top-level array (or single object) is returned as-is, even
/// when empty. Salvage only fails when not a single object can be recovered.
///
/// # Errors
///
/// Returns `RoadmapError::NoRecoverableData` when whole-text parsing fails
/// and no flat object candidate parses either.
///
/// # Examples
///
/// ```rust
/// # use roadmap_core::extract::extract_objects;
/// let text = "Sure! Here you go:\n{\"day\": 1, \"topic\": \"Intro\"}\n{\"day\": 2, \"topic\": \"Types\"";
/// let objects = extract_objects(text)?;
/// assert_eq!(objects.len(), 1);
/// assert_eq!(objects[0]["topic"], "Intro");
/// # Result::<(), roadmap_core::RoadmapError>::Ok(())
/// ```
pub fn extract_objects(text: &str) -> Result<Vec<RawObject>> {
    let cleaned = strip_code_fences(text);

    match serde_json::from_str::<Value>(&cleaned) {
        Ok(Value::Array(items)) => {
            let objects = objects_from_array(items);
            info!("Parsed model output as a whole array: {} objects", objects.len());
            return Ok(objects);
        }
        Ok(Value::Object(object)) => {
            info!("Parsed model output as a single object");
            return Ok(vec![object]);
        }
        Ok(other) => warn!("Model output is JSON but not an array: {other}"),
        Err(e) => warn!("Whole-array parse failed: {e}"),
    }

    let objects = salvage_flat_objects(&cleaned);
    if objects.is_empty() {
        return Err(RoadmapError::NoRecoverableData {
            preview: preview(&cleaned),
        });
    }

    info!("Recovered {} objects by object-by-object extraction", objects.len());
    Ok(objects)
}

/// Remove every fenced or inline code-fence marker and surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    fence_regex().replace_all(text, "").trim().to_string()
}

fn objects_from_array(items: Vec<Value>) -> Vec<RawObject> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match item {
            Value::Object(object) => Some(object),
            other => {
                warn!("Ignoring array element {} that is not an object: {other}", idx + 1);
                None
            }
        })
        .collect()
}

fn salvage_flat_objects(text: &str) -> Vec<RawObject> {
    flat_object_regex()
        .find_iter(text)
        .enumerate()
        .filter_map(|(idx, candidate)| {
            let candidate = candidate.as_str();
            serde_json::from_str::<RawObject>(candidate)
                .or_else(|_| literal::parse_object(candidate))
                .map_err(|e| {
                    warn!(
                        "Could not parse object {}: {e}: {}",
                        idx + 1,
                        preview(candidate)
                    );
                })
                .ok()
        })
        .collect()
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn as_values(objects: Vec<RawObject>) -> Vec<Value> {
        objects.into_iter().map(Value::Object).collect()
    }

    #[test]
    fn test_whole_array_fast_path() {
        let text = r#"[{"day":1,"topic":"Intro","prerequisites":[]},{"day":2,"topic":"Types","prerequisites":["Intro"]}]"#;
        let objects = extract_objects(text).unwrap();
        assert_eq!(
            as_values(objects),
            vec![
                json!({"day": 1, "topic": "Intro", "prerequisites": []}),
                json!({"day": 2, "topic": "Types", "prerequisites": ["Intro"]}),
            ]
        );
    }

    #[test]
    fn test_fenced_array_with_nested_resources() {
        let text = "```json\n[{\"day\":1,\"resources\":[{\"type\":\"article\",\"title\":\"A\",\"url\":\"https://a\"}]}]\n```";
        let objects = extract_objects(text).unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0]["resources"][0]["type"], "article");
    }

    #[test]
    fn test_uppercase_and_bare_fences() {
        let text = "```JSON\n[{\"day\":1}]\n``` ";
        assert_eq!(extract_objects(text).unwrap().len(), 1);

        let text = "```[{\"day\":1},{\"day\":2}]```";
        assert_eq!(extract_objects(text).unwrap().len(), 2);
    }

    #[test]
    fn test_prose_wrapped_objects_round_trip() {
        let original = vec![
            json!({"day": 1, "topic": "Ownership", "prerequisites": []}),
            json!({"day": 2, "topic": "Borrowing", "prerequisites": ["Ownership"]}),
            json!({"day": 3, "topic": "Lifetimes", "prerequisites": ["Borrowing"]}),
        ];
        let text = format!(
            "Here is your plan!\n```json\n{}\n```\nLet me know if you need anything else.",
            serde_json::to_string(&original).unwrap()
        );

        assert_eq!(as_values(extract_objects(&text).unwrap()), original);
    }

    #[test]
    fn test_truncated_tail_is_dropped() {
        let text = r#"[{"day":1,"topic":"A"},{"day":2,"topic":"B"},{"day":3,"topic":"C"},{"day":4,"topic":"D"#;
        let objects = extract_objects(text).unwrap();
        assert_eq!(
            as_values(objects),
            vec![
                json!({"day": 1, "topic": "A"}),
                json!({"day": 2, "topic": "B"}),
                json!({"day": 3, "topic": "C"}),
            ]
        );
    }

    #[test]
    fn test_malformed_candidate_is_skipped_in_place() {
        let text = r#"{"day":1,"topic":"A"} {"day":2 "topic":"B"} {'day': 3, 'topic': 'C'}"#;
        let objects = extract_objects(text).unwrap();
        assert_eq!(
            as_values(objects),
            vec![json!({"day": 1, "topic": "A"}), json!({"day": 3, "topic": "C"})]
        );
    }

    #[test]
    fn test_salvage_refuses_nested_objects() {
        // Broken outer array; the only nested object is salvaged alone.
        let text = r#"[{"day":1,"resources":[{"type":"article","title":"A","url":"u"}]"#;
        let objects = extract_objects(text).unwrap();
        assert_eq!(
            as_values(objects),
            vec![json!({"type": "article", "title": "A", "url": "u"})]
        );
    }

    #[test]
    fn test_no_objects_is_an_error() {
        for text in ["", "I cannot help with that.", "```json\n```", "[1, 2", "{broken"] {
            let err = extract_objects(text).unwrap_err();
            assert!(
                matches!(err, RoadmapError::NoRecoverableData { .. }),
                "text {text:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_empty_array_is_a_successful_empty_result() {
        assert!(extract_objects("[]").unwrap().is_empty());
    }

    #[test]
    fn test_non_object_elements_are_ignored() {
        let objects = extract_objects(r#"[{"day":1}, "day two", 3, null]"#).unwrap();
        assert_eq!(as_values(objects), vec![json!({"day": 1})]);
    }

    #[test]
    fn test_single_object_is_wrapped() {
        let objects = extract_objects(r#"{"day": 1, "topic": "Solo"}"#).unwrap();
        assert_eq!(as_values(objects), vec![json!({"day": 1, "topic": "Solo"})]);
    }

    #[test]
    fn test_preview_is_bounded() {
        let text = "x".repeat(1000);
        match extract_objects(&text).unwrap_err() {
            RoadmapError::NoRecoverableData { preview } => assert_eq!(preview.len(), PREVIEW_CHARS),
            other => panic!("unexpected error: {other}"),
        }
    }
}
