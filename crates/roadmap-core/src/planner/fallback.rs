//! Deterministic plan used when generation fails.

use serde_json::json;

use crate::models::RawObject;

const FALLBACK_VIDEO_URL: &str = "https://www.youtube.com/embed/rfscVS0vtbw";
const FALLBACK_ARTICLE_URL: &str = "https://www.geeksforgeeks.org/python-programming-language/";

/// Raw rows of the fallback plan, one per day.
///
/// The rows go through the normalizer like generated ones, so the final
/// nodes have the same shape either way.
pub fn fallback_rows(topic: &str, timeframe: u32, date: &str) -> Vec<RawObject> {
    (1..=timeframe)
        .map(|step| {
            let prerequisites: Vec<String> = if step > 1 {
                vec![(step - 1).to_string()]
            } else {
                Vec::new()
            };
            let materials: &[&str] = if step < timeframe {
                &["video", "article", "quiz"]
            } else {
                &["project", "review"]
            };

            let mut row = RawObject::new();
            for (key, value) in [
                ("id", json!(step.to_string())),
                ("topic", json!(format!("{topic} - Step {step} (FALLBACK)"))),
                ("date", json!(date)),
                ("prerequisites", json!(prerequisites)),
                ("materials", json!(materials)),
                (
                    "resources",
                    json!([
                        {"type": "youtube", "title": format!("{topic} Video {step}"), "url": FALLBACK_VIDEO_URL},
                        {"type": "article", "title": format!("{topic} Article {step}"), "url": FALLBACK_ARTICLE_URL},
                    ]),
                ),
                ("children", json!([])),
            ] {
                row.insert(key.to_string(), value);
            }
            row
        })
        .collect()
}
