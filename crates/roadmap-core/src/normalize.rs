//! Mapping of loosely-typed day objects onto [`PlanNode`].
//!
//! Normalization is total: every input row yields exactly one node with
//! every field present and correctly typed. Each field has its own pure
//! coercion function; invalid data is defaulted or dropped and only ever
//! logged, never raised.
//!
//! | Field           | Rule                                                         |
//! |-----------------|--------------------------------------------------------------|
//! | `id`            | first non-empty of `id`, `day`, `step`, `index`, `topic`     |
//! | `topic`         | `topic` as text, else empty                                  |
//! | `date`          | `date` as text, else the fallback date                       |
//! | `prerequisites` | list → texts, single text → one-element list, else empty     |
//! | `materials`     | same as `prerequisites`                                      |
//! | `resources`     | full `{type,title,url}` objects or bare URLs, then filtered   |
//! | `children`      | always empty                                                 |

use jiff::civil::Date;
use log::debug;
use serde_json::Value;

use crate::{
    catalog::{EmbeddabilityFilter, VideoCatalog},
    models::{PlanNode, RawObject, Resource, ResourceKind},
};

/// Keys consulted for a node id, in precedence order.
const ID_KEYS: [&str; 5] = ["id", "day", "step", "index", "topic"];

/// Turns raw day objects into canonical plan nodes.
pub struct PlanNormalizer<'a> {
    filter: EmbeddabilityFilter<'a>,
}

impl<'a> PlanNormalizer<'a> {
    /// Create a normalizer whose resource filtering uses `catalog`.
    pub fn new(catalog: &'a dyn VideoCatalog) -> Self {
        Self {
            filter: EmbeddabilityFilter::new(catalog),
        }
    }

    /// Normalize every row, preserving order and length.
    pub fn normalize(&self, raw_days: &[RawObject], fallback_date: Date) -> Vec<PlanNode> {
        raw_days
            .iter()
            .map(|raw| self.normalize_node(raw, fallback_date))
            .collect()
    }

    /// Normalize a single row.
    pub fn normalize_node(&self, raw: &RawObject, fallback_date: Date) -> PlanNode {
        let topic = coerce_text(raw.get("topic"));
        let resources = coerce_resources(raw.get("resources"), &topic);

        PlanNode {
            id: coerce_id(raw),
            date: coerce_date(raw.get("date"), fallback_date),
            prerequisites: coerce_text_list("prerequisites", raw.get("prerequisites")),
            materials: coerce_text_list("materials", raw.get("materials")),
            resources: self.filter.filter(resources),
            children: Vec::new(),
            topic,
        }
    }
}

/// First non-empty value among [`ID_KEYS`], as text.
pub fn coerce_id(raw: &RawObject) -> String {
    ID_KEYS
        .iter()
        .filter_map(|key| raw.get(*key))
        .find(|value| is_present(value))
        .map(value_to_text)
        .unwrap_or_default()
}

/// Any value as text; absent or null becomes the empty string.
pub fn coerce_text(value: Option<&Value>) -> String {
    value.map(value_to_text).unwrap_or_default()
}

/// The given date as text, or the fallback date when absent or null.
pub fn coerce_date(value: Option<&Value>, fallback_date: Date) -> String {
    match value {
        Some(value) if !value.is_null() => value_to_text(value),
        _ => fallback_date.to_string(),
    }
}

/// A list of texts from a list, a single text, or nothing.
pub fn coerce_text_list(field: &str, value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(value_to_text).collect(),
        Some(Value::String(text)) => vec![text.clone()],
        Some(other) => {
            debug!("Ignoring malformed '{field}' value: {other}");
            Vec::new()
        }
    }
}

/// Resources from complete `{type, title, url}` objects or bare URL strings.
///
/// Bare URLs take the node topic as their title and a kind inferred from the
/// URL. Anything else is dropped.
pub fn coerce_resources(value: Option<&Value>, topic: &str) -> Vec<Resource> {
    let items = match value {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => return Vec::new(),
        Some(other) => {
            debug!("Ignoring malformed 'resources' value: {other}");
            return Vec::new();
        }
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(entry) => match (entry.get("type"), entry.get("title"), entry.get("url")) {
                (Some(kind), Some(title), Some(url)) => Some(Resource::new(
                    ResourceKind::from(value_to_text(kind)),
                    value_to_text(title),
                    value_to_text(url),
                )),
                _ => {
                    debug!("Dropping incomplete resource: {item}");
                    None
                }
            },
            Value::String(url) => Some(Resource::new(
                ResourceKind::infer_from_url(url),
                topic,
                url.as_str(),
            )),
            other => {
                debug!("Dropping malformed resource: {other}");
                None
            }
        })
        .collect()
}

/// Text form of a JSON value: strings verbatim, null empty, everything else
/// in its JSON spelling.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Whether a value counts as "given" for id precedence.
///
/// Null, `false`, zero, and empty strings, lists, or objects are skipped.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use serde_json::json;

    use super::*;
    use crate::{catalog::VideoStatus, Result, RoadmapError};

    struct StaticCatalog;

    impl VideoCatalog for StaticCatalog {
        fn status(&self, video_id: &str) -> Result<VideoStatus> {
            match video_id {
                "embedsOK000" => Ok(VideoStatus { embeddable: true }),
                "noEmbed0000" => Ok(VideoStatus { embeddable: false }),
                _ => Err(RoadmapError::video_catalog(video_id, "video not found")),
            }
        }
    }

    fn raw(value: Value) -> RawObject {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    fn today() -> Date {
        date(2025, 3, 14)
    }

    #[test]
    fn test_id_precedence() {
        assert_eq!(coerce_id(&raw(json!({"day": 3, "topic": "X"}))), "3");
        assert_eq!(coerce_id(&raw(json!({"id": "n-1", "day": 3}))), "n-1");
        assert_eq!(coerce_id(&raw(json!({"step": 4, "index": 9}))), "4");
        assert_eq!(coerce_id(&raw(json!({"index": 2.5}))), "2.5");
        assert_eq!(coerce_id(&raw(json!({"topic": "Only topic"}))), "Only topic");
        assert_eq!(coerce_id(&raw(json!({}))), "");
    }

    #[test]
    fn test_id_skips_empty_values() {
        assert_eq!(
            coerce_id(&raw(json!({"id": "", "day": 0, "step": null, "index": 7}))),
            "7"
        );
        assert_eq!(coerce_id(&raw(json!({"id": [], "day": false, "topic": "T"}))), "T");
    }

    #[test]
    fn test_text_list_coercion() {
        assert_eq!(coerce_text_list("p", None), Vec::<String>::new());
        assert_eq!(coerce_text_list("p", Some(&json!(null))), Vec::<String>::new());
        assert_eq!(coerce_text_list("p", Some(&json!("Intro"))), vec!["Intro"]);
        assert_eq!(
            coerce_text_list("p", Some(&json!(["a", 2, true, null]))),
            vec!["a", "2", "true", ""]
        );
        assert_eq!(coerce_text_list("p", Some(&json!(42))), Vec::<String>::new());
        assert_eq!(coerce_text_list("p", Some(&json!({"a": 1}))), Vec::<String>::new());
    }

    #[test]
    fn test_date_defaults_to_fallback() {
        assert_eq!(coerce_date(None, today()), "2025-03-14");
        assert_eq!(coerce_date(Some(&json!(null)), today()), "2025-03-14");
        assert_eq!(coerce_date(Some(&json!("2025-04-01")), today()), "2025-04-01");
        assert_eq!(coerce_date(Some(&json!(20250401)), today()), "20250401");
    }

    #[test]
    fn test_resource_coercion_and_inference() {
        let resources = coerce_resources(
            Some(&json!([
                {"type": "article", "title": "Book", "url": "https://doc.rust-lang.org/book/"},
                "https://www.youtube.com/watch?v=embedsOK000",
                "https://en.wikipedia.org/wiki/Rust",
                "https://medium.com/some-article",
                "https://crates.io",
                {"type": "article", "url": "https://missing-title"},
                42,
                null
            ])),
            "Ownership",
        );

        assert_eq!(
            resources,
            vec![
                Resource::new(ResourceKind::Article, "Book", "https://doc.rust-lang.org/book/"),
                Resource::new(
                    ResourceKind::YouTube,
                    "Ownership",
                    "https://www.youtube.com/watch?v=embedsOK000"
                ),
                Resource::new(ResourceKind::Article, "Ownership", "https://en.wikipedia.org/wiki/Rust"),
                Resource::new(ResourceKind::Article, "Ownership", "https://medium.com/some-article"),
                Resource::new(ResourceKind::Link, "Ownership", "https://crates.io"),
            ]
        );

        assert!(coerce_resources(Some(&json!("https://crates.io")), "T").is_empty());
    }

    #[test]
    fn test_normalize_is_total_on_malformed_rows() {
        let catalog = StaticCatalog;
        let normalizer = PlanNormalizer::new(&catalog);
        let rows = vec![
            raw(json!({})),
            raw(json!({"topic": null, "prerequisites": 5, "materials": {"x": 1}, "resources": "nope"})),
            raw(json!({"topic": 12, "date": null, "resources": [null, [], {"type": "link"}]})),
            raw(json!({"id": {"nested": true}, "children": [{"id": "c"}]})),
        ];

        let nodes = normalizer.normalize(&rows, today());

        assert_eq!(nodes.len(), rows.len());
        for node in &nodes {
            assert_eq!(node.date, "2025-03-14");
            assert!(node.prerequisites.is_empty());
            assert!(node.materials.is_empty());
            assert!(node.resources.is_empty());
            assert!(node.children.is_empty());
        }
        assert_eq!(nodes[0].id, "");
        assert_eq!(nodes[0].topic, "");
        assert_eq!(nodes[1].topic, "");
        assert_eq!(nodes[2].topic, "12");
        assert_eq!(nodes[2].id, "12");
        assert_eq!(nodes[3].id, r#"{"nested":true}"#);
    }

    #[test]
    fn test_normalize_filters_unembeddable_videos() {
        let catalog = StaticCatalog;
        let normalizer = PlanNormalizer::new(&catalog);
        let row = raw(json!({
            "day": 1,
            "topic": "Closures",
            "prerequisites": "Functions",
            "materials": ["video", "quiz"],
            "resources": [
                {"type": "youtube", "title": "Good", "url": "https://www.youtube.com/watch?v=embedsOK000"},
                {"type": "youtube", "title": "Blocked", "url": "https://www.youtube.com/watch?v=noEmbed0000"},
                {"type": "youtube", "title": "Gone", "url": "https://youtu.be/unknown0000"},
                {"type": "article", "title": "Docs", "url": "https://doc.rust-lang.org/book/ch13-01-closures.html"}
            ]
        }));

        let node = normalizer.normalize_node(&row, today());

        assert_eq!(node.id, "1");
        assert_eq!(node.topic, "Closures");
        assert_eq!(node.prerequisites, vec!["Functions"]);
        assert_eq!(node.materials, vec!["video", "quiz"]);
        let titles: Vec<&str> = node.resources.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Good", "Docs"]);
    }
}
