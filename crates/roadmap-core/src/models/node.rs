//! Canonical plan node and resource definitions.

#[cfg(feature = "schema")]
use std::borrow::Cow;
use std::{convert::Infallible, str::FromStr};

#[cfg(feature = "schema")]
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

/// Kind of a learning resource.
///
/// The three well-known kinds get their own variants; anything else the
/// model invents is preserved verbatim as [`ResourceKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceKind {
    /// Hosted video that must be embeddable to survive filtering
    YouTube,
    /// Written article or reference page
    Article,
    /// Any other web link
    Link,
    /// Free-form tag supplied by the model
    Other(String),
}

impl ResourceKind {
    /// Wire representation of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            ResourceKind::YouTube => "youtube",
            ResourceKind::Article => "article",
            ResourceKind::Link => "link",
            ResourceKind::Other(tag) => tag,
        }
    }

    /// Guess the kind of a bare URL.
    ///
    /// ```rust
    /// # use roadmap_core::models::ResourceKind;
    /// assert_eq!(ResourceKind::infer_from_url("https://www.youtube.com/watch?v=abc"), ResourceKind::YouTube);
    /// assert_eq!(ResourceKind::infer_from_url("https://en.wikipedia.org/wiki/Rust"), ResourceKind::Article);
    /// assert_eq!(ResourceKind::infer_from_url("https://crates.io"), ResourceKind::Link);
    /// ```
    pub fn infer_from_url(url: &str) -> Self {
        if url.contains("youtube") {
            ResourceKind::YouTube
        } else if url.contains("article") || url.contains("wiki") {
            ResourceKind::Article
        } else {
            ResourceKind::Link
        }
    }
}

impl FromStr for ResourceKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for ResourceKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "youtube" => ResourceKind::YouTube,
            "article" => ResourceKind::Article,
            "link" => ResourceKind::Link,
            _ => ResourceKind::Other(value),
        }
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(feature = "schema")]
impl JsonSchema for ResourceKind {
    fn schema_name() -> Cow<'static, str> {
        "ResourceKind".into()
    }

    fn json_schema(g: &mut SchemaGenerator) -> Schema {
        String::json_schema(g)
    }
}

/// A single learning resource attached to a plan node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Resource {
    /// Resource kind (`youtube`, `article`, `link`, or a free-form tag)
    #[serde(rename = "type")]
    pub kind: ResourceKind,

    /// Human-readable title
    pub title: String,

    /// Location of the resource
    pub url: String,
}

impl Resource {
    /// Create a resource from its parts.
    pub fn new(kind: ResourceKind, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            url: url.into(),
        }
    }

    /// Whether this resource is a hosted video subject to embeddability checks.
    pub fn is_video(&self) -> bool {
        self.kind == ResourceKind::YouTube
    }
}

/// One day of canonical learning-plan content.
///
/// Every field is always present; the normalizer guarantees this no matter
/// how malformed the model output was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanNode {
    /// Identifier, unique within a plan
    pub id: String,

    /// What this day covers
    pub topic: String,

    /// ISO date (`YYYY-MM-DD`) the node was scheduled or generated for
    pub date: String,

    /// Topics or node ids that should be studied first
    pub prerequisites: Vec<String>,

    /// Material tags (video, article, quiz, project, ...)
    pub materials: Vec<String>,

    /// Resources that survived embeddability filtering
    pub resources: Vec<Resource>,

    /// Reserved for hierarchical plans; always empty today
    #[serde(default)]
    pub children: Vec<PlanNode>,
}
