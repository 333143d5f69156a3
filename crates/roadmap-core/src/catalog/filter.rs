//! Drops video resources that cannot be embedded.

use std::{sync::OnceLock, thread};

use log::{debug, warn};
use regex::Regex;

use super::VideoCatalog;
use crate::models::Resource;

fn video_id_regex() -> &'static Regex {
    static VIDEO_ID_RE: OnceLock<Regex> = OnceLock::new();
    VIDEO_ID_RE.get_or_init(|| {
        Regex::new(r"(?:v=|youtu\.be/|/embed/)([A-Za-z0-9_-]{11})")
            .expect("video id regex must compile")
    })
}

/// Pull the 11-character video id out of a watch, short-link or embed URL.
///
/// ```rust
/// # use roadmap_core::catalog::extract_video_id;
/// assert_eq!(extract_video_id("https://www.youtube.com/watch?v=KJGSYHN4J3w"), Some("KJGSYHN4J3w"));
/// assert_eq!(extract_video_id("https://youtu.be/rfscVS0vtbw?t=30"), Some("rfscVS0vtbw"));
/// assert_eq!(extract_video_id("https://www.youtube.com/@channel"), None);
/// ```
pub fn extract_video_id(url: &str) -> Option<&str> {
    video_id_regex()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

enum Verdict<'scope> {
    Keep,
    Drop,
    Pending(thread::ScopedJoinHandle<'scope, bool>),
}

/// Order-preserving filter over a resource list.
///
/// Non-video resources always pass. Video resources pass only when an id can
/// be extracted and the catalog positively reports them embeddable; any
/// lookup failure counts as "not embeddable". Lookups for one list run
/// concurrently.
pub struct EmbeddabilityFilter<'a> {
    catalog: &'a dyn VideoCatalog,
}

impl<'a> EmbeddabilityFilter<'a> {
    /// Create a filter backed by the given catalog.
    pub fn new(catalog: &'a dyn VideoCatalog) -> Self {
        Self { catalog }
    }

    /// Remove every video resource that is not confirmed embeddable.
    pub fn filter(&self, resources: Vec<Resource>) -> Vec<Resource> {
        let keep: Vec<bool> = thread::scope(|scope| {
            let verdicts: Vec<Verdict<'_>> = resources
                .iter()
                .map(|resource| {
                    if !resource.is_video() {
                        return Verdict::Keep;
                    }
                    match extract_video_id(&resource.url) {
                        Some(video_id) => {
                            let url = resource.url.as_str();
                            Verdict::Pending(scope.spawn(move || self.is_embeddable(video_id, url)))
                        }
                        None => {
                            warn!("Skipping video without a recognizable id: {}", resource.url);
                            Verdict::Drop
                        }
                    }
                })
                .collect();

            verdicts
                .into_iter()
                .map(|verdict| match verdict {
                    Verdict::Keep => true,
                    Verdict::Drop => false,
                    Verdict::Pending(handle) => handle.join().unwrap_or(false),
                })
                .collect()
        });

        resources
            .into_iter()
            .zip(keep)
            .filter_map(|(resource, keep)| keep.then_some(resource))
            .collect()
    }

    fn is_embeddable(&self, video_id: &str, url: &str) -> bool {
        match self.catalog.status(video_id) {
            Ok(status) if status.embeddable => {
                debug!("Video {video_id} is embeddable");
                true
            }
            Ok(_) => {
                warn!("Skipping non-embeddable video: {url}");
                false
            }
            Err(e) => {
                warn!("Video lookup failed, skipping {url}: {e}");
                false
            }
        }
    }
}
