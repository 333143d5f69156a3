//! Video metadata capability and the embeddability filter built on it.

mod filter;
mod youtube;

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

pub use filter::{extract_video_id, EmbeddabilityFilter};
pub use youtube::YouTubeCatalog;

use crate::error::Result;

/// Playback status reported by the video platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoStatus {
    /// Whether third-party pages may embed the video
    pub embeddable: bool,
}

/// Capability that reports the status of a hosted video.
///
/// Invoked once per video resource of every plan node, so implementations
/// must tolerate many calls per plan and concurrent callers.
pub trait VideoCatalog: Send + Sync {
    /// Look up the status of one video.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::VideoCatalog` when the lookup fails or the
    /// video is unknown.
    fn status(&self, video_id: &str) -> Result<VideoStatus>;
}

/// Memoizing wrapper around another catalog.
///
/// Only successful lookups are remembered; failures are retried on the next
/// call.
pub struct CachedCatalog<C> {
    inner: C,
    cache: Mutex<HashMap<String, VideoStatus>>,
}

impl<C: VideoCatalog> CachedCatalog<C> {
    /// Wrap a catalog with an empty cache.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }
}

impl<C: VideoCatalog> VideoCatalog for CachedCatalog<C> {
    fn status(&self, video_id: &str) -> Result<VideoStatus> {
        let cached = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(video_id)
            .copied();
        if let Some(status) = cached {
            return Ok(status);
        }

        let status = self.inner.status(video_id)?;
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(video_id.to_string(), status);
        Ok(status)
    }
}
