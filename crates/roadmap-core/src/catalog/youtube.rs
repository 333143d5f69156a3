//! YouTube Data API implementation of the video catalog.

use reqwest::blocking::Client;
use serde::Deserialize;

use super::{VideoCatalog, VideoStatus};
use crate::{
    config::VideoSettings,
    error::{Result, ResultExt, RoadmapError},
};

/// Queries `videos?part=status` for a single id per call.
#[derive(Clone)]
pub struct YouTubeCatalog {
    api_key: String,
    api_url: String,
    client: Client,
}

impl std::fmt::Debug for YouTubeCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeCatalog")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl YouTubeCatalog {
    /// Create a catalog client from video settings.
    pub fn new(settings: &VideoSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .with_context("Failed to create video catalog HTTP client")?;

        Ok(Self {
            api_key: settings.api_key.clone(),
            api_url: settings.api_url.clone(),
            client,
        })
    }
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    #[serde(default)]
    status: Option<VideoItemStatus>,
}

#[derive(Debug, Deserialize)]
struct VideoItemStatus {
    #[serde(default)]
    embeddable: bool,
}

impl VideoCatalog for YouTubeCatalog {
    fn status(&self, video_id: &str) -> Result<VideoStatus> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("part", "status"), ("id", video_id), ("key", &self.api_key)])
            .send()
            .map_err(|e| RoadmapError::video_catalog(video_id, format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RoadmapError::video_catalog(
                video_id,
                format!("unexpected status {}", status.as_u16()),
            ));
        }

        let body: VideoListResponse = response
            .json()
            .map_err(|e| RoadmapError::video_catalog(video_id, format!("invalid response: {e}")))?;

        let item = body
            .items
            .into_iter()
            .next()
            .ok_or_else(|| RoadmapError::video_catalog(video_id, "video not found"))?;

        Ok(VideoStatus {
            embeddable: item.status.is_some_and(|s| s.embeddable),
        })
    }
}
