use std::{
    collections::{HashSet, VecDeque},
    sync::{Arc, Mutex},
};

use jiff::civil::{date, Date};
use roadmap_core::{
    CompletionClient, CompletionRequest, Planner, PlannerBuilder, Result, RoadmapError,
    VideoCatalog, VideoStatus,
};

/// Date pinned on every test planner.
pub fn test_date() -> Date {
    date(2025, 1, 6)
}

/// Completion client that replays canned replies in order.
///
/// `None` entries and an exhausted script both fail like a server error.
#[derive(Default)]
pub struct ScriptedCompletion {
    replies: Mutex<VecDeque<Option<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedCompletion {
    pub fn new<I, S>(replies: I) -> Arc<Self>
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().map(|r| r.map(Into::into)).collect()),
            prompts: Mutex::default(),
        })
    }

    /// A client whose every call fails.
    pub fn failing() -> Arc<Self> {
        Self::new(Vec::<Option<String>>::new())
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl CompletionClient for ScriptedCompletion {
    fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.prompts.lock().unwrap().push(request.prompt.clone());
        match self.replies.lock().unwrap().pop_front().flatten() {
            Some(text) => Ok(text),
            None => Err(RoadmapError::completion("Server error").with_status(503)),
        }
    }
}

/// Catalog that reports every video embeddable except the listed ids.
#[derive(Default)]
pub struct FakeCatalog {
    blocked: HashSet<String>,
}

impl FakeCatalog {
    pub fn embed_all() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn blocking(ids: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            blocked: ids.iter().map(|id| (*id).to_string()).collect(),
        })
    }
}

impl VideoCatalog for FakeCatalog {
    fn status(&self, video_id: &str) -> Result<VideoStatus> {
        Ok(VideoStatus {
            embeddable: !self.blocked.contains(video_id),
        })
    }
}

/// Helper function to create a test planner
pub fn create_test_planner(
    completion: Arc<ScriptedCompletion>,
    catalog: Arc<FakeCatalog>,
) -> Planner {
    PlannerBuilder::new()
        .with_completion_client(completion)
        .with_video_catalog(catalog)
        .with_date(test_date())
        .build()
        .expect("Failed to create planner")
}

/// A minified schedule reply with `days` contiguous days.
pub fn schedule_reply(days: u32) -> String {
    let days: Vec<String> = (1..=days)
        .map(|d| format!(r#"{{"day":{d},"topic":"Topic {d}","prerequisites":[]}}"#))
        .collect();
    format!("[{}]", days.join(","))
}
