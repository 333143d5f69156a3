//! Builder for creating and configuring Planner instances.

use std::sync::Arc;

use jiff::civil::Date;

use super::Planner;
use crate::{
    catalog::{CachedCatalog, VideoCatalog, YouTubeCatalog},
    completion::{ChatCompletionClient, CompletionClient},
    config::Settings,
    error::{Result, RoadmapError},
};

/// Builder for creating and configuring Planner instances.
///
/// Capabilities are taken from [`Settings`] unless injected directly;
/// injected ones win.
#[derive(Default)]
pub struct PlannerBuilder {
    settings: Option<Settings>,
    completion: Option<Arc<dyn CompletionClient>>,
    catalog: Option<Arc<dyn VideoCatalog>>,
    date: Option<Date>,
}

impl PlannerBuilder {
    /// Creates a new builder with nothing configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the HTTP clients described by these settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Uses this completion client instead of the HTTP one.
    pub fn with_completion_client(mut self, client: Arc<dyn CompletionClient>) -> Self {
        self.completion = Some(client);
        self
    }

    /// Uses this video catalog instead of the HTTP one.
    pub fn with_video_catalog(mut self, catalog: Arc<dyn VideoCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Pins the date stamped on generated nodes.
    ///
    /// If not specified, the current local date is used per request.
    pub fn with_date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::Configuration` if a capability was neither
    /// injected nor derivable from settings, or if an HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<Planner> {
        let completion: Arc<dyn CompletionClient> = match (self.completion, &self.settings) {
            (Some(client), _) => client,
            (None, Some(settings)) => Arc::new(ChatCompletionClient::new(&settings.llm)?),
            (None, None) => return Err(missing("completion client")),
        };

        let catalog: Arc<dyn VideoCatalog> = match (self.catalog, &self.settings) {
            (Some(catalog), _) => catalog,
            (None, Some(settings)) => {
                Arc::new(CachedCatalog::new(YouTubeCatalog::new(&settings.video)?))
            }
            (None, None) => return Err(missing("video catalog")),
        };

        Ok(Planner::new(completion, catalog, self.date))
    }
}

fn missing(what: &str) -> RoadmapError {
    RoadmapError::Configuration {
        message: format!("No {what} configured: provide settings or inject one"),
    }
}
