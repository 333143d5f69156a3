//! The plan-generation state machine.
//!
//! ```text
//! Init → ScheduleRequested → ScheduleParsed → (BatchRequested → BatchParsed)* → Normalized
//!   └──────────────────────────── any fault ─────────────────────────────────────┴→ Fallback
//! ```
//!
//! Faults are not caught along the way. They travel up to
//! [`Planner::generate_plan_blocking`], which takes the single fault edge to
//! the fallback plan and records the state it left from.

use std::fmt;

use jiff::civil::Date;
use log::{debug, error, info, warn};
use tokio::task;

use super::{
    fallback::fallback_rows,
    prompts::{enrichment_prompt, schedule_prompt},
    schedule::{align_batch, build_schedule, BATCH_SIZE},
    Planner, STAGE_MAX_TOKENS,
};
use crate::{
    error::{Result, RoadmapError},
    extract::extract_objects,
    models::{PlanNode, PlanResponse, RawObject},
    normalize::PlanNormalizer,
    params::PlanRequest,
};

/// Position of a run in the generation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    ScheduleRequested,
    ScheduleParsed,
    BatchRequested { batch: usize, of: usize },
    BatchParsed { batch: usize, of: usize },
    Normalized,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Init => write!(f, "init"),
            Stage::ScheduleRequested => write!(f, "schedule requested"),
            Stage::ScheduleParsed => write!(f, "schedule parsed"),
            Stage::BatchRequested { batch, of } => write!(f, "batch {batch}/{of} requested"),
            Stage::BatchParsed { batch, of } => write!(f, "batch {batch}/{of} parsed"),
            Stage::Normalized => write!(f, "normalized"),
        }
    }
}

/// One pass through the pipeline for a single request.
struct PlanRun<'a> {
    planner: &'a Planner,
    topic: &'a str,
    timeframe: u32,
    date: Date,
    stage: Stage,
}

impl<'a> PlanRun<'a> {
    fn advance(&mut self, next: Stage) {
        debug!("Plan '{}': {} -> {}", self.topic, self.stage, next);
        self.stage = next;
    }

    fn run(&mut self) -> Result<Vec<PlanNode>> {
        self.advance(Stage::ScheduleRequested);
        let text = self
            .planner
            .complete_for_plan(&schedule_prompt(self.topic, self.timeframe), STAGE_MAX_TOKENS)?;
        let objects = extract_objects(&text)?;
        let schedule = build_schedule(&objects, self.topic, self.timeframe);
        self.advance(Stage::ScheduleParsed);

        let of = schedule.len().div_ceil(BATCH_SIZE);
        let mut enriched: Vec<RawObject> = Vec::with_capacity(schedule.len());
        for (idx, days) in schedule.chunks(BATCH_SIZE).enumerate() {
            let batch = idx + 1;
            self.advance(Stage::BatchRequested { batch, of });
            let text = self
                .planner
                .complete_for_plan(&enrichment_prompt(days)?, STAGE_MAX_TOKENS)?;
            let rows = extract_objects(&text)?;
            enriched.extend(align_batch(days, rows));
            self.advance(Stage::BatchParsed { batch, of });
        }

        let nodes = self.normalize(&enriched);
        self.advance(Stage::Normalized);
        Ok(nodes)
    }

    fn fallback(&self) -> Vec<PlanNode> {
        let rows = fallback_rows(self.topic, self.timeframe, &self.date.to_string());
        self.normalize(&rows)
    }

    fn normalize(&self, rows: &[RawObject]) -> Vec<PlanNode> {
        PlanNormalizer::new(self.planner.catalog.as_ref()).normalize(rows, self.date)
    }
}

impl Planner {
    /// Generate a plan, blocking the calling thread on network I/O.
    ///
    /// Always returns a plan of `request.timeframe_days()` nodes. When the
    /// pipeline faults, the response carries the fallback plan and
    /// [`PlanResponse::is_fallback`] is true.
    pub fn generate_plan_blocking(&self, request: &PlanRequest) -> PlanResponse {
        let mut run = PlanRun {
            planner: self,
            topic: &request.topic,
            timeframe: request.timeframe_days(),
            date: self.generation_date(),
            stage: Stage::Init,
        };
        info!(
            "Generating a {}-day plan for '{}'",
            run.timeframe, run.topic
        );

        match run.run() {
            Ok(nodes) => {
                info!("Generated {} plan nodes", nodes.len());
                PlanResponse::generated(nodes)
            }
            Err(e) => {
                if e.triggers_fallback() {
                    warn!("Plan generation faulted at '{}': {e}", run.stage);
                } else {
                    error!("Unexpected failure at '{}': {e}", run.stage);
                }
                warn!("Using fallback plan for '{}'", run.topic);
                PlanResponse::fallback(run.fallback())
            }
        }
    }

    /// Generate a plan on the blocking thread pool.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::Configuration` if the blocking task could not
    /// be joined. Pipeline faults never surface here.
    pub async fn generate_plan(&self, request: &PlanRequest) -> Result<PlanResponse> {
        let planner = self.clone();
        let request = request.clone();
        task::spawn_blocking(move || planner.generate_plan_blocking(&request))
            .await
            .map_err(|e| RoadmapError::Configuration {
                message: format!("Task join error: {e}"),
            })
    }
}
