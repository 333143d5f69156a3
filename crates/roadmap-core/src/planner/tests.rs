//! Tests for the planner module.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use jiff::civil::date;

use super::{chat::CHAT_ERROR_REPLY, pipeline::Stage, *};
use crate::{
    catalog::VideoStatus,
    completion::CompletionRequest,
    params::PlanRequest,
    RoadmapError,
};

/// Completion client that replays canned replies and records requests.
#[derive(Default)]
struct Scripted {
    replies: Mutex<VecDeque<Option<String>>>,
    seen: Mutex<Vec<CompletionRequest>>,
}

impl Scripted {
    fn new(replies: &[Option<&str>]) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.iter().map(|r| r.map(str::to_string)).collect()),
            seen: Mutex::default(),
        })
    }

    fn requests(&self) -> Vec<CompletionRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl CompletionClient for Scripted {
    fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.seen.lock().unwrap().push(request.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(Some(text)) => Ok(text),
            Some(None) => Err(RoadmapError::completion("Server error").with_status(500)),
            None => Err(RoadmapError::completion("script exhausted").transport()),
        }
    }
}

struct EmbedAll;

impl VideoCatalog for EmbedAll {
    fn status(&self, _video_id: &str) -> Result<VideoStatus> {
        Ok(VideoStatus { embeddable: true })
    }
}

fn create_test_planner(script: &Arc<Scripted>) -> Planner {
    PlannerBuilder::new()
        .with_completion_client(script.clone())
        .with_video_catalog(Arc::new(EmbedAll))
        .with_date(date(2025, 6, 2))
        .build()
        .expect("Failed to create planner")
}

#[test]
fn test_builder_requires_capabilities() {
    let err = PlannerBuilder::new().build().unwrap_err();
    assert!(matches!(err, RoadmapError::Configuration { .. }));

    let err = PlannerBuilder::new()
        .with_completion_client(Scripted::new(&[]))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("video catalog"));
}

#[test]
fn test_generation_date_is_pinned() {
    let planner = create_test_planner(&Scripted::new(&[]));
    assert_eq!(planner.generation_date(), date(2025, 6, 2));
}

#[test]
fn test_two_stage_happy_path() {
    let script = Scripted::new(&[
        Some(r#"[{"day":1,"topic":"Ownership","prerequisites":[]},{"day":2,"topic":"Borrowing","prerequisites":["Ownership"]}]"#),
        Some(r#"```json
[{"day":1,"topic":"Ownership","prerequisites":[],"materials":["video"],"resources":[{"type":"youtube","title":"Ownership","url":"https://www.youtube.com/watch?v=VFIOSWy93H0"}]},
 {"day":2,"topic":"Borrowing","prerequisites":["Ownership"],"materials":["article","quiz"],"resources":["https://doc.rust-lang.org/book/ch04-02-references-and-borrowing.html"]}]
```"#),
    ]);
    let planner = create_test_planner(&script);

    let response = planner.generate_plan_blocking(&PlanRequest::new("Rust", "2"));

    assert!(!response.is_fallback());
    assert_eq!(response.plan.len(), 2);
    assert_eq!(response.plan[0].id, "1");
    assert_eq!(response.plan[0].date, "2025-06-02");
    assert_eq!(response.plan[0].resources.len(), 1);
    assert_eq!(response.plan[1].prerequisites, vec!["Ownership"]);
    assert_eq!(response.plan[1].resources[0].title, "Borrowing");

    let requests = script.requests();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert_eq!(request.system_role, PLAN_SYSTEM_ROLE);
        assert_eq!(request.max_tokens, STAGE_MAX_TOKENS);
        assert!((request.temperature - PLAN_TEMPERATURE).abs() < f32::EPSILON);
    }
    assert!(requests[1].prompt.contains(r#""topic":"Borrowing""#));
}

#[test]
fn test_batches_are_five_days_each() {
    let schedule: Vec<String> = (1..=7)
        .map(|d| format!(r#"{{"day":{d},"topic":"T{d}","prerequisites":[]}}"#))
        .collect();
    let schedule = format!("[{}]", schedule.join(","));
    let batch_one = (1..=5)
        .map(|d| format!(r#"{{"day":{d},"topic":"T{d}"}}"#))
        .collect::<Vec<_>>()
        .join(",");
    let batch_two = r#"[{"day":6,"topic":"T6"},{"day":7,"topic":"T7"}]"#;
    let batch_one = format!("[{batch_one}]");

    let script = Scripted::new(&[Some(schedule.as_str()), Some(batch_one.as_str()), Some(batch_two)]);
    let planner = create_test_planner(&script);

    let response = planner.generate_plan_blocking(&PlanRequest::new("T", "7"));

    assert!(!response.is_fallback());
    let ids: Vec<&str> = response.plan.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7"]);

    let requests = script.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests[1].prompt.contains(r#""topic":"T5""#));
    assert!(!requests[1].prompt.contains(r#""topic":"T6""#));
    assert!(requests[2].prompt.contains(r#""topic":"T7""#));
}

#[test]
fn test_stage_two_failure_falls_back() {
    let script = Scripted::new(&[Some(r#"[{"day":1,"topic":"A"},{"day":2,"topic":"B"}]"#), None]);
    let planner = create_test_planner(&script);

    let response = planner.generate_plan_blocking(&PlanRequest::new("Chess", "3"));

    assert!(response.is_fallback());
    assert_eq!(response.plan.len(), 3);
    assert_eq!(response.plan[2].topic, "Chess - Step 3 (FALLBACK)");
}

#[test]
fn test_unparsable_batch_falls_back() {
    let script = Scripted::new(&[
        Some(r#"[{"day":1,"topic":"A"},{"day":2,"topic":"B"}]"#),
        Some("Sorry, I can't produce that."),
    ]);
    let planner = create_test_planner(&script);

    let response = planner.generate_plan_blocking(&PlanRequest::new("Go", "2"));

    assert!(response.is_fallback());
    assert_eq!(response.plan.len(), 2);
}

#[test]
fn test_stage_display() {
    assert_eq!(Stage::Init.to_string(), "init");
    assert_eq!(
        Stage::BatchRequested { batch: 2, of: 3 }.to_string(),
        "batch 2/3 requested"
    );
}

#[test]
fn test_chat_uses_chat_settings() {
    let script = Scripted::new(&[Some("Borrowing lets you use a value without owning it.")]);
    let planner = create_test_planner(&script);

    let reply = planner.chat_blocking("What is borrowing?");

    assert_eq!(reply.response, "Borrowing lets you use a value without owning it.");
    let request = &script.requests()[0];
    assert_eq!(request.system_role, "You are a helpful AI assistant.");
    assert_eq!(request.prompt, "What is borrowing?");
    assert_eq!(request.max_tokens, 512);
    assert!((request.temperature - 0.7).abs() < f32::EPSILON);
}

#[test]
fn test_chat_failure_degrades_to_notice() {
    let planner = create_test_planner(&Scripted::new(&[None]));
    assert_eq!(planner.chat_blocking("hi").response, CHAT_ERROR_REPLY);
}

#[tokio::test]
async fn test_async_entry_points() {
    let script = Scripted::new(&[None, Some("Hello!")]);
    let planner = create_test_planner(&script);

    let response = planner
        .generate_plan(&PlanRequest::new("Async", "x"))
        .await
        .expect("Failed to generate plan");
    assert!(response.is_fallback());
    assert_eq!(response.plan.len(), 2);

    let reply = planner.chat("hi").await.expect("Failed to chat");
    assert_eq!(reply.response, "Hello!");
}
