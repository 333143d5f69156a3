//! Shaping of the stage-1 schedule and of stage-2 batch results.

use log::{debug, info};
use serde_json::Value;

use crate::{
    models::{RawObject, ScheduleDay},
    normalize::{coerce_text, coerce_text_list},
};

/// Days enriched per stage-2 request.
pub const BATCH_SIZE: usize = 5;

/// Build a schedule of exactly `timeframe` days from extracted objects.
///
/// Days are renumbered by position. Surplus days are discarded and missing
/// trailing days are synthesized, each depending on the topic of the day
/// before it.
pub fn build_schedule(objects: &[RawObject], topic: &str, timeframe: u32) -> Vec<ScheduleDay> {
    let mut schedule: Vec<ScheduleDay> = objects
        .iter()
        .take(timeframe as usize)
        .zip(1..)
        .map(|(raw, day)| {
            ScheduleDay::new(
                day,
                coerce_text(raw.get("topic")),
                coerce_text_list("prerequisites", raw.get("prerequisites")),
            )
        })
        .collect();

    if objects.len() > schedule.len() {
        debug!(
            "Discarding {} surplus schedule days",
            objects.len() - schedule.len()
        );
    }

    let delivered = schedule.len() as u32;
    if delivered < timeframe {
        info!("Schedule has {delivered} of {timeframe} days, filling the rest");
    }
    for day in delivered + 1..=timeframe {
        let prerequisites = schedule
            .last()
            .filter(|prev| !prev.topic.trim().is_empty())
            .map(|prev| vec![prev.topic.clone()])
            .unwrap_or_default();
        schedule.push(ScheduleDay::new(
            day,
            format!("{topic} - Day {day} (FILLER)"),
            prerequisites,
        ));
    }

    schedule
}

/// Line up one batch of enriched rows with the schedule days it was asked for.
///
/// Rows are matched to days by position and always take the schedule's day
/// number; a row without a topic or prerequisites borrows them from its
/// schedule day. Rows beyond the batch are discarded. A missing row is
/// replaced by its schedule day, which then carries no materials or
/// resources.
pub fn align_batch(days: &[ScheduleDay], rows: Vec<RawObject>) -> Vec<RawObject> {
    let returned = rows.len();
    let mut rows = rows.into_iter();
    let aligned: Vec<RawObject> = days
        .iter()
        .map(|day| match rows.next() {
            Some(row) => anchor_row(day, row),
            None => schedule_row(day),
        })
        .collect();

    if returned != days.len() {
        info!(
            "Batch returned {returned} rows for {} days, aligned to the schedule",
            days.len()
        );
    }
    aligned
}

/// Pin an enriched row to its schedule day.
fn anchor_row(day: &ScheduleDay, mut row: RawObject) -> RawObject {
    if row.remove("id").is_some() {
        debug!("Dropping model-supplied id for day {}", day.day);
    }
    row.insert("day".to_string(), Value::from(day.day));
    if coerce_text(row.get("topic")).trim().is_empty() {
        row.insert("topic".to_string(), Value::from(day.topic.as_str()));
    }
    if matches!(row.get("prerequisites"), None | Some(Value::Null)) {
        row.insert(
            "prerequisites".to_string(),
            Value::from(day.prerequisites.clone()),
        );
    }
    row
}

fn schedule_row(day: &ScheduleDay) -> RawObject {
    let mut row = RawObject::new();
    row.insert("day".to_string(), Value::from(day.day));
    row.insert("topic".to_string(), Value::from(day.topic.as_str()));
    row.insert(
        "prerequisites".to_string(),
        Value::from(day.prerequisites.clone()),
    );
    row
}
