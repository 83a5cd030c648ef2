//! Lesson Workflow
//!
//! Walks one lesson from request to completion the way a service would:
//! parse a client request, resolve it against the current status, record the
//! result, then render the available actions from the catalog.
//!
//! Key concepts:
//! - Requests name either an action (`transition`) or a target (`status`)
//! - `resolve` validates a request without touching the history
//! - Histories are immutable; recording returns a new one
//! - The catalog drives UI rendering
//!
//! Run with: cargo run --example lesson_workflow

use cadence::catalog;
use cadence::core::{StatusHistory, StatusMachine, WireEnum};
use cadence::labels;
use cadence::machines::lesson::{LessonId, LessonMachine, LessonStatusValue};
use cadence::request::{self, ChangeRequest};
use std::error::Error;
use uuid::Uuid;

fn handle(
    history: StatusHistory<LessonMachine>,
    body: &str,
) -> Result<StatusHistory<LessonMachine>, Box<dyn Error>> {
    let request = ChangeRequest::from_json(body)?;
    let decision = request::resolve::<LessonMachine>(history.current_status(), request)?;

    println!(
        "  {} --{}--> {}",
        decision.from.name(),
        decision.transition.name(),
        decision.next.name()
    );

    let record = decision.into_record(Uuid::new_v4(), history.entity_id());
    Ok(history.record(record)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== Lesson Workflow ===\n");

    let lesson = LessonId::new_v4();
    let mut history = StatusHistory::<LessonMachine>::start(lesson, Uuid::new_v4());
    println!("Lesson {} starts as {}", lesson, history.current_status().name());

    println!("\nTeacher works through the lesson:");
    for body in [
        r#"{ "transition": "ACCEPT" }"#,
        r#"{ "transition": "START" }"#,
        r#"{ "status": "COMPLETED", "context": { "notes": "Scales at 90 bpm" } }"#,
    ] {
        history = handle(history, body)?;
    }

    println!("\nA late request is refused:");
    match handle(history.clone(), r#"{ "transition": "ACCEPT" }"#) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(err) => println!("  {}", err),
    }

    let path: Vec<_> = history.path().iter().map(|s| s.display_label()).collect();
    println!("\nPath: {}", path.join(" -> "));
    println!(
        "Terminal: {} (actions left: {})",
        history.is_terminal(),
        LessonMachine::transitions_from(history.current_status()).len()
    );
    assert_eq!(history.current_status(), LessonStatusValue::Completed);

    println!("\nStored history:");
    println!("{}", serde_json::to_string_pretty(&history)?);

    println!("\nLabel for a legacy stored value:");
    println!("  {}", labels::status_label::<LessonMachine>("POSTPONED"));

    println!("\nActions offered to the UI:");
    let lessons = catalog::describe::<LessonMachine>();
    for status in &lessons.statuses {
        let actions: Vec<_> = lessons
            .edges
            .iter()
            .filter(|edge| edge.from == status.value)
            .map(|edge| edge.transition.as_str())
            .collect();
        println!("  {:<12} {}", status.label, actions.join(", "));
    }

    Ok(())
}
