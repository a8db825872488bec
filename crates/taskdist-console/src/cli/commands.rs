/*
[INPUT]:  Session, subcommand arguments
[OUTPUT]: Status lines and results printed to stdout, success flag
[POS]:    CLI one-shot flows (submit, fetch, batch, health)
[UPDATE]: When one-shot subcommands change
*/

use anyhow::Result;
use taskdist_adapter::{TaskPayload, TaskQueueClient, TaskType, TextOp, sample_batch};
use taskdist_console::Session;

/// Task described on the command line
#[derive(Debug, Clone)]
pub enum TaskInput {
    Math { expr: String },
    Text { operation: TextOp, value: String },
}

/// Submit one task and wait for it to settle.
///
/// A blank input is the silent guard: nothing is sent, nothing is printed.
pub async fn run_submit(session: &mut Session, input: TaskInput) -> Result<bool> {
    let form = session.form_mut();
    match input {
        TaskInput::Math { expr } => {
            form.set_task_type(TaskType::Math);
            form.set_math_expression(expr);
        }
        TaskInput::Text { operation, value } => {
            form.set_task_type(TaskType::Text);
            form.set_text_operation(operation);
            form.set_text_value(value);
        }
    }

    if session.submit().is_none() {
        tracing::debug!("blank task input; nothing submitted");
        return Ok(true);
    }

    let applied = session.wait_idle().await;
    println!("{}", session.status());
    Ok(applied.iter().all(|a| a.success))
}

/// Fetch pending results and print the whole accumulated list
pub async fn run_fetch(session: &mut Session) -> Result<bool> {
    session.fetch_results();
    let applied = session.wait_idle().await;
    println!("{}", session.status());
    for result in session.results().iter() {
        println!("  {result}");
    }
    Ok(applied.iter().all(|a| a.success))
}

/// Submit the smoke-test batch, printing each status as it lands
pub async fn run_batch(session: &mut Session) -> Result<bool> {
    let payloads: Vec<TaskPayload> = sample_batch();
    println!("Sending {} tasks...", payloads.len());
    session.submit_batch(payloads);

    let mut all_ok = true;
    let mut settled = 0usize;
    while let Some(applied) = session.settle_next().await {
        settled += 1;
        all_ok &= applied.success;
        println!("  [{}] {}", applied.attempt, session.status());
    }
    println!("Batch complete: {settled} tasks settled.");
    Ok(all_ok)
}

pub async fn run_health(client: &TaskQueueClient) -> Result<bool> {
    match client.health().await {
        Ok(health) => {
            println!("Service health: {}", health.status);
            Ok(health.status == "ok")
        }
        Err(err) => {
            println!("{}", err.status_line());
            Ok(false)
        }
    }
}
