/*
[INPUT]:  Session and operator menu choices via CLI
[OUTPUT]: Submitted tasks, fetched results, status lines
[POS]:    CLI interactive flow
[UPDATE]: When menu actions change
*/

use anyhow::Result;
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use taskdist_adapter::{TaskType, TextOp, sample_batch};
use taskdist_console::Session;

pub async fn run_interactive(session: &mut Session) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", style("Task Distribution Console").bold().cyan());

    loop {
        let actions = vec![
            "Math expression",
            "Text operation",
            "Send batch test",
            "Fetch results",
            "Quit",
        ];
        let selection = Select::with_theme(&theme)
            .with_prompt("Select action")
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 => submit_math(session, &theme).await?,
            1 => submit_text(session, &theme).await?,
            2 => {
                session.submit_batch(sample_batch());
                while session.settle_next().await.is_some() {
                    print_status(session);
                }
            }
            3 => {
                session.fetch_results();
                session.wait_idle().await;
                print_status(session);
                for result in session.results().iter() {
                    println!("  {result}");
                }
            }
            _ => return Ok(()),
        }
    }
}

async fn submit_math(session: &mut Session, theme: &ColorfulTheme) -> Result<()> {
    let previous = session.form().math_expression().to_string();
    let expr: String = Input::with_theme(theme)
        .with_prompt("Expression (e.g. factorial(10), sqrt(144), 2**16)")
        .with_initial_text(previous)
        .allow_empty(true)
        .interact_text()?;

    let form = session.form_mut();
    form.set_task_type(TaskType::Math);
    form.set_math_expression(expr);
    submit_and_report(session).await;
    Ok(())
}

async fn submit_text(session: &mut Session, theme: &ColorfulTheme) -> Result<()> {
    let labels: Vec<&str> = TextOp::ALL.iter().map(TextOp::as_str).collect();
    let op_index = Select::with_theme(theme)
        .with_prompt("Operation")
        .items(&labels)
        .default(session.form().text_operation().index())
        .interact()?;

    let previous = session.form().text_value().to_string();
    let value: String = Input::with_theme(theme)
        .with_prompt("Text")
        .with_initial_text(previous)
        .allow_empty(true)
        .interact_text()?;

    let form = session.form_mut();
    form.set_task_type(TaskType::Text);
    form.set_text_operation(TextOp::ALL[op_index]);
    form.set_text_value(value);
    submit_and_report(session).await;
    Ok(())
}

async fn submit_and_report(session: &mut Session) {
    if session.submit().is_none() {
        println!("{}", style("  Cancelled.").dim());
        return;
    }
    session.wait_idle().await;
    print_status(session);
}

fn print_status(session: &Session) {
    let status = session.status();
    let styled = if status.starts_with("Error") || status.starts_with("Network error") {
        style(status).red()
    } else {
        style(status).green()
    };
    println!("  {styled}");
}
