/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When ConsoleConfig schema changes
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use std::path::PathBuf;

use taskdist_console::ConsoleConfig;

pub fn run_init(output: Option<PathBuf>) -> Result<()> {
    println!("{}", style("Welcome to Task Distribution Console Init").bold().cyan());
    println!(
        "{}",
        style("This will guide you through creating a console configuration.").dim()
    );

    let theme = ColorfulTheme::default();
    let defaults = ConsoleConfig::default();

    let base_url: String = Input::with_theme(&theme)
        .with_prompt("Queue API base URL (e.g., http://localhost:5000)")
        .default(defaults.base_url.clone())
        .validate_with(|input: &String| -> Result<(), String> {
            let candidate = ConsoleConfig {
                base_url: input.clone(),
                ..ConsoleConfig::default()
            };
            candidate.validate().map_err(|err| err.to_string())
        })
        .interact_text()?;

    println!("\n{}", style("--- Timeouts ---").bold());
    let use_timeout = Confirm::with_theme(&theme)
        .with_prompt("Give up on requests after a fixed time?")
        .default(false)
        .interact()?;
    let request_timeout_secs = if use_timeout {
        let secs: u64 = Input::with_theme(&theme)
            .with_prompt("Request timeout (seconds)")
            .default(30)
            .validate_with(|secs: &u64| -> Result<(), &str> {
                if *secs == 0 { Err("must be greater than zero") } else { Ok(()) }
            })
            .interact_text()?;
        Some(secs)
    } else {
        None
    };

    let connect_timeout_secs: u64 = Input::with_theme(&theme)
        .with_prompt("Connect timeout (seconds, 0 to disable)")
        .default(defaults.connect_timeout_secs)
        .interact_text()?;

    println!("\n{}", style("--- Logging ---").bold());
    let levels = vec!["error", "warn", "info", "debug", "trace"];
    let level_selection = Select::with_theme(&theme)
        .with_prompt("Log level")
        .items(&levels)
        .default(2)
        .interact()?;

    let config = ConsoleConfig {
        base_url,
        request_timeout_secs,
        connect_timeout_secs,
        log_level: levels[level_selection].to_string(),
    };
    config.validate()?;

    let output = match output {
        Some(path) => path,
        None => ConsoleConfig::default_path()
            .context("no config directory on this platform; pass --output")?,
    };

    if output.exists() {
        let overwrite = Confirm::with_theme(&theme)
            .with_prompt(format!("{} exists. Overwrite?", output.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("{}", style("Aborted, nothing written.").yellow());
            return Ok(());
        }
    }

    config.write_to(&output)?;
    println!(
        "\n{} {}",
        style("Configuration written to").green(),
        style(output.display()).bold()
    );
    Ok(())
}
