/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: Terminal UI session or one-shot queue operations
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

mod cli;
mod tui;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, Mutex as StdMutex};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskdist_adapter::{TaskQueueClient, TextOp};
use taskdist_console::{ConsoleConfig, Session};

use crate::cli::commands::TaskInput;
use crate::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogWriterFactory};

#[derive(Parser, Debug)]
#[command(name = "taskdist-console", version, about = "Submit tasks to the distribution queue and collect results")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    /// Overrides base_url from the config file
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a single task
    Submit {
        #[command(subcommand)]
        task: SubmitTask,
    },
    /// Fetch results that are ready
    Fetch,
    /// Submit the built-in smoke-test batch
    Batch,
    /// Check that the queue service is up
    Health,
    /// Menu-driven prompt session
    Interactive,
    /// Write a configuration file interactively
    Init {
        #[arg(long = "output", value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum SubmitTask {
    /// Math expression, e.g. "factorial(10)"
    Math { expr: String },
    /// Text operation: reverse, upper, lower or length
    Text { operation: TextOp, value: String },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    if let Some(Command::Init { output }) = &args.command {
        cli::init::run_init(output.clone())?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = ConsoleConfig::load(args.config_path.as_deref()).context("load config")?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(log_level) = args.log_level {
        config.log_level = log_level;
    }
    config.validate().context("validate config")?;

    let tui_mode = args.command.is_none() && !args.dry_run;
    let log_buffer = Arc::new(StdMutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
    if tui_mode {
        init_tracing_to_buffer(&config.log_level, LogWriterFactory::new(log_buffer.clone()))?;
    } else {
        init_tracing(&config.log_level)?;
    }

    info!(base_url = %config.base_url, dry_run = args.dry_run, "starting taskdist-console");

    if args.dry_run {
        info!(
            request_timeout_secs = ?config.request_timeout_secs,
            connect_timeout_secs = config.connect_timeout_secs,
            "dry-run requested; configuration validated"
        );
        return Ok(ExitCode::SUCCESS);
    }

    let client = TaskQueueClient::with_config(config.client_config(), &config.base_url)
        .context("create queue client")?;
    let mut session = Session::new(Arc::new(client.clone()));

    let success = match args.command {
        None => {
            tui::run_tui(session, log_buffer).await?;
            true
        }
        Some(Command::Submit { task }) => {
            let input = match task {
                SubmitTask::Math { expr } => TaskInput::Math { expr },
                SubmitTask::Text { operation, value } => TaskInput::Text { operation, value },
            };
            cli::commands::run_submit(&mut session, input).await?
        }
        Some(Command::Fetch) => cli::commands::run_fetch(&mut session).await?,
        Some(Command::Batch) => cli::commands::run_batch(&mut session).await?,
        Some(Command::Health) => cli::commands::run_health(&client).await?,
        Some(Command::Interactive) => {
            cli::interactive::run_interactive(&mut session).await?;
            true
        }
        Some(Command::Init { .. }) => unreachable!("init handled before config load"),
    };

    Ok(if success { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn init_tracing_to_buffer(log_level: &str, writer: LogWriterFactory) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
