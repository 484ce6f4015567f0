mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::branch::{self, BranchArgs};
use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::pull_request::{self, PullRequestArgs};
use crate::cmd::reference::{self, AndroidUrlArgs, InfoArgs, SimulatorArgs};
use crate::config::StoredConfig;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::infra::clipboard::SystemClipboard;
use crate::services::{Clock, FixedClock, LocalClock};

#[derive(Parser)]
#[command(
    name = "devtool",
    author,
    version,
    about = "Branch names, PR templates and local dev reference"
)]
struct Cli {
    /// Use this date (YYYY-MM-DD) instead of today's local date.
    #[arg(long, global = true)]
    date: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a branch name from a ticket id and title.
    Branch(BranchArgs),
    /// Generate a pull request title and body for a ticket.
    Pr(PullRequestArgs),
    /// Rewrite localhost so the Android emulator can reach the host.
    AndroidUrl(AndroidUrlArgs),
    /// Print the command that opens a simulator.
    Simulator(SimulatorArgs),
    /// Print ports, Android details and common commands.
    Info(InfoArgs),
    /// Manage CLI configuration.
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let date = cli.date.as_deref();

    match cli.command {
        Commands::Config(args) => config_cmd::run(args.command),
        Commands::Branch(args) => branch::run(&load_context(date)?, args).await,
        Commands::Pr(args) => pull_request::run(&load_context(date)?, args).await,
        Commands::AndroidUrl(args) => {
            reference::run_android_url(&load_context(date)?, args).await
        }
        Commands::Simulator(args) => reference::run_simulator(&load_context(date)?, args).await,
        Commands::Info(args) => reference::run_info(&load_context(date)?, args),
    }
}

fn load_context(date: Option<&str>) -> AppResult<AppContext> {
    let clock = clock_for(date)?;
    let config = StoredConfig::load()?;
    Ok(AppContext::new(
        config,
        clock,
        Arc::new(SystemClipboard::default()),
    ))
}

fn clock_for(date: Option<&str>) -> AppResult<Arc<dyn Clock>> {
    match date {
        Some(value) => {
            let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|err| {
                AppError::InvalidInput(format!("invalid --date '{value}': {err}"))
            })?;
            Ok(Arc::new(FixedClock(date)))
        }
        None => Ok(Arc::new(LocalClock)),
    }
}
