// ABOUTME: Pierre Planner CLI - generate, validate, and audit training plans from JSON files
// ABOUTME: Plans go to stdout as JSON; logs, summaries, and validation failures go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Generate a plan from a preferences document
//! pierre-planner generate --input preferences.json --pretty
//!
//! # Generate, anchoring the plan to start today, and print a summary
//! pierre-planner generate --input preferences.json --anchor-today --summary
//!
//! # Validate a plan (exits non-zero with the first violation)
//! pierre-planner validate --plan plan.json
//!
//! # Report consistency warnings
//! pierre-planner audit --plan plan.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pierre_planner::config::{ServiceConfig, StartAnchor};
use pierre_planner::logging::LoggingConfig;
use pierre_planner::plan_service::PlanService;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "pierre-planner",
    about = "Pierre Training Planner CLI",
    long_about = "Generate periodized running plans and check plans from any source against the planner's structural rules."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a plan from a preferences document
    Generate {
        /// Preferences JSON file
        #[arg(long)]
        input: PathBuf,

        /// Write the plan here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print the plan JSON
        #[arg(long)]
        pretty: bool,

        /// Start the plan today instead of on the requested date
        #[arg(long)]
        anchor_today: bool,

        /// Print plan totals to stderr
        #[arg(long)]
        summary: bool,
    },

    /// Validate a plan document, reporting the first violation
    Validate {
        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,
    },

    /// Report non-fatal consistency warnings for a plan document
    Audit {
        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = ServiceConfig::from_env()?;

    match cli.command {
        Command::Generate {
            input,
            output,
            pretty,
            anchor_today,
            summary,
        } => {
            if anchor_today {
                config.start_anchor = StartAnchor::Today;
            }
            let service = PlanService::deterministic(config);
            commands::plan::generate(
                &service,
                &input,
                output.as_deref(),
                pretty,
                summary,
            )
            .await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { plan } => {
            let service = PlanService::deterministic(config);
            let valid = commands::plan::validate(&service, &plan).await?;
            Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Audit { plan } => {
            commands::plan::audit(&plan).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
