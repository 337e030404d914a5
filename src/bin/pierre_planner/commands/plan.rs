// ABOUTME: Plan commands for pierre-planner
// ABOUTME: Handles generate, validate, and audit operations on JSON documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use pierre_planner::plan_service::{read_plan_file, read_preferences_file, PlanService};
use pierre_planner::{AppError, AppResult, PlanSummary};
use tokio::fs;
use tracing::info;

use crate::helpers::display::{
    display_suggestions, display_summary, display_validation_failure, display_warnings,
};

/// Generate a plan and write it as JSON
pub async fn generate(
    service: &PlanService,
    input: &Path,
    output: Option<&Path>,
    pretty: bool,
    summary: bool,
) -> AppResult<()> {
    info!("Generating training plan from {}", input.display());

    let preferences = read_preferences_file(input).await?;
    let plan = service.create_plan(&preferences).await?;

    let json = if pretty {
        serde_json::to_string_pretty(&plan)?
    } else {
        serde_json::to_string(&plan)?
    };

    match output {
        Some(path) => {
            fs::write(path, json.as_bytes()).await.map_err(|e| {
                AppError::internal(format!("Failed to write {}: {e}", path.display()))
                    .with_source(e)
            })?;
            info!("Plan written to {}", path.display());
        }
        None => println!("{json}"),
    }

    display_suggestions(&plan.suggestions);
    if summary {
        display_summary(&PlanSummary::from_plan(&plan));
    }

    Ok(())
}

/// Validate a plan document; `Ok(false)` when the plan breaks a rule
pub async fn validate(service: &PlanService, plan_path: &Path) -> AppResult<bool> {
    let plan = read_plan_file(plan_path).await?;
    match service.check(&plan) {
        Ok(()) => {
            println!("Plan is valid ({} weeks)", plan.total_weeks());
            Ok(true)
        }
        Err(e) => {
            display_validation_failure(&e);
            Ok(false)
        }
    }
}

/// Print consistency warnings for a plan document
pub async fn audit(plan_path: &Path) -> AppResult<()> {
    let plan = read_plan_file(plan_path).await?;
    let warnings = PlanService::audit(&plan);
    display_warnings(&warnings);
    Ok(())
}
