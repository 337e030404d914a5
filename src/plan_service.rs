// ABOUTME: Plan service orchestrating a generation strategy, start anchoring, and validation
// ABOUTME: Also loads preference and plan documents from disk for the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan service
//!
//! The generator never checks its own output; this layer runs the validator on
//! whatever a strategy returns before handing the plan back.

use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use planner_core::errors::{AppError, AppResult, ErrorCode};
use planner_core::models::{TrainingPlan, TrainingPreferencesInput};
use planner_engine::{
    audit_plan, DeterministicPlanGenerator, PlanGenerationStrategy, PlanValidator, PlanWarning,
};
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::{instrument, warn};

use crate::config::{ServiceConfig, StartAnchor};
use crate::logging::PlanLogger;

/// Runs a strategy and gates its output through the validator
#[derive(Clone)]
pub struct PlanService {
    strategy: Arc<dyn PlanGenerationStrategy>,
    config: ServiceConfig,
}

impl PlanService {
    /// Create a service around any strategy
    #[must_use]
    pub fn new(strategy: Arc<dyn PlanGenerationStrategy>, config: ServiceConfig) -> Self {
        Self { strategy, config }
    }

    /// Create a service backed by the deterministic generator
    #[must_use]
    pub fn deterministic(config: ServiceConfig) -> Self {
        Self::new(Arc::new(DeterministicPlanGenerator::new()), config)
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Name of the strategy in use
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Generate a plan and, when configured, validate it
    ///
    /// # Errors
    ///
    /// Returns the strategy's error, or an `InvalidInput` error carrying the
    /// first validation failure verbatim
    #[instrument(skip_all, fields(strategy = self.strategy.name()))]
    pub async fn create_plan(&self, input: &TrainingPreferencesInput) -> AppResult<TrainingPlan> {
        let started = Instant::now();
        let request = self.anchored_input(input, Utc::now().date_naive());
        let plan = self.strategy.generate_plan(&request).await?;

        if self.config.validate_generated {
            self.check(&plan)?;
        }

        let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        PlanLogger::log_plan_accepted(self.strategy.name(), &plan.goal, plan.total_weeks(), elapsed);
        Ok(plan)
    }

    /// Validate a plan from any source
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error carrying the first validation failure verbatim
    pub fn check(&self, plan: &TrainingPlan) -> AppResult<()> {
        PlanValidator::validate(plan).map_err(|e| {
            PlanLogger::log_plan_rejected(self.strategy.name(), &e.to_string());
            AppError::from(e)
        })
    }

    /// Audit a plan and log the outcome
    #[must_use]
    pub fn audit(plan: &TrainingPlan) -> Vec<PlanWarning> {
        let warnings = audit_plan(plan);
        PlanLogger::log_audit(&plan.goal, warnings.len());
        warnings
    }

    /// Apply the configured start anchor. `Today` discards the caller's start
    /// date, so it is logged whenever it changes something.
    #[must_use]
    pub fn anchored_input<'a>(
        &self,
        input: &'a TrainingPreferencesInput,
        today: NaiveDate,
    ) -> Cow<'a, TrainingPreferencesInput> {
        match self.config.start_anchor {
            StartAnchor::Requested => Cow::Borrowed(input),
            StartAnchor::Today if input.start_date == today => Cow::Borrowed(input),
            StartAnchor::Today => {
                warn!(
                    requested_start = %input.start_date,
                    anchored_start = %today,
                    "Overriding requested start date with today's date"
                );
                let mut anchored = input.clone();
                anchored.start_date = today;
                Cow::Owned(anchored)
            }
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path).await.map_err(|e| {
        AppError::new(
            ErrorCode::InvalidInput,
            format!("Failed to read {}: {e}", path.display()),
        )
        .with_source(e)
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Load a preferences document
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid request
pub async fn read_preferences_file(path: &Path) -> AppResult<TrainingPreferencesInput> {
    read_json(path).await
}

/// Load a plan document
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a plan-shaped JSON object
pub async fn read_plan_file(path: &Path) -> AppResult<TrainingPlan> {
    read_json(path).await
}
