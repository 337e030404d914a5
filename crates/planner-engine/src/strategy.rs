// ABOUTME: Plan generation strategy contract shared by deterministic and external generators
// ABOUTME: Every strategy yields the same TrainingPlan shape so one validator covers them all
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use planner_core::constants::service_names::DETERMINISTIC_STRATEGY;
use planner_core::errors::AppResult;
use planner_core::models::{TrainingPlan, TrainingPreferencesInput};

use crate::generator::DeterministicPlanGenerator;

/// A source of training plans
///
/// Implementations may call out to external services, so the contract is
/// async and fallible. Output is always checked by the plan validator before
/// it is accepted.
#[async_trait::async_trait]
pub trait PlanGenerationStrategy: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Produce a plan for the given request
    async fn generate_plan(&self, input: &TrainingPreferencesInput) -> AppResult<TrainingPlan>;
}

#[async_trait::async_trait]
impl PlanGenerationStrategy for DeterministicPlanGenerator {
    fn name(&self) -> &'static str {
        DETERMINISTIC_STRATEGY
    }

    async fn generate_plan(&self, input: &TrainingPreferencesInput) -> AppResult<TrainingPlan> {
        Ok(self.generate(input))
    }
}
