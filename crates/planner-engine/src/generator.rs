// ABOUTME: Deterministic training plan generator wiring the planning pipeline together
// ABOUTME: Normalize, schedule phases, size weeks, distribute days, classify, assemble
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic plan generation.
//!
//! Generation is total: any well-typed `TrainingPreferencesInput` yields a
//! structurally complete plan. Correctness checks are left to
//! [`crate::validator::PlanValidator`].

use planner_core::dates::{total_weeks_between, week_start};
use planner_core::models::{TrainingPlan, TrainingPreferencesInput};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::assembler::{PlanAssembler, WeekSpec};
use crate::config::PlanningConfig;
use crate::mileage::MileageCurve;
use crate::normalizer::PreferenceNormalizer;
use crate::phases::PhaseScheduler;
use crate::workout_selector::WorkoutTypeSelector;

/// Rule-based plan generator
#[derive(Debug, Clone)]
pub struct DeterministicPlanGenerator {
    normalizer: PreferenceNormalizer,
    scheduler: PhaseScheduler,
    curve: MileageCurve,
    assembler: PlanAssembler,
}

impl Default for DeterministicPlanGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DeterministicPlanGenerator {
    /// Create a generator from the global planning configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PlanningConfig::global())
    }

    /// Create a generator with explicit configuration
    #[must_use]
    pub fn with_config(config: &PlanningConfig) -> Self {
        Self {
            normalizer: PreferenceNormalizer::new(config.experience.clone()),
            scheduler: PhaseScheduler::new(&config.periodization),
            curve: MileageCurve::new(&config.periodization),
            assembler: PlanAssembler::new(WorkoutTypeSelector::new(config.workouts.clone())),
        }
    }

    /// Generate a plan. The input is only borrowed and never modified.
    #[must_use]
    pub fn generate(&self, input: &TrainingPreferencesInput) -> TrainingPlan {
        let preferences = self.normalizer.normalize(input);
        let total_weeks = total_weeks_between(input.start_date, input.end_date);
        let boundaries = self.scheduler.schedule(total_weeks);

        let weekly_plans = (1..=total_weeks)
            .map(|week| {
                let phase = boundaries.phase_for_week(week);
                let spec = WeekSpec {
                    week,
                    week_start: week_start(input.start_date, week),
                    phase,
                    weekly_mileage: self.curve.weekly_mileage(
                        week,
                        total_weeks,
                        preferences.starting_mileage,
                        preferences.max_weekly_mileage,
                    ),
                };
                let weekly = self
                    .assembler
                    .build_week(spec, input.end_date, &preferences, input);
                debug!(
                    week,
                    phase = %phase,
                    total_mileage = weekly.total_mileage,
                    workouts = weekly.workouts().len(),
                    "Planned training week"
                );
                weekly
            })
            .collect();

        let plan = PlanAssembler::build_plan(input, preferences, weekly_plans);

        info!(
            goal = %plan.goal,
            level = %input.running_experience.level,
            total_weeks,
            base_end = boundaries.base_end,
            peak_end = boundaries.peak_end,
            suggestions = plan.suggestions.len(),
            "Generated training plan"
        );

        plan
    }

    /// Generate plans for many inputs in parallel; output order matches input order
    #[must_use]
    pub fn generate_batch(&self, inputs: &[TrainingPreferencesInput]) -> Vec<TrainingPlan> {
        inputs.par_iter().map(|input| self.generate(input)).collect()
    }
}
