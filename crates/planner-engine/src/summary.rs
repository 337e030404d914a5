// ABOUTME: Aggregate statistics for a training plan
// ABOUTME: Week and distance totals, peak week, phase lengths, and workout counts by type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use planner_core::models::{Phase, TrainingPlan, WorkoutType};
use serde::Serialize;

/// Plan-level totals
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Number of weeks
    pub total_weeks: usize,
    /// Sum of every workout distance
    pub total_distance: f64,
    /// Highest weekly mileage target
    pub peak_week_mileage: f64,
    /// Weeks spent in each phase; unlabelled weeks are not counted
    pub phase_weeks: BTreeMap<Phase, usize>,
    /// Number of workouts of each type; untyped workouts are not counted
    pub workouts_by_type: BTreeMap<WorkoutType, usize>,
}

impl PlanSummary {
    /// Summarize a plan
    #[must_use]
    pub fn from_plan(plan: &TrainingPlan) -> Self {
        let mut phase_weeks = BTreeMap::new();
        let mut workouts_by_type = BTreeMap::new();
        let mut total_distance = 0.0;
        let mut peak_week_mileage: f64 = 0.0;

        for weekly in &plan.weekly_plans {
            if let Some(phase) = weekly.phase {
                *phase_weeks.entry(phase).or_insert(0) += 1;
            }
            peak_week_mileage = peak_week_mileage.max(weekly.total_mileage);
            for workout in weekly.workouts() {
                total_distance += workout.distance;
                if let Some(workout_type) = workout.workout_type {
                    *workouts_by_type.entry(workout_type).or_insert(0) += 1;
                }
            }
        }

        Self {
            total_weeks: plan.weekly_plans.len(),
            total_distance,
            peak_week_mileage,
            phase_weeks,
            workouts_by_type,
        }
    }

    /// Weeks labelled with a phase, zero when absent
    #[must_use]
    pub fn weeks_in(&self, phase: Phase) -> usize {
        self.phase_weeks.get(&phase).copied().unwrap_or(0)
    }

    /// Workouts of a type, zero when absent
    #[must_use]
    pub fn count_of(&self, workout_type: WorkoutType) -> usize {
        self.workouts_by_type.get(&workout_type).copied().unwrap_or(0)
    }
}
