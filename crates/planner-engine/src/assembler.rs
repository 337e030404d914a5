// ABOUTME: Composes day slots and workouts into weekly plans and the final training plan
// ABOUTME: Drops slots past the plan end date and orders each week's workouts by date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, NaiveDate};
use planner_core::dates::{format_plan_date, sunday_index};
use planner_core::models::{
    Phase, TrainingPlan, TrainingPreferences, TrainingPreferencesInput, WeeklyPlan, Workout,
};

use crate::distributor::{DaySlot, WorkoutDistributor};
use crate::normalizer::EffectivePreferences;
use crate::workout_selector::WorkoutTypeSelector;

/// Everything the assembler needs to lay out one week
#[derive(Debug, Clone, Copy)]
pub struct WeekSpec {
    /// 1-based week number
    pub week: u32,
    /// First day of the week
    pub week_start: NaiveDate,
    /// Phase label
    pub phase: Phase,
    /// Mileage target
    pub weekly_mileage: f64,
}

/// Builds `WeeklyPlan`s and wraps them into a `TrainingPlan`
#[derive(Debug, Clone, Default)]
pub struct PlanAssembler {
    distributor: WorkoutDistributor,
    selector: WorkoutTypeSelector,
}

impl PlanAssembler {
    /// Create an assembler around a workout selector
    #[must_use]
    pub const fn new(selector: WorkoutTypeSelector) -> Self {
        Self {
            distributor: WorkoutDistributor,
            selector,
        }
    }

    /// Lay out one week; slots falling after `plan_end` are skipped.
    ///
    /// When the plan window ends before any slot of the week, the long run
    /// moves to the last day the plan covers so the week is never empty.
    #[must_use]
    pub fn build_week(
        &self,
        spec: WeekSpec,
        plan_end: NaiveDate,
        preferences: &EffectivePreferences,
        input: &TrainingPreferencesInput,
    ) -> WeeklyPlan {
        let mut slots = self.distributor.assign_days(spec.week_start, preferences);
        let long_run = slots.iter().copied().find(|slot| slot.is_long_run);
        slots.retain(|slot| slot.date <= plan_end);
        if slots.is_empty() {
            if let Some(slot) = long_run {
                let date = plan_end.max(spec.week_start);
                slots.push(DaySlot {
                    date,
                    day_index: sunday_index(date.weekday()),
                    ..slot
                });
            }
        }
        slots.sort_by_key(|slot| slot.date);

        let workouts: Vec<Workout> = slots
            .iter()
            .map(|slot| {
                self.selector.classify(
                    slot,
                    spec.weekly_mileage,
                    preferences,
                    input.target_race.as_ref(),
                )
            })
            .collect();

        WeeklyPlan {
            week: spec.week,
            phase: Some(spec.phase),
            total_mileage: spec.weekly_mileage,
            workouts: Some(workouts),
        }
    }

    /// Wrap weekly plans into the final plan, echoing the effective preferences
    #[must_use]
    pub fn build_plan(
        input: &TrainingPreferencesInput,
        preferences: EffectivePreferences,
        weekly_plans: Vec<WeeklyPlan>,
    ) -> TrainingPlan {
        let training_preferences = TrainingPreferences {
            weekly_running_days: preferences.weekly_running_days,
            max_weekly_mileage: preferences.max_weekly_mileage,
            weekly_workouts: preferences.weekly_workouts,
            preferred_long_run_day: preferences.preferred_long_run_day,
            coaching_style: input.training_preferences.coaching_style.clone(),
        };

        TrainingPlan {
            goal: input.goal.clone(),
            goal_description: input.goal_description.clone(),
            start_date: format_plan_date(input.start_date),
            end_date: format_plan_date(input.end_date),
            weekly_mileage: preferences.max_weekly_mileage,
            weekly_plans,
            target_race: input.target_race.clone(),
            running_experience: Some(input.running_experience.clone()),
            training_preferences: Some(training_preferences),
            active: true,
            suggestions: preferences.suggestions,
        }
    }
}
