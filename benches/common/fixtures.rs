// ABOUTME: Benchmark fixtures producing realistic training plan requests
// ABOUTME: Inputs are deterministic so measurements are reproducible across runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for plan generation.

use chrono::{Duration, NaiveDate, Weekday};
use pierre_planner::models::{
    ExperienceLevel, PreferredDay, RunningExperience, TrainingPreferences,
    TrainingPreferencesInput,
};

/// Predefined plan lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum PlanLength {
    /// Six week block
    Short,
    /// Typical half marathon build
    Standard,
    /// Full year
    Season,
}

impl PlanLength {
    #[must_use]
    pub const fn weeks(self) -> i64 {
        match self {
            Self::Short => 6,
            Self::Standard => 16,
            Self::Season => 52,
        }
    }
}

fn level_for(index: usize) -> ExperienceLevel {
    match index % 3 {
        0 => ExperienceLevel::Beginner,
        1 => ExperienceLevel::Intermediate,
        _ => ExperienceLevel::Advanced,
    }
}

fn long_run_day_for(index: usize) -> Weekday {
    match index % 3 {
        0 => Weekday::Sun,
        1 => Weekday::Sat,
        _ => Weekday::Wed,
    }
}

/// Build one request; `index` varies level, days, and long run day
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn plan_request(index: usize, length: PlanLength) -> TrainingPreferencesInput {
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 4).unwrap_or_default();
    TrainingPreferencesInput {
        goal: format!("Benchmark goal {index}"),
        goal_description: None,
        start_date,
        end_date: start_date + Duration::weeks(length.weeks()),
        running_experience: RunningExperience {
            level: level_for(index),
            fitness_level: "Moderate".to_owned(),
        },
        training_preferences: TrainingPreferences {
            weekly_running_days: 3 + (index % 5) as u32,
            max_weekly_mileage: 20.0 + (index % 40) as f64,
            weekly_workouts: 1 + (index % 3) as u32,
            preferred_long_run_day: PreferredDay(long_run_day_for(index)),
            coaching_style: String::new(),
        },
        target_race: None,
    }
}

/// Build a batch of varied requests
#[must_use]
pub fn plan_requests(count: usize, length: PlanLength) -> Vec<TrainingPreferencesInput> {
    (0..count).map(|index| plan_request(index, length)).collect()
}
