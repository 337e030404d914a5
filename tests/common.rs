// ABOUTME: Shared test utilities and fixtures for planner integration tests
// ABOUTME: Provides quiet logging setup plus preference and plan document builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_planner`
//!
//! Fixtures are built from JSON so every test also exercises the wire format.

use std::env;
use std::sync::Once;

use pierre_planner::models::{TrainingPlan, TrainingPreferencesInput};
use serde_json::{json, Value};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Preferences document as JSON
pub fn preferences_json(
    level: &str,
    max_weekly_mileage: f64,
    weekly_running_days: u32,
    weekly_workouts: u32,
    long_run_day: &str,
) -> Value {
    json!({
        "goal": "Run a strong half marathon",
        "goalDescription": "Build steadily toward race day",
        "startDate": "2025-03-15",
        "endDate": "2025-06-14",
        "runningExperience": {
            "level": level,
            "fitnessLevel": "Moderate"
        },
        "trainingPreferences": {
            "weeklyRunningDays": weekly_running_days,
            "maxWeeklyMileage": max_weekly_mileage,
            "weeklyWorkouts": weekly_workouts,
            "preferredLongRunDay": long_run_day,
            "coachingStyle": "Supportive"
        }
    })
}

/// Preferences record parsed from `preferences_json`
pub fn preferences(
    level: &str,
    max_weekly_mileage: f64,
    weekly_running_days: u32,
    weekly_workouts: u32,
    long_run_day: &str,
) -> TrainingPreferencesInput {
    serde_json::from_value(preferences_json(
        level,
        max_weekly_mileage,
        weekly_running_days,
        weekly_workouts,
        long_run_day,
    ))
    .unwrap()
}

/// 13-week intermediate request used by the reference scenario
pub fn intermediate_thirteen_weeks() -> TrainingPreferencesInput {
    preferences("Intermediate", 40.0, 4, 1, "Sunday")
}

/// Minimal valid plan document as JSON
pub fn valid_plan_json() -> Value {
    json!({
        "goal": "Finish a 10k",
        "startDate": "2025-03-15",
        "endDate": "2025-04-12",
        "weeklyMileage": 20,
        "weeklyPlans": [
            {
                "week": 1,
                "phase": "Base Building",
                "totalMileage": 12,
                "workouts": [
                    {"day": "2025-03-16", "type": "Long Run", "distance": 5,
                     "description": "Easy long run", "completed": false},
                    {"day": "2025-03-18", "type": "Easy Run", "distance": 4,
                     "description": "Conversational pace", "completed": false},
                    {"day": "2025-03-20", "type": "Tempo Run", "distance": 3,
                     "description": "Threshold block", "completed": false}
                ]
            }
        ],
        "active": true
    })
}

/// Parse a plan document
pub fn plan_from(value: Value) -> TrainingPlan {
    serde_json::from_value(value).unwrap()
}
