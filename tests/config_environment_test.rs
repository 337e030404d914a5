// ABOUTME: Unit tests for service and planning configuration loaded from the environment
// ABOUTME: Validates defaults, PLANNER_* overrides, and rejection of malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use pierre_planner::config::{Environment, PlanningConfig, ServiceConfig, StartAnchor};
use planner_engine::ConfigError;
use serial_test::serial;

const SERVICE_VARS: [&str; 3] = [
    "PLANNER_START_ANCHOR",
    "PLANNER_VALIDATE_GENERATED",
    "ENVIRONMENT",
];

fn clear_service_vars() {
    for key in SERVICE_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_service_config_defaults() {
    clear_service_vars();
    let config = ServiceConfig::from_env().unwrap();
    assert_eq!(config, ServiceConfig::default());
    assert!(config.validate_generated);
    assert_eq!(config.start_anchor, StartAnchor::Requested);
}

#[test]
#[serial]
fn test_service_config_overrides() {
    clear_service_vars();
    env::set_var("PLANNER_START_ANCHOR", "Today");
    env::set_var("PLANNER_VALIDATE_GENERATED", "no");
    env::set_var("ENVIRONMENT", "production");

    let config = ServiceConfig::from_env().unwrap();
    assert_eq!(config.start_anchor, StartAnchor::Today);
    assert!(!config.validate_generated);
    assert!(config.environment.is_production());
    assert_eq!(config.start_anchor.to_string(), "today");

    clear_service_vars();
}

#[test]
#[serial]
fn test_service_config_rejects_bad_flag() {
    clear_service_vars();
    env::set_var("PLANNER_VALIDATE_GENERATED", "sometimes");

    let error = ServiceConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("PLANNER_VALIDATE_GENERATED"));

    clear_service_vars();
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("prod"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    ); // Default fallback
}

#[test]
#[serial]
fn test_planning_config_env_override() {
    env::set_var("PLANNER_BEGINNER_MAX_WEEKLY_MILEAGE", "25");
    env::set_var("PLANNER_TAPER_REDUCTION", "0.3");

    let config = PlanningConfig::load().unwrap();
    assert!((config.experience.beginner_max_weekly_mileage - 25.0).abs() < f64::EPSILON);
    assert!((config.periodization.taper_reduction - 0.3).abs() < f64::EPSILON);
    assert_eq!(
        config.workouts,
        PlanningConfig::default().workouts,
        "untouched sections keep defaults"
    );

    env::remove_var("PLANNER_BEGINNER_MAX_WEEKLY_MILEAGE");
    env::remove_var("PLANNER_TAPER_REDUCTION");
}

#[test]
#[serial]
fn test_planning_config_rejects_unparseable_value() {
    env::set_var("PLANNER_BEGINNER_MAX_RUNNING_DAYS", "four");
    let error = PlanningConfig::load().unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));
    env::remove_var("PLANNER_BEGINNER_MAX_RUNNING_DAYS");
}

#[test]
#[serial]
fn test_planning_config_rejects_inverted_phase_ratios() {
    env::set_var("PLANNER_BASE_PHASE_RATIO", "0.8");
    env::set_var("PLANNER_PEAK_PHASE_END_RATIO", "0.6");

    let error = PlanningConfig::load().unwrap_err();
    assert!(matches!(error, ConfigError::InvalidRange(_)));

    env::remove_var("PLANNER_BASE_PHASE_RATIO");
    env::remove_var("PLANNER_PEAK_PHASE_END_RATIO");
}
