// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for periodization, experience caps, and workout sizing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Default values for the plan generator. The engine's `PlanningConfig` starts
//! from these and lets the environment override them; nothing else should read
//! them directly.

/// Service identifiers used in structured logging
pub mod service_names {
    /// Planner service name
    pub const PIERRE_PLANNER: &str = "pierre-planner";
    /// Deterministic generation strategy name
    pub const DETERMINISTIC_STRATEGY: &str = "deterministic";
}

/// Calendar constants
pub mod calendar {
    /// Days in a training week
    pub const DAYS_PER_WEEK: u32 = 7;
    /// Canonical plan date format (ISO 8601 calendar date)
    pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Periodization ratios
///
/// Phase labels and the mileage curve windows use different proportions on
/// purpose; do not unify them.
pub mod periodization {
    /// Share of the plan labelled Base Building
    pub const BASE_PHASE_RATIO: f64 = 0.6;
    /// Cumulative share of the plan that ends Peak Training
    pub const PEAK_PHASE_END_RATIO: f64 = 0.8;
    /// Share of the plan over which mileage ramps up
    pub const BUILDUP_WINDOW_RATIO: f64 = 0.7;
    /// Share of the plan over which mileage tapers
    pub const TAPER_WINDOW_RATIO: f64 = 0.2;
    /// Fraction of peak mileage shed by the last taper week
    pub const TAPER_REDUCTION: f64 = 0.2;
}

/// Experience-based caps and starting volumes
pub mod experience {
    /// Beginner weekly mileage ceiling
    pub const BEGINNER_MAX_WEEKLY_MILEAGE: f64 = 20.0;
    /// Beginner quality workouts per week ceiling
    pub const BEGINNER_MAX_WEEKLY_WORKOUTS: u32 = 1;
    /// Beginner running days per week ceiling
    pub const BEGINNER_MAX_RUNNING_DAYS: u32 = 4;
    /// Beginner starting mileage ceiling
    pub const BEGINNER_STARTING_MILEAGE_CAP: f64 = 10.0;
    /// Beginner starting mileage as a share of the weekly ceiling
    pub const BEGINNER_STARTING_RATIO: f64 = 0.4;
    /// Intermediate starting mileage as a share of the weekly ceiling
    pub const INTERMEDIATE_STARTING_RATIO: f64 = 0.5;
    /// Advanced/Expert starting mileage as a share of the weekly ceiling
    pub const ADVANCED_STARTING_RATIO: f64 = 0.6;
    /// Day offsets from the long run that leave a rest day between beginner runs;
    /// offset 6 falls the day before the next long run
    pub const BEGINNER_DAY_OFFSETS: [u32; 4] = [0, 2, 4, 6];
}

/// Workout sizing
pub mod workouts {
    /// Long run share of weekly mileage for beginners
    pub const BEGINNER_LONG_RUN_FRACTION: f64 = 0.25;
    /// Long run share of weekly mileage for everyone else
    pub const LONG_RUN_FRACTION: f64 = 0.30;
    /// Quality workout share of weekly mileage
    pub const QUALITY_WORKOUT_FRACTION: f64 = 0.15;
    /// Smallest distance ever emitted for a workout
    pub const MIN_WORKOUT_DISTANCE: f64 = 1.0;
    /// Smallest weekly mileage target ever emitted
    pub const MIN_WEEKLY_MILEAGE: f64 = 1.0;
    /// Allowed drift between a week's target and the sum of its workouts
    pub const MILEAGE_DRIFT_TOLERANCE: f64 = 0.05;
}
