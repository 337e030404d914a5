// ABOUTME: Planning configuration with environment overrides and range validation
// ABOUTME: Groups experience caps, periodization ratios, and workout sizing fractions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planning Configuration
//!
//! Defaults reproduce the planner's published behavior exactly. Overrides are
//! read from `PLANNER_*` environment variables once, validated, and cached for
//! the life of the process.

pub mod error;

pub use error::ConfigError;

use planner_core::constants::{experience, periodization, workouts};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNING_CONFIG: OnceLock<PlanningConfig> = OnceLock::new();

/// Experience-based caps and starting volumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceConfig {
    /// Beginner weekly mileage ceiling
    pub beginner_max_weekly_mileage: f64,
    /// Beginner quality workouts per week ceiling
    pub beginner_max_weekly_workouts: u32,
    /// Beginner running days per week ceiling
    pub beginner_max_running_days: u32,
    /// Beginner starting mileage ceiling
    pub beginner_starting_mileage_cap: f64,
    /// Beginner starting mileage share of the weekly ceiling
    pub beginner_starting_ratio: f64,
    /// Intermediate starting mileage share of the weekly ceiling
    pub intermediate_starting_ratio: f64,
    /// Advanced/Expert starting mileage share of the weekly ceiling
    pub advanced_starting_ratio: f64,
}

/// Phase labelling and mileage curve proportions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodizationConfig {
    /// Share of weeks labelled Base Building
    pub base_phase_ratio: f64,
    /// Cumulative share of weeks that ends Peak Training
    pub peak_phase_end_ratio: f64,
    /// Share of weeks over which mileage ramps up
    pub buildup_window_ratio: f64,
    /// Share of weeks over which mileage tapers
    pub taper_window_ratio: f64,
    /// Fraction of peak mileage shed by the final taper week
    pub taper_reduction: f64,
}

/// Per-workout distance fractions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSizingConfig {
    /// Beginner long run share of weekly mileage
    pub beginner_long_run_fraction: f64,
    /// Long run share of weekly mileage
    pub long_run_fraction: f64,
    /// Quality workout share of weekly mileage
    pub quality_workout_fraction: f64,
    /// Smallest distance emitted for any workout
    pub min_workout_distance: f64,
}

/// Main planning configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Experience caps
    pub experience: ExperienceConfig,
    /// Periodization proportions
    pub periodization: PeriodizationConfig,
    /// Workout sizing
    pub workouts: WorkoutSizingConfig,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            beginner_max_weekly_mileage: experience::BEGINNER_MAX_WEEKLY_MILEAGE,
            beginner_max_weekly_workouts: experience::BEGINNER_MAX_WEEKLY_WORKOUTS,
            beginner_max_running_days: experience::BEGINNER_MAX_RUNNING_DAYS,
            beginner_starting_mileage_cap: experience::BEGINNER_STARTING_MILEAGE_CAP,
            beginner_starting_ratio: experience::BEGINNER_STARTING_RATIO,
            intermediate_starting_ratio: experience::INTERMEDIATE_STARTING_RATIO,
            advanced_starting_ratio: experience::ADVANCED_STARTING_RATIO,
        }
    }
}

impl Default for PeriodizationConfig {
    fn default() -> Self {
        Self {
            base_phase_ratio: periodization::BASE_PHASE_RATIO,
            peak_phase_end_ratio: periodization::PEAK_PHASE_END_RATIO,
            buildup_window_ratio: periodization::BUILDUP_WINDOW_RATIO,
            taper_window_ratio: periodization::TAPER_WINDOW_RATIO,
            taper_reduction: periodization::TAPER_REDUCTION,
        }
    }
}

impl Default for WorkoutSizingConfig {
    fn default() -> Self {
        Self {
            beginner_long_run_fraction: workouts::BEGINNER_LONG_RUN_FRACTION,
            long_run_fraction: workouts::LONG_RUN_FRACTION,
            quality_workout_fraction: workouts::QUALITY_WORKOUT_FRACTION,
            min_workout_distance: workouts::MIN_WORKOUT_DISTANCE,
        }
    }
}

fn is_fraction(value: f64) -> bool {
    value > 0.0 && value < 1.0
}

impl PlanningConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planning config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate ratio ordering and ranges
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        let exp = &self.experience;
        if exp.beginner_max_weekly_mileage <= 0.0 || exp.beginner_starting_mileage_cap <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "beginner mileage caps must be positive",
            ));
        }
        if exp.beginner_max_running_days == 0 || exp.beginner_max_running_days > 7 {
            return Err(ConfigError::ValueOutOfRange(
                "beginner_max_running_days must be between 1 and 7",
            ));
        }
        if !is_fraction(exp.beginner_starting_ratio)
            || !is_fraction(exp.intermediate_starting_ratio)
            || !is_fraction(exp.advanced_starting_ratio)
        {
            return Err(ConfigError::ValueOutOfRange(
                "starting ratios must be between 0 and 1",
            ));
        }

        let per = &self.periodization;
        if !is_fraction(per.base_phase_ratio) || !is_fraction(per.peak_phase_end_ratio) {
            return Err(ConfigError::ValueOutOfRange(
                "phase ratios must be between 0 and 1",
            ));
        }
        if per.base_phase_ratio > per.peak_phase_end_ratio {
            return Err(ConfigError::InvalidRange(
                "base_phase_ratio must be <= peak_phase_end_ratio",
            ));
        }
        if !is_fraction(per.buildup_window_ratio)
            || !is_fraction(per.taper_window_ratio)
            || !is_fraction(per.taper_reduction)
        {
            return Err(ConfigError::ValueOutOfRange(
                "mileage curve ratios must be between 0 and 1",
            ));
        }
        if per.buildup_window_ratio + per.taper_window_ratio > 1.0 {
            return Err(ConfigError::InvalidRange(
                "buildup and taper windows must not overlap",
            ));
        }

        let sizing = &self.workouts;
        if !is_fraction(sizing.beginner_long_run_fraction)
            || !is_fraction(sizing.long_run_fraction)
            || !is_fraction(sizing.quality_workout_fraction)
        {
            return Err(ConfigError::ValueOutOfRange(
                "workout fractions must be between 0 and 1",
            ));
        }
        if sizing.min_workout_distance <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_workout_distance must be positive",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Experience caps
        Self::apply_env_var(
            "PLANNER_BEGINNER_MAX_WEEKLY_MILEAGE",
            &mut self.experience.beginner_max_weekly_mileage,
        )?;
        Self::apply_env_var(
            "PLANNER_BEGINNER_MAX_WEEKLY_WORKOUTS",
            &mut self.experience.beginner_max_weekly_workouts,
        )?;
        Self::apply_env_var(
            "PLANNER_BEGINNER_MAX_RUNNING_DAYS",
            &mut self.experience.beginner_max_running_days,
        )?;
        Self::apply_env_var(
            "PLANNER_BEGINNER_STARTING_MILEAGE_CAP",
            &mut self.experience.beginner_starting_mileage_cap,
        )?;

        // Periodization
        Self::apply_env_var(
            "PLANNER_BASE_PHASE_RATIO",
            &mut self.periodization.base_phase_ratio,
        )?;
        Self::apply_env_var(
            "PLANNER_PEAK_PHASE_END_RATIO",
            &mut self.periodization.peak_phase_end_ratio,
        )?;
        Self::apply_env_var(
            "PLANNER_BUILDUP_WINDOW_RATIO",
            &mut self.periodization.buildup_window_ratio,
        )?;
        Self::apply_env_var(
            "PLANNER_TAPER_WINDOW_RATIO",
            &mut self.periodization.taper_window_ratio,
        )?;
        Self::apply_env_var(
            "PLANNER_TAPER_REDUCTION",
            &mut self.periodization.taper_reduction,
        )?;

        // Workout sizing
        Self::apply_env_var(
            "PLANNER_LONG_RUN_FRACTION",
            &mut self.workouts.long_run_fraction,
        )?;
        Self::apply_env_var(
            "PLANNER_BEGINNER_LONG_RUN_FRACTION",
            &mut self.workouts.beginner_long_run_fraction,
        )?;
        Self::apply_env_var(
            "PLANNER_QUALITY_WORKOUT_FRACTION",
            &mut self.workouts.quality_workout_fraction,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PlanningConfig::default().validate().is_ok());
    }

    #[test]
    fn test_phase_ratio_ordering_is_enforced() {
        let mut config = PlanningConfig::default();
        config.periodization.base_phase_ratio = 0.9;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_overlapping_curve_windows_rejected() {
        let mut config = PlanningConfig::default();
        config.periodization.buildup_window_ratio = 0.85;
        config.periodization.taper_window_ratio = 0.25;
        assert!(config.validate().is_err());
    }
}
