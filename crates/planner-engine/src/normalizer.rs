// ABOUTME: Derives effective training preferences from raw runner input
// ABOUTME: Applies beginner caps, seeds starting mileage, and collects advisory suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Preference normalization.
//!
//! Produces a fresh `EffectivePreferences`; the caller's input is only borrowed.

use planner_core::models::{ExperienceLevel, PreferredDay, TrainingPreferencesInput};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ExperienceConfig;

/// Preferences after experience-based clamping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectivePreferences {
    /// Experience level the caps were derived from
    pub level: ExperienceLevel,
    /// Weekly mileage ceiling
    pub max_weekly_mileage: f64,
    /// Quality workouts per week
    pub weekly_workouts: u32,
    /// Running days per week
    pub weekly_running_days: u32,
    /// Long run day
    pub preferred_long_run_day: PreferredDay,
    /// Week-one mileage seed for the buildup ramp
    pub starting_mileage: f64,
    /// Advisory notes for values that were capped
    pub suggestions: Vec<String>,
}

impl EffectivePreferences {
    /// Whether beginner scheduling rules apply
    #[must_use]
    pub const fn is_beginner(&self) -> bool {
        self.level.is_beginner()
    }
}

/// Clamps raw preferences according to experience level
#[derive(Debug, Clone, Default)]
pub struct PreferenceNormalizer {
    config: ExperienceConfig,
}

impl PreferenceNormalizer {
    /// Create a normalizer with explicit caps
    #[must_use]
    pub const fn new(config: ExperienceConfig) -> Self {
        Self { config }
    }

    /// Derive effective preferences. Never fails; unknown levels get the advanced defaults.
    #[must_use]
    pub fn normalize(&self, input: &TrainingPreferencesInput) -> EffectivePreferences {
        let raw = &input.training_preferences;
        let level = input.running_experience.level.clone();

        let mut max_weekly_mileage = raw.max_weekly_mileage;
        let mut weekly_workouts = raw.weekly_workouts;
        let mut weekly_running_days = raw.weekly_running_days;
        let mut suggestions = Vec::new();

        if level.is_beginner() {
            let caps = &self.config;
            if max_weekly_mileage > caps.beginner_max_weekly_mileage {
                suggestions.push(format!(
                    "As a beginner, we recommend keeping weekly mileage at or below {} miles. \
                     Your plan has been capped at {} miles per week.",
                    caps.beginner_max_weekly_mileage, caps.beginner_max_weekly_mileage
                ));
                max_weekly_mileage = caps.beginner_max_weekly_mileage;
            }
            if weekly_workouts > caps.beginner_max_weekly_workouts {
                suggestions.push(format!(
                    "As a beginner, we recommend at most {} quality workout(s) per week \
                     so you can build an aerobic base safely.",
                    caps.beginner_max_weekly_workouts
                ));
                weekly_workouts = caps.beginner_max_weekly_workouts;
            }
            if weekly_running_days > caps.beginner_max_running_days {
                suggestions.push(format!(
                    "As a beginner, we recommend running at most {} days per week \
                     with rest days in between.",
                    caps.beginner_max_running_days
                ));
                weekly_running_days = caps.beginner_max_running_days;
            }
        }

        let starting_mileage = self.starting_mileage(&level, max_weekly_mileage);

        debug!(
            level = %level,
            max_weekly_mileage,
            weekly_workouts,
            weekly_running_days,
            starting_mileage,
            clamped = suggestions.len(),
            "Normalized training preferences"
        );

        EffectivePreferences {
            level,
            max_weekly_mileage,
            weekly_workouts,
            weekly_running_days,
            preferred_long_run_day: raw.preferred_long_run_day,
            starting_mileage,
            suggestions,
        }
    }

    /// Week-one mileage seed for a level and (already capped) ceiling
    #[must_use]
    pub fn starting_mileage(&self, level: &ExperienceLevel, max_weekly_mileage: f64) -> f64 {
        let caps = &self.config;
        match level {
            ExperienceLevel::Beginner => caps
                .beginner_starting_mileage_cap
                .min(max_weekly_mileage * caps.beginner_starting_ratio),
            ExperienceLevel::Intermediate => max_weekly_mileage * caps.intermediate_starting_ratio,
            ExperienceLevel::Advanced | ExperienceLevel::Expert | ExperienceLevel::Other(_) => {
                max_weekly_mileage * caps.advanced_starting_ratio
            }
        }
    }
}
