// ABOUTME: Core data models for the training planner
// ABOUTME: Re-exports preference input, training plan, weekly plan, and workout types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Wire-compatible representations of what the runner asks for and what the
//! planner hands back. All models serialize with camelCase field names.
//!
//! ## Design Principles
//!
//! - **Caller-owned input**: `TrainingPreferencesInput` is never mutated; the
//!   engine derives new values from it
//! - **Lenient plan intake**: `TrainingPlan` accepts plans from any source
//!   (generator, external strategy, user edit) so the validator can report
//!   missing fields with its exact messages instead of failing at parse time
//! - **Strict enums**: workout types, phases, and weekday names match exactly;
//!   on plan intake an unrecognized label is kept as `None` rather than
//!   rejecting the whole document

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

mod plan;
mod preferences;
mod workout;

// Preference domain
pub use preferences::{
    ExperienceLevel, PreferredDay, RunningExperience, TargetRace, TrainingPreferences,
    TrainingPreferencesInput,
};

// Plan domain
pub use plan::{Phase, TrainingPlan, WeeklyPlan};

// Workout domain
pub use workout::{Workout, WorkoutType};

/// Decode `null` as the type's default. Absent fields are covered by `#[serde(default)]`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a label, keeping `None` for `null` or anything unrecognized
pub(crate) fn lenient_label<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
