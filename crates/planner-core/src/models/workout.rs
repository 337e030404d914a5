// ABOUTME: Workout model and workout type enumeration for planned training days
// ABOUTME: Serializes workout types with their display labels ("Long Run", "Speed Work", ...)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{lenient_label, null_as_default};

/// Kind of session planned for a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorkoutType {
    /// Conversational-pace run
    #[serde(rename = "Easy Run")]
    EasyRun,
    /// The week's longest run
    #[serde(rename = "Long Run")]
    LongRun,
    /// Sustained threshold-pace effort
    #[serde(rename = "Tempo Run")]
    TempoRun,
    /// Interval repeats
    #[serde(rename = "Speed Work")]
    SpeedWork,
    /// Very easy shakeout
    #[serde(rename = "Recovery Run")]
    RecoveryRun,
    /// No running
    #[serde(rename = "Rest Day")]
    RestDay,
}

impl WorkoutType {
    /// Display label, identical to the serialized form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EasyRun => "Easy Run",
            Self::LongRun => "Long Run",
            Self::TempoRun => "Tempo Run",
            Self::SpeedWork => "Speed Work",
            Self::RecoveryRun => "Recovery Run",
            Self::RestDay => "Rest Day",
        }
    }

}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single planned session
///
/// `day` and `description` stay plain strings so that plans coming from
/// outside the generator can carry blank, null, or malformed values for the
/// validator to reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// ISO calendar date of the session
    #[serde(default, deserialize_with = "null_as_default")]
    pub day: String,
    /// Session kind; `None` when the source omitted it or used an unknown label
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub workout_type: Option<WorkoutType>,
    /// Planned distance in the caller's unit
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Coaching guidance
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Whether the runner has logged it
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

impl Workout {
    /// Whether this is the week's long run
    #[must_use]
    pub fn is_long_run(&self) -> bool {
        self.workout_type == Some(WorkoutType::LongRun)
    }
}
