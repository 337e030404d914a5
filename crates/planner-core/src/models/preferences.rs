// ABOUTME: Runner-supplied training preferences consumed by plan generation strategies
// ABOUTME: Defines experience levels, weekday preferences, and the optional target race
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::dates::{weekday_from_name, weekday_name};

/// Running experience level as selected by the runner
///
/// Matching is case-sensitive. Unrecognized labels are preserved in `Other`
/// so they round-trip unchanged; the planner treats them like `Advanced`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExperienceLevel {
    /// New to structured running
    Beginner,
    /// Runs regularly, some race experience
    Intermediate,
    /// Consistent training history
    Advanced,
    /// Competitive runner
    Expert,
    /// Level label not recognized by the planner
    Other(String),
}

impl ExperienceLevel {
    /// Canonical label
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
            Self::Other(label) => label,
        }
    }

    /// Whether beginner caps apply
    #[must_use]
    pub const fn is_beginner(&self) -> bool {
        matches!(self, Self::Beginner)
    }
}

impl From<String> for ExperienceLevel {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Beginner" => Self::Beginner,
            "Intermediate" => Self::Intermediate,
            "Advanced" => Self::Advanced,
            "Expert" => Self::Expert,
            _ => Self::Other(label),
        }
    }
}

impl From<ExperienceLevel> for String {
    fn from(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekday preference serialized as its full English name (`"Sunday"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PreferredDay(pub Weekday);

impl PreferredDay {
    /// Underlying chrono weekday
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        self.0
    }
}

impl TryFrom<String> for PreferredDay {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        weekday_from_name(&name)
            .map(Self)
            .ok_or_else(|| format!("Unknown weekday: {name}"))
    }
}

impl From<PreferredDay> for String {
    fn from(day: PreferredDay) -> Self {
        weekday_name(day.0).to_owned()
    }
}

impl fmt::Display for PreferredDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(weekday_name(self.0))
    }
}

/// Runner's experience profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningExperience {
    /// Experience level
    pub level: ExperienceLevel,
    /// Free-form fitness level description
    #[serde(default)]
    pub fitness_level: String,
}

/// Weekly training preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPreferences {
    /// Running days per week
    pub weekly_running_days: u32,
    /// Weekly mileage ceiling
    pub max_weekly_mileage: f64,
    /// Quality workouts (tempo/speed) per week
    pub weekly_workouts: u32,
    /// Day the long run should land on
    pub preferred_long_run_day: PreferredDay,
    /// Coaching tone requested by the runner
    #[serde(default)]
    pub coaching_style: String,
}

/// Goal race, when the plan builds toward one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRace {
    /// Race distance label (`5k`, `10k`, `Half Marathon`, ...)
    pub distance: String,
    /// Race date (ISO)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Goal finishing time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_time: Option<String>,
    /// Personal best at this distance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_best: Option<String>,
}

impl TargetRace {
    /// Whether this is a short race that calls for interval work rather than tempo
    #[must_use]
    pub fn is_short_distance(&self) -> bool {
        let compact: String = self
            .distance
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        matches!(compact.as_str(), "5k" | "10k" | "5km" | "10km")
    }
}

/// Runner-supplied plan request
///
/// Owned by the caller; generation strategies only ever borrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPreferencesInput {
    /// Training goal
    pub goal: String,
    /// Longer goal description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_description: Option<String>,
    /// First day of the plan
    pub start_date: NaiveDate,
    /// Last day of the plan
    pub end_date: NaiveDate,
    /// Experience profile
    pub running_experience: RunningExperience,
    /// Weekly preferences
    pub training_preferences: TrainingPreferences,
    /// Goal race
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_race: Option<TargetRace>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_level_is_case_sensitive() {
        let level: ExperienceLevel = serde_json::from_str("\"Beginner\"").unwrap();
        assert_eq!(level, ExperienceLevel::Beginner);

        let level: ExperienceLevel = serde_json::from_str("\"beginner\"").unwrap();
        assert_eq!(level, ExperienceLevel::Other("beginner".to_owned()));
        assert_eq!(serde_json::to_string(&level).unwrap(), "\"beginner\"");
    }

    #[test]
    fn test_preferred_day_requires_full_name() {
        let day: PreferredDay = serde_json::from_str("\"Sunday\"").unwrap();
        assert_eq!(day.weekday(), Weekday::Sun);
        assert!(serde_json::from_str::<PreferredDay>("\"Sun\"").is_err());
        assert_eq!(serde_json::to_string(&day).unwrap(), "\"Sunday\"");
    }

    #[test]
    fn test_short_race_detection() {
        let race = |distance: &str| TargetRace {
            distance: distance.to_owned(),
            date: None,
            goal_time: None,
            previous_best: None,
        };
        assert!(race("5k").is_short_distance());
        assert!(race("10 K").is_short_distance());
        assert!(!race("Half Marathon").is_short_distance());
        assert!(!race("15k").is_short_distance());
    }

    #[test]
    fn test_input_deserializes_camel_case() {
        let json = r#"{
            "goal": "First half marathon",
            "startDate": "2025-03-15",
            "endDate": "2025-06-14",
            "runningExperience": {"level": "Intermediate", "fitnessLevel": "Good"},
            "trainingPreferences": {
                "weeklyRunningDays": 4,
                "maxWeeklyMileage": 40,
                "weeklyWorkouts": 1,
                "preferredLongRunDay": "Sunday",
                "coachingStyle": "Supportive"
            }
        }"#;
        let input: TrainingPreferencesInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.training_preferences.max_weekly_mileage, 40.0);
        assert!(input.target_race.is_none());
        assert!(input.goal_description.is_none());
    }
}
