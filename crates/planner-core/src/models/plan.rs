// ABOUTME: Training plan, weekly plan, and periodization phase models
// ABOUTME: Lenient intake so externally supplied plans reach the validator intact
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

use super::preferences::{RunningExperience, TargetRace, TrainingPreferences};
use super::workout::Workout;
use super::{lenient_label, null_as_default};

/// Periodization phase of a plan week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    /// Aerobic volume at low intensity
    #[serde(rename = "Base Building")]
    BaseBuilding,
    /// Highest-load block
    #[serde(rename = "Peak Training")]
    PeakTraining,
    /// Load reduction before the goal event
    #[serde(rename = "Tapering")]
    Tapering,
}

impl Phase {
    /// Display label, identical to the serialized form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BaseBuilding => "Base Building",
            Self::PeakTraining => "Peak Training",
            Self::Tapering => "Tapering",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One week of a training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    /// 1-based week number
    #[serde(default, deserialize_with = "null_as_default")]
    pub week: u32,
    /// Periodization phase; `None` when the source omitted it or used an unknown label
    #[serde(
        default,
        deserialize_with = "lenient_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub phase: Option<Phase>,
    /// Weekly mileage target the workouts were derived from
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_mileage: f64,
    /// Sessions for the week; `None` when the source supplied something other than a list
    #[serde(default, deserialize_with = "deserialize_workout_list")]
    pub workouts: Option<Vec<Workout>>,
}

impl WeeklyPlan {
    /// Workouts as a slice, empty when the list is absent or malformed
    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        self.workouts.as_deref().unwrap_or_default()
    }

    /// Sum of workout distances
    #[must_use]
    pub fn planned_distance(&self) -> f64 {
        self.workouts().iter().map(|w| w.distance).sum()
    }
}

/// Accept any JSON value for `workouts`, keeping only genuine arrays.
fn deserialize_workout_list<'de, D>(deserializer: D) -> Result<Option<Vec<Workout>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(de::Error::custom),
        _ => Ok(None),
    }
}

const fn default_active() -> bool {
    true
}

fn deserialize_active<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_active))
}

/// Assembled training plan
///
/// Produced by a generation strategy or supplied externally (user edit,
/// external generator) and then handed to the validator unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    /// Training goal
    #[serde(default, deserialize_with = "null_as_default")]
    pub goal: String,
    /// Longer goal description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_description: Option<String>,
    /// First day of the plan (ISO)
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    /// Last day of the plan (ISO)
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_date: String,
    /// Effective weekly mileage ceiling
    #[serde(default, deserialize_with = "null_as_default")]
    pub weekly_mileage: f64,
    /// Week-by-week schedule
    #[serde(default, deserialize_with = "null_as_default")]
    pub weekly_plans: Vec<WeeklyPlan>,
    /// Goal race
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_race: Option<TargetRace>,
    /// Experience profile the plan was built for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running_experience: Option<RunningExperience>,
    /// Effective weekly preferences the plan was built with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_preferences: Option<TrainingPreferences>,
    /// Whether this is the runner's active plan
    #[serde(default = "default_active", deserialize_with = "deserialize_active")]
    pub active: bool,
    /// Advisory notes produced while normalizing preferences
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl TrainingPlan {
    /// Number of weeks in the plan
    #[must_use]
    pub fn total_weeks(&self) -> usize {
        self.weekly_plans.len()
    }

    /// Iterate every workout with its 1-based week number
    pub fn workouts(&self) -> impl Iterator<Item = (u32, &Workout)> {
        self.weekly_plans
            .iter()
            .flat_map(|week| week.workouts().iter().map(move |w| (week.week, w)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_array_workouts_become_none() {
        let week: WeeklyPlan = serde_json::from_str(
            r#"{"week": 1, "phase": "Base Building", "totalMileage": 20, "workouts": "soon"}"#,
        )
        .unwrap();
        assert!(week.workouts.is_none());
        assert!(week.workouts().is_empty());

        let week: WeeklyPlan =
            serde_json::from_str(r#"{"week": 1, "phase": "Tapering", "workouts": null}"#).unwrap();
        assert!(week.workouts.is_none());

        let week: WeeklyPlan =
            serde_json::from_str(r#"{"week": 2, "phase": "Peak Training"}"#).unwrap();
        assert!(week.workouts.is_none());
    }

    #[test]
    fn test_array_workouts_parse() {
        let week: WeeklyPlan = serde_json::from_str(
            r#"{"week": 1, "phase": "Base Building", "totalMileage": 10,
                "workouts": [{"day": "2025-03-16", "type": "Long Run", "distance": 3,
                              "description": "Easy long run", "completed": false}]}"#,
        )
        .unwrap();
        assert_eq!(week.workouts().len(), 1);
        assert!((week.planned_distance() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_null_fields_decode_to_defaults() {
        let plan: TrainingPlan = serde_json::from_str(
            r#"{"goal": null, "startDate": null, "endDate": null, "weeklyMileage": null,
                "weeklyPlans": null, "active": null}"#,
        )
        .unwrap();
        assert!(plan.goal.is_empty());
        assert!(plan.start_date.is_empty());
        assert!(plan.weekly_plans.is_empty());
        assert!(plan.active);
    }

    #[test]
    fn test_missing_or_unknown_phase_is_none() {
        let week: WeeklyPlan = serde_json::from_str(r#"{"week": 1, "workouts": []}"#).unwrap();
        assert_eq!(week.phase, None);

        let week: WeeklyPlan =
            serde_json::from_str(r#"{"week": null, "phase": "Build Up", "totalMileage": null}"#)
                .unwrap();
        assert_eq!(week.phase, None);
        assert_eq!(week.week, 0);

        let week: WeeklyPlan = serde_json::from_str(r#"{"phase": "Tapering"}"#).unwrap();
        assert_eq!(week.phase, Some(Phase::Tapering));
        let json = serde_json::to_value(&week).unwrap();
        assert_eq!(json["phase"], "Tapering");
    }

    #[test]
    fn test_plan_defaults() {
        let plan: TrainingPlan = serde_json::from_str("{}").unwrap();
        assert!(plan.goal.is_empty());
        assert!(plan.weekly_plans.is_empty());
        assert!(plan.active);
        let json = serde_json::to_string(&plan).unwrap();
        assert!(!json.contains("suggestions"));
    }
}
