// ABOUTME: Fail-fast structural validation for training plans from any source
// ABOUTME: Reports only the first violated rule, with a message fit to show the runner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan validation.
//!
//! Rules run in a fixed order and stop at the first violation. Callers that
//! want every problem have to fix the reported one and validate again.
//!
//! 1. goal present
//! 2. at least one week
//! 3. start and end dates present
//! 4. start and end dates parse
//! 5. end after start
//! 6. each week has a non-empty workout list
//! 7. each workout has a date and description, the date parses and is not
//!    before the plan start, and the distance is positive

use planner_core::dates::parse_plan_date;
use planner_core::errors::{AppError, ErrorCode};
use planner_core::models::{TrainingPlan, Workout};
use thiserror::Error;

/// First rule a plan breaks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanValidationError {
    /// Goal is blank
    #[error("Training goal is required and cannot be empty")]
    MissingGoal,

    /// No weeks at all
    #[error("Weekly plans are required and must contain at least one week")]
    MissingWeeklyPlans,

    /// Start or end date blank
    #[error("Start date and end date are required")]
    MissingDates,

    /// Start date does not parse
    #[error("Invalid start date format: {0}")]
    InvalidStartDate(String),

    /// End date does not parse
    #[error("Invalid end date format: {0}")]
    InvalidEndDate(String),

    /// End date on or before start date
    #[error("End date must be after start date")]
    EndNotAfterStart,

    /// Week's workouts were not a list
    #[error("Week {week} has invalid workouts data")]
    InvalidWorkoutsData {
        /// 1-based week position
        week: usize,
    },

    /// Week has an empty workout list
    #[error("Week {week} must have at least one workout")]
    EmptyWeek {
        /// 1-based week position
        week: usize,
    },

    /// Workout date blank
    #[error("Workout {workout} in week {week} is missing a date")]
    MissingWorkoutDate {
        /// 1-based workout position
        workout: usize,
        /// 1-based week position
        week: usize,
    },

    /// Workout description blank
    #[error("Workout {workout} in week {week} is missing a description")]
    MissingWorkoutDescription {
        /// 1-based workout position
        workout: usize,
        /// 1-based week position
        week: usize,
    },

    /// Workout date does not parse
    #[error("Invalid date format for workout {workout} in week {week}: {value}")]
    InvalidWorkoutDate {
        /// 1-based workout position
        workout: usize,
        /// 1-based week position
        week: usize,
        /// Offending value
        value: String,
    },

    /// Workout scheduled before the plan starts
    #[error("Workout date cannot be before plan start date")]
    WorkoutBeforeStart,

    /// Zero, negative, or NaN distance
    #[error("Workout distance must be positive")]
    NonPositiveDistance,
}

impl From<PlanValidationError> for AppError {
    fn from(error: PlanValidationError) -> Self {
        Self::new(ErrorCode::InvalidInput, error.to_string())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Stateless plan validator
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanValidator;

impl PlanValidator {
    /// Check a plan against every rule, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns the first violated rule
    pub fn validate(plan: &TrainingPlan) -> Result<(), PlanValidationError> {
        if is_blank(&plan.goal) {
            return Err(PlanValidationError::MissingGoal);
        }
        if plan.weekly_plans.is_empty() {
            return Err(PlanValidationError::MissingWeeklyPlans);
        }
        if is_blank(&plan.start_date) || is_blank(&plan.end_date) {
            return Err(PlanValidationError::MissingDates);
        }
        let start = parse_plan_date(&plan.start_date)
            .ok_or_else(|| PlanValidationError::InvalidStartDate(plan.start_date.clone()))?;
        let end = parse_plan_date(&plan.end_date)
            .ok_or_else(|| PlanValidationError::InvalidEndDate(plan.end_date.clone()))?;
        if end <= start {
            return Err(PlanValidationError::EndNotAfterStart);
        }

        for (week_index, weekly) in plan.weekly_plans.iter().enumerate() {
            let week = week_index + 1;
            let workouts = weekly
                .workouts
                .as_deref()
                .ok_or(PlanValidationError::InvalidWorkoutsData { week })?;
            if workouts.is_empty() {
                return Err(PlanValidationError::EmptyWeek { week });
            }
            for (workout_index, workout) in workouts.iter().enumerate() {
                Self::validate_workout(workout, workout_index + 1, week, start)?;
            }
        }

        Ok(())
    }

    fn validate_workout(
        workout: &Workout,
        index: usize,
        week: usize,
        plan_start: chrono::NaiveDateTime,
    ) -> Result<(), PlanValidationError> {
        if is_blank(&workout.day) {
            return Err(PlanValidationError::MissingWorkoutDate {
                workout: index,
                week,
            });
        }
        if is_blank(&workout.description) {
            return Err(PlanValidationError::MissingWorkoutDescription {
                workout: index,
                week,
            });
        }
        let day = parse_plan_date(&workout.day).ok_or_else(|| {
            PlanValidationError::InvalidWorkoutDate {
                workout: index,
                week,
                value: workout.day.clone(),
            }
        })?;
        if day < plan_start {
            return Err(PlanValidationError::WorkoutBeforeStart);
        }
        if workout.distance.is_nan() || workout.distance <= 0.0 {
            return Err(PlanValidationError::NonPositiveDistance);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::models::{Phase, WeeklyPlan, WorkoutType};

    fn workout(day: &str, distance: f64) -> Workout {
        Workout {
            day: day.to_owned(),
            workout_type: Some(WorkoutType::EasyRun),
            distance,
            description: "Easy run".to_owned(),
            completed: false,
        }
    }

    fn plan(workouts: Option<Vec<Workout>>) -> TrainingPlan {
        TrainingPlan {
            goal: "Run a 10k".to_owned(),
            goal_description: None,
            start_date: "2025-03-15".to_owned(),
            end_date: "2025-04-12".to_owned(),
            weekly_mileage: 20.0,
            weekly_plans: vec![WeeklyPlan {
                week: 1,
                phase: Some(Phase::BaseBuilding),
                total_mileage: 20.0,
                workouts,
            }],
            target_race: None,
            running_experience: None,
            training_preferences: None,
            active: true,
            suggestions: Vec::new(),
        }
    }

    fn message(plan: &TrainingPlan) -> String {
        PlanValidator::validate(plan).unwrap_err().to_string()
    }

    #[test]
    fn test_valid_plan_passes() {
        assert!(PlanValidator::validate(&plan(Some(vec![workout("2025-03-16", 4.0)]))).is_ok());
    }

    #[test]
    fn test_date_rules() {
        let mut p = plan(Some(vec![workout("2025-03-16", 4.0)]));
        p.start_date = "  ".to_owned();
        assert_eq!(message(&p), "Start date and end date are required");

        p.start_date = "2025-13-01".to_owned();
        assert_eq!(message(&p), "Invalid start date format: 2025-13-01");

        p.start_date = "2025-03-15".to_owned();
        p.end_date = "soon".to_owned();
        assert_eq!(message(&p), "Invalid end date format: soon");

        p.end_date = "2025-03-15".to_owned();
        assert_eq!(message(&p), "End date must be after start date");

        // Timestamps are accepted
        p.end_date = "2025-04-12T00:00:00Z".to_owned();
        assert!(PlanValidator::validate(&p).is_ok());
    }

    #[test]
    fn test_week_rules() {
        assert_eq!(message(&plan(None)), "Week 1 has invalid workouts data");
        assert_eq!(
            message(&plan(Some(Vec::new()))),
            "Week 1 must have at least one workout"
        );
    }

    #[test]
    fn test_workout_rules_in_order() {
        let mut missing_both = workout("", 0.0);
        missing_both.description = String::new();
        assert_eq!(
            message(&plan(Some(vec![workout("2025-03-16", 3.0), missing_both]))),
            "Workout 2 in week 1 is missing a date"
        );

        let mut no_description = workout("garbage", 0.0);
        no_description.description = " ".to_owned();
        assert_eq!(
            message(&plan(Some(vec![no_description]))),
            "Workout 1 in week 1 is missing a description"
        );

        assert_eq!(
            message(&plan(Some(vec![workout("03/16/2025", 3.0)]))),
            "Invalid date format for workout 1 in week 1: 03/16/2025"
        );
        assert_eq!(
            message(&plan(Some(vec![workout("2025-03-14", 0.0)]))),
            "Workout date cannot be before plan start date"
        );
        assert_eq!(
            message(&plan(Some(vec![workout("2025-03-16", 0.0)]))),
            "Workout distance must be positive"
        );
        assert_eq!(
            message(&plan(Some(vec![workout("2025-03-16", f64::NAN)]))),
            "Workout distance must be positive"
        );
    }

    #[test]
    fn test_goal_checked_before_weeks() {
        let mut p = plan(Some(Vec::new()));
        p.goal = String::new();
        assert_eq!(message(&p), "Training goal is required and cannot be empty");
    }

    #[test]
    fn test_converts_to_bad_request() {
        let error: AppError = PlanValidationError::EmptyWeek { week: 3 }.into();
        assert_eq!(error.http_status(), 400);
        assert_eq!(error.message, "Week 3 must have at least one workout");
    }
}
