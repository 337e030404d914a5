// ABOUTME: Turns a day slot into a concrete workout with type, distance, and coaching text
// ABOUTME: Long runs and quality sessions take fixed shares of the weekly target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use planner_core::dates::format_plan_date;
use planner_core::models::{ExperienceLevel, TargetRace, Workout, WorkoutType};

use crate::config::WorkoutSizingConfig;
use crate::distributor::DaySlot;
use crate::normalizer::EffectivePreferences;

/// Chooses the session type and size for each running day
#[derive(Debug, Clone, Default)]
pub struct WorkoutTypeSelector {
    sizing: WorkoutSizingConfig,
}

impl WorkoutTypeSelector {
    /// Create a selector with explicit sizing fractions
    #[must_use]
    pub const fn new(sizing: WorkoutSizingConfig) -> Self {
        Self { sizing }
    }

    fn sized(&self, raw: f64) -> f64 {
        raw.round().max(self.sizing.min_workout_distance)
    }

    /// Build the workout for one slot of a week with the given mileage target
    #[must_use]
    pub fn classify(
        &self,
        slot: &DaySlot,
        weekly_mileage: f64,
        preferences: &EffectivePreferences,
        target_race: Option<&TargetRace>,
    ) -> Workout {
        let (workout_type, distance, description) = if slot.is_long_run {
            let fraction = if preferences.is_beginner() {
                self.sizing.beginner_long_run_fraction
            } else {
                self.sizing.long_run_fraction
            };
            (
                WorkoutType::LongRun,
                self.sized(weekly_mileage * fraction),
                long_run_description(&preferences.level),
            )
        } else if slot.is_quality {
            let distance = self.sized(weekly_mileage * self.sizing.quality_workout_fraction);
            let short_race = target_race.is_some_and(TargetRace::is_short_distance);
            if preferences.is_beginner() {
                (
                    WorkoutType::TempoRun,
                    distance,
                    "Gentle tempo: run the middle portion at a comfortably hard effort \
                     you could hold for about 30 minutes, with easy running either side",
                )
            } else if short_race {
                (
                    WorkoutType::SpeedWork,
                    distance,
                    "Intervals: after a warm-up, run 400-800m repeats at 5k race pace \
                     with equal-time recovery jogs, then cool down",
                )
            } else {
                (
                    WorkoutType::TempoRun,
                    distance,
                    "Tempo run: warm up, hold threshold pace for the main block, \
                     then cool down",
                )
            }
        } else {
            let days = preferences.weekly_running_days.max(1);
            (
                WorkoutType::EasyRun,
                self.sized(weekly_mileage / f64::from(days)),
                "Easy run at a conversational pace",
            )
        };

        Workout {
            day: format_plan_date(slot.date),
            workout_type: Some(workout_type),
            distance,
            description: description.to_owned(),
            completed: false,
        }
    }
}

fn long_run_description(level: &ExperienceLevel) -> &'static str {
    match level {
        ExperienceLevel::Beginner => {
            "Long run at an easy, conversational pace; walk breaks are fine"
        }
        ExperienceLevel::Intermediate => {
            "Long run at easy pace, about 60-90 seconds per mile slower than race pace"
        }
        ExperienceLevel::Advanced | ExperienceLevel::Expert | ExperienceLevel::Other(_) => {
            "Long run at steady aerobic pace; finish the last few miles near goal race pace"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};
    use planner_core::models::PreferredDay;

    fn prefs(level: ExperienceLevel, days: u32) -> EffectivePreferences {
        EffectivePreferences {
            level,
            max_weekly_mileage: 40.0,
            weekly_workouts: 1,
            weekly_running_days: days,
            preferred_long_run_day: PreferredDay(Weekday::Sun),
            starting_mileage: 20.0,
            suggestions: Vec::new(),
        }
    }

    fn slot(is_long_run: bool, is_quality: bool) -> DaySlot {
        DaySlot {
            date: NaiveDate::from_ymd_opt(2025, 3, 16).unwrap(),
            day_index: 0,
            offset: 0,
            is_long_run,
            is_quality,
        }
    }

    fn race(distance: &str) -> TargetRace {
        TargetRace {
            distance: distance.to_owned(),
            date: None,
            goal_time: None,
            previous_best: None,
        }
    }

    #[test]
    fn test_long_run_fraction_by_level() {
        let selector = WorkoutTypeSelector::default();
        let advanced = selector.classify(&slot(true, false), 40.0, &prefs(ExperienceLevel::Advanced, 5), None);
        assert_eq!(advanced.workout_type, Some(WorkoutType::LongRun));
        assert!((advanced.distance - 12.0).abs() < f64::EPSILON);
        assert_eq!(advanced.day, "2025-03-16");

        let beginner = selector.classify(&slot(true, false), 20.0, &prefs(ExperienceLevel::Beginner, 3), None);
        assert!((beginner.distance - 5.0).abs() < f64::EPSILON);
        assert_ne!(beginner.description, advanced.description);
    }

    #[test]
    fn test_quality_type_follows_race_distance() {
        let selector = WorkoutTypeSelector::default();
        let intermediate = prefs(ExperienceLevel::Intermediate, 4);

        let speed = selector.classify(&slot(false, true), 40.0, &intermediate, Some(&race("10K")));
        assert_eq!(speed.workout_type, Some(WorkoutType::SpeedWork));
        assert!((speed.distance - 6.0).abs() < f64::EPSILON);

        let tempo = selector.classify(&slot(false, true), 40.0, &intermediate, Some(&race("Marathon")));
        assert_eq!(tempo.workout_type, Some(WorkoutType::TempoRun));

        let no_race = selector.classify(&slot(false, true), 40.0, &intermediate, None);
        assert_eq!(no_race.workout_type, Some(WorkoutType::TempoRun));
    }

    #[test]
    fn test_beginner_quality_is_always_tempo() {
        let selector = WorkoutTypeSelector::default();
        let workout = selector.classify(
            &slot(false, true),
            20.0,
            &prefs(ExperienceLevel::Beginner, 4),
            Some(&race("5k")),
        );
        assert_eq!(workout.workout_type, Some(WorkoutType::TempoRun));
    }

    #[test]
    fn test_easy_run_splits_weekly_mileage() {
        let selector = WorkoutTypeSelector::default();
        let workout = selector.classify(&slot(false, false), 22.0, &prefs(ExperienceLevel::Intermediate, 4), None);
        assert_eq!(workout.workout_type, Some(WorkoutType::EasyRun));
        // 22 / 4 = 5.5 rounds away from zero
        assert!((workout.distance - 6.0).abs() < f64::EPSILON);
        assert!(!workout.completed);
    }

    #[test]
    fn test_tiny_targets_never_emit_zero_distance() {
        let selector = WorkoutTypeSelector::default();
        let p = prefs(ExperienceLevel::Intermediate, 7);
        for (long, quality) in [(true, false), (false, true), (false, false)] {
            let workout = selector.classify(&slot(long, quality), 1.0, &p, None);
            assert!(workout.distance >= 1.0);
        }
    }
}
