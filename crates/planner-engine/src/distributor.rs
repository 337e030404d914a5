// ABOUTME: Assigns a week's running slots to calendar days around the preferred long run day
// ABOUTME: Tags the long run slot and the slots eligible for quality workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Day assignment.
//!
//! Slots are laid out as offsets from the long-run day, wrapping around the
//! Sunday-first week. Beginners get every other day counted from the long run.
//! With four beginner days the last offset is 6, the day before the next long
//! run, so those two runs fall on consecutive days.

use chrono::NaiveDate;
use planner_core::constants::{calendar::DAYS_PER_WEEK, experience::BEGINNER_DAY_OFFSETS};
use planner_core::dates::{date_for_day_index, sunday_index};

use crate::normalizer::EffectivePreferences;

/// One running day within a week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySlot {
    /// Calendar date of the run
    pub date: NaiveDate,
    /// Sunday-first weekday index
    pub day_index: u32,
    /// Offset from the long run day this slot was generated from
    pub offset: u32,
    /// Whether this slot carries the week's long run
    pub is_long_run: bool,
    /// Whether this slot was picked for a quality workout
    pub is_quality: bool,
}

/// Lays out running days for each plan week
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutDistributor;

impl WorkoutDistributor {
    /// Day offsets from the long run day, in assignment order
    ///
    /// Beginner offsets keep a rest day after each run up to three days; a
    /// fourth day lands on offset 6, right before the following long run.
    #[must_use]
    pub fn day_offsets(preferences: &EffectivePreferences) -> Vec<u32> {
        let running_days = preferences.weekly_running_days.min(DAYS_PER_WEEK);
        if preferences.is_beginner() {
            BEGINNER_DAY_OFFSETS
                .iter()
                .copied()
                .take(running_days as usize)
                .collect()
        } else {
            (0..running_days).collect()
        }
    }

    /// Slots for the week starting at `week_start`, in offset order
    #[must_use]
    pub fn assign_days(
        &self,
        week_start: NaiveDate,
        preferences: &EffectivePreferences,
    ) -> Vec<DaySlot> {
        let long_run_index = sunday_index(preferences.preferred_long_run_day.weekday());
        let day_after_long_run = (long_run_index + 1) % DAYS_PER_WEEK;
        let mut quality_assigned = 0;

        Self::day_offsets(preferences)
            .into_iter()
            .map(|offset| {
                let day_index = (long_run_index + offset) % DAYS_PER_WEEK;
                let is_long_run = day_index == long_run_index;
                let is_quality = preferences.weekly_workouts > 0
                    && !is_long_run
                    && day_index != day_after_long_run
                    && quality_assigned < preferences.weekly_workouts;
                if is_quality {
                    quality_assigned += 1;
                }
                DaySlot {
                    date: date_for_day_index(week_start, day_index),
                    day_index,
                    offset,
                    is_long_run,
                    is_quality,
                }
            })
            .collect()
    }
}
