// ABOUTME: Non-fatal consistency audit for training plans
// ABOUTME: Flags mileage drift, duplicate long runs, out-of-span dates, and phase regressions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan audit.
//!
//! Covers the invariants the fail-fast validator leaves alone. Unparseable
//! dates are skipped here since the validator already reports them.

use std::fmt;

use chrono::{Duration, NaiveDate};
use planner_core::constants::{calendar::DAYS_PER_WEEK, workouts::MILEAGE_DRIFT_TOLERANCE};
use planner_core::dates::{parse_plan_date, week_start};
use planner_core::models::{Phase, TrainingPlan};
use serde::Serialize;
use tracing::debug;

/// A consistency problem that does not make the plan unusable
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanWarning {
    /// Workout distances stray from the weekly target by more than the tolerance
    MileageDrift {
        /// 1-based week position
        week: usize,
        /// Weekly target
        target: f64,
        /// Sum of workout distances
        planned: f64,
    },
    /// More than one long run in a week
    MultipleLongRuns {
        /// 1-based week position
        week: usize,
        /// Number of long runs found
        count: usize,
    },
    /// Workout scheduled after the plan end date
    WorkoutAfterEnd {
        /// 1-based week position
        week: usize,
        /// Workout date as given
        day: String,
    },
    /// Workout outside its week's seven-day span
    WorkoutOutsideWeek {
        /// 1-based week position
        week: usize,
        /// Workout date as given
        day: String,
    },
    /// Phase goes backwards relative to the previous week
    PhaseRegression {
        /// 1-based week position
        week: usize,
        /// Previous week's phase
        from: Phase,
        /// This week's phase
        to: Phase,
    },
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MileageDrift {
                week,
                target,
                planned,
            } => write!(
                f,
                "Week {week} workouts total {planned} against a target of {target}"
            ),
            Self::MultipleLongRuns { week, count } => {
                write!(f, "Week {week} has {count} long runs")
            }
            Self::WorkoutAfterEnd { week, day } => {
                write!(f, "Workout on {day} in week {week} falls after the plan end date")
            }
            Self::WorkoutOutsideWeek { week, day } => {
                write!(f, "Workout on {day} falls outside week {week}")
            }
            Self::PhaseRegression { week, from, to } => {
                write!(f, "Week {week} moves back from {from} to {to}")
            }
        }
    }
}

fn parse_day(value: &str) -> Option<NaiveDate> {
    parse_plan_date(value).map(|dt| dt.date())
}

/// Collect every consistency warning for a plan. Never fails.
#[must_use]
pub fn audit_plan(plan: &TrainingPlan) -> Vec<PlanWarning> {
    let start = parse_day(&plan.start_date);
    let end = parse_day(&plan.end_date);
    let mut warnings = Vec::new();
    let mut previous_phase: Option<Phase> = None;

    for (index, weekly) in plan.weekly_plans.iter().enumerate() {
        let week = index + 1;
        let workouts = weekly.workouts();

        let planned = weekly.planned_distance();
        if weekly.total_mileage > 0.0
            && ((planned - weekly.total_mileage).abs() / weekly.total_mileage)
                > MILEAGE_DRIFT_TOLERANCE
        {
            warnings.push(PlanWarning::MileageDrift {
                week,
                target: weekly.total_mileage,
                planned,
            });
        }

        let long_runs = workouts
            .iter()
            .filter(|w| w.is_long_run())
            .count();
        if long_runs > 1 {
            warnings.push(PlanWarning::MultipleLongRuns {
                week,
                count: long_runs,
            });
        }

        let span = start.map(|s| {
            let first = week_start(s, u32::try_from(week).unwrap_or(u32::MAX));
            (first, first + Duration::days(i64::from(DAYS_PER_WEEK) - 1))
        });
        for workout in workouts {
            let Some(day) = parse_day(&workout.day) else {
                continue;
            };
            if end.is_some_and(|e| day > e) {
                warnings.push(PlanWarning::WorkoutAfterEnd {
                    week,
                    day: workout.day.clone(),
                });
            }
            if let Some((first, last)) = span {
                if day < first || day > last {
                    warnings.push(PlanWarning::WorkoutOutsideWeek {
                        week,
                        day: workout.day.clone(),
                    });
                }
            }
        }

        if let Some(phase) = weekly.phase {
            if let Some(from) = previous_phase.filter(|from| phase < *from) {
                warnings.push(PlanWarning::PhaseRegression {
                    week,
                    from,
                    to: phase,
                });
            }
            previous_phase = Some(phase);
        }
    }

    debug!(
        weeks = plan.weekly_plans.len(),
        warnings = warnings.len(),
        "Audited training plan"
    );
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::models::{WeeklyPlan, Workout, WorkoutType};

    fn workout(day: &str, workout_type: WorkoutType, distance: f64) -> Workout {
        Workout {
            day: day.to_owned(),
            workout_type: Some(workout_type),
            distance,
            description: "Run".to_owned(),
            completed: false,
        }
    }

    fn week(number: u32, phase: Phase, total: f64, workouts: Vec<Workout>) -> WeeklyPlan {
        WeeklyPlan {
            week: number,
            phase: Some(phase),
            total_mileage: total,
            workouts: Some(workouts),
        }
    }

    fn plan(weekly_plans: Vec<WeeklyPlan>) -> TrainingPlan {
        TrainingPlan {
            goal: "Marathon".to_owned(),
            goal_description: None,
            start_date: "2025-03-15".to_owned(),
            end_date: "2025-03-28".to_owned(),
            weekly_mileage: 20.0,
            weekly_plans,
            target_race: None,
            running_experience: None,
            training_preferences: None,
            active: true,
            suggestions: Vec::new(),
        }
    }

    #[test]
    fn test_consistent_plan_has_no_warnings() {
        let p = plan(vec![
            week(1, Phase::BaseBuilding, 10.0, vec![
                workout("2025-03-16", WorkoutType::LongRun, 6.0),
                workout("2025-03-18", WorkoutType::EasyRun, 4.0),
            ]),
            week(2, Phase::Tapering, 8.0, vec![
                workout("2025-03-23", WorkoutType::LongRun, 5.0),
                workout("2025-03-25", WorkoutType::EasyRun, 3.0),
            ]),
        ]);
        assert!(audit_plan(&p).is_empty());
    }

    #[test]
    fn test_flags_each_inconsistency() {
        let p = plan(vec![
            week(1, Phase::PeakTraining, 20.0, vec![
                workout("2025-03-16", WorkoutType::LongRun, 6.0),
                workout("2025-03-17", WorkoutType::LongRun, 6.0),
                workout("2025-03-24", WorkoutType::EasyRun, 4.0),
            ]),
            week(2, Phase::BaseBuilding, 4.0, vec![
                workout("2025-03-30", WorkoutType::EasyRun, 4.0),
            ]),
        ]);
        let warnings = audit_plan(&p);

        assert!(warnings.contains(&PlanWarning::MileageDrift {
            week: 1,
            target: 20.0,
            planned: 16.0
        }));
        assert!(warnings.contains(&PlanWarning::MultipleLongRuns { week: 1, count: 2 }));
        assert!(warnings.contains(&PlanWarning::WorkoutOutsideWeek {
            week: 1,
            day: "2025-03-24".to_owned()
        }));
        assert!(warnings.contains(&PlanWarning::WorkoutAfterEnd {
            week: 2,
            day: "2025-03-30".to_owned()
        }));
        assert!(warnings.contains(&PlanWarning::PhaseRegression {
            week: 2,
            from: Phase::PeakTraining,
            to: Phase::BaseBuilding
        }));
    }

    #[test]
    fn test_unparseable_dates_are_skipped() {
        let mut p = plan(vec![week(1, Phase::BaseBuilding, 3.0, vec![
            workout("whenever", WorkoutType::EasyRun, 3.0),
        ])]);
        p.start_date = "later".to_owned();
        assert!(audit_plan(&p).is_empty());
    }

    #[test]
    fn test_warning_messages() {
        let warning = PlanWarning::MultipleLongRuns { week: 4, count: 2 };
        assert_eq!(warning.to_string(), "Week 4 has 2 long runs");
    }
}
