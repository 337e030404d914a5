// ABOUTME: Output formatting helpers for pierre-planner
// ABOUTME: Provides consistent display functions for summaries, warnings, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_planner::{AppError, PlanSummary, PlanWarning};

/// Display plan totals on stderr so stdout stays JSON
pub fn display_summary(summary: &PlanSummary) {
    eprintln!("\nPlan Summary");
    eprintln!("{}", "=".repeat(50));
    eprintln!("   Weeks: {}", summary.total_weeks);
    eprintln!("   Total distance: {}", summary.total_distance);
    eprintln!("   Peak week: {}", summary.peak_week_mileage);

    eprintln!("\nPhases:");
    for (phase, weeks) in &summary.phase_weeks {
        eprintln!("   {phase}: {weeks} week(s)");
    }

    eprintln!("\nWorkouts:");
    for (workout_type, count) in &summary.workouts_by_type {
        eprintln!("   {workout_type}: {count}");
    }
}

/// Display advisory notes produced while normalizing preferences
pub fn display_suggestions(suggestions: &[String]) {
    if suggestions.is_empty() {
        return;
    }
    eprintln!("\nSuggestions:");
    for suggestion in suggestions {
        eprintln!("• {suggestion}");
    }
}

/// Display the first rule a plan broke
pub fn display_validation_failure(error: &AppError) {
    eprintln!("Invalid plan: {error}");
}

/// Display audit warnings, or a clean bill of health
pub fn display_warnings(warnings: &[PlanWarning]) {
    if warnings.is_empty() {
        println!("No consistency warnings");
        return;
    }
    println!("{} consistency warning(s):", warnings.len());
    for warning in warnings {
        println!("• {warning}");
    }
}
