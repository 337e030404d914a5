// ABOUTME: Partitions a plan's weeks into Base Building, Peak Training, and Tapering
// ABOUTME: Phase labels are a pure function of week index and total week count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::cast_possible_truncation)] // Safe: week counts are small
#![allow(clippy::cast_sign_loss)] // Safe: ratios are positive

use planner_core::models::Phase;

use crate::config::PeriodizationConfig;

/// Last week (inclusive, 1-based) of each labelled span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseBoundaries {
    /// Last Base Building week; 0 when the span is empty
    pub base_end: u32,
    /// Last Peak Training week; equal to `base_end` when the span is empty
    pub peak_end: u32,
}

impl PhaseBoundaries {
    /// Phase label for a 1-based week
    #[must_use]
    pub const fn phase_for_week(&self, week: u32) -> Phase {
        if week <= self.base_end {
            Phase::BaseBuilding
        } else if week <= self.peak_end {
            Phase::PeakTraining
        } else {
            Phase::Tapering
        }
    }
}

/// Computes phase boundaries from total week count
#[derive(Debug, Clone)]
pub struct PhaseScheduler {
    base_ratio: f64,
    peak_end_ratio: f64,
}

impl Default for PhaseScheduler {
    fn default() -> Self {
        Self::new(&PeriodizationConfig::default())
    }
}

impl PhaseScheduler {
    /// Create a scheduler from periodization settings
    #[must_use]
    pub const fn new(config: &PeriodizationConfig) -> Self {
        Self {
            base_ratio: config.base_phase_ratio,
            peak_end_ratio: config.peak_phase_end_ratio,
        }
    }

    /// `base_end = floor(total * 0.6)`, `peak_end = floor(total * 0.8)`.
    ///
    /// Short plans may get empty Peak or Base spans; labels still follow the formula.
    #[must_use]
    pub fn schedule(&self, total_weeks: u32) -> PhaseBoundaries {
        let total = f64::from(total_weeks);
        PhaseBoundaries {
            base_end: (total * self.base_ratio).floor() as u32,
            peak_end: (total * self.peak_end_ratio).floor() as u32,
        }
    }

    /// Phase label for a 1-based week of a plan
    #[must_use]
    pub fn phase_for(&self, week: u32, total_weeks: u32) -> Phase {
        self.schedule(total_weeks).phase_for_week(week)
    }
}
