// ABOUTME: Weekly mileage targets via buildup ramp, flat peak, and linear taper
// ABOUTME: Curve windows (70% buildup / 20% taper) are independent of the phase labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::cast_possible_truncation)] // Safe: week counts are small
#![allow(clippy::cast_sign_loss)] // Safe: ratios are positive

use planner_core::constants::workouts::MIN_WEEKLY_MILEAGE;

use crate::config::PeriodizationConfig;

/// Segment of the mileage curve a week falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveSegment {
    /// Linear ramp from starting mileage to the ceiling
    Buildup,
    /// Flat at the ceiling
    Peak,
    /// Linear reduction from the ceiling
    Taper,
}

/// Three-segment weekly mileage interpolation
#[derive(Debug, Clone)]
pub struct MileageCurve {
    buildup_ratio: f64,
    taper_ratio: f64,
    taper_reduction: f64,
}

impl Default for MileageCurve {
    fn default() -> Self {
        Self::new(&PeriodizationConfig::default())
    }
}

impl MileageCurve {
    /// Create a curve from periodization settings
    #[must_use]
    pub const fn new(config: &PeriodizationConfig) -> Self {
        Self {
            buildup_ratio: config.buildup_window_ratio,
            taper_ratio: config.taper_window_ratio,
            taper_reduction: config.taper_reduction,
        }
    }

    fn buildup_weeks(&self, total_weeks: u32) -> u32 {
        (f64::from(total_weeks) * self.buildup_ratio).floor() as u32
    }

    fn taper_weeks(&self, total_weeks: u32) -> u32 {
        (f64::from(total_weeks) * self.taper_ratio).floor() as u32
    }

    /// Which segment a 1-based week belongs to
    #[must_use]
    pub fn segment(&self, week: u32, total_weeks: u32) -> CurveSegment {
        let buildup = self.buildup_weeks(total_weeks);
        let taper = self.taper_weeks(total_weeks);
        if buildup > 0 && week <= buildup {
            CurveSegment::Buildup
        } else if taper > 0 && week > total_weeks.saturating_sub(taper) {
            CurveSegment::Taper
        } else {
            CurveSegment::Peak
        }
    }

    /// Target mileage for a 1-based week, rounded to whole units and never below one
    // Fused multiply-add would shift results that land exactly on .5
    #[allow(clippy::suboptimal_flops)]
    #[must_use]
    pub fn weekly_mileage(
        &self,
        week: u32,
        total_weeks: u32,
        starting_mileage: f64,
        max_weekly_mileage: f64,
    ) -> f64 {
        let raw = match self.segment(week, total_weeks) {
            CurveSegment::Buildup => {
                let progress = f64::from(week) / f64::from(self.buildup_weeks(total_weeks));
                starting_mileage + (max_weekly_mileage - starting_mileage) * progress
            }
            CurveSegment::Taper => {
                let taper = self.taper_weeks(total_weeks);
                let taper_week = week - (total_weeks - taper);
                let progress = f64::from(taper_week) / f64::from(taper);
                max_weekly_mileage * (1.0 - self.taper_reduction * progress)
            }
            CurveSegment::Peak => max_weekly_mileage,
        };
        raw.round().max(MIN_WEEKLY_MILEAGE)
    }
}
