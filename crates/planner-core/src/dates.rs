// ABOUTME: ISO date parsing, formatting, and weekday arithmetic for training plans
// ABOUTME: Shared by the plan generator (week spans, day slots) and the plan validator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calendar helpers.
//!
//! Weekday indices follow the Sunday-first convention (`Sunday = 0` …
//! `Saturday = 6`) used by the day distributor.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::constants::calendar::{DAYS_PER_WEEK, ISO_DATE_FORMAT};

/// Parse a plan date string.
///
/// Accepts a calendar date (`2025-03-15`) or an RFC 3339 timestamp
/// (`2025-03-15T08:00:00Z`), the latter normalized to UTC. Calendar dates map to
/// midnight. Returns `None` for anything else, including out-of-range dates
/// such as `2025-02-30`.
#[must_use]
pub fn parse_plan_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        return Some(date.and_time(NaiveTime::MIN));
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|timestamp| timestamp.naive_utc())
}

/// Format a date the way plans store it
#[must_use]
pub fn format_plan_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Number of whole training weeks between two dates, never less than one
#[must_use]
pub fn total_weeks_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days();
    if days <= 0 {
        return 1;
    }
    u32::try_from(days / i64::from(DAYS_PER_WEEK))
        .unwrap_or(u32::MAX)
        .max(1)
}

/// First day of a 1-based plan week
#[must_use]
pub fn week_start(plan_start: NaiveDate, week: u32) -> NaiveDate {
    plan_start + Duration::days(i64::from(week.saturating_sub(1)) * i64::from(DAYS_PER_WEEK))
}

/// Sunday-first index of a weekday
#[must_use]
pub fn sunday_index(weekday: Weekday) -> u32 {
    weekday.num_days_from_sunday()
}

/// The date inside `[week_start, week_start + 6]` that falls on the given Sunday-first index
#[must_use]
pub fn date_for_day_index(week_start: NaiveDate, day_index: u32) -> NaiveDate {
    let start_index = sunday_index(week_start.weekday());
    let offset = (day_index % DAYS_PER_WEEK + DAYS_PER_WEEK - start_index) % DAYS_PER_WEEK;
    week_start + Duration::days(i64::from(offset))
}

/// Full English weekday name (`Monday` … `Sunday`)
#[must_use]
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a full English weekday name, case-sensitive
#[must_use]
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "Monday" => Some(Weekday::Mon),
        "Tuesday" => Some(Weekday::Tue),
        "Wednesday" => Some(Weekday::Wed),
        "Thursday" => Some(Weekday::Thu),
        "Friday" => Some(Weekday::Fri),
        "Saturday" => Some(Weekday::Sat),
        "Sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
