// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rolling 30-day window summaries: trailing totals, comparison against the
//! prior window, rest days, and the physical-progress trend.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::PhysicalEntry;
use crate::stats::day_buckets::ChartPoint;
use crate::stats::WINDOW_DAYS;
use crate::time_utils::parse_day;

/// Totals over the trailing window, with an optional prior-window comparison.
#[derive(Debug, Clone, Serialize)]
pub struct WindowSummary {
    pub calories: f64,
    pub minutes: f64,
    /// Days in the window with at least one counted workout
    pub active_days: u32,
    /// `None` when the prior window has no data at all
    pub comparison: Option<WindowComparison>,
}

/// Change relative to the immediately preceding window of equal length.
#[derive(Debug, Clone, Serialize)]
pub struct WindowComparison {
    pub calories_delta: f64,
    pub minutes_delta: f64,
    /// `None` when the prior window burned zero calories
    pub calories_pct_change: Option<f64>,
    /// `None` when the prior window logged zero minutes
    pub minutes_pct_change: Option<f64>,
}

/// Weight/fat/muscle deltas between the earliest and latest measurement in
/// the trailing window.
#[derive(Debug, Clone, Serialize)]
pub struct PhysicalTrend {
    pub weight_delta: f64,
    pub body_fat_delta: f64,
    pub body_muscle_delta: f64,
    /// Measurements found in the window
    pub samples: u32,
}

/// Summarize the trailing 30 days ending at `today`.
///
/// Missing days count as zero activity. The comparison is omitted entirely
/// when the prior 30-day window contains no data points, and each percent
/// change is omitted when its prior-window sum is zero, so there is never
/// a division by zero.
pub fn last_30_days_progress_at(today: NaiveDate, series: &[ChartPoint]) -> WindowSummary {
    let window_start = today - Duration::days(WINDOW_DAYS - 1);
    let prior_start = window_start - Duration::days(WINDOW_DAYS);

    let mut calories = 0.0;
    let mut minutes = 0.0;
    let mut active_days = 0u32;
    let mut prior_calories = 0.0;
    let mut prior_minutes = 0.0;
    let mut prior_points = 0u32;

    for point in series {
        if point.day >= window_start && point.day <= today {
            calories += point.calories;
            minutes += point.minutes;
            if point.minutes > 0.0 {
                active_days += 1;
            }
        } else if point.day >= prior_start && point.day < window_start {
            prior_calories += point.calories;
            prior_minutes += point.minutes;
            prior_points += 1;
        }
    }

    let comparison = (prior_points > 0).then(|| WindowComparison {
        calories_delta: calories - prior_calories,
        minutes_delta: minutes - prior_minutes,
        calories_pct_change: pct_change(calories, prior_calories),
        minutes_pct_change: pct_change(minutes, prior_minutes),
    });

    WindowSummary {
        calories,
        minutes,
        active_days,
        comparison,
    }
}

fn pct_change(current: f64, prior: f64) -> Option<f64> {
    (prior > 0.0).then(|| (current - prior) / prior * 100.0)
}

/// Count days in the trailing 30 with no exercise at all.
///
/// A day rests when the series has no entry for it or the entry logged
/// zero minutes.
pub fn rest_days_at(today: NaiveDate, series: &[ChartPoint]) -> u32 {
    let window_start = today - Duration::days(WINDOW_DAYS - 1);
    let active = series
        .iter()
        .filter(|point| point.day >= window_start && point.day <= today && point.minutes > 0.0)
        .count() as u32;
    WINDOW_DAYS as u32 - active
}

/// Trend between the earliest and latest physical measurement within the
/// trailing 30 days. `None` when fewer than two measurements fall inside
/// the window.
pub fn physical_trend_at(today: NaiveDate, entries: &[PhysicalEntry]) -> Option<PhysicalTrend> {
    let window_start = today - Duration::days(WINDOW_DAYS - 1);

    let mut dated: Vec<(NaiveDate, &PhysicalEntry)> = entries
        .iter()
        .filter_map(|entry| {
            let day = parse_day(&entry.date)?;
            (day >= window_start && day <= today).then_some((day, entry))
        })
        .collect();
    if dated.len() < 2 {
        return None;
    }
    dated.sort_by_key(|(day, _)| *day);

    let (_, first) = dated.first()?;
    let (_, last) = dated.last()?;
    Some(PhysicalTrend {
        weight_delta: last.weight - first.weight,
        body_fat_delta: last.body_fat - first.body_fat,
        body_muscle_delta: last.body_muscle - first.body_muscle,
        samples: dated.len() as u32,
    })
}
