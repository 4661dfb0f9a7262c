// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure aggregation layer behind the dashboard.
//!
//! Everything here is a deterministic function of its inputs: raw workout
//! records go in, chart-ready aggregates come out. No I/O, no clocks;
//! "today" is always injected so results are reproducible.

pub mod day_buckets;
pub mod ranking;
pub mod rolling;

pub use day_buckets::{calories_and_duration_per_day, chart_series, ChartPoint, DayBucket};
pub use ranking::{rank_exercises, CategoryRanking, ExerciseRankings, RankedExercise};
pub use rolling::{
    last_30_days_progress_at, physical_trend_at, rest_days_at, PhysicalTrend, WindowComparison,
    WindowSummary,
};

/// Length of the rolling trend window, in days.
pub const WINDOW_DAYS: i64 = 30;

/// How many exercises the grand cross-category ranking keeps.
pub const TOP_OVERALL: usize = 5;
