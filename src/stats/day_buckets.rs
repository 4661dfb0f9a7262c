// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Day-bucket aggregation: reduce workouts into per-calendar-day totals.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::Workout;
use crate::time_utils::day_label;

/// Per-day accumulated totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DayBucket {
    pub calories: f64,
    pub minutes: f64,
}

/// One point of the date-sorted chart series.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    /// True calendar day; the sort key
    pub day: NaiveDate,
    /// `dd/mm` axis label, display only
    pub label: String,
    pub calories: f64,
    pub minutes: f64,
}

/// Aggregate workouts into one bucket per calendar day.
///
/// Single pass; records that fail the validity filter (missing or
/// unparseable date, absent or negative metrics) are dropped silently.
/// Same-day records sum, so the result is independent of input order.
pub fn calories_and_duration_per_day(workouts: &[Workout]) -> HashMap<NaiveDate, DayBucket> {
    let mut buckets: HashMap<NaiveDate, DayBucket> = HashMap::new();
    for workout in workouts {
        if let Some((day, calories, minutes)) = workout.countable() {
            let bucket = buckets.entry(day).or_default();
            bucket.calories += calories;
            bucket.minutes += minutes;
        }
    }
    buckets
}

/// Convert the bucket map into a series sorted ascending by calendar day.
pub fn chart_series(buckets: &HashMap<NaiveDate, DayBucket>) -> Vec<ChartPoint> {
    let mut series: Vec<ChartPoint> = buckets
        .iter()
        .map(|(day, bucket)| ChartPoint {
            day: *day,
            label: day_label(*day),
            calories: bucket.calories,
            minutes: bucket.minutes,
        })
        .collect();
    series.sort_by_key(|point| point.day);
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_workout(id: u64, date: &str, duration: f64, calories: f64) -> Workout {
        Workout {
            id,
            duration: Some(duration),
            date: Some(date.to_string()),
            total_calories: Some(calories),
            coach: Some(String::new()),
            training_id: Some("t1".to_string()),
            training: None,
        }
    }

    fn day(raw: &str) -> NaiveDate {
        raw.parse().unwrap()
    }

    #[test]
    fn test_same_day_records_sum() {
        let workouts = vec![
            make_workout(1, "2024-06-01", 30.0, 200.0),
            make_workout(2, "2024-06-01", 45.0, 300.0),
            make_workout(3, "2024-06-02", 20.0, 150.0),
        ];

        let buckets = calories_and_duration_per_day(&workouts);

        assert_eq!(buckets.len(), 2);
        assert_eq!(
            buckets[&day("2024-06-01")],
            DayBucket { calories: 500.0, minutes: 75.0 }
        );
        assert_eq!(
            buckets[&day("2024-06-02")],
            DayBucket { calories: 150.0, minutes: 20.0 }
        );

        let series = chart_series(&buckets);
        assert_eq!(series[0].day, day("2024-06-01"));
        assert_eq!(series[1].day, day("2024-06-02"));
    }

    #[test]
    fn test_order_independence() {
        let mut workouts = vec![
            make_workout(1, "2024-06-01", 30.0, 200.0),
            make_workout(2, "2024-06-03", 10.0, 80.0),
            make_workout(3, "2024-06-01", 45.0, 300.0),
        ];
        let forward = calories_and_duration_per_day(&workouts);
        workouts.reverse();
        let backward = calories_and_duration_per_day(&workouts);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_invalid_records_are_dropped_not_zeroed() {
        let mut broken = make_workout(9, "2024-06-01", 30.0, 200.0);
        broken.total_calories = None;
        let workouts = vec![broken, make_workout(1, "2024-06-01", 15.0, 100.0)];

        let buckets = calories_and_duration_per_day(&workouts);

        // The broken record contributes nothing, not a zero entry
        assert_eq!(
            buckets[&day("2024-06-01")],
            DayBucket { calories: 100.0, minutes: 15.0 }
        );
    }

    #[test]
    fn test_series_sorts_across_year_boundary() {
        let workouts = vec![
            make_workout(1, "2025-01-02", 10.0, 100.0),
            make_workout(2, "2024-12-30", 20.0, 200.0),
        ];
        let series = chart_series(&calories_and_duration_per_day(&workouts));

        // 30/12 sorts before 02/01 because the key is the date, not the label
        assert_eq!(series[0].label, "30/12");
        assert_eq!(series[1].label, "02/01");
    }

    #[test]
    fn test_empty_input() {
        let buckets = calories_and_duration_per_day(&[]);
        assert!(buckets.is_empty());
        assert!(chart_series(&buckets).is_empty());
    }
}
