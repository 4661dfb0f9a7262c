// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end dashboard load against a fully mocked backend.

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use trainmate_core::models::Workout;
use trainmate_core::services::Freshness;

mod common;
use common::{make_category, make_exercise, make_training, make_workout};

fn workout_with_training(id: u64, date: &str, duration: f64, calories: f64, exercise_ids: &[&str]) -> Workout {
    let exercises = exercise_ids
        .iter()
        .map(|eid| make_exercise(eid, "c1", &format!("Exercise {}", eid.to_uppercase())))
        .collect();
    Workout {
        training: Some(make_training("t1", "Leg day", exercises)),
        ..make_workout(id, date, duration, calories)
    }
}

async fn mount_full_backend(harness: &common::TestHarness) {
    let workouts = vec![
        workout_with_training(1, "2024-06-01", 30.0, 200.0, &["e1"]),
        workout_with_training(2, "2024-06-01", 45.0, 300.0, &["e1"]),
        workout_with_training(3, "2024-06-02", 20.0, 150.0, &["e1", "e2"]),
    ];

    Mock::given(method("GET"))
        .and(path("/api/categories/last-modified"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"last_modified_timestamp": 1})))
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "categories": [make_category("c1", "Strength")]
        })))
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/exercises/from-category/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "exercises": [
                make_exercise("e1", "c1", "Exercise E1"),
                make_exercise("e2", "c1", "Exercise E2"),
            ]
        })))
        .mount(&harness.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/workouts/last-modified"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"last_modified_timestamp": 2})))
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/workouts/workouts"))
        .and(query_param("endDate", "2024-06-30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"workouts": workouts})))
        .mount(&harness.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/coaches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "coaches": [{"fullName": "Alex Carter"}]
        })))
        .mount(&harness.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/trainings/last-modified"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"last_modified_timestamp": 3})))
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/trainings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "trainings": [make_training("t1", "Leg day", vec![])]
        })))
        .mount(&harness.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/challenges/workouts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "challenges": [
                {"id": 1, "challenge": "Work out 3 days in a row", "state": true},
                {"id": 2, "challenge": "Burn 5000 kcal in a month", "state": false}
            ]
        })))
        .mount(&harness.server)
        .await;
}

async fn mount_water_history(harness: &common::TestHarness) {
    Mock::given(method("GET"))
        .and(path("/api/water-intake/history"))
        .and(query_param("startDate", "2024-06-30"))
        .and(query_param("endDate", "2024-06-30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "water_intake_history": [{"date": "2024-06-30", "quantity_in_militers": 600}]
        })))
        .mount(&harness.server)
        .await;
}

#[tokio::test]
async fn test_full_dashboard_load() {
    let harness = common::harness().await;
    mount_full_backend(&harness).await;
    mount_water_history(&harness).await;

    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let summary = harness.dashboard.load_at(today).await.unwrap();

    // All four collections came back fresh
    assert_eq!(summary.workouts.freshness, Freshness::Fresh);
    assert_eq!(summary.catalog.freshness, Freshness::Fresh);
    assert_eq!(summary.coaches.freshness, Freshness::Fresh);
    assert_eq!(summary.trainings.freshness, Freshness::Fresh);
    assert_eq!(summary.workouts.items.len(), 3);

    // Day buckets: two workouts on 06-01 sum, one on 06-02
    assert_eq!(summary.series.len(), 2);
    assert_eq!(summary.series[0].day, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(summary.series[0].calories, 500.0);
    assert_eq!(summary.series[0].minutes, 75.0);
    assert_eq!(summary.series[1].day, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
    assert_eq!(summary.series[1].calories, 150.0);
    assert_eq!(summary.series[1].minutes, 20.0);

    // Rolling window over the trailing 30 days
    assert_eq!(summary.last_30_days.calories, 650.0);
    assert_eq!(summary.last_30_days.minutes, 95.0);
    assert_eq!(summary.last_30_days.active_days, 2);
    assert!(summary.last_30_days.comparison.is_none());
    assert_eq!(summary.rest_days, 28);

    // Ranking: e1 appears in all three workouts, e2 in one
    assert_eq!(summary.rankings.top_overall[0].exercise_id, "e1");
    assert_eq!(summary.rankings.top_overall[0].count, 3);
    assert_eq!(summary.rankings.top_overall[1].exercise_id, "e2");
    assert_eq!(summary.rankings.top_overall[1].count, 1);
    assert_eq!(summary.rankings.per_category.len(), 1);
    assert_eq!(summary.rankings.per_category[0].category_name, "Strength");

    // Side cards
    assert_eq!(summary.water_today_ml, 600);
    assert_eq!(summary.challenges.len(), 2);
}

#[tokio::test]
async fn test_second_load_serves_collections_from_cache() {
    let harness = common::harness().await;
    mount_full_backend(&harness).await;
    mount_water_history(&harness).await;

    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let first = harness.dashboard.load_at(today).await.unwrap();
    let second = harness.dashboard.load_at(today).await.unwrap();

    // Same markers, so the second load computes identical aggregates from
    // the cached collections
    assert_eq!(second.workouts.freshness, Freshness::Fresh);
    assert_eq!(second.series.len(), first.series.len());
    assert_eq!(second.last_30_days.calories, first.last_30_days.calories);

    // Exactly one fetch of the workout list happened across both loads
    let requests = harness
        .server
        .received_requests()
        .await
        .expect("recording enabled");
    let workout_fetches = requests
        .iter()
        .filter(|r| r.url.path() == "/api/workouts/workouts")
        .count();
    assert_eq!(workout_fetches, 1);
}

#[tokio::test]
async fn test_side_card_failure_does_not_block_the_page() {
    let harness = common::harness().await;
    mount_full_backend(&harness).await;

    // Water intake backend is down this time
    Mock::given(method("GET"))
        .and(path("/api/water-intake/history"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "down"})))
        .mount(&harness.server)
        .await;

    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let summary = harness.dashboard.load_at(today).await.unwrap();
    assert_eq!(summary.workouts.items.len(), 3);
    assert_eq!(summary.water_today_ml, 0);
}

#[tokio::test]
async fn test_physical_progress_page() {
    let harness = common::harness().await;

    Mock::given(method("GET"))
        .and(path("/api/physical-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "physical_data": [
                {"date": "2024-06-05", "weight": 82.0, "body_fat": 22.0, "body_muscle": 38.0},
                {"date": "2024-06-25", "weight": 80.5, "body_fat": 21.0, "body_muscle": 39.0}
            ]
        })))
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/challenges/physical"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "challenges": [{"id": 3, "challenge": "Lose 2 kg", "state": false}]
        })))
        .mount(&harness.server)
        .await;

    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let progress = harness.dashboard.physical_progress_at(today).await.unwrap();

    assert_eq!(progress.entries.len(), 2);
    let trend = progress.trend.expect("two samples in the window");
    assert_eq!(trend.weight_delta, -1.5);
    assert_eq!(trend.samples, 2);
    assert_eq!(progress.challenges.len(), 1);
}

#[tokio::test]
async fn test_water_can_only_be_logged_for_today() {
    let harness = common::harness().await;

    // Today's entry goes through, any other date is rejected client-side
    Mock::given(method("POST"))
        .and(path("/api/water-intake"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&harness.server)
        .await;

    let today = chrono::Local::now().date_naive();
    harness.dashboard.log_water(today, 250).await.unwrap();

    let yesterday = today - chrono::Duration::days(1);
    let result = harness.dashboard.log_water(yesterday, 250).await;
    assert!(matches!(
        result,
        Err(trainmate_core::error::AppError::Validation(_))
    ));
}
