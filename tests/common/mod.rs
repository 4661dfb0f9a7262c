// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::path::Path;

use tempfile::TempDir;
use wiremock::MockServer;

use trainmate_core::config::Config;
use trainmate_core::models::{Category, Exercise, Training, Workout};
use trainmate_core::services::{ApiClient, AuthSession, CollectionSync, DashboardService};
use trainmate_core::store::LocalStore;

/// A mock backend plus a fully wired client stack over a temp cache dir.
pub struct TestHarness {
    pub server: MockServer,
    pub store: LocalStore,
    pub api: ApiClient,
    pub sync: CollectionSync,
    pub dashboard: DashboardService,
    // Held so the cache directory outlives the test
    _cache: TempDir,
}

/// Config pointing at the mock server with a static test token.
pub fn test_config(server_uri: &str, cache_dir: &Path) -> Config {
    Config {
        api_url: server_uri.to_string(),
        auth_token: Some("test_token".to_string()),
        refresh_url: None,
        refresh_token: None,
        cache_dir: cache_dir.to_path_buf(),
        http_timeout_secs: 5,
    }
}

/// Spin up a mock backend and wire the full client stack against it.
#[allow(dead_code)]
pub async fn harness() -> TestHarness {
    let server = MockServer::start().await;
    let cache = TempDir::new().expect("temp cache dir");
    let config = test_config(&server.uri(), cache.path());

    let store = LocalStore::open(&config.cache_dir).expect("open store");
    let auth = AuthSession::new(&config);
    let api = ApiClient::new(&config, auth).expect("build client");
    let sync = CollectionSync::new(api.clone(), store.clone());
    let dashboard = DashboardService::new(api.clone(), sync.clone());

    TestHarness {
        server,
        store,
        api,
        sync,
        dashboard,
        _cache: cache,
    }
}

#[allow(dead_code)]
pub fn make_workout(id: u64, date: &str, duration: f64, calories: f64) -> Workout {
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

#[allow(dead_code)]
pub fn make_exercise(id: &str, category_id: &str, name: &str) -> Exercise {
    Exercise {
        id: id.to_string(),
        calories_per_hour: 350.0,
        category_id: category_id.to_string(),
        name: name.to_string(),
        owner: "builtin".to_string(),
        public: true,
        training_muscle: "legs".to_string(),
    }
}

#[allow(dead_code)]
pub fn make_category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        icon: "dumbbell".to_string(),
        name: name.to_string(),
        owner: "builtin".to_string(),
        is_custom: false,
    }
}

#[allow(dead_code)]
pub fn make_training(id: &str, name: &str, exercises: Vec<Exercise>) -> Training {
    Training {
        id: id.to_string(),
        name: name.to_string(),
        owner: "user".to_string(),
        calories_per_hour_mean: 400.0,
        exercises,
    }
}
