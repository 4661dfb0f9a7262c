// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed client for the TrainMate REST backend.
//!
//! Every request goes through one dispatch helper that attaches the bearer
//! token and implements the auth-retry policy: on HTTP 401/403 the
//! credential is refreshed and the identical request replayed exactly once;
//! a second auth failure is final. Non-2xx responses carry
//! `{"error": "<message>"}` bodies.

use chrono::NaiveDate;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use validator::Validate;

use crate::config::Config;
use crate::error::{ApiErrorBody, AppError, Result};
use crate::models::{
    Category, Challenge, ChallengeKind, Coach, Exercise, NewPhysicalEntry, NewWorkout,
    PhysicalEntry, Training, UserProfile, UserProfileUpdate, WaterIntakeEntry, Workout,
};
use crate::services::AuthSession;
use crate::time_utils::day_param;

/// TrainMate backend client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth: AuthSession,
}

impl ApiClient {
    /// Create a client with the configured base URL and timeout.
    pub fn new(config: &Config, auth: AuthSession) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .user_agent(concat!("trainmate-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client build failed: {e}")))?;

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
            auth,
        })
    }

    // ─── Workouts ────────────────────────────────────────────────────────────

    /// List workouts, optionally bounded by calendar days (inclusive).
    pub async fn get_workouts(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<Workout>> {
        let mut query = Vec::new();
        if let Some(start) = start {
            query.push(("startDate", day_param(start)));
        }
        if let Some(end) = end {
            query.push(("endDate", day_param(end)));
        }
        let response: WorkoutsResponse = self
            .send_json(Method::GET, "/api/workouts/workouts", &query, None)
            .await?;
        Ok(response.workouts)
    }

    /// Save a new workout. Validates the payload before anything is sent.
    pub async fn save_workout(&self, new_workout: &NewWorkout) -> Result<Workout> {
        new_workout
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let body = serde_json::to_value(new_workout)
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;
        self.send_json(Method::POST, "/api/workouts/save-workout", &[], Some(&body))
            .await
    }

    /// Delete a workout.
    pub async fn cancel_workout(&self, workout_id: u64) -> Result<()> {
        let path = format!("/api/workouts/cancel-workout/{workout_id}");
        let _: Value = self.send_json(Method::DELETE, &path, &[], None).await?;
        Ok(())
    }

    /// Freshness marker for the workouts collection.
    pub async fn workouts_last_modified(&self) -> Result<i64> {
        let response: LastModifiedResponse = self
            .send_json(Method::GET, "/api/workouts/last-modified", &[], None)
            .await?;
        Ok(response.last_modified_timestamp)
    }

    /// Advance the workouts marker after a local mutation.
    pub async fn bump_workouts_last_modified(&self) -> Result<i64> {
        let response: LastModifiedResponse = self
            .send_json(Method::POST, "/api/workouts/update-last-modified", &[], None)
            .await?;
        Ok(response.last_modified_timestamp)
    }

    // ─── Catalog ─────────────────────────────────────────────────────────────

    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        let response: CategoriesResponse = self
            .send_json(Method::GET, "/api/categories", &[], None)
            .await?;
        Ok(response.categories)
    }

    pub async fn categories_last_modified(&self) -> Result<i64> {
        let response: LastModifiedResponse = self
            .send_json(Method::GET, "/api/categories/last-modified", &[], None)
            .await?;
        Ok(response.last_modified_timestamp)
    }

    pub async fn get_exercises_from_category(
        &self,
        category_id: &str,
    ) -> Result<Vec<Exercise>> {
        let path = format!("/api/exercises/from-category/{category_id}");
        let response: ExercisesResponse = self.send_json(Method::GET, &path, &[], None).await?;
        Ok(response.exercises)
    }

    // ─── Trainings ───────────────────────────────────────────────────────────

    pub async fn get_trainings(&self) -> Result<Vec<Training>> {
        let response: TrainingsResponse = self
            .send_json(Method::GET, "/api/trainings", &[], None)
            .await?;
        Ok(response.trainings)
    }

    pub async fn trainings_last_modified(&self) -> Result<i64> {
        let response: LastModifiedResponse = self
            .send_json(Method::GET, "/api/trainings/last-modified", &[], None)
            .await?;
        Ok(response.last_modified_timestamp)
    }

    /// Server-computed top-5 exercises across all users.
    pub async fn get_popular_exercises(&self) -> Result<Vec<PopularExercise>> {
        let response: PopularExercisesResponse = self
            .send_json(Method::GET, "/api/trainings/popular-exercises", &[], None)
            .await?;
        Ok(response.popular_exercises)
    }

    // ─── Coaches ─────────────────────────────────────────────────────────────

    pub async fn get_coaches(&self) -> Result<Vec<Coach>> {
        let response: CoachesResponse = self
            .send_json(Method::GET, "/api/coaches", &[], None)
            .await?;
        Ok(response.coaches)
    }

    // ─── Challenges ──────────────────────────────────────────────────────────

    pub async fn get_challenges(&self, kind: ChallengeKind) -> Result<Vec<Challenge>> {
        let path = format!("/api/challenges/{}", kind.as_str());
        let response: ChallengesResponse = self.send_json(Method::GET, &path, &[], None).await?;
        Ok(response.challenges)
    }

    // ─── Water intake ────────────────────────────────────────────────────────

    /// Daily intake entries within the inclusive day range.
    pub async fn get_water_intake_history(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WaterIntakeEntry>> {
        let query = [("startDate", day_param(start)), ("endDate", day_param(end))];
        let response: WaterIntakeResponse = self
            .send_json(Method::GET, "/api/water-intake/history", &query, None)
            .await?;
        Ok(response.water_intake_history)
    }

    /// Add (or with a negative quantity, remove) milliliters for a day.
    /// The backend clamps the daily total at zero.
    pub async fn add_water_intake(
        &self,
        date: NaiveDate,
        quantity_ml: i64,
    ) -> Result<()> {
        let body = json!({
            "date": day_param(date),
            "quantity_in_militers": quantity_ml,
        });
        let _: Value = self
            .send_json(Method::POST, "/api/water-intake", &[], Some(&body))
            .await?;
        Ok(())
    }

    // ─── Physical data ───────────────────────────────────────────────────────

    pub async fn get_physical_data(&self) -> Result<Vec<PhysicalEntry>> {
        let response: PhysicalDataResponse = self
            .send_json(Method::GET, "/api/physical-data", &[], None)
            .await?;
        Ok(response.physical_data)
    }

    /// Save a body-measurement entry. Validates before sending.
    pub async fn save_physical_data(
        &self,
        entry: &NewPhysicalEntry,
    ) -> Result<PhysicalEntry> {
        entry
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let body =
            serde_json::to_value(entry).map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;
        self.send_json(Method::POST, "/api/physical-data", &[], Some(&body))
            .await
    }

    // ─── User profile ────────────────────────────────────────────────────────

    pub async fn get_user_profile(&self) -> Result<UserProfile> {
        self.send_json(Method::GET, "/get-user-info", &[], None)
            .await
    }

    pub async fn update_user_profile(&self, update: &UserProfileUpdate) -> Result<()> {
        let body =
            serde_json::to_value(update).map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;
        let _: Value = self
            .send_json(Method::POST, "/update-user-info", &[], Some(&body))
            .await?;
        Ok(())
    }

    // ─── Dispatch ────────────────────────────────────────────────────────────

    /// Send one authorized request, retrying exactly once with a refreshed
    /// credential when the backend reports 401/403.
    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<T> {
        let token = self.auth.bearer_token().await?;
        let response = self
            .build(method.clone(), path, query, body, &token)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if matches!(response.status().as_u16(), 401 | 403) {
            tracing::debug!(path, "auth failure, refreshing credential and retrying once");
            let token = self.auth.refresh(Some(&token)).await?;
            let retry = self
                .build(method, path, query, body, &token)
                .send()
                .await
                .map_err(|e| AppError::Network(e.to_string()))?;
            return Self::check_response_json(retry).await;
        }

        Self::check_response_json(response).await
    }

    fn build(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
        token: &str,
    ) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(token);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| AppError::Network(format!("JSON parse error: {e}")));
        }

        // A second auth failure after the retry lands here and is final.
        if matches!(status.as_u16(), 401 | 403) {
            return Err(AppError::Unauthorized);
        }

        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
        };
        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response envelopes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct WorkoutsResponse {
    workouts: Vec<Workout>,
}

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct ExercisesResponse {
    exercises: Vec<Exercise>,
}

#[derive(Debug, Deserialize)]
struct TrainingsResponse {
    trainings: Vec<Training>,
}

#[derive(Debug, Deserialize)]
struct CoachesResponse {
    coaches: Vec<Coach>,
}

#[derive(Debug, Deserialize)]
struct ChallengesResponse {
    challenges: Vec<Challenge>,
}

#[derive(Debug, Deserialize)]
struct WaterIntakeResponse {
    water_intake_history: Vec<WaterIntakeEntry>,
}

#[derive(Debug, Deserialize)]
struct PhysicalDataResponse {
    physical_data: Vec<PhysicalEntry>,
}

#[derive(Debug, Deserialize)]
struct LastModifiedResponse {
    last_modified_timestamp: i64,
}

/// Entry of the server-side popularity ranking.
#[derive(Debug, Clone, Deserialize)]
pub struct PopularExercise {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Deserialize)]
struct PopularExercisesResponse {
    popular_exercises: Vec<PopularExercise>,
}
