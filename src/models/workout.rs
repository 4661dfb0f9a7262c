// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout records as served by the backend, plus the payload for saving
//! new ones.
//!
//! The backend is loosely typed: numeric fields may be missing, null, or
//! outright garbage on old records. Everything nullable is an `Option` and
//! validity is decided once, at the aggregation boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::models::catalog::Exercise;
use crate::time_utils::parse_day;

/// A logged workout as returned by `GET /api/workouts/workouts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: u64,
    /// Duration in minutes
    #[serde(default, deserialize_with = "lenient_f64")]
    pub duration: Option<f64>,
    /// Calendar day the workout happened (`YYYY-MM-DD` or RFC3339)
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_calories: Option<f64>,
    /// Coach name, empty string when trained alone
    #[serde(default)]
    pub coach: Option<String>,
    #[serde(default)]
    pub training_id: Option<String>,
    /// Joined training definition (present on list responses)
    #[serde(default)]
    pub training: Option<Training>,
}

impl Workout {
    /// Returns `(day, calories, minutes)` when this record counts toward
    /// aggregation: the date parses to a calendar day and both metrics are
    /// present and non-negative. Zero is a valid value; absent, unparseable
    /// or negative values drop the record.
    pub fn countable(&self) -> Option<(NaiveDate, f64, f64)> {
        let day = parse_day(self.date.as_deref()?)?;
        let calories = self.total_calories.filter(|c| c.is_finite() && *c >= 0.0)?;
        let minutes = self.duration.filter(|d| d.is_finite() && *d >= 0.0)?;
        Some((day, calories, minutes))
    }
}

/// A training definition (named set of exercises).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Training {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub calories_per_hour_mean: f64,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// Payload for `POST /api/workouts/save-workout`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewWorkout {
    #[validate(length(min = 1, message = "training is required"))]
    pub training_id: String,
    /// Empty string means no coach
    pub coach: String,
    /// Duration in whole minutes
    #[validate(range(min = 1, max = 1000))]
    pub duration: u32,
    /// `YYYY-MM-DD`
    #[validate(custom(function = "validate_day"))]
    pub date: String,
}

fn validate_day(value: &str) -> Result<(), ValidationError> {
    if parse_day(value).is_none() {
        return Err(ValidationError::new("invalid_date"));
    }
    Ok(())
}

/// Parse anything into an `Option<f64>`, mapping non-numeric junk to `None`
/// instead of failing the whole collection.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(serde_json::Value::as_f64))
}
