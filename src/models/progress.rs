// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Physical-progress measurements and water intake.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A body-measurement entry as returned by `GET /api/physical-data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicalEntry {
    /// Calendar day of the measurement
    pub date: String,
    /// Weight in kilograms
    pub weight: f64,
    /// Body fat percentage
    pub body_fat: f64,
    /// Body muscle percentage
    pub body_muscle: f64,
}

/// Payload for `POST /api/physical-data`.
#[derive(Debug, Clone, Serialize, Validate)]
#[validate(schema(function = "validate_composition"))]
pub struct NewPhysicalEntry {
    /// `YYYY-MM-DD`
    #[validate(length(min = 10, max = 10))]
    pub date: String,
    #[validate(range(min = 25.0, max = 300.0))]
    pub weight: f64,
    #[validate(range(min = 1.0, max = 150.0))]
    pub body_fat: f64,
    #[validate(range(min = 1.0, max = 150.0))]
    pub body_muscle: f64,
}

/// Fat and muscle are both percentages of the same body; together they
/// cannot exceed the whole.
fn validate_composition(entry: &NewPhysicalEntry) -> Result<(), ValidationError> {
    if entry.body_fat + entry.body_muscle > 100.0 {
        return Err(ValidationError::new("composition_exceeds_100"));
    }
    Ok(())
}

/// One day's water intake.
///
/// The field name misspelling is the backend's wire format; do not fix it
/// here or deserialization breaks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterIntakeEntry {
    pub date: String,
    pub quantity_in_militers: i64,
}
