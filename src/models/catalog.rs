// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Category, exercise, and coach taxonomies.

use serde::{Deserialize, Serialize};

/// An exercise category (e.g. "Legs", "Cardio").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    /// Icon identifier rendered by the UI
    #[serde(default)]
    pub icon: String,
    pub name: String,
    #[serde(default)]
    pub owner: String,
    /// User-created rather than built-in
    #[serde(default, rename = "isCustom")]
    pub is_custom: bool,
}

/// A single exercise within a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    #[serde(default)]
    pub calories_per_hour: f64,
    pub category_id: String,
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub training_muscle: String,
}

/// A category joined with its exercises.
///
/// This is the unit the catalog cache stores: the dashboard always needs
/// both together, and caching them as one entry keeps them consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithExercises {
    #[serde(flatten)]
    pub category: Category,
    pub exercises: Vec<Exercise>,
}

/// A coach from the external roster the backend proxies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coach {
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(default)]
    pub speciality: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
