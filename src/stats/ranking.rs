// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Top-N exercise ranking: occurrence counts across workouts, per category
//! and overall.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{CategoryWithExercises, Workout};
use crate::stats::TOP_OVERALL;

/// An exercise with its occurrence count across all workouts.
#[derive(Debug, Clone, Serialize)]
pub struct RankedExercise {
    pub exercise_id: String,
    pub name: String,
    pub count: u32,
}

/// Ranked exercises within one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRanking {
    pub category_id: String,
    pub category_name: String,
    pub total_count: u32,
    pub exercises: Vec<RankedExercise>,
}

/// Full ranking output: per-category lists plus the grand top 5.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseRankings {
    pub per_category: Vec<CategoryRanking>,
    pub top_overall: Vec<RankedExercise>,
}

/// Count exercise occurrences across all workouts (through each workout's
/// joined training) and rank them.
///
/// The catalog is the source of truth: exercises whose id is not in the
/// catalog are excluded, and display names come from the catalog entry.
/// Ranking is a stable descending sort by count, ties broken by first-seen
/// order in the workout sequence.
pub fn rank_exercises(
    workouts: &[Workout],
    catalog: &[CategoryWithExercises],
) -> ExerciseRankings {
    // exercise id -> (category id, exercise name)
    let mut known: HashMap<&str, (&str, &str)> = HashMap::new();
    for entry in catalog {
        for exercise in &entry.exercises {
            known.insert(
                exercise.id.as_str(),
                (entry.category.id.as_str(), exercise.name.as_str()),
            );
        }
    }

    // Count in first-seen order: the Vec keeps the order, the map the index.
    let mut order: Vec<RankedExercise> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut category_of: HashMap<String, String> = HashMap::new();

    for workout in workouts {
        let Some(training) = &workout.training else {
            continue;
        };
        for exercise in &training.exercises {
            let Some((category_id, name)) = known.get(exercise.id.as_str()) else {
                continue;
            };
            match index.get(&exercise.id) {
                Some(&at) => order[at].count += 1,
                None => {
                    index.insert(exercise.id.clone(), order.len());
                    category_of.insert(exercise.id.clone(), (*category_id).to_string());
                    order.push(RankedExercise {
                        exercise_id: exercise.id.clone(),
                        name: (*name).to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // Stable sort on count alone preserves first-seen order among ties.
    let mut ranked = order.clone();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    let top_overall = ranked.iter().take(TOP_OVERALL).cloned().collect();

    let mut per_category: Vec<CategoryRanking> = Vec::new();
    for entry in catalog {
        let mut exercises: Vec<RankedExercise> = order
            .iter()
            .filter(|item| category_of.get(&item.exercise_id) == Some(&entry.category.id))
            .cloned()
            .collect();
        if exercises.is_empty() {
            continue;
        }
        exercises.sort_by(|a, b| b.count.cmp(&a.count));
        let total_count = exercises.iter().map(|item| item.count).sum();
        per_category.push(CategoryRanking {
            category_id: entry.category.id.clone(),
            category_name: entry.category.name.clone(),
            total_count,
            exercises,
        });
    }
    per_category.sort_by(|a, b| b.total_count.cmp(&a.total_count));

    ExerciseRankings {
        per_category,
        top_overall,
    }
}
