// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard load cycle: the four-collection sync the home page runs,
//! followed by the aggregation pass over the results.

use chrono::{Local, NaiveDate};

use crate::error::{AppError, Result};
use crate::models::{
    CategoryWithExercises, Challenge, ChallengeKind, Coach, NewPhysicalEntry, PhysicalEntry,
    Training, Workout,
};
use crate::services::{ApiClient, CollectionSync, SyncedCollection};
use crate::stats::{
    calories_and_duration_per_day, chart_series, last_30_days_progress_at, physical_trend_at,
    rank_exercises, rest_days_at, ChartPoint, ExerciseRankings, PhysicalTrend, WindowSummary,
};

/// Everything one dashboard render needs.
#[derive(Debug)]
pub struct DashboardSummary {
    pub workouts: SyncedCollection<Workout>,
    pub catalog: SyncedCollection<CategoryWithExercises>,
    pub coaches: SyncedCollection<Coach>,
    pub trainings: SyncedCollection<Training>,
    /// Per-day series, sorted ascending by calendar day
    pub series: Vec<ChartPoint>,
    pub last_30_days: WindowSummary,
    pub rest_days: u32,
    pub rankings: ExerciseRankings,
    /// Today's water intake in milliliters
    pub water_today_ml: i64,
    pub challenges: Vec<Challenge>,
}

/// Physical-progress page data.
#[derive(Debug)]
pub struct PhysicalProgress {
    pub entries: Vec<PhysicalEntry>,
    pub trend: Option<PhysicalTrend>,
    pub challenges: Vec<Challenge>,
}

/// High-level service tying sync and aggregation together.
#[derive(Clone)]
pub struct DashboardService {
    api: ApiClient,
    sync: CollectionSync,
}

impl DashboardService {
    pub fn new(api: ApiClient, sync: CollectionSync) -> Self {
        Self { api, sync }
    }

    /// Run one full dashboard load ending at the local calendar day.
    pub async fn load(&self) -> Result<DashboardSummary> {
        self.load_at(Local::now().date_naive()).await
    }

    /// Run one full dashboard load with an injected `today`.
    pub async fn load_at(&self, today: NaiveDate) -> Result<DashboardSummary> {
        // The four collections are independent; each one's cache-gate-fetch
        // sequence is ordered internally, so they can run side by side.
        let (catalog, workouts, coaches, trainings) = tokio::join!(
            self.sync.catalog(),
            self.sync.workouts(today),
            self.sync.coaches(),
            self.sync.trainings(),
        );
        let catalog = catalog?;
        let workouts = workouts?;
        let coaches = coaches?;
        let trainings = trainings?;

        let buckets = calories_and_duration_per_day(&workouts.items);
        let series = chart_series(&buckets);
        let last_30_days = last_30_days_progress_at(today, &series);
        let rest_days = rest_days_at(today, &series);
        let rankings = rank_exercises(&workouts.items, &catalog.items);

        // Side cards: failures here degrade the page, they don't block it.
        let water_today_ml = match self.api.get_water_intake_history(today, today).await {
            Ok(history) => history
                .first()
                .map(|entry| entry.quantity_in_militers)
                .unwrap_or(0),
            Err(err) => {
                tracing::warn!(error = %err, "water intake fetch failed");
                0
            }
        };
        let challenges = match self.api.get_challenges(ChallengeKind::Workouts).await {
            Ok(challenges) => challenges,
            Err(err) => {
                tracing::warn!(error = %err, "challenges fetch failed");
                Vec::new()
            }
        };

        tracing::info!(
            workouts = workouts.items.len(),
            categories = catalog.items.len(),
            trainings = trainings.items.len(),
            coaches = coaches.items.len(),
            "dashboard load complete"
        );

        Ok(DashboardSummary {
            workouts,
            catalog,
            coaches,
            trainings,
            series,
            last_30_days,
            rest_days,
            rankings,
            water_today_ml,
            challenges,
        })
    }

    /// Log water intake. Only today's total is editable; the quantity may
    /// be negative to undo, and the backend clamps the total at zero.
    pub async fn log_water(&self, date: NaiveDate, quantity_ml: i64) -> Result<()> {
        let today = Local::now().date_naive();
        if date != today {
            return Err(AppError::Validation(
                "water intake can only be changed for today".to_string(),
            ));
        }
        self.api.add_water_intake(date, quantity_ml).await
    }

    /// Load the physical-progress page: entries, 30-day trend, challenges.
    pub async fn physical_progress_at(
        &self,
        today: NaiveDate,
    ) -> Result<PhysicalProgress> {
        let entries = self.api.get_physical_data().await?;
        let trend = physical_trend_at(today, &entries);
        let challenges = match self.api.get_challenges(ChallengeKind::Physical).await {
            Ok(challenges) => challenges,
            Err(err) => {
                tracing::warn!(error = %err, "challenges fetch failed");
                Vec::new()
            }
        };
        Ok(PhysicalProgress {
            entries,
            trend,
            challenges,
        })
    }

    /// Save a body-measurement entry.
    pub async fn save_physical_entry(
        &self,
        entry: &NewPhysicalEntry,
    ) -> Result<PhysicalEntry> {
        self.api.save_physical_data(entry).await
    }
}
