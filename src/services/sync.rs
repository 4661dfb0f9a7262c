// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-collection sync: read cache, compare freshness markers, refetch when
//! stale, and persist the new (data, marker) pair.
//!
//! Each collection runs the same temporally ordered sub-sequence end to end
//! before its result is used; different collections are independent and may
//! run concurrently. When the marker endpoint itself fails, the sync serves
//! whatever is cached rather than blocking the page: availability over
//! consistency.

use chrono::{Duration, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;

use crate::error::Result;
use crate::models::{CategoryWithExercises, Coach, NewWorkout, Training, Workout};
use crate::services::ApiClient;
use crate::store::{collections, should_refetch, LocalStore};

/// Coaches have no marker endpoint; cached copies expire after this long.
const COACHES_TTL_SECS: i64 = 60 * 60;

/// Whether a synced collection reflects the backend's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Marker verified (or just refetched)
    Fresh,
    /// Marker check failed; serving the last cached copy
    Stale,
}

/// A collection plus how fresh it is for this page view.
#[derive(Debug, Clone)]
pub struct SyncedCollection<T> {
    pub items: Vec<T>,
    pub freshness: Freshness,
}

impl<T> SyncedCollection<T> {
    fn fresh(items: Vec<T>) -> Self {
        Self {
            items,
            freshness: Freshness::Fresh,
        }
    }
}

/// Gate + fetch + store, per collection.
#[derive(Clone)]
pub struct CollectionSync {
    api: ApiClient,
    store: LocalStore,
}

impl CollectionSync {
    pub fn new(api: ApiClient, store: LocalStore) -> Self {
        Self { api, store }
    }

    /// Workouts up to and including `end` (the dashboard passes today).
    pub async fn workouts(&self, end: NaiveDate) -> Result<SyncedCollection<Workout>> {
        self.sync_collection(
            collections::WORKOUTS,
            self.api.workouts_last_modified(),
            self.api.get_workouts(None, Some(end)),
        )
        .await
    }

    /// The category catalog with each category's exercises, cached as one
    /// unit so names and groupings never come from different snapshots.
    pub async fn catalog(&self) -> Result<SyncedCollection<CategoryWithExercises>> {
        self.sync_collection(
            collections::CATEGORIES,
            self.api.categories_last_modified(),
            async {
                let categories = self.api.get_categories().await?;
                let mut catalog = Vec::with_capacity(categories.len());
                for category in categories {
                    let exercises = self.api.get_exercises_from_category(&category.id).await?;
                    catalog.push(CategoryWithExercises {
                        category,
                        exercises,
                    });
                }
                Ok(catalog)
            },
        )
        .await
    }

    pub async fn trainings(&self) -> Result<SyncedCollection<Training>> {
        self.sync_collection(
            collections::TRAININGS,
            self.api.trainings_last_modified(),
            self.api.get_trainings(),
        )
        .await
    }

    /// Coaches use a plain TTL: no marker endpoint exists for the external
    /// roster, so a cached copy younger than an hour is served as fresh.
    pub async fn coaches(&self) -> Result<SyncedCollection<Coach>> {
        let cached = self.store.get::<Coach>(collections::COACHES).await;
        if let Some(cached) = &cached {
            if Utc::now() - cached.fetched_at < Duration::seconds(COACHES_TTL_SECS) {
                return Ok(SyncedCollection::fresh(cached.items.clone()));
            }
        }

        match self.api.get_coaches().await {
            Ok(items) => {
                if let Err(err) = self.store.put(collections::COACHES, &items, None).await {
                    tracing::warn!(collection = collections::COACHES, error = %err, "cache write failed");
                }
                Ok(SyncedCollection::fresh(items))
            }
            Err(err) => match cached {
                // Expired copy beats no coaches at all
                Some(cached) => {
                    tracing::warn!(collection = collections::COACHES, error = %err, "fetch failed, serving expired cache");
                    Ok(SyncedCollection {
                        items: cached.items,
                        freshness: Freshness::Stale,
                    })
                }
                None => Err(err),
            },
        }
    }

    // ─── Mutations ───────────────────────────────────────────────────────────

    /// Save a workout, then advance the remote marker and evict the local
    /// entry. Eviction happens only after the backend acknowledged the
    /// write, so a failed save leaves the pre-operation cache intact.
    pub async fn save_workout(&self, new_workout: &NewWorkout) -> Result<Workout> {
        let saved = self.api.save_workout(new_workout).await?;
        self.invalidate_workouts().await;
        tracing::info!(workout_id = saved.id, "workout saved");
        Ok(saved)
    }

    /// Delete a workout, then invalidate the cached collection.
    pub async fn cancel_workout(&self, workout_id: u64) -> Result<()> {
        self.api.cancel_workout(workout_id).await?;
        self.invalidate_workouts().await;
        tracing::info!(workout_id, "workout cancelled");
        Ok(())
    }

    async fn invalidate_workouts(&self) {
        if let Err(err) = self.api.bump_workouts_last_modified().await {
            // The next marker compare will still miss because the backend
            // bumped its copy on mutation; log and move on.
            tracing::warn!(error = %err, "failed to bump workouts marker");
        }
        self.store.evict(collections::WORKOUTS).await;
    }

    // ─── Shared marker-gated sequence ────────────────────────────────────────

    /// read cache → fetch remote marker → gate → conditionally refetch →
    /// persist (data, marker) together → return with a freshness tag.
    async fn sync_collection<T, MF, IF>(
        &self,
        name: &'static str,
        marker_fetch: MF,
        items_fetch: IF,
    ) -> Result<SyncedCollection<T>>
    where
        T: Serialize + DeserializeOwned,
        MF: Future<Output = Result<i64>>,
        IF: Future<Output = Result<Vec<T>>>,
    {
        let cached = self.store.get::<T>(name).await;

        let remote_marker = match marker_fetch.await {
            Ok(marker) => marker,
            Err(err) => {
                // Stale-but-available: the page renders with what we have.
                if let Some(cached) = cached {
                    tracing::warn!(collection = name, error = %err, "marker fetch failed, serving cached copy");
                    return Ok(SyncedCollection {
                        items: cached.items,
                        freshness: Freshness::Stale,
                    });
                }
                return Err(err);
            }
        };

        match cached {
            Some(cached) if !should_refetch(cached.marker, remote_marker, true) => {
                tracing::debug!(collection = name, marker = remote_marker, "cache is fresh");
                return Ok(SyncedCollection::fresh(cached.items));
            }
            cached => {
                let local_marker = cached.as_ref().and_then(|c| c.marker);
                tracing::debug!(
                    collection = name,
                    ?local_marker,
                    remote_marker,
                    "refetching collection"
                );
            }
        }

        let items = items_fetch.await?;
        if let Err(err) = self.store.put(name, &items, Some(remote_marker)).await {
            // Fetched data is still good for this page view; the cache just
            // won't help next time.
            tracing::warn!(collection = name, error = %err, "cache write failed");
        }
        Ok(SyncedCollection::fresh(items))
    }
}
