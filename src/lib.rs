// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! TrainMate core: the client-side data layer of the TrainMate fitness tracker.
//!
//! This crate talks to the remote TrainMate REST backend, keeps a local
//! file-backed cache of the collections every page needs (workouts, the
//! category/exercise catalog, trainings, coaches), and computes the
//! aggregates the dashboard renders: per-day calorie/duration buckets,
//! trailing 30-day progress windows, and exercise rankings.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod stats;
pub mod store;
pub mod time_utils;
