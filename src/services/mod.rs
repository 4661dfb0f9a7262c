// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - the remote-facing layer.

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod sync;

pub use api::ApiClient;
pub use auth::AuthSession;
pub use dashboard::{DashboardService, DashboardSummary};
pub use sync::{CollectionSync, Freshness, SyncedCollection};
