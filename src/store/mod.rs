// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local cache layer: collection names, the freshness gate, and the
//! file-backed store.

pub mod local;

pub use local::{CachedCollection, LocalStore};

/// Collection names as constants (cache file stems and log fields).
pub mod collections {
    pub const WORKOUTS: &str = "workouts";
    pub const CATEGORIES: &str = "categories";
    pub const TRAININGS: &str = "trainings";
    pub const COACHES: &str = "coaches";
}

/// Decide whether a collection must be refetched from the backend.
///
/// Refetch when no complete cached copy exists, when no local marker is
/// stored, or when the remote marker differs from the local one. Only an
/// exact marker match over a present collection serves from cache.
pub fn should_refetch(local_marker: Option<i64>, remote_marker: i64, present: bool) -> bool {
    !present || local_marker != Some(remote_marker)
}
