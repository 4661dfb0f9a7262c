// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed local cache, one JSON envelope per collection.
//!
//! The envelope pairs the collection payload with its freshness marker so
//! the two can only ever be written together: the marker cannot outlive or
//! predate the data it describes. A corrupt or half-written file reads back
//! as absent, which the freshness gate treats as "must refetch".

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

use crate::error::{AppError, Result};
use crate::time_utils::format_utc_rfc3339;

/// On-disk envelope: `{"fetched_at": ..., "marker": ..., "items": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Envelope {
    fetched_at: String,
    marker: Option<i64>,
    items: serde_json::Value,
}

/// A cached collection read back from the store.
#[derive(Debug, Clone)]
pub struct CachedCollection<T> {
    pub items: Vec<T>,
    pub marker: Option<i64>,
    pub fetched_at: DateTime<Utc>,
}

/// Local key/value cache for backend collections.
///
/// Entries live as `<name>.json` under the cache directory, mirrored in an
/// in-memory map so repeat reads within one process skip the disk. The
/// store is a cache only: any entry may be evicted at any time and every
/// consumer must tolerate absence.
#[derive(Clone)]
pub struct LocalStore {
    dir: PathBuf,
    mem: Arc<DashMap<String, Envelope>>,
}

impl LocalStore {
    /// Open (and create if needed) the cache directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| AppError::Cache(format!("create cache dir: {e}")))?;
        Ok(Self {
            dir,
            mem: Arc::new(DashMap::new()),
        })
    }

    /// Read a cached collection, or `None` when nothing usable is cached.
    ///
    /// Unreadable or corrupt entries are reported as absent so the caller
    /// refetches instead of failing.
    pub async fn get<T: DeserializeOwned>(&self, name: &str) -> Option<CachedCollection<T>> {
        let envelope = match self.mem.get(name) {
            Some(entry) => entry.clone(),
            None => {
                let envelope = self.read_file(name).await?;
                self.mem.insert(name.to_string(), envelope.clone());
                envelope
            }
        };

        let fetched_at = DateTime::parse_from_rfc3339(&envelope.fetched_at)
            .ok()?
            .with_timezone(&Utc);
        let items: Vec<T> = serde_json::from_value(envelope.items).ok()?;
        Some(CachedCollection {
            items,
            marker: envelope.marker,
            fetched_at,
        })
    }

    /// Persist a collection together with its freshness marker.
    ///
    /// One envelope, one write (temp file then rename), so a failure leaves
    /// either the old pair or nothing, never a new marker over old data.
    pub async fn put<T: Serialize>(
        &self,
        name: &str,
        items: &[T],
        marker: Option<i64>,
    ) -> Result<()> {
        let envelope = Envelope {
            fetched_at: format_utc_rfc3339(Utc::now()),
            marker,
            items: serde_json::to_value(items)
                .map_err(|e| AppError::Cache(format!("serialize {name}: {e}")))?,
        };

        let payload = serde_json::to_vec(&envelope)
            .map_err(|e| AppError::Cache(format!("serialize {name}: {e}")))?;
        let path = self.path_for(name);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &payload)
            .await
            .map_err(|e| AppError::Cache(format!("write {name}: {e}")))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| AppError::Cache(format!("commit {name}: {e}")))?;

        self.mem.insert(name.to_string(), envelope);
        tracing::debug!(collection = name, ?marker, "cache entry written");
        Ok(())
    }

    /// Drop a collection from the cache (memory and disk).
    pub async fn evict(&self, name: &str) {
        self.mem.remove(name);
        let path = self.path_for(name);
        if let Err(err) = fs::remove_file(&path).await {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(collection = name, error = %err, "failed to remove cache file");
            }
        }
        tracing::debug!(collection = name, "cache entry evicted");
    }

    async fn read_file(&self, name: &str) -> Option<Envelope> {
        let path = self.path_for(name);
        match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(envelope) => Some(envelope),
                Err(err) => {
                    tracing::warn!(collection = name, error = %err, "corrupt cache file, treating as absent");
                    None
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(collection = name, error = %err, "failed to read cache file");
                None
            }
        }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        Path::new(&self.dir).join(format!("{name}.json"))
    }
}
