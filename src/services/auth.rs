// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer-credential session: in-memory token cache plus a refresh hook.
//!
//! Identity lives with an external provider; this crate only holds the
//! bearer token and knows how to exchange a refresh credential for a new
//! one. Without a refresh URL the session is static: it serves the
//! configured token until the backend rejects it, at which point auth
//! failures are final.

use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::{AppError, Result};

/// Response from the identity provider's refresh endpoint.
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    token: String,
}

/// Cached bearer token with a refresh-once hook.
#[derive(Clone)]
pub struct AuthSession {
    http: reqwest::Client,
    refresh_url: Option<String>,
    refresh_token: Option<String>,
    /// Current bearer token; the mutex serializes refreshes, and
    /// `refresh` re-checks the slot after taking it so concurrent 401s
    /// coalesce into one exchange.
    token: Arc<Mutex<Option<String>>>,
}

impl AuthSession {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            refresh_url: config.refresh_url.clone(),
            refresh_token: config.refresh_token.clone(),
            token: Arc::new(Mutex::new(config.auth_token.clone())),
        }
    }

    /// Current bearer token, refreshing once if none is held yet.
    pub async fn bearer_token(&self) -> Result<String> {
        if let Some(token) = self.token.lock().await.clone() {
            return Ok(token);
        }
        self.refresh(None).await
    }

    /// Exchange the refresh credential for a new bearer token and cache it.
    ///
    /// `stale` is the token the backend just rejected (or `None` when no
    /// token was held at all). After taking the lock, if the slot already
    /// holds a different token a concurrent caller got there first; that
    /// token is returned without a second exchange, so a burst of 401s
    /// costs one round trip to the identity provider.
    ///
    /// Fails with `Unauthorized` when no refresh hook is configured or the
    /// identity provider rejects the exchange.
    pub async fn refresh(&self, stale: Option<&str>) -> Result<String> {
        let (Some(url), Some(refresh_token)) = (&self.refresh_url, &self.refresh_token) else {
            tracing::debug!("no refresh hook configured, auth failure is final");
            return Err(AppError::Unauthorized);
        };

        let mut slot = self.token.lock().await;
        if let Some(current) = slot.as_deref() {
            if stale != Some(current) {
                tracing::debug!("credential already refreshed by a concurrent request");
                return Ok(current.to_string());
            }
        }

        let response = self
            .http
            .post(url)
            .json(&json!({ "refresh_token": refresh_token }))
            .send()
            .await
            .map_err(|e| AppError::Network(format!("credential refresh failed: {e}")))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "credential refresh rejected");
            return Err(AppError::Unauthorized);
        }

        let body: RefreshResponse = response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("credential refresh parse error: {e}")))?;

        *slot = Some(body.token.clone());
        tracing::debug!("bearer credential refreshed");
        Ok(body.token)
    }
}
