// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with a consistent taxonomy for remote calls,
//! local caching, and user input.

use serde::Deserialize;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Backend error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True when the error is an auth failure that a credential refresh
    /// might recover from.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AppError::Unauthorized)
            || matches!(
                self,
                AppError::Api {
                    status: 401 | 403,
                    ..
                }
            )
    }
}

/// Wire shape of backend error bodies: `{"error": "<message>"}`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
