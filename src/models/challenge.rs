//! Goal challenges, served per kind.

use serde::{Deserialize, Serialize};

/// A challenge the user can complete (e.g. "work out 5 days in a row").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: u64,
    /// Challenge description text
    pub challenge: String,
    /// Whether the challenge has been achieved
    pub state: bool,
}

/// The two challenge families the backend serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeKind {
    Workouts,
    Physical,
}

impl ChallengeKind {
    /// Path segment used by `GET /api/challenges/{kind}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeKind::Workouts => "workouts",
            ChallengeKind::Physical => "physical",
        }
    }
}
