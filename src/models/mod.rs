// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for entities served by the TrainMate backend.

pub mod catalog;
pub mod challenge;
pub mod progress;
pub mod user;
pub mod workout;

pub use catalog::{Category, CategoryWithExercises, Coach, Exercise};
pub use challenge::{Challenge, ChallengeKind};
pub use progress::{NewPhysicalEntry, PhysicalEntry, WaterIntakeEntry};
pub use user::{UserProfile, UserProfileUpdate};
pub use workout::{NewWorkout, Training, Workout};
