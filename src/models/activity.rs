// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise activity model for storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded exercise event.
///
/// Activities form an append-only log owned by whoever records them; the
/// leaderboard is derived from this log and never writes back to it. The
/// `user_id` reference is not validated at write time; an activity may
/// briefly point at a user that no longer exists, and the ranker decides
/// what to do with such orphans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Opaque activity ID (also used as document ID)
    pub activity_id: String,
    /// Owning user ID
    pub user_id: String,
    /// Activity category (open set: "Running", "Cycling", "Swimming", ...)
    pub activity_type: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Calories burned during the activity
    pub calories_burned: u32,
    /// When the activity took place
    pub date: DateTime<Utc>,
    /// When this record was written (RFC3339, server-assigned)
    pub recorded_at: String,
}
