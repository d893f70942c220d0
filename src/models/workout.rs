//! Workout catalog model for storage.

use serde::{Deserialize, Serialize};

/// A suggested workout in the catalog.
///
/// Independent of users, teams, and activities: this is reference content,
/// not derived data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Opaque workout ID (also used as document ID)
    pub workout_id: String,
    /// Workout name
    pub name: String,
    /// What the workout involves
    pub description: String,
    /// Difficulty tier (open set: "Beginner", "Intermediate", "Advanced")
    pub difficulty: String,
    /// Expected duration in minutes
    pub duration_minutes: u32,
    /// Category (open set, same vocabulary as activity types)
    pub category: String,
}
