//! Leaderboard entry aggregates for efficient ranking queries.
//!
//! Entries are pre-computed by the ranking service and replaced wholesale
//! on each refresh, reducing leaderboard reads from O(activities) to O(users).

use serde::{Deserialize, Serialize};

/// One user's standing on the calorie leaderboard.
///
/// Stored at: `leaderboard/{user_id}`
///
/// Derived data only. Never written by request handlers directly; the
/// ranking service owns the whole collection and rewrites it atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// User this entry ranks (also the document ID)
    pub user_id: String,
    /// Team affiliation denormalized from the user at compute time
    #[serde(default)]
    pub team_id: Option<String>,
    /// Sum of calories across the user's activities
    pub total_calories: u64,
    /// Number of activities contributing to the total
    pub total_activities: u32,
    /// 1-based position in the sorted order, 1..N with no gaps.
    /// Equal totals get distinct contiguous ranks (user ID tie-break),
    /// never a shared rank.
    pub rank: u32,
    /// When this standing was computed (ISO 8601)
    pub computed_at: String,
}
