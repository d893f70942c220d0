// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard ranking.
//!
//! Pure aggregation over a snapshot of users and activities:
//! 1. Group activities by owning user
//! 2. Sum calories burned and count activities per user
//! 3. Sort by total calories descending, user ID ascending on ties
//! 4. Assign 1-based ranks in sorted order
//!
//! No storage access happens here. The leaderboard service reads the
//! snapshot, calls [`LeaderboardRanker::recompute`], and commits the
//! result, so the ranking rules stay testable without Firestore.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use crate::models::{Activity, LeaderboardEntry, User};

/// What to do with an activity whose `user_id` matches no known user.
///
/// Orphans show up during eventual-consistency windows (a user deleted
/// while their activities are still in flight), so skipping is the
/// default. Rejecting turns the same condition into a hard error for
/// deployments that want to surface broken references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanPolicy {
    /// Drop the orphaned activity's contribution and keep going.
    #[default]
    Skip,
    /// Fail the whole run on the first orphaned activity.
    Reject,
}

/// Error from parsing an [`OrphanPolicy`] configuration string.
#[derive(Debug, thiserror::Error)]
#[error("unknown orphan policy: {0}")]
pub struct ParseOrphanPolicyError(String);

impl FromStr for OrphanPolicy {
    type Err = ParseOrphanPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(OrphanPolicy::Skip),
            "reject" => Ok(OrphanPolicy::Reject),
            other => Err(ParseOrphanPolicyError(other.to_string())),
        }
    }
}

/// Policy knobs for a ranking run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingConfig {
    /// Include users with zero activities as zero-calorie entries.
    /// Off by default: only users with at least one activity are ranked.
    pub include_inactive_users: bool,
    /// How to treat activities referencing unknown users
    pub orphan_policy: OrphanPolicy,
}

/// Ranking failures
#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("activity {activity_id} references unknown user {user_id}")]
    InvalidActivityReference {
        activity_id: String,
        user_id: String,
    },
}

/// Per-user running totals while grouping activities.
#[derive(Debug, Default)]
struct UserTotals {
    total_calories: u64,
    total_activities: u32,
}

/// Computes full leaderboard snapshots.
pub struct LeaderboardRanker {
    config: RankingConfig,
}

impl LeaderboardRanker {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Recompute the full leaderboard from a users + activities snapshot.
    ///
    /// Pure with respect to its inputs: no storage access, no mutation.
    /// Returns entries already in final order, ranks 1..N with no gaps.
    /// Equal totals get distinct contiguous ranks, ordered by ascending
    /// user ID, so identical inputs always produce identical output.
    pub fn recompute(
        &self,
        users: &[User],
        activities: &[Activity],
        computed_at: &str,
    ) -> Result<Vec<LeaderboardEntry>, RankingError> {
        // 1. Group activities by owning user
        let known_ids: HashSet<&str> = users.iter().map(|u| u.user_id.as_str()).collect();

        let mut totals: HashMap<&str, UserTotals> = HashMap::new();
        for activity in activities {
            if !known_ids.contains(activity.user_id.as_str()) {
                match self.config.orphan_policy {
                    OrphanPolicy::Skip => {
                        tracing::debug!(
                            activity_id = %activity.activity_id,
                            user_id = %activity.user_id,
                            "Skipping activity for unknown user"
                        );
                        continue;
                    }
                    OrphanPolicy::Reject => {
                        return Err(RankingError::InvalidActivityReference {
                            activity_id: activity.activity_id.clone(),
                            user_id: activity.user_id.clone(),
                        });
                    }
                }
            }

            let entry = totals.entry(activity.user_id.as_str()).or_default();
            entry.total_calories += u64::from(activity.calories_burned);
            entry.total_activities += 1;
        }

        // 2. One entry per included user
        let mut entries: Vec<LeaderboardEntry> = users
            .iter()
            .filter_map(|user| {
                let sums = totals.get(user.user_id.as_str());
                if sums.is_none() && !self.config.include_inactive_users {
                    return None;
                }
                let (total_calories, total_activities) = sums
                    .map(|s| (s.total_calories, s.total_activities))
                    .unwrap_or((0, 0));
                Some(LeaderboardEntry {
                    user_id: user.user_id.clone(),
                    team_id: user.team_id.clone(),
                    total_calories,
                    total_activities,
                    rank: 0, // assigned below, after sorting
                    computed_at: computed_at.to_string(),
                })
            })
            .collect();

        // 3. Total calories descending, user ID ascending on ties
        entries.sort_by(|a, b| {
            b.total_calories
                .cmp(&a.total_calories)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        // 4. Ranks are positions in the sorted order, never shared
        for (idx, entry) in entries.iter_mut().enumerate() {
            entry.rank = idx as u32 + 1;
        }

        Ok(entries)
    }
}
