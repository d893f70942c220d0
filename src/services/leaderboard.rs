// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard refresh orchestration.
//!
//! Owns the refresh workflow:
//! 1. Snapshot users and activities from Firestore
//! 2. Run the ranker over the snapshot
//! 3. Commit the result, replacing the stored board
//!
//! Refreshes are serialized through a lock so two concurrent requests
//! cannot interleave their replace phases.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::db::FirestoreDb;
use crate::error::Result;
use crate::services::ranking::{LeaderboardRanker, RankingConfig};
use crate::time_utils;

/// Outcome of one refresh run.
#[derive(Debug, Clone)]
pub struct RefreshSummary {
    /// Users that received a leaderboard entry
    pub users_ranked: usize,
    /// Activities read in the snapshot
    pub activities_scanned: usize,
    /// Stale entries deleted from the stored board
    pub entries_removed: usize,
    /// Timestamp stamped on every entry in this run (ISO 8601)
    pub computed_at: String,
}

/// Recomputes and commits the leaderboard.
#[derive(Clone)]
pub struct LeaderboardService {
    db: FirestoreDb,
    ranker: Arc<LeaderboardRanker>,
    refresh_lock: Arc<Mutex<()>>,
}

impl LeaderboardService {
    pub fn new(db: FirestoreDb, config: RankingConfig) -> Self {
        Self {
            db,
            ranker: Arc::new(LeaderboardRanker::new(config)),
            refresh_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Recompute the leaderboard from current data and commit it.
    ///
    /// A refresh arriving while another is running waits its turn and
    /// then runs against fresh data, so the last committed board always
    /// reflects a complete ranking run, never an interleaving of two.
    ///
    /// The snapshot reads are point-in-time: an activity written while
    /// the refresh is running may or may not be counted, and is picked
    /// up by the next run either way.
    pub async fn refresh(&self) -> Result<RefreshSummary> {
        let _guard = self.refresh_lock.lock().await;

        let (users, activities) =
            tokio::try_join!(self.db.all_users(), self.db.all_activities())?;

        let computed_at = time_utils::now_rfc3339();
        let entries = self.ranker.recompute(&users, &activities, &computed_at)?;
        let entries_removed = self.db.replace_leaderboard(&entries).await?;

        tracing::info!(
            users_ranked = entries.len(),
            activities_scanned = activities.len(),
            entries_removed,
            "Leaderboard refreshed"
        );

        Ok(RefreshSummary {
            users_ranked: entries.len(),
            activities_scanned: activities.len(),
            entries_removed,
            computed_at,
        })
    }
}
