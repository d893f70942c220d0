// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard routes.
//!
//! Read-only views over the stored standings plus the explicit recompute
//! trigger. Nothing here writes entries directly; the ranking service
//! owns the collection.

use crate::error::Result;
use crate::models::LeaderboardEntry;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MAX_LIMIT: u32 = 200;
const MAX_TOP_COUNT: u32 = 100;

fn default_limit() -> u32 {
    50
}

fn default_top_count() -> u32 {
    10
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/leaderboard", get(list_leaderboard))
        .route("/api/leaderboard/top", get(top_performers))
        .route("/api/leaderboard/recompute", post(recompute))
}

/// Leaderboard standing as returned by the API.
#[derive(Serialize)]
pub struct LeaderboardEntryResponse {
    pub user_id: String,
    pub team_id: Option<String>,
    pub total_calories: u64,
    pub total_activities: u32,
    pub rank: u32,
    pub computed_at: String,
}

impl From<LeaderboardEntry> for LeaderboardEntryResponse {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            user_id: entry.user_id,
            team_id: entry.team_id,
            total_calories: entry.total_calories,
            total_activities: entry.total_activities,
            rank: entry.rank,
            computed_at: entry.computed_at,
        }
    }
}

#[derive(Deserialize)]
struct ListQuery {
    #[serde(default = "default_limit")]
    limit: u32,
    #[serde(default)]
    offset: u32,
}

#[derive(Deserialize)]
struct TopQuery {
    #[serde(default = "default_top_count")]
    count: u32,
}

/// Summary of a completed recompute run.
#[derive(Serialize)]
pub struct RefreshResponse {
    pub users_ranked: usize,
    pub activities_scanned: usize,
    pub entries_removed: usize,
    pub computed_at: String,
}

/// Full standings in rank order.
async fn list_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<LeaderboardEntryResponse>>> {
    let entries = state
        .db
        .list_leaderboard(params.limit.min(MAX_LIMIT), params.offset)
        .await?;

    Ok(Json(
        entries
            .into_iter()
            .map(LeaderboardEntryResponse::from)
            .collect(),
    ))
}

/// The N best-ranked users (default 10).
async fn top_performers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopQuery>,
) -> Result<Json<Vec<LeaderboardEntryResponse>>> {
    let entries = state
        .db
        .list_leaderboard(params.count.min(MAX_TOP_COUNT), 0)
        .await?;

    Ok(Json(
        entries
            .into_iter()
            .map(LeaderboardEntryResponse::from)
            .collect(),
    ))
}

/// Recompute the whole leaderboard from current users and activities.
///
/// Concurrent calls are serialized; each caller gets the summary of its
/// own completed run.
async fn recompute(State(state): State<Arc<AppState>>) -> Result<Json<RefreshResponse>> {
    let summary = state.leaderboard.refresh().await?;

    Ok(Json(RefreshResponse {
        users_ranked: summary.users_ranked,
        activities_scanned: summary.activities_scanned,
        entries_removed: summary.entries_removed,
        computed_at: summary.computed_at,
    }))
}
