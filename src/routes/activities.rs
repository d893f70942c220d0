// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity log routes.
//!
//! Activities are the input side of the leaderboard: every entry here
//! feeds the next ranking run. Writes do not validate that the owning
//! user exists; the ranking orphan policy handles dangling references.

use crate::error::{AppError, Result};
use crate::models::Activity;
use crate::time_utils::{format_utc_rfc3339, now_rfc3339};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

const MAX_LIMIT: u32 = 200;

fn default_limit() -> u32 {
    50
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(list_activities).post(create_activity))
        .route(
            "/api/activities/{id}",
            get(get_activity).put(update_activity).delete(delete_activity),
        )
}

/// Activity as returned by the API.
#[derive(Serialize)]
pub struct ActivityResponse {
    pub activity_id: String,
    pub user_id: String,
    pub activity_type: String,
    pub duration_minutes: u32,
    pub calories_burned: u32,
    pub date: String,
    pub recorded_at: String,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            activity_id: activity.activity_id,
            user_id: activity.user_id,
            activity_type: activity.activity_type,
            duration_minutes: activity.duration_minutes,
            calories_burned: activity.calories_burned,
            date: format_utc_rfc3339(activity.date),
            recorded_at: activity.recorded_at,
        }
    }
}

#[derive(Deserialize)]
struct ActivitiesQuery {
    /// Filter by owning user
    user_id: Option<String>,
    #[serde(default = "default_limit")]
    limit: u32,
    #[serde(default)]
    offset: u32,
}

#[derive(Deserialize, Validate)]
pub struct ActivityRequest {
    #[validate(length(min = 1, max = 50))]
    pub user_id: String,
    #[validate(length(min = 1, max = 50))]
    pub activity_type: String,
    #[validate(range(min = 1))]
    pub duration_minutes: u32,
    pub calories_burned: u32,
    /// When the exercise happened (RFC 3339)
    pub date: DateTime<Utc>,
}

/// List activities, newest first, optionally scoped to one user.
async fn list_activities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ActivitiesQuery>,
) -> Result<Json<Vec<ActivityResponse>>> {
    let activities = state
        .db
        .list_activities(
            params.user_id.as_deref(),
            params.limit.min(MAX_LIMIT),
            params.offset,
        )
        .await?;

    Ok(Json(
        activities.into_iter().map(ActivityResponse::from).collect(),
    ))
}

/// Record a new activity.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ActivityRequest>,
) -> Result<(StatusCode, Json<ActivityResponse>)> {
    payload.validate()?;

    let activity = Activity {
        activity_id: uuid::Uuid::new_v4().to_string(),
        user_id: payload.user_id,
        activity_type: payload.activity_type,
        duration_minutes: payload.duration_minutes,
        calories_burned: payload.calories_burned,
        date: payload.date,
        recorded_at: now_rfc3339(),
    };

    state.db.upsert_activity(&activity).await?;

    tracing::info!(
        activity_id = %activity.activity_id,
        user_id = %activity.user_id,
        calories = activity.calories_burned,
        "Recorded activity"
    );

    Ok((StatusCode::CREATED, Json(activity.into())))
}

/// Get one activity.
async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ActivityResponse>> {
    let activity = state
        .db
        .get_activity(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;

    Ok(Json(activity.into()))
}

/// Correct an existing activity. Full replace of the writable fields;
/// `recorded_at` keeps the original ingestion timestamp.
async fn update_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<ActivityRequest>,
) -> Result<Json<ActivityResponse>> {
    payload.validate()?;

    let mut activity = state
        .db
        .get_activity(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;

    activity.user_id = payload.user_id;
    activity.activity_type = payload.activity_type;
    activity.duration_minutes = payload.duration_minutes;
    activity.calories_burned = payload.calories_burned;
    activity.date = payload.date;

    state.db.upsert_activity(&activity).await?;

    Ok(Json(activity.into()))
}

/// Delete an activity.
///
/// The stored leaderboard is not touched; the change lands on the next
/// recompute.
async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.db.get_activity(&id).await?.is_none() {
        return Err(AppError::NotFound(format!("Activity {} not found", id)));
    }

    state.db.delete_activity(&id).await?;

    tracing::info!(activity_id = %id, "Deleted activity");

    Ok(StatusCode::NO_CONTENT)
}
