// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout catalog routes.

use crate::error::{AppError, Result};
use crate::models::Workout;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

const MAX_LIMIT: u32 = 200;

fn default_limit() -> u32 {
    50
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workouts", get(list_workouts).post(create_workout))
        .route(
            "/api/workouts/{id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}

/// Workout as returned by the API.
#[derive(Serialize)]
pub struct WorkoutResponse {
    pub workout_id: String,
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub duration_minutes: u32,
    pub category: String,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            workout_id: workout.workout_id,
            name: workout.name,
            description: workout.description,
            difficulty: workout.difficulty,
            duration_minutes: workout.duration_minutes,
            category: workout.category,
        }
    }
}

#[derive(Deserialize)]
struct WorkoutsQuery {
    /// Filter by difficulty tier (exact match)
    difficulty: Option<String>,
    /// Filter by category (exact match)
    category: Option<String>,
    #[serde(default = "default_limit")]
    limit: u32,
    #[serde(default)]
    offset: u32,
}

#[derive(Deserialize, Validate)]
pub struct WorkoutRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(length(min = 1, max = 20))]
    pub difficulty: String,
    #[validate(range(min = 1))]
    pub duration_minutes: u32,
    #[validate(length(min = 1, max = 50))]
    pub category: String,
}

/// List the workout catalog, optionally filtered.
async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WorkoutsQuery>,
) -> Result<Json<Vec<WorkoutResponse>>> {
    let workouts = state
        .db
        .list_workouts(
            params.difficulty.as_deref(),
            params.category.as_deref(),
            params.limit.min(MAX_LIMIT),
            params.offset,
        )
        .await?;

    Ok(Json(
        workouts.into_iter().map(WorkoutResponse::from).collect(),
    ))
}

/// Add a workout to the catalog.
async fn create_workout(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<WorkoutRequest>,
) -> Result<(StatusCode, Json<WorkoutResponse>)> {
    payload.validate()?;

    let workout = Workout {
        workout_id: uuid::Uuid::new_v4().to_string(),
        name: payload.name,
        description: payload.description,
        difficulty: payload.difficulty,
        duration_minutes: payload.duration_minutes,
        category: payload.category,
    };

    state.db.upsert_workout(&workout).await?;

    tracing::info!(workout_id = %workout.workout_id, "Created workout");

    Ok((StatusCode::CREATED, Json(workout.into())))
}

/// Get one workout.
async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WorkoutResponse>> {
    let workout = state
        .db
        .get_workout(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Workout {} not found", id)))?;

    Ok(Json(workout.into()))
}

/// Replace a workout's catalog entry.
async fn update_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<WorkoutRequest>,
) -> Result<Json<WorkoutResponse>> {
    payload.validate()?;

    let mut workout = state
        .db
        .get_workout(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Workout {} not found", id)))?;

    workout.name = payload.name;
    workout.description = payload.description;
    workout.difficulty = payload.difficulty;
    workout.duration_minutes = payload.duration_minutes;
    workout.category = payload.category;

    state.db.upsert_workout(&workout).await?;

    Ok(Json(workout.into()))
}

/// Delete a workout.
async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.db.get_workout(&id).await?.is_none() {
        return Err(AppError::NotFound(format!("Workout {} not found", id)));
    }

    state.db.delete_workout(&id).await?;

    tracing::info!(workout_id = %id, "Deleted workout");

    Ok(StatusCode::NO_CONTENT)
}
