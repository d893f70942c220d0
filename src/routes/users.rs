// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User CRUD routes plus the per-user activity listing.

use crate::error::{AppError, Result};
use crate::models::User;
use crate::routes::activities::ActivityResponse;
use crate::time_utils::now_rfc3339;
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
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/users/{id}/activities", get(get_user_activities))
}

/// User as returned by the API. The password hash never leaves storage.
#[derive(Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub team_id: Option<String>,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            team_id: user.team_id,
            created_at: user.created_at,
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

#[derive(Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 200))]
    pub password: String,
    #[validate(length(min = 1, max = 50))]
    pub team_id: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// When present, replaces the stored credential
    #[validate(length(min = 8, max = 200))]
    pub password: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub team_id: Option<String>,
}

/// List users with pagination.
async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<UserResponse>>> {
    let users = state
        .db
        .list_users(params.limit.min(MAX_LIMIT), params.offset)
        .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Register a new user.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    payload.validate()?;

    // Uniqueness is check-then-write; a racing duplicate signup is not
    // prevented, only the common case.
    if state.db.find_user_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "Email {} is already registered",
            payload.email
        )));
    }

    let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?;

    let user = User {
        user_id: uuid::Uuid::new_v4().to_string(),
        name: payload.name,
        email: payload.email,
        password_hash,
        team_id: payload.team_id,
        created_at: now_rfc3339(),
    };

    state.db.upsert_user(&user).await?;

    tracing::info!(user_id = %user.user_id, "Created user");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Get one user.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>> {
    let user = state
        .db
        .get_user(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    Ok(Json(user.into()))
}

/// Update a user's profile. `user_id` and `created_at` are immutable.
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>> {
    payload.validate()?;

    let mut user = state
        .db
        .get_user(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    if payload.email != user.email {
        if let Some(other) = state.db.find_user_by_email(&payload.email).await? {
            if other.user_id != user.user_id {
                return Err(AppError::Conflict(format!(
                    "Email {} is already registered",
                    payload.email
                )));
            }
        }
    }

    user.name = payload.name;
    user.email = payload.email;
    user.team_id = payload.team_id;
    if let Some(password) = &payload.password {
        user.password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?;
    }

    state.db.upsert_user(&user).await?;

    Ok(Json(user.into()))
}

/// Delete a user profile.
///
/// Their activities stay in the log as orphaned references; the ranking
/// orphan policy decides whether those still count.
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.db.get_user(&id).await?.is_none() {
        return Err(AppError::NotFound(format!("User {} not found", id)));
    }

    state.db.delete_user(&id).await?;

    tracing::info!(user_id = %id, "Deleted user");

    Ok(StatusCode::NO_CONTENT)
}

/// Get one user's activities, newest first.
async fn get_user_activities(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<ActivityResponse>>> {
    if state.db.get_user(&id).await?.is_none() {
        return Err(AppError::NotFound(format!("User {} not found", id)));
    }

    let activities = state
        .db
        .list_activities(Some(&id), params.limit.min(MAX_LIMIT), params.offset)
        .await?;

    Ok(Json(
        activities.into_iter().map(ActivityResponse::from).collect(),
    ))
}
