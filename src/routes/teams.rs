// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Team CRUD routes plus the member listing.

use crate::error::{AppError, Result};
use crate::models::Team;
use crate::routes::users::UserResponse;
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
        .route("/api/teams", get(list_teams).post(create_team))
        .route(
            "/api/teams/{id}",
            get(get_team).put(update_team).delete(delete_team),
        )
        .route("/api/teams/{id}/members", get(get_team_members))
}

/// Team as returned by the API.
#[derive(Serialize)]
pub struct TeamResponse {
    pub team_id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            team_id: team.team_id,
            name: team.name,
            description: team.description,
            created_at: team.created_at,
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
pub struct TeamRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Optional blurb; empty when omitted
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
}

/// List teams with pagination.
async fn list_teams(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<TeamResponse>>> {
    let teams = state
        .db
        .list_teams(params.limit.min(MAX_LIMIT), params.offset)
        .await?;

    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

/// Create a team.
async fn create_team(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>)> {
    payload.validate()?;

    let team = Team {
        team_id: uuid::Uuid::new_v4().to_string(),
        name: payload.name,
        description: payload.description,
        created_at: now_rfc3339(),
    };

    state.db.upsert_team(&team).await?;

    tracing::info!(team_id = %team.team_id, "Created team");

    Ok((StatusCode::CREATED, Json(team.into())))
}

/// Get one team.
async fn get_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TeamResponse>> {
    let team = state
        .db
        .get_team(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))?;

    Ok(Json(team.into()))
}

/// Update a team's name and description.
async fn update_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<TeamRequest>,
) -> Result<Json<TeamResponse>> {
    payload.validate()?;

    let mut team = state
        .db
        .get_team(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))?;

    team.name = payload.name;
    team.description = payload.description;

    state.db.upsert_team(&team).await?;

    Ok(Json(team.into()))
}

/// Delete a team.
///
/// Members keep their `team_id` reference until reassigned; leaderboard
/// entries keep showing it until the next recompute.
async fn delete_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.db.get_team(&id).await?.is_none() {
        return Err(AppError::NotFound(format!("Team {} not found", id)));
    }

    state.db.delete_team(&id).await?;

    tracing::info!(team_id = %id, "Deleted team");

    Ok(StatusCode::NO_CONTENT)
}

/// Get all users belonging to a team.
async fn get_team_members(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<UserResponse>>> {
    if state.db.get_team(&id).await?.is_none() {
        return Err(AppError::NotFound(format!("Team {} not found", id)));
    }

    let members = state.db.get_users_for_team(&id).await?;

    Ok(Json(members.into_iter().map(UserResponse::from).collect()))
}
