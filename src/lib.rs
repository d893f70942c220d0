// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! FitLeague: team fitness tracking with a calorie leaderboard
//!
//! This crate provides the backend API for users, teams, activities, and
//! the workout catalog, plus the ranking pipeline that turns the activity
//! log into leaderboard standings.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::LeaderboardService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub leaderboard: LeaderboardService,
}
