// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod leaderboard;
pub mod ranking;

pub use leaderboard::{LeaderboardService, RefreshSummary};
pub use ranking::{LeaderboardRanker, OrphanPolicy, RankingConfig, RankingError};
