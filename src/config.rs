//! Application configuration loaded from environment variables.
//!
//! Everything has a development-friendly default so the server can start
//! against the Firestore emulator with no configuration at all.

use std::env;

use crate::services::ranking::{OrphanPolicy, RankingConfig};

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// GCP project ID (any string works against the emulator)
    pub gcp_project_id: String,
    /// Frontend URL, used for CORS
    pub frontend_url: String,
    /// Whether users with zero activities get a zero-total leaderboard entry
    pub include_inactive_users: bool,
    /// How the ranker treats activities whose user no longer exists
    pub orphan_policy: OrphanPolicy,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            gcp_project_id: "test-project".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            include_inactive_users: false,
            orphan_policy: OrphanPolicy::Skip,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let orphan_policy = match env::var("LEADERBOARD_ORPHAN_POLICY") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: "LEADERBOARD_ORPHAN_POLICY",
                value: raw.clone(),
            })?,
            Err(_) => OrphanPolicy::Skip,
        };

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            include_inactive_users: env::var("LEADERBOARD_INCLUDE_INACTIVE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            orphan_policy,
        })
    }

    /// The ranking policy bundle handed to the leaderboard service.
    pub fn ranking_config(&self) -> RankingConfig {
        RankingConfig {
            include_inactive_users: self.include_inactive_users,
            orphan_policy: self.orphan_policy,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}
