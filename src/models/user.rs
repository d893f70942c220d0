//! User model for storage.

use serde::{Deserialize, Serialize};

/// User profile stored in Firestore.
///
/// The credential is stored as a bcrypt digest and must never appear in an
/// API response; route handlers build their own response types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Opaque user ID (also used as document ID)
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Email address (unique across users)
    pub email: String,
    /// bcrypt digest of the user's credential
    pub password_hash: String,
    /// Team the user belongs to (None if unaffiliated)
    pub team_id: Option<String>,
    /// When the user was created (RFC3339)
    pub created_at: String,
}
