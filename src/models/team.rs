// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Team model for storage.

use serde::{Deserialize, Serialize};

/// A team users can affiliate with.
///
/// Membership lives on the user (`User::team_id`); the team document itself
/// carries no member list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Opaque team ID (also used as document ID)
    pub team_id: String,
    /// Team name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// When the team was created (RFC3339)
    pub created_at: String,
}
