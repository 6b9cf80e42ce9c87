//! User entity model and DTOs.

use inventory_core::roles::Role;
use inventory_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the login secret -- NEVER serialize this to responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub full_name: String,
    pub role: String,
    pub secret: String,
}

/// Safe user representation (no secret).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub full_name: String,
    pub role: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            role: user.role.clone(),
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub full_name: String,
    pub role: Role,
    /// Empty means "use the default secret".
    #[serde(default)]
    pub secret: String,
}

/// DTO for editing a user. Username, name and role are overwritten; the
/// secret only when a non-empty one is given.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub secret: Option<String>,
}
