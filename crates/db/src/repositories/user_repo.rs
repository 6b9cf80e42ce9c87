//! Repository for the `users` table.

use inventory_core::roles::{Role, ROLE_ADMIN};
use inventory_core::types::DbId;

use crate::models::user::User;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, full_name, role, secret";

/// Guard appended to writes that could remove the last admin: the row may
/// only change if it is not an admin or another admin remains.
const KEEPS_AN_ADMIN: &str = "(role <> 'admin' \
     OR (SELECT COUNT(*) FROM users WHERE role = 'admin') > 1)";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(
        pool: &DbPool,
        username: &str,
        full_name: &str,
        role: Role,
        secret: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, full_name, role, secret)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .bind(full_name)
            .bind(role.as_str())
            .bind(secret)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = ?1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &DbPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = ?1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by ID.
    pub async fn list(pool: &DbPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Number of users holding the admin role.
    pub async fn count_admins(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = ?1")
            .bind(ROLE_ADMIN)
            .fetch_one(pool)
            .await
    }

    /// Overwrite username, full name and role; replace the secret only when
    /// `secret` is non-empty.
    ///
    /// Returns `None` if no row with `id` exists, or if the change would
    /// demote the last remaining admin.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        username: &str,
        full_name: &str,
        role: Role,
        secret: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                username = ?2,
                full_name = ?3,
                role = ?4,
                secret = COALESCE(NULLIF(?5, ''), secret)
             WHERE id = ?1 AND (?4 = 'admin' OR {KEEPS_AN_ADMIN})
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(username)
            .bind(full_name)
            .bind(role.as_str())
            .bind(secret)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a user unless it is the last admin.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM users WHERE id = ?1 AND {KEEPS_AN_ADMIN}");
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
