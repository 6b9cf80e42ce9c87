//! Repository for the `categories` table.

use inventory_core::types::DbId;

use crate::models::category::Category;
use crate::DbPool;

/// Column list for categories queries.
const COLUMNS: &str = "id, name, description";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by name ascending.
    pub async fn list(pool: &DbPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = ?1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new category, returning the created row.
    pub async fn create(
        pool: &DbPool,
        name: &str,
        description: &str,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, description)
             VALUES (?1, ?2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// Overwrite a category's name and description.
    ///
    /// Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        name: &str,
        description: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET name = ?2, description = ?3
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(name)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Its items go with it (`ON DELETE CASCADE`).
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
