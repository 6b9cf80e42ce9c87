//! Category entity model and DTOs.

use inventory_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

/// DTO for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for editing a category. Both fields are overwritten.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: String,
    pub description: Option<String>,
}
