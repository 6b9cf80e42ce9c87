//! Item entity model and DTOs.

use inventory_core::status::ItemStatus;
use inventory_core::types::{DbId, ItemUid};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `items` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Item {
    pub uid: ItemUid,
    pub category_id: DbId,
    pub name: String,
    pub description: String,
    /// Inventory date, `YYYY-MM-DD`.
    pub date: String,
    /// `active` or `written-off`.
    pub status: String,
    /// Soft-delete marker (item is in the trash).
    pub deleted: bool,
}

/// DTO for adding an item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    /// Explicit UID; allocated automatically when absent.
    pub uid: Option<ItemUid>,
    pub category_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub date: String,
    #[serde(default)]
    pub status: ItemStatus,
}

/// DTO for editing an item. Every field except the UID is overwritten.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItem {
    pub category_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub date: String,
    pub status: ItemStatus,
}

/// Validated item fields ready to be written.
#[derive(Debug, Clone)]
pub struct ItemFields {
    pub category_id: DbId,
    pub name: String,
    pub description: String,
    pub date: String,
    pub status: ItemStatus,
}
