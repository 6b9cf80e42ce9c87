//! Shared fixtures for catalog integration tests.

#![allow(dead_code)]

use inventory_core::access::Session;
use inventory_core::roles::Role;
use inventory_core::status::ItemStatus;
use inventory_core::types::{DbId, ItemUid};
use inventory_db::catalog::Catalog;
use inventory_db::models::category::{Category, CreateCategory};
use inventory_db::models::item::{CreateItem, Item};
use sqlx::SqlitePool;

pub fn admin_session() -> Session {
    Session {
        user_id: 1,
        username: "root".to_string(),
        full_name: "Root Admin".to_string(),
        role: Role::Admin,
    }
}

pub fn moderator_session() -> Session {
    Session {
        user_id: 2,
        username: "mod".to_string(),
        full_name: "Floor Moderator".to_string(),
        role: Role::Moderator,
    }
}

pub fn catalog(pool: SqlitePool) -> Catalog {
    Catalog::new(pool)
}

pub async fn add_category(catalog: &Catalog, name: &str) -> Category {
    catalog
        .add_category(
            &admin_session(),
            &CreateCategory {
                name: name.to_string(),
                description: None,
            },
        )
        .await
        .expect("category creation should succeed")
}

pub fn new_item(category_id: DbId, name: &str, date: &str, status: ItemStatus) -> CreateItem {
    CreateItem {
        uid: None,
        category_id,
        name: name.to_string(),
        description: None,
        date: date.to_string(),
        status,
    }
}

pub async fn add_item(catalog: &Catalog, input: &CreateItem) -> Item {
    catalog
        .add_item(&moderator_session(), input)
        .await
        .expect("item creation should succeed")
}

/// Add an active item as the moderator.
pub async fn add_active(catalog: &Catalog, category_id: DbId, name: &str, date: &str) -> Item {
    add_item(catalog, &new_item(category_id, name, date, ItemStatus::Active)).await
}

pub fn uids(items: &[Item]) -> Vec<ItemUid> {
    items.iter().map(|i| i.uid).collect()
}
