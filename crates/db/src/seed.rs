//! Idempotent bootstrap data.
//!
//! Runs on every startup. Each step only fires when its table is empty (or,
//! for users, when no admin exists), and demo items are inserted with
//! `INSERT OR IGNORE` so an existing UID is never overwritten.

use inventory_core::roles::ROLE_ADMIN;
use inventory_core::status::ItemStatus;
use inventory_core::types::ItemUid;

use crate::DbPool;

/// Username of the seeded administrator.
pub const SEED_ADMIN_USERNAME: &str = "admin";
/// Secret of the seeded administrator. Change it after first login.
pub const SEED_ADMIN_SECRET: &str = "admin";
const SEED_ADMIN_FULL_NAME: &str = "Head Administrator";

const SEED_CATEGORIES: &[(&str, &str)] = &[
    ("Computers", "Desktops and laptops"),
    ("Printers", "Laser and inkjet"),
    ("Furniture", "Desks, chairs"),
];

struct SeedItem {
    uid: ItemUid,
    category: &'static str,
    name: &'static str,
    description: &'static str,
    date: &'static str,
    status: ItemStatus,
}

const SEED_ITEMS: &[SeedItem] = &[
    SeedItem {
        uid: 1001,
        category: "Computers",
        name: "Dell OptiPlex 7090",
        description: "i5, 16GB, 512GB SSD",
        date: "2024-02-11",
        status: ItemStatus::Active,
    },
    SeedItem {
        uid: 1002,
        category: "Computers",
        name: "Lenovo ThinkPad T14",
        description: "Ryzen 7, 16GB",
        date: "2025-01-21",
        status: ItemStatus::Active,
    },
    SeedItem {
        uid: 1003,
        category: "Printers",
        name: "HP LaserJet Pro M404dn",
        description: "Monochrome laser",
        date: "2023-10-05",
        status: ItemStatus::Active,
    },
    SeedItem {
        uid: 1004,
        category: "Furniture",
        name: "Ergonomic chair",
        description: "Black, mesh",
        date: "2022-05-30",
        status: ItemStatus::WrittenOff,
    },
];

/// What a bootstrap run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub admin_created: bool,
    pub categories_created: u64,
    pub items_created: u64,
}

/// Seed the admin account and demo catalog where missing.
pub async fn bootstrap(pool: &DbPool) -> Result<SeedSummary, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut summary = SeedSummary::default();

    let admins: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = ?1")
        .bind(ROLE_ADMIN)
        .fetch_one(&mut *tx)
        .await?;
    if admins == 0 {
        sqlx::query(
            "INSERT INTO users (username, full_name, role, secret) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(SEED_ADMIN_USERNAME)
        .bind(SEED_ADMIN_FULL_NAME)
        .bind(ROLE_ADMIN)
        .bind(SEED_ADMIN_SECRET)
        .execute(&mut *tx)
        .await?;
        summary.admin_created = true;
        tracing::warn!(
            username = SEED_ADMIN_USERNAME,
            "Seeded default admin account; change its secret"
        );
    }

    let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut *tx)
        .await?;
    if categories == 0 {
        for &(name, description) in SEED_CATEGORIES {
            sqlx::query("INSERT INTO categories (name, description) VALUES (?1, ?2)")
                .bind(name)
                .bind(description)
                .execute(&mut *tx)
                .await?;
            summary.categories_created += 1;
        }
    }

    let items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
        .fetch_one(&mut *tx)
        .await?;
    if items == 0 {
        for item in SEED_ITEMS {
            let category_id: Option<i64> =
                sqlx::query_scalar("SELECT id FROM categories WHERE name = ?1")
                    .bind(item.category)
                    .fetch_optional(&mut *tx)
                    .await?;
            let Some(category_id) = category_id else {
                tracing::debug!(
                    uid = item.uid,
                    category = item.category,
                    "Seed category missing, skipping item"
                );
                continue;
            };
            let result = sqlx::query(
                "INSERT OR IGNORE INTO items (uid, category_id, name, description, date, status)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )
            .bind(item.uid)
            .bind(category_id)
            .bind(item.name)
            .bind(item.description)
            .bind(item.date)
            .bind(item.status.as_str())
            .execute(&mut *tx)
            .await?;
            summary.items_created += result.rows_affected();
        }
    }

    tx.commit().await?;

    tracing::info!(
        admin_created = summary.admin_created,
        categories_created = summary.categories_created,
        items_created = summary.items_created,
        "Bootstrap seed complete"
    );
    Ok(summary)
}
