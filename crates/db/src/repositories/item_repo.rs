//! Repository for the `items` table.
//!
//! Reads hide soft-deleted rows unless the method name says otherwise.
//! [`ItemRepo::hard_delete`] ignores the flag entirely.

use inventory_core::filter::ItemFilter;
use inventory_core::types::{DbId, ItemUid};
use inventory_core::uid::FIRST_UID;

use crate::models::item::{Item, ItemFields};
use crate::DbPool;

/// Column list for items queries.
const COLUMNS: &str = "uid, category_id, name, description, date, status, deleted";

/// Provides CRUD, soft-delete and filter operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert an item, returning the created row.
    ///
    /// With `uid = None` the UID is allocated inside the same statement as
    /// `MAX(uid) + 1`, or [`FIRST_UID`] when the table is empty, so two
    /// concurrent inserts cannot pick the same value.
    pub async fn create(
        pool: &DbPool,
        uid: Option<ItemUid>,
        fields: &ItemFields,
    ) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (uid, category_id, name, description, date, status)
             VALUES (
                COALESCE(?1, (SELECT MAX(uid) + 1 FROM items WHERE uid > 0), ?7),
                ?2, ?3, ?4, ?5, ?6
             )
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(uid)
            .bind(fields.category_id)
            .bind(&fields.name)
            .bind(&fields.description)
            .bind(&fields.date)
            .bind(fields.status.as_str())
            .bind(FIRST_UID)
            .fetch_one(pool)
            .await
    }

    /// Find a live (not soft-deleted) item by UID.
    pub async fn find_by_uid(pool: &DbPool, uid: ItemUid) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE uid = ?1 AND deleted = 0");
        sqlx::query_as::<_, Item>(&query)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    /// Find an item by UID whether or not it is soft-deleted.
    pub async fn find_by_uid_including_deleted(
        pool: &DbPool,
        uid: ItemUid,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE uid = ?1");
        sqlx::query_as::<_, Item>(&query)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    /// Highest UID in use, soft-deleted rows included.
    pub async fn max_uid(pool: &DbPool) -> Result<Option<ItemUid>, sqlx::Error> {
        sqlx::query_scalar("SELECT MAX(uid) FROM items")
            .fetch_one(pool)
            .await
    }

    /// Overwrite every mutable field of a live item.
    ///
    /// Returns `None` if no live item with `uid` exists.
    pub async fn update(
        pool: &DbPool,
        uid: ItemUid,
        fields: &ItemFields,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                category_id = ?2,
                name = ?3,
                description = ?4,
                date = ?5,
                status = ?6
             WHERE uid = ?1 AND deleted = 0
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(uid)
            .bind(fields.category_id)
            .bind(&fields.name)
            .bind(&fields.description)
            .bind(&fields.date)
            .bind(fields.status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Set a live item's status, leaving every other field untouched.
    ///
    /// Returns `None` if no live item with `uid` exists.
    pub async fn set_status(
        pool: &DbPool,
        uid: ItemUid,
        status: &str,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET status = ?2
             WHERE uid = ?1 AND deleted = 0
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(uid)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Permanently remove an item, soft-deleted or not.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn hard_delete(pool: &DbPool, uid: ItemUid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE uid = ?1")
            .bind(uid)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Move a live item to the trash. Returns `true` if the flag changed.
    pub async fn soft_delete(pool: &DbPool, uid: ItemUid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE items SET deleted = 1 WHERE uid = ?1 AND deleted = 0")
            .bind(uid)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Bring a trashed item back. Returns `true` if the flag changed.
    pub async fn restore(pool: &DbPool, uid: ItemUid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE items SET deleted = 0 WHERE uid = ?1 AND deleted = 1")
            .bind(uid)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List soft-deleted items ordered by UID.
    pub async fn list_trashed(pool: &DbPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE deleted = 1 ORDER BY uid");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Count live items in a category.
    pub async fn count_in_category(pool: &DbPool, category_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE category_id = ?1 AND deleted = 0")
            .bind(category_id)
            .fetch_one(pool)
            .await
    }

    /// Distinct four-character year prefixes of live items, ascending.
    pub async fn list_distinct_years(pool: &DbPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT DISTINCT substr(date, 1, 4) AS year
             FROM items
             WHERE deleted = 0
             ORDER BY year",
        )
        .fetch_all(pool)
        .await
    }

    /// Live items matching every active criterion, ordered by UID.
    ///
    /// Column criteria run in SQL. SQLite's `lower()` only folds ASCII, so
    /// the free-text fragment is matched on the fetched rows instead.
    pub async fn filter(pool: &DbPool, filter: &ItemFilter) -> Result<Vec<Item>, sqlx::Error> {
        let (where_clause, bind_values) = build_item_filter(filter);
        let query = format!("SELECT {COLUMNS} FROM items {where_clause} ORDER BY uid ASC");

        let mut q = sqlx::query_as::<_, Item>(&query);
        for value in bind_values {
            q = match value {
                BindValue::Int(v) => q.bind(v),
                BindValue::Text(v) => q.bind(v),
            };
        }
        let mut items = q.fetch_all(pool).await?;
        items.retain(|item| filter.matches_text(&item.name, &item.description));
        Ok(items)
    }
}

// ---------------------------------------------------------------------------
// Filter builder
// ---------------------------------------------------------------------------

/// A typed value bound to a numbered placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BindValue {
    Int(i64),
    Text(String),
}

/// Build the `WHERE` clause for [`ItemRepo::filter`].
///
/// Returns `(where_clause, bind_values)`; placeholder `?N` refers to
/// `bind_values[N - 1]`. Soft-deleted rows are always excluded and every
/// active column criterion is joined with `AND`. The text fragment is not
/// part of the clause.
fn build_item_filter(filter: &ItemFilter) -> (String, Vec<BindValue>) {
    let mut conditions = vec!["deleted = 0".to_string()];
    let mut bind_values = Vec::new();

    if let Some(category_id) = filter.category_id {
        bind_values.push(BindValue::Int(category_id));
        conditions.push(format!("category_id = ?{}", bind_values.len()));
    }

    if let Some(ref year) = filter.year {
        bind_values.push(BindValue::Text(year.clone()));
        conditions.push(format!("substr(date, 1, 4) = ?{}", bind_values.len()));
    }

    if let Some(status) = filter.status {
        bind_values.push(BindValue::Text(status.as_str().to_string()));
        conditions.push(format!("status = ?{}", bind_values.len()));
    }

    (format!("WHERE {}", conditions.join(" AND ")), bind_values)
}
