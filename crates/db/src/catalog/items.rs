//! Item operations: add, edit, write-off, trash / restore, hard delete and
//! filtering.

use inventory_core::access::{self, Action, Session};
use inventory_core::error::CoreError;
use inventory_core::filter::ItemFilter;
use inventory_core::status::ItemStatus;
use inventory_core::types::{DbId, ItemUid};
use inventory_core::uid::{next_uid, validate_uid};
use inventory_core::validation::{normalize_date, optional_text, require_text};

use super::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::models::item::{CreateItem, Item, ItemFields, UpdateItem};
use crate::repositories::{CategoryRepo, ItemRepo};

impl Catalog {
    /// Live items matching `filter`, ordered by ascending UID.
    pub async fn filter_items(
        &self,
        session: &Session,
        filter: &ItemFilter,
    ) -> CatalogResult<Vec<Item>> {
        access::require(session, Action::ViewCatalog)?;
        Ok(ItemRepo::filter(&self.pool, filter).await?)
    }

    pub async fn get_item(&self, session: &Session, uid: ItemUid) -> CatalogResult<Item> {
        access::require(session, Action::ViewCatalog)?;
        ItemRepo::find_by_uid(&self.pool, uid)
            .await?
            .ok_or_else(|| CoreError::item_not_found(uid).into())
    }

    /// Distinct inventory years of live items, ascending.
    pub async fn list_distinct_years(&self, session: &Session) -> CatalogResult<Vec<String>> {
        access::require(session, Action::ViewCatalog)?;
        Ok(ItemRepo::list_distinct_years(&self.pool).await?)
    }

    /// The UID the next `add_item` without an explicit UID would receive.
    pub async fn preview_next_uid(&self, session: &Session) -> CatalogResult<ItemUid> {
        access::require(session, Action::ViewCatalog)?;
        Ok(next_uid(ItemRepo::max_uid(&self.pool).await?))
    }

    /// Add an item. Without a UID one is allocated as `max + 1` (1001 on an
    /// empty catalog).
    pub async fn add_item(&self, session: &Session, input: &CreateItem) -> CatalogResult<Item> {
        access::require(session, Action::ManageItems)?;
        let uid = input.uid.map(validate_uid).transpose()?;
        let fields = self
            .item_fields(
                input.category_id,
                &input.name,
                input.description.as_deref(),
                &input.date,
                input.status,
            )
            .await?;

        let item = ItemRepo::create(&self.pool, uid, &fields)
            .await
            .map_err(|e| {
                CatalogError::from_write(e, || CoreError::DuplicateUid(uid.unwrap_or_default()))
            })?;

        self.invalidate_filter_options().await;
        tracing::info!(
            user_id = session.user_id,
            uid = item.uid,
            category_id = item.category_id,
            auto_uid = uid.is_none(),
            "Item added"
        );
        Ok(item)
    }

    /// Overwrite every field of a live item except its UID.
    pub async fn update_item(
        &self,
        session: &Session,
        uid: ItemUid,
        input: &UpdateItem,
    ) -> CatalogResult<Item> {
        access::require(session, Action::ManageItems)?;
        let fields = self
            .item_fields(
                input.category_id,
                &input.name,
                input.description.as_deref(),
                &input.date,
                input.status,
            )
            .await?;

        let item = ItemRepo::update(&self.pool, uid, &fields)
            .await
            .map_err(|e| CatalogError::from_write(e, || CoreError::DuplicateUid(uid)))?
            .ok_or_else(|| CoreError::item_not_found(uid))?;

        self.invalidate_filter_options().await;
        tracing::info!(user_id = session.user_id, uid, "Item updated");
        Ok(item)
    }

    /// Set a live item's status to written-off. Calling it again is a no-op.
    pub async fn mark_written_off(&self, session: &Session, uid: ItemUid) -> CatalogResult<Item> {
        access::require(session, Action::ManageItems)?;
        let item = ItemRepo::set_status(&self.pool, uid, ItemStatus::WrittenOff.as_str())
            .await?
            .ok_or_else(|| CoreError::item_not_found(uid))?;

        self.invalidate_filter_options().await;
        tracing::info!(user_id = session.user_id, uid, "Item written off");
        Ok(item)
    }

    /// Permanently remove an item, trashed or not.
    ///
    /// Deleting a UID that does not exist succeeds; the return value tells
    /// whether a row was actually removed.
    pub async fn delete_item(&self, session: &Session, uid: ItemUid) -> CatalogResult<bool> {
        access::require(session, Action::ManageItems)?;
        let removed = ItemRepo::hard_delete(&self.pool, uid).await?;

        if removed {
            self.invalidate_filter_options().await;
            tracing::info!(user_id = session.user_id, uid, "Item deleted");
        } else {
            tracing::debug!(user_id = session.user_id, uid, "Delete of absent item ignored");
        }
        Ok(removed)
    }

    /// Move a live item to the trash. It keeps its UID but disappears from
    /// filters, year options and reports until restored.
    pub async fn soft_delete_item(&self, session: &Session, uid: ItemUid) -> CatalogResult<()> {
        access::require(session, Action::ManageItems)?;
        if !ItemRepo::soft_delete(&self.pool, uid).await? {
            return Err(CoreError::item_not_found(uid).into());
        }

        self.invalidate_filter_options().await;
        tracing::info!(user_id = session.user_id, uid, "Item moved to trash");
        Ok(())
    }

    /// Bring a trashed item back.
    pub async fn restore_item(&self, session: &Session, uid: ItemUid) -> CatalogResult<Item> {
        access::require(session, Action::ManageItems)?;
        if !ItemRepo::restore(&self.pool, uid).await? {
            return Err(CoreError::item_not_found(uid).into());
        }

        self.invalidate_filter_options().await;
        tracing::info!(user_id = session.user_id, uid, "Item restored from trash");
        ItemRepo::find_by_uid_including_deleted(&self.pool, uid)
            .await?
            .ok_or_else(|| CoreError::item_not_found(uid).into())
    }

    /// Trashed items ordered by UID.
    pub async fn list_trashed_items(&self, session: &Session) -> CatalogResult<Vec<Item>> {
        access::require(session, Action::ViewCatalog)?;
        Ok(ItemRepo::list_trashed(&self.pool).await?)
    }

    /// Validate and normalize the writable item fields.
    async fn item_fields(
        &self,
        category_id: DbId,
        name: &str,
        description: Option<&str>,
        date: &str,
        status: ItemStatus,
    ) -> CatalogResult<ItemFields> {
        let name = require_text("Item name", name)?;
        let date = normalize_date(date)?;

        if CategoryRepo::find_by_id(&self.pool, category_id)
            .await?
            .is_none()
        {
            return Err(
                CoreError::Validation(format!("Category {category_id} does not exist")).into(),
            );
        }

        Ok(ItemFields {
            category_id,
            name,
            description: optional_text(description),
            date,
            status,
        })
    }
}
