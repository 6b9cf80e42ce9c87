//! Category operations.

use inventory_core::access::{self, Action, Session};
use inventory_core::error::CoreError;
use inventory_core::types::DbId;
use inventory_core::validation::{optional_text, require_text};

use super::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::repositories::{CategoryRepo, ItemRepo};

fn category_not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Category",
        id,
    }
}

impl Catalog {
    /// Every category ordered by name, including empty ones.
    pub async fn list_categories(&self, session: &Session) -> CatalogResult<Vec<Category>> {
        access::require(session, Action::ViewCatalog)?;
        Ok(CategoryRepo::list(&self.pool).await?)
    }

    pub async fn get_category(&self, session: &Session, id: DbId) -> CatalogResult<Category> {
        access::require(session, Action::ViewCatalog)?;
        CategoryRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| category_not_found(id).into())
    }

    /// Create a category with a unique, non-empty name.
    pub async fn add_category(
        &self,
        session: &Session,
        input: &CreateCategory,
    ) -> CatalogResult<Category> {
        access::require(session, Action::ManageCategories)?;
        let name = require_text("Category name", &input.name)?;
        let description = optional_text(input.description.as_deref());

        let category = CategoryRepo::create(&self.pool, &name, &description)
            .await
            .map_err(|e| CatalogError::from_write(e, || CoreError::DuplicateName(name.clone())))?;

        self.invalidate_filter_options().await;
        tracing::info!(
            user_id = session.user_id,
            category_id = category.id,
            name = %category.name,
            "Category added"
        );
        Ok(category)
    }

    /// Rename a category and overwrite its description.
    pub async fn update_category(
        &self,
        session: &Session,
        id: DbId,
        input: &UpdateCategory,
    ) -> CatalogResult<Category> {
        access::require(session, Action::ManageCategories)?;
        let name = require_text("Category name", &input.name)?;
        let description = optional_text(input.description.as_deref());

        let category = CategoryRepo::update(&self.pool, id, &name, &description)
            .await
            .map_err(|e| CatalogError::from_write(e, || CoreError::DuplicateName(name.clone())))?
            .ok_or_else(|| category_not_found(id))?;

        self.invalidate_filter_options().await;
        tracing::info!(user_id = session.user_id, category_id = id, "Category updated");
        Ok(category)
    }

    /// Delete a category and, by cascade, every item in it (trashed ones too).
    pub async fn delete_category(&self, session: &Session, id: DbId) -> CatalogResult<()> {
        access::require(session, Action::ManageCategories)?;
        let live_items = ItemRepo::count_in_category(&self.pool, id).await?;
        if !CategoryRepo::delete(&self.pool, id).await? {
            return Err(category_not_found(id).into());
        }

        self.invalidate_filter_options().await;
        tracing::info!(
            user_id = session.user_id,
            category_id = id,
            live_items,
            "Category deleted with its items"
        );
        Ok(())
    }
}
