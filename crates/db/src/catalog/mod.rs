//! The catalog service: the single entry point front ends call.
//!
//! Every operation takes the caller's [`Session`] explicitly, checks it with
//! [`inventory_core::access`], validates input, runs one atomic statement
//! through a repository and translates storage failures into
//! [`CoreError`](inventory_core::error::CoreError) variants.
//!
//! Operations are split by entity: [`auth`], [`categories`], [`items`],
//! [`users`] and [`reports`] each add an `impl Catalog` block.

use std::sync::Arc;

use inventory_core::access::{self, Action, Session};
use inventory_core::secret::{PlaintextVerifier, SecretVerifier};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::CatalogResult;
use crate::models::category::Category;
use crate::repositories::{CategoryRepo, ItemRepo};
use crate::DbPool;

pub mod auth;
pub mod categories;
pub mod items;
pub mod reports;
pub mod users;

/// Values for the category and year dropdowns of a filter form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Every category, whether or not it holds items, ordered by name.
    pub categories: Vec<Category>,
    /// Year prefixes of live items, ascending.
    pub years: Vec<String>,
}

/// Catalog service over a shared connection pool.
///
/// Cheap to share behind an `Arc`; all state lives in the database except
/// the cached [`FilterOptions`], which every mutation invalidates.
pub struct Catalog {
    pool: DbPool,
    verifier: Arc<dyn SecretVerifier>,
    filter_options: RwLock<Option<FilterOptions>>,
}

impl Catalog {
    /// Build a catalog that compares login secrets verbatim.
    pub fn new(pool: DbPool) -> Self {
        Self::with_verifier(pool, Arc::new(PlaintextVerifier))
    }

    /// Build a catalog with a custom secret verifier.
    pub fn with_verifier(pool: DbPool, verifier: Arc<dyn SecretVerifier>) -> Self {
        Self {
            pool,
            verifier,
            filter_options: RwLock::new(None),
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Category and year options for filter dropdowns.
    ///
    /// Served from cache when possible; reloaded after any mutation.
    pub async fn filter_options(&self, session: &Session) -> CatalogResult<FilterOptions> {
        access::require(session, Action::ViewCatalog)?;

        if let Some(cached) = self.filter_options.read().await.as_ref() {
            return Ok(cached.clone());
        }

        let mut slot = self.filter_options.write().await;
        if let Some(cached) = slot.as_ref() {
            return Ok(cached.clone());
        }
        let options = FilterOptions {
            categories: CategoryRepo::list(&self.pool).await?,
            years: ItemRepo::list_distinct_years(&self.pool).await?,
        };
        *slot = Some(options.clone());
        tracing::debug!(
            categories = options.categories.len(),
            years = options.years.len(),
            "Filter options reloaded"
        );
        Ok(options)
    }

    /// Drop the cached filter options so the next read reloads them.
    pub(crate) async fn invalidate_filter_options(&self) {
        *self.filter_options.write().await = None;
    }
}
