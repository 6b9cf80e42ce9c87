//! User administration. Every operation here is admin-only.

use inventory_core::access::{self, Action, Session};
use inventory_core::error::CoreError;
use inventory_core::secret::secret_or_default;
use inventory_core::types::DbId;
use inventory_core::validation::require_text;

use super::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::models::user::{CreateUser, UpdateUser, UserResponse};
use crate::repositories::UserRepo;

fn user_not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: "User", id }
}

impl Catalog {
    /// All accounts ordered by id, without secrets.
    pub async fn list_users(&self, session: &Session) -> CatalogResult<Vec<UserResponse>> {
        access::require(session, Action::ManageUsers)?;
        let users = UserRepo::list(&self.pool).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    pub async fn get_user(&self, session: &Session, id: DbId) -> CatalogResult<UserResponse> {
        access::require(session, Action::ManageUsers)?;
        let user = UserRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| user_not_found(id))?;
        Ok(UserResponse::from(&user))
    }

    /// Create an account. An empty secret falls back to the default one.
    pub async fn add_user(
        &self,
        session: &Session,
        input: &CreateUser,
    ) -> CatalogResult<UserResponse> {
        access::require(session, Action::ManageUsers)?;
        let username = require_text("Username", &input.username)?;
        let full_name = require_text("Full name", &input.full_name)?;
        let (secret, defaulted) = secret_or_default(&input.secret);

        let user = UserRepo::create(&self.pool, &username, &full_name, input.role, &secret)
            .await
            .map_err(|e| {
                CatalogError::from_write(e, || CoreError::DuplicateUsername(username.clone()))
            })?;

        if defaulted {
            tracing::warn!(
                user_id = user.id,
                username = %user.username,
                "User created with the default secret"
            );
        }
        tracing::info!(
            user_id = session.user_id,
            new_user_id = user.id,
            role = %input.role,
            "User added"
        );
        Ok(UserResponse::from(&user))
    }

    /// Overwrite username, full name and role. The secret changes only when
    /// a non-empty one is supplied.
    ///
    /// Demoting the only remaining admin fails with [`CoreError::LastAdmin`].
    pub async fn update_user(
        &self,
        session: &Session,
        id: DbId,
        input: &UpdateUser,
    ) -> CatalogResult<UserResponse> {
        access::require(session, Action::ManageUsers)?;
        let username = require_text("Username", &input.username)?;
        let full_name = require_text("Full name", &input.full_name)?;

        let updated = UserRepo::update(
            &self.pool,
            id,
            &username,
            &full_name,
            input.role,
            input.secret.as_deref(),
        )
        .await
        .map_err(|e| {
            CatalogError::from_write(e, || CoreError::DuplicateUsername(username.clone()))
        })?;

        let Some(user) = updated else {
            return Err(self.missing_or_last_admin(id).await);
        };

        tracing::info!(
            user_id = session.user_id,
            target_user_id = id,
            role = %input.role,
            "User updated"
        );
        Ok(UserResponse::from(&user))
    }

    /// Delete an account. The last remaining admin cannot be deleted.
    pub async fn delete_user(&self, session: &Session, id: DbId) -> CatalogResult<()> {
        access::require(session, Action::ManageUsers)?;
        if !UserRepo::delete(&self.pool, id).await? {
            return Err(self.missing_or_last_admin(id).await);
        }

        tracing::info!(user_id = session.user_id, target_user_id = id, "User deleted");
        Ok(())
    }

    /// Explain why a guarded user write touched no row: either the user does
    /// not exist or the admin guard held it back.
    async fn missing_or_last_admin(&self, id: DbId) -> CatalogError {
        match UserRepo::find_by_id(&self.pool, id).await {
            Ok(Some(_)) => {
                tracing::warn!(target_user_id = id, "Refused to remove the last admin");
                CoreError::LastAdmin.into()
            }
            Ok(None) => user_not_found(id).into(),
            Err(e) => e.into(),
        }
    }
}
