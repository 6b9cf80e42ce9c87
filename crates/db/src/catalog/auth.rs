//! Login, logout and the caller's own profile.

use inventory_core::access::Session;
use inventory_core::error::CoreError;
use inventory_core::roles::Role;

use super::Catalog;
use crate::error::CatalogResult;
use crate::models::user::UserResponse;
use crate::repositories::UserRepo;

impl Catalog {
    /// Check a username / secret pair and open a session.
    ///
    /// An unknown username and a wrong secret both yield
    /// [`CoreError::InvalidCredentials`], so callers cannot test for
    /// existing accounts.
    pub async fn authenticate(&self, username: &str, secret: &str) -> CatalogResult<Session> {
        let username = username.trim();
        let user = UserRepo::find_by_username(&self.pool, username).await?;

        let Some(user) = user.filter(|u| self.verifier.verify(secret, &u.secret)) else {
            tracing::warn!(username, "Rejected login attempt");
            return Err(CoreError::InvalidCredentials.into());
        };

        let role: Role = user.role.parse()?;
        tracing::info!(user_id = user.id, %role, "User logged in");
        Ok(Session {
            user_id: user.id,
            username: user.username,
            full_name: user.full_name,
            role,
        })
    }

    /// End a session. The value is consumed and cannot be used again.
    pub fn logout(&self, session: Session) {
        tracing::info!(user_id = session.user_id, "User logged out");
    }

    /// The session holder's account as currently stored.
    pub async fn profile(&self, session: &Session) -> CatalogResult<UserResponse> {
        let user = UserRepo::find_by_id(&self.pool, session.user_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "User",
                id: session.user_id,
            })?;
        Ok(UserResponse::from(&user))
    }
}
