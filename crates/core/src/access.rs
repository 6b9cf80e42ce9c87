//! Sessions and role gating.
//!
//! A [`Session`] is an explicit value created by a successful login and
//! handed to every catalog call. There is no process-wide "current user".

use serde::Serialize;

use crate::error::CoreError;
use crate::roles::Role;
use crate::types::DbId;

/// The authenticated identity of the current caller.
///
/// Sessions never expire on their own; they live until the holder logs out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: DbId,
    pub username: String,
    pub full_name: String,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Operations subject to an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Create, edit or delete operator accounts (the moderator-management view).
    ManageUsers,
    ManageCategories,
    ManageItems,
    ViewCatalog,
    ViewReports,
}

impl Action {
    fn describe(self) -> &'static str {
        match self {
            Action::ManageUsers => "manage users",
            Action::ManageCategories => "manage categories",
            Action::ManageItems => "manage items",
            Action::ViewCatalog => "view the catalog",
            Action::ViewReports => "view reports",
        }
    }
}

/// Decide whether `session` may perform `action`.
///
/// Only user management is restricted to admins. Category and item
/// mutations are open to every authenticated role.
pub fn authorize(session: &Session, action: Action) -> bool {
    match action {
        Action::ManageUsers => session.is_admin(),
        Action::ManageCategories
        | Action::ManageItems
        | Action::ViewCatalog
        | Action::ViewReports => true,
    }
}

/// Like [`authorize`] but produces a `Forbidden` error on refusal.
pub fn require(session: &Session, action: Action) -> Result<(), CoreError> {
    if authorize(session, action) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "Role '{}' may not {}",
            session.role,
            action.describe()
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn session(role: Role) -> Session {
        Session {
            user_id: 7,
            username: "op".into(),
            full_name: "Operator".into(),
            role,
        }
    }

    #[test]
    fn admin_may_do_everything() {
        let admin = session(Role::Admin);
        for action in [
            Action::ManageUsers,
            Action::ManageCategories,
            Action::ManageItems,
            Action::ViewCatalog,
            Action::ViewReports,
        ] {
            assert!(authorize(&admin, action), "{action:?}");
        }
    }

    #[test]
    fn moderator_blocked_only_from_user_management() {
        let moderator = session(Role::Moderator);
        assert!(!authorize(&moderator, Action::ManageUsers));
        assert!(authorize(&moderator, Action::ManageCategories));
        assert!(authorize(&moderator, Action::ManageItems));
        assert!(authorize(&moderator, Action::ViewReports));
    }

    #[test]
    fn require_reports_forbidden() {
        let moderator = session(Role::Moderator);
        assert_matches!(
            require(&moderator, Action::ManageUsers),
            Err(CoreError::Forbidden(msg)) if msg.contains("manage users")
        );
        assert!(require(&moderator, Action::ManageItems).is_ok());
    }
}
