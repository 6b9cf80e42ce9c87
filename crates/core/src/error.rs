use crate::types::{DbId, ItemUid};

/// Domain error taxonomy shared by every catalog operation.
///
/// None of these are fatal: each one describes a rejected request and the
/// store is left unchanged.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Category name already exists: {0}")]
    DuplicateName(String),

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Item UID already in use: {0}")]
    DuplicateUid(ItemUid),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Unknown user and wrong secret collapse into this single variant.
    #[error("Invalid username or secret")]
    InvalidCredentials,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Cannot remove or demote the last admin user")]
    LastAdmin,
}

impl CoreError {
    /// Shorthand for a `NotFound` on an item, keyed by UID.
    pub fn item_not_found(uid: ItemUid) -> Self {
        CoreError::NotFound {
            entity: "Item",
            id: uid,
        }
    }
}
