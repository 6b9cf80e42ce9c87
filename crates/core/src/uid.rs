//! Item UID allocation policy.

use crate::error::CoreError;
use crate::types::ItemUid;

/// UID handed out when the catalog holds no items at all.
pub const FIRST_UID: ItemUid = 1001;

/// Next UID after the current maximum: `max + 1`, or [`FIRST_UID`] when the
/// catalog is empty.
///
/// The repository performs the same computation inside the insert statement;
/// this is the reference for callers that need to preview the value.
pub fn next_uid(current_max: Option<ItemUid>) -> ItemUid {
    match current_max {
        Some(max) if max > 0 => max + 1,
        _ => FIRST_UID,
    }
}

/// Reject caller-supplied UIDs that are not positive.
pub fn validate_uid(uid: ItemUid) -> Result<ItemUid, CoreError> {
    if uid <= 0 {
        return Err(CoreError::Validation(format!(
            "Item UID must be a positive integer, got {uid}"
        )));
    }
    Ok(uid)
}
