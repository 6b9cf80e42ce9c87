//! Item lifecycle status.
//!
//! The string forms must match the `CHECK (status IN (...))` constraint on
//! the `items` table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_WRITTEN_OFF: &str = "written-off";

/// Whether an item is still in service or has been written off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemStatus {
    #[default]
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "written-off")]
    WrittenOff,
}

impl ItemStatus {
    /// Both statuses, in the order the statistics view lists them.
    pub const ALL: [ItemStatus; 2] = [ItemStatus::Active, ItemStatus::WrittenOff];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Active => STATUS_ACTIVE,
            ItemStatus::WrittenOff => STATUS_WRITTEN_OFF,
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_ACTIVE => Ok(ItemStatus::Active),
            STATUS_WRITTEN_OFF => Ok(ItemStatus::WrittenOff),
            other => Err(CoreError::Validation(format!("Unknown item status '{other}'"))),
        }
    }
}
