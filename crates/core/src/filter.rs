//! Item filter criteria.
//!
//! Front ends hand over raw dropdown / search-box values; [`ItemFilter`]
//! turns them into normalized criteria where "absent" always means "no
//! constraint". The repository layer turns the column criteria into a
//! parameterized `WHERE` clause joined with `AND`; the free-text fragment is
//! folded and matched here so both sides use the same Unicode case rules.

use serde::Deserialize;

use crate::error::CoreError;
use crate::status::ItemStatus;
use crate::types::DbId;

/// Label of the catch-all option in category / year / status dropdowns.
pub const ALL_SENTINEL: &str = "All";

/// Normalized filter criteria. Every `None` is a wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Lower-cased free-text fragment matched against name OR description.
    pub text: Option<String>,
    pub category_id: Option<DbId>,
    /// Four-digit year compared with the first four characters of the date.
    pub year: Option<String>,
    pub status: Option<ItemStatus>,
}

/// Raw criteria as submitted by a front end (query string, form fields).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItemFilter {
    pub q: Option<String>,
    pub category: Option<String>,
    pub year: Option<String>,
    pub status: Option<String>,
}

impl ItemFilter {
    /// Normalize raw front-end values.
    ///
    /// - Blank values and the [`ALL_SENTINEL`] are treated as absent.
    /// - A category that is not a plain number is ignored.
    /// - A year must be exactly four ASCII digits.
    /// - A status must be one of the stored status strings.
    pub fn from_raw(raw: &RawItemFilter) -> Result<Self, CoreError> {
        let text = present(raw.q.as_deref()).map(str::to_lowercase);

        let category_id = present(raw.category.as_deref())
            .filter(|c| c.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|c| c.parse::<DbId>().ok());

        let year = match present(raw.year.as_deref()) {
            Some(y) if is_year(y) => Some(y.to_string()),
            Some(y) => {
                return Err(CoreError::Validation(format!(
                    "Year filter must be four digits, got '{y}'"
                )))
            }
            None => None,
        };

        let status = present(raw.status.as_deref())
            .map(str::parse::<ItemStatus>)
            .transpose()?;

        Ok(Self {
            text,
            category_id,
            year,
            status,
        })
    }

    /// Whether `name` or `description` contains the text fragment, ignoring
    /// case. Always `true` without a fragment.
    pub fn matches_text(&self, name: &str, description: &str) -> bool {
        let Some(fragment) = self.text.as_deref() else {
            return true;
        };
        name.to_lowercase().contains(fragment) || description.to_lowercase().contains(fragment)
    }
}

/// Trimmed value, or `None` for blank input and the "All" sentinel.
fn present(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != ALL_SENTINEL)
}

fn is_year(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit())
}
