//! Input normalization for catalog writes.
//!
//! Every text field is trimmed before it reaches storage; required fields
//! that are empty after trimming are rejected.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Storage format of item inventory dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trim `value` and reject it if nothing is left.
pub fn require_text(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional free-text field. `None` becomes the empty string.
pub fn optional_text(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// Parse and re-render an inventory date as `YYYY-MM-DD`.
pub fn normalize_date(value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!(
            "Date must be a calendar date in YYYY-MM-DD form, got '{trimmed}'"
        ))
    })?;
    Ok(date.format(DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text("Name", "  Printer  ").unwrap(), "Printer");
    }

    #[test]
    fn require_text_rejects_blank() {
        assert_matches!(
            require_text("Name", "   "),
            Err(CoreError::Validation(msg)) if msg == "Name is required"
        );
    }

    #[test]
    fn optional_text_defaults_to_empty() {
        assert_eq!(optional_text(None), "");
        assert_eq!(optional_text(Some(" laser ")), "laser");
    }

    #[test]
    fn dates_are_validated() {
        assert_eq!(normalize_date(" 2024-02-11 ").unwrap(), "2024-02-11");
        assert!(normalize_date("2024-02-30").is_err());
        assert!(normalize_date("11.02.2024").is_err());
        assert!(normalize_date("").is_err());
    }
}
