//! Report aggregation engine.
//!
//! Works on plain rows already filtered to non-deleted items, so the same
//! code serves the textual summary, the statistics view and any exporter.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::status::ItemStatus;

/// Label used when an item's category cannot be resolved.
pub const UNKNOWN_CATEGORY: &str = "unknown";
/// Label used when an item's date has no usable year prefix.
pub const UNKNOWN_YEAR: &str = "????";
/// Label used when an item's status is empty.
pub const UNKNOWN_STATUS: &str = "unknown";
/// Line rendered in place of an empty grouping.
pub const NO_DATA: &str = "  (no data)";

pub const REPORT_TITLE: &str = "INVENTORY REPORT";
pub const SECTION_BY_CATEGORY: &str = "By category:";
pub const SECTION_BY_YEAR: &str = "By inventory year:";
pub const SECTION_BY_STATUS: &str = "Statuses:";

/// One non-deleted item as seen by the reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRow {
    pub category: Option<String>,
    pub date: Option<String>,
    pub status: Option<String>,
}

/// Four-character year prefix of a date, if the date has one.
pub fn year_of(date: &str) -> Option<&str> {
    let trimmed = date.trim();
    trimmed
        .get(..4)
        .filter(|y| y.bytes().all(|b| b.is_ascii_digit()))
}

// ---------------------------------------------------------------------------
// Textual summary
// ---------------------------------------------------------------------------

/// Grouped counts for the textual report.
///
/// Category and year groupings are sorted by key; the status grouping keeps
/// the order in which statuses were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventoryReport {
    pub by_category: BTreeMap<String, u64>,
    pub by_year: BTreeMap<String, u64>,
    pub by_status: IndexMap<String, u64>,
}

impl InventoryReport {
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a ReportRow>,
    {
        let mut report = Self::default();
        for row in rows {
            let category = row
                .category
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or(UNKNOWN_CATEGORY);
            let year = row
                .date
                .as_deref()
                .and_then(year_of)
                .unwrap_or(UNKNOWN_YEAR);
            let status = row
                .status
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(UNKNOWN_STATUS);

            *report.by_category.entry(category.to_string()).or_default() += 1;
            *report.by_year.entry(year.to_string()).or_default() += 1;
            *report.by_status.entry(status.to_string()).or_default() += 1;
        }
        report
    }

    /// Render the report as display text.
    pub fn render(&self) -> String {
        let mut lines = vec![
            REPORT_TITLE.to_string(),
            "-".repeat(30),
            SECTION_BY_CATEGORY.to_string(),
        ];
        push_group(&mut lines, self.by_category.iter());

        lines.push(String::new());
        lines.push(SECTION_BY_YEAR.to_string());
        push_group(&mut lines, self.by_year.iter());

        lines.push(String::new());
        lines.push(SECTION_BY_STATUS.to_string());
        push_group(&mut lines, self.by_status.iter());

        lines.join("\n")
    }
}

fn push_group<'a, I>(lines: &mut Vec<String>, entries: I)
where
    I: Iterator<Item = (&'a String, &'a u64)>,
{
    let before = lines.len();
    lines.extend(entries.map(|(key, count)| format!("  - {key}: {count}")));
    if lines.len() == before {
        lines.push(NO_DATA.to_string());
    }
}

// ---------------------------------------------------------------------------
// Statistics view
// ---------------------------------------------------------------------------

/// One bar of a distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatEntry {
    pub label: String,
    pub count: u64,
    /// Share of the total item count in `0.0..=1.0`; `0.0` when the total is zero.
    pub fraction: f64,
}

impl StatEntry {
    fn new(label: impl Into<String>, count: u64, total: u64) -> Self {
        Self {
            label: label.into(),
            count,
            fraction: fraction(count, total),
        }
    }
}

/// Three parallel distributions over the non-deleted items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryStats {
    pub total: u64,
    /// Exactly one entry per [`ItemStatus`], in declaration order.
    pub by_status: Vec<StatEntry>,
    /// Categories holding at least one item, sorted by name.
    pub by_category: Vec<StatEntry>,
    pub by_year: Vec<StatEntry>,
}

impl InventoryStats {
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a ReportRow>,
    {
        let mut total = 0u64;
        let mut status_counts: BTreeMap<&str, u64> = BTreeMap::new();
        let mut category_counts: BTreeMap<String, u64> = BTreeMap::new();
        let mut year_counts: BTreeMap<String, u64> = BTreeMap::new();

        for row in rows {
            total += 1;
            if let Some(status) = row.status.as_deref() {
                if let Some(known) = ItemStatus::ALL.iter().find(|s| s.as_str() == status) {
                    *status_counts.entry(known.as_str()).or_default() += 1;
                }
            }
            let category = row
                .category
                .clone()
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());
            *category_counts.entry(category).or_default() += 1;
            let year = row
                .date
                .as_deref()
                .and_then(year_of)
                .unwrap_or(UNKNOWN_YEAR)
                .to_string();
            *year_counts.entry(year).or_default() += 1;
        }

        let by_status = ItemStatus::ALL
            .iter()
            .map(|s| {
                let count = status_counts.get(s.as_str()).copied().unwrap_or(0);
                StatEntry::new(s.as_str(), count, total)
            })
            .collect();

        Self {
            total,
            by_status,
            by_category: category_counts
                .into_iter()
                .map(|(label, count)| StatEntry::new(label, count, total))
                .collect(),
            by_year: year_counts
                .into_iter()
                .map(|(label, count)| StatEntry::new(label, count, total))
                .collect(),
        }
    }
}

/// `count / total`, or `0.0` when `total` is zero.
pub fn fraction(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
