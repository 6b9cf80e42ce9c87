//! Read-only queries feeding the report engine.

use inventory_core::report::ReportRow;

use crate::DbPool;

/// Provides the row source for reports and statistics.
pub struct ReportRepo;

impl ReportRepo {
    /// One row per live item: category name, date and status.
    ///
    /// `LEFT JOIN` so an unresolvable category surfaces as `NULL` (and is
    /// labelled "unknown" by the report) instead of dropping the item.
    pub async fn rows(pool: &DbPool) -> Result<Vec<ReportRow>, sqlx::Error> {
        let rows: Vec<(Option<String>, Option<String>, Option<String>)> = sqlx::query_as(
            "SELECT c.name, i.date, i.status
             FROM items i
             LEFT JOIN categories c ON c.id = i.category_id
             WHERE i.deleted = 0
             ORDER BY i.uid",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(category, date, status)| ReportRow {
                category,
                date,
                status,
            })
            .collect())
    }
}
