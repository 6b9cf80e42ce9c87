//! Reports over live (non-trashed) items.

use inventory_core::access::{self, Action, Session};
use inventory_core::report::{InventoryReport, InventoryStats};

use super::Catalog;
use crate::error::CatalogResult;
use crate::repositories::ReportRepo;

impl Catalog {
    /// Item counts grouped by category, inventory year and status.
    pub async fn inventory_report(&self, session: &Session) -> CatalogResult<InventoryReport> {
        access::require(session, Action::ViewReports)?;
        let rows = ReportRepo::rows(&self.pool).await?;
        Ok(InventoryReport::from_rows(&rows))
    }

    /// The inventory report rendered as plain text.
    ///
    /// Never fails: any error is rendered into the returned text instead.
    pub async fn build_report(&self, session: &Session) -> String {
        match self.inventory_report(session).await {
            Ok(report) => report.render(),
            Err(e) => {
                tracing::error!(user_id = session.user_id, error = %e, "Report generation failed");
                format!("Failed to generate report:\n{e}")
            }
        }
    }

    /// Totals with per-status, per-category and per-year fractions.
    pub async fn compute_stats(&self, session: &Session) -> CatalogResult<InventoryStats> {
        access::require(session, Action::ViewReports)?;
        let rows = ReportRepo::rows(&self.pool).await?;
        Ok(InventoryStats::from_rows(&rows))
    }
}
