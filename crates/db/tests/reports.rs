//! Text report and statistics over the catalog.

mod common;

use assert_matches::assert_matches;
use common::{
    add_active, add_category, add_item, admin_session, catalog, moderator_session, new_item,
};
use inventory_core::report::{StatEntry, NO_DATA};
use inventory_core::status::ItemStatus;
use inventory_db::error::CatalogError;
use inventory_db::seed;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "./migrations")]
async fn test_empty_catalog_report(pool: SqlitePool) {
    let catalog = catalog(pool);

    let text = catalog.build_report(&moderator_session()).await;
    let expected = [
        "INVENTORY REPORT",
        "------------------------------",
        "By category:",
        NO_DATA,
        "",
        "By inventory year:",
        NO_DATA,
        "",
        "Statuses:",
        NO_DATA,
    ]
    .join("\n");
    assert_eq!(text, expected);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seeded_report(pool: SqlitePool) {
    seed::bootstrap(&pool).await.unwrap();
    let catalog = catalog(pool);

    let text = catalog.build_report(&admin_session()).await;
    let expected = [
        "INVENTORY REPORT",
        "------------------------------",
        "By category:",
        "  - Computers: 2",
        "  - Furniture: 1",
        "  - Printers: 1",
        "",
        "By inventory year:",
        "  - 2022: 1",
        "  - 2023: 1",
        "  - 2024: 1",
        "  - 2025: 1",
        "",
        "Statuses:",
        "  - active: 3",
        "  - written-off: 1",
    ]
    .join("\n");
    assert_eq!(text, expected);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_report_status_order_is_first_seen(pool: SqlitePool) {
    let catalog = catalog(pool);
    let cat = add_category(&catalog, "Chairs").await;
    add_item(&catalog, &new_item(cat.id, "Broken", "2020-01-01", ItemStatus::WrittenOff)).await;
    add_active(&catalog, cat.id, "Fine", "2020-01-01").await;

    let report = catalog.inventory_report(&admin_session()).await.unwrap();
    let statuses: Vec<&str> = report.by_status.keys().map(String::as_str).collect();
    assert_eq!(statuses, vec!["written-off", "active"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_trashed_items_excluded_from_reports(pool: SqlitePool) {
    let catalog = catalog(pool);
    let session = admin_session();
    let cat = add_category(&catalog, "Chairs").await;
    let item = add_active(&catalog, cat.id, "Chair", "2020-01-01").await;
    catalog.soft_delete_item(&session, item.uid).await.unwrap();

    let report = catalog.inventory_report(&session).await.unwrap();
    assert!(report.by_category.is_empty());

    let stats = catalog.compute_stats(&session).await.unwrap();
    assert_eq!(stats.total, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stats_on_empty_catalog(pool: SqlitePool) {
    let catalog = catalog(pool);

    let stats = catalog.compute_stats(&admin_session()).await.unwrap();
    assert_eq!(stats.total, 0);
    assert_eq!(
        stats.by_status,
        vec![
            StatEntry {
                label: "active".to_string(),
                count: 0,
                fraction: 0.0,
            },
            StatEntry {
                label: "written-off".to_string(),
                count: 0,
                fraction: 0.0,
            },
        ]
    );
    assert!(stats.by_category.is_empty());
    assert!(stats.by_year.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stats_fractions(pool: SqlitePool) {
    seed::bootstrap(&pool).await.unwrap();
    let catalog = catalog(pool);

    let stats = catalog.compute_stats(&admin_session()).await.unwrap();
    assert_eq!(stats.total, 4);

    let active = &stats.by_status[0];
    assert_eq!((active.label.as_str(), active.count), ("active", 3));
    assert!((active.fraction - 0.75).abs() < f64::EPSILON);

    let computers = stats
        .by_category
        .iter()
        .find(|e| e.label == "Computers")
        .unwrap();
    assert_eq!(computers.count, 2);
    assert!((computers.fraction - 0.5).abs() < f64::EPSILON);

    let years: Vec<&str> = stats.by_year.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(years, vec!["2022", "2023", "2024", "2025"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stats_fractions_sum_to_one(pool: SqlitePool) {
    let catalog = catalog(pool);
    let first = add_category(&catalog, "Desks").await;
    let second = add_category(&catalog, "Lamps").await;
    for (n, date) in ["2019-04-01", "2020-04-01", "2020-09-09"].iter().enumerate() {
        add_active(&catalog, first.id, &format!("Desk {n}"), date).await;
    }
    add_item(&catalog, &new_item(second.id, "Lamp", "2021-01-01", ItemStatus::WrittenOff)).await;
    add_active(&catalog, second.id, "Lamp 2", "2021-02-01").await;

    let stats = catalog.compute_stats(&admin_session()).await.unwrap();
    assert_eq!(stats.total, 5);
    for grouping in [&stats.by_status, &stats.by_category, &stats.by_year] {
        let sum: f64 = grouping.iter().map(|e| e.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-9, "fractions sum to {sum}");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_report_failure_is_rendered_as_text(pool: SqlitePool) {
    let catalog = catalog(pool.clone());
    pool.close().await;

    let text = catalog.build_report(&moderator_session()).await;
    assert!(text.starts_with("Failed to generate report:\n"), "got {text:?}");
    assert!(!text.contains("INVENTORY REPORT"));

    let stats = catalog.compute_stats(&moderator_session()).await;
    assert_matches!(stats, Err(CatalogError::Storage(_)));
}
