//! Schema and seed bootstrap.

use inventory_db::repositories::{CategoryRepo, ItemRepo, UserRepo};
use inventory_db::seed::{self, SeedSummary, SEED_ADMIN_USERNAME};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "./migrations")]
async fn test_health_check(pool: SqlitePool) {
    inventory_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn test_bootstrap_seeds_empty_database(pool: SqlitePool) {
    let summary = seed::bootstrap(&pool).await.unwrap();
    assert_eq!(
        summary,
        SeedSummary {
            admin_created: true,
            categories_created: 3,
            items_created: 4,
        }
    );

    let admin = UserRepo::find_by_username(&pool, SEED_ADMIN_USERNAME)
        .await
        .unwrap()
        .expect("admin should be seeded");
    assert_eq!(admin.role, "admin");

    let names: Vec<String> = CategoryRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Computers", "Furniture", "Printers"]);

    let chair = ItemRepo::find_by_uid(&pool, 1004).await.unwrap().unwrap();
    assert_eq!(chair.status, "written-off");
    assert_eq!(ItemRepo::max_uid(&pool).await.unwrap(), Some(1004));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_bootstrap_is_idempotent(pool: SqlitePool) {
    seed::bootstrap(&pool).await.unwrap();
    let second = seed::bootstrap(&pool).await.unwrap();

    assert_eq!(second, SeedSummary::default());
    assert_eq!(UserRepo::list(&pool).await.unwrap().len(), 1);
    assert_eq!(CategoryRepo::list(&pool).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_bootstrap_keeps_existing_catalog(pool: SqlitePool) {
    sqlx::query("INSERT INTO categories (name, description) VALUES ('Phones', '')")
        .execute(&pool)
        .await
        .unwrap();

    let summary = seed::bootstrap(&pool).await.unwrap();

    assert!(summary.admin_created);
    assert_eq!(summary.categories_created, 0);
    // Seed items reference seed categories, which were never created.
    assert_eq!(summary.items_created, 0);
}
