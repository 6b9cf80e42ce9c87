//! Categories, items, filter options and reports over HTTP.
//!
//! The database is seeded with three categories and items 1001..=1004.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get_auth, login_admin, login_moderator, post_auth, post_json_auth,
    put_json_auth,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

fn uids(json: &Value) -> Vec<i64> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["uid"].as_i64().unwrap())
        .collect()
}

async fn category_id(app: axum::Router, token: &str, name: &str) -> i64 {
    let json = body_json(get_auth(app, "/api/v1/categories", token).await).await;
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == name)
        .and_then(|c| c["id"].as_i64())
        .unwrap()
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_items_unfiltered(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = login_admin(app.clone()).await;

    let response = get_auth(app, "/api/v1/items?q=&category=All&year=All&status=All", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(uids(&body_json(response).await), vec![1001, 1002, 1003, 1004]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_filter_items_by_query_string(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = login_admin(app.clone()).await;

    let json = body_json(get_auth(app.clone(), "/api/v1/items?q=LENOVO", &token).await).await;
    assert_eq!(uids(&json), vec![1002]);

    let response = get_auth(app.clone(), "/api/v1/items?status=written-off", &token).await;
    let json = body_json(response).await;
    assert_eq!(uids(&json), vec![1004]);

    let computers = category_id(app.clone(), &token, "Computers").await;
    let uri = format!("/api/v1/items?category={computers}&year=2024");
    let json = body_json(get_auth(app.clone(), &uri, &token).await).await;
    assert_eq!(uids(&json), vec![1001]);

    let response = get_auth(app, "/api/v1/items?year=24", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_moderator_can_add_and_edit_items(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let admin = login_admin(app.clone()).await;
    let token = login_moderator(app.clone(), &admin).await;
    let printers = category_id(app.clone(), &token, "Printers").await;

    let next = body_json(get_auth(app.clone(), "/api/v1/items/next-uid", &token).await).await;
    assert_eq!(next["data"], 1005);

    let body = json!({
        "category_id": printers,
        "name": "Brother HL-L2350DW",
        "date": "2025-03-14",
    });
    let response = post_json_auth(app.clone(), "/api/v1/items", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["uid"], 1005);
    assert_eq!(json["data"]["status"], "active");

    let body = json!({
        "category_id": printers,
        "name": "Brother HL-L2350DW",
        "description": "Duplex",
        "date": "2025-03-15",
        "status": "active",
    });
    let response = put_json_auth(app.clone(), "/api/v1/items/1005", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["description"], "Duplex");

    let response = post_auth(app.clone(), "/api/v1/items/1005/write-off", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "written-off");

    let response = get_auth(app, "/api/v1/items/1005", &token).await;
    assert_eq!(body_json(response).await["data"]["status"], "written-off");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_uid_is_conflict(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = login_admin(app.clone()).await;
    let computers = category_id(app.clone(), &token, "Computers").await;

    let body = json!({
        "uid": 1001,
        "category_id": computers,
        "name": "Clone",
        "date": "2024-01-01",
    });
    let response = post_json_auth(app, "/api/v1/items", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "DUPLICATE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_item_always_no_content(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = login_admin(app.clone()).await;

    for _ in 0..2 {
        let response = delete_auth(app.clone(), "/api/v1/items/1003", &token).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let response = get_auth(app, "/api/v1/items/1003", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_trash_and_restore(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = login_admin(app.clone()).await;

    let response = post_auth(app.clone(), "/api/v1/items/1001/trash", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get_auth(app.clone(), "/api/v1/items", &token).await).await;
    assert_eq!(uids(&json), vec![1002, 1003, 1004]);
    let json = body_json(get_auth(app.clone(), "/api/v1/items/trash", &token).await).await;
    assert_eq!(uids(&json), vec![1001]);

    let response = post_auth(app.clone(), "/api/v1/items/1001/restore", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["deleted"], false);

    let json = body_json(get_auth(app, "/api/v1/items/trash", &token).await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_category_crud(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = login_admin(app.clone()).await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/categories",
        json!({ "name": "Phones", "description": "Desk phones" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/categories",
        json!({ "name": "Phones" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let uri = format!("/api/v1/categories/{id}");
    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({ "name": "Telephony" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Telephony");
    assert_eq!(json["data"]["description"], "");

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_category_cascades(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = login_admin(app.clone()).await;
    let computers = category_id(app.clone(), &token, "Computers").await;

    let uri = format!("/api/v1/categories/{computers}");
    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get_auth(app.clone(), "/api/v1/items", &token).await).await;
    assert_eq!(uids(&json), vec![1003, 1004]);

    let json = body_json(get_auth(app, "/api/v1/filter-options", &token).await).await;
    assert_eq!(json["data"]["categories"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["years"], json!(["2022", "2023"]));
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_report_summary_text(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = login_admin(app.clone()).await;

    let response = get_auth(app, "/api/v1/reports/summary", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let text = json["data"].as_str().unwrap();
    assert!(text.starts_with("INVENTORY REPORT\n"));
    assert!(text.contains("  - Computers: 2"));
    assert!(text.ends_with("  - written-off: 1"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_report_stats(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let token = login_admin(app.clone()).await;

    let json = body_json(get_auth(app, "/api/v1/reports/stats", &token).await).await;
    assert_eq!(json["data"]["total"], 4);
    assert_eq!(json["data"]["by_status"][0]["label"], "active");
    assert_eq!(json["data"]["by_status"][0]["count"], 3);
    assert_eq!(json["data"]["by_status"][1]["fraction"], 0.25);
}
