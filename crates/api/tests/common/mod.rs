#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use inventory_api::config::ServerConfig;
use inventory_api::router::build_app_router;
use inventory_api::state::AppState;
use inventory_db::catalog::Catalog;
use inventory_db::seed::{self, SEED_ADMIN_SECRET, SEED_ADMIN_USERNAME};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout: Duration::from_secs(30),
    }
}

/// Build the full application router over a seeded database.
pub async fn build_test_app(pool: SqlitePool) -> Router {
    seed::bootstrap(&pool).await.unwrap();
    let config = test_config();
    let state = AppState::new(Catalog::new(pool), config.clone());
    build_app_router(state, &config)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Log in and return the bearer token.
pub async fn login(app: Router, username: &str, secret: &str) -> String {
    let body = serde_json::json!({ "username": username, "secret": secret });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["data"]["token"].as_str().unwrap().to_string()
}

pub async fn login_admin(app: Router) -> String {
    login(app, SEED_ADMIN_USERNAME, SEED_ADMIN_SECRET).await
}

/// Create a moderator through the admin API and log in as them.
pub async fn login_moderator(app: Router, admin_token: &str) -> String {
    let body = serde_json::json!({
        "username": "moderator",
        "full_name": "Floor Moderator",
        "role": "moderator",
        "secret": "mod-secret",
    });
    let response = post_json_auth(app.clone(), "/api/v1/admin/users", body, admin_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    login(app, "moderator", "mod-secret").await
}
