//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the application router exactly as production does (same
//! middleware stack via `build_app_router`) and provides request/response
//! helpers around `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use orca_api::auth::jwt::{generate_access_token, JwtConfig};
use orca_api::auth::password::hash_password;
use orca_api::config::{OperatorConfig, ServerConfig};
use orca_api::router::build_app_router;
use orca_api::state::AppState;

/// Operator credential used by every test app.
pub const TEST_USERNAME: &str = "operator";
pub const TEST_PASSWORD: &str = "correct-horse-battery-staple";

/// Build a test `ServerConfig` with safe defaults and the test operator
/// credential.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 1440,
        },
        operator: OperatorConfig {
            username: TEST_USERNAME.to_string(),
            password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A valid Bearer token for the test operator.
pub fn auth_token() -> String {
    generate_access_token(TEST_USERNAME, &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, None).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Seed one ticket type and return its id. Ticket creation requires it.
pub async fn seed_ticket_type(pool: &PgPool) -> i64 {
    let (id,): (i64,) =
        sqlx::query_as("INSERT INTO ticket_type (name) VALUES ('Repair') RETURNING id")
            .fetch_one(pool)
            .await
            .expect("seed ticket type");
    id
}

/// Seed one device type and return its id.
pub async fn seed_device_type(pool: &PgPool) -> i64 {
    let (id,): (i64,) =
        sqlx::query_as("INSERT INTO device_type (name) VALUES ('Laptop') RETURNING id")
            .fetch_one(pool)
            .await
            .expect("seed device type");
    id
}

/// Create a customer over HTTP and return its id.
pub async fn create_customer(pool: &PgPool, email: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/customers",
        serde_json::json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": email,
            "address": "4B, 22 Harbour Rd, Vancouver, V6B 1A1",
            "phone": "555-0100",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a ticket over HTTP and return its id.
pub async fn create_ticket(
    pool: &PgPool,
    customer_id: i64,
    ticket_type_id: i64,
    ticket_number: &str,
) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/tickets",
        serde_json::json!({
            "customer_id": customer_id,
            "subject": "No signal on boot",
            "priority": "normal",
            "ticket_number": ticket_number,
            "ticket_type_id": ticket_type_id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
