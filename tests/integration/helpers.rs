//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use chrono::{DateTime, TimeZone, Utc};
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use banca_api::{AppState, build_router};
use banca_core::config::{AppConfig, DatabaseConfig};
use banca_database::DatabasePool;
use banca_database::migration::run_migrations;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db: DatabasePool,
}

impl TestApp {
    /// Create a new test application over a private in-memory database
    pub async fn new() -> Self {
        let config = AppConfig {
            database: DatabaseConfig::in_memory(),
            ..AppConfig::default()
        };

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let router = build_router(AppState::new(config, db.clone()));

        Self { router, db }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a fully built request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Store an access period through the API and assert success
    pub async fn create_period(&self, action: &str, inicio: &str, termino: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/periodoAcesso/persistir",
                Some(serde_json::json!({
                    "codigo": action,
                    "inicio": inicio,
                    "termino": termino,
                })),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Persist failed: {:?}",
            response.body
        );
        response.body
    }

    /// Store a board through the API and return its id
    pub async fn create_board(&self, body: Value) -> i64 {
        let response = self.request("POST", "/banca/persistir", Some(body)).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Persist failed: {:?}",
            response.body
        );
        response.body["codigo"]
            .as_i64()
            .expect("No codigo in persisted board")
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The body as an array, panicking otherwise
    pub fn items(&self) -> &Vec<Value> {
        self.body.as_array().expect("Expected a JSON array")
    }

    /// Parse a timestamp field of the body
    pub fn instant(&self, field: &str) -> DateTime<Utc> {
        self.body[field]
            .as_str()
            .expect("Expected a timestamp string")
            .parse()
            .expect("Invalid timestamp")
    }
}

/// 2015-01-01 at the given UTC time
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2015, 1, 1, hour, minute, 0).unwrap()
}
