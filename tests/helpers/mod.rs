//! Shared test helpers for integration tests.
//!
//! These tests need a live PostgreSQL instance. They are skipped when
//! `LABDESK_TEST_DATABASE_URL` is not set, so the unit test suite runs
//! without external services.

// Each test binary compiles this module; not all of them use every
// helper.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use labdesk_api::state::AppState;
use labdesk_auth::password::PasswordHasher;
use labdesk_core::config::app::{CorsConfig, ServerConfig};
use labdesk_core::config::auth::AuthConfig;
use labdesk_core::config::bootstrap::BootstrapConfig;
use labdesk_core::config::logging::LoggingConfig;
use labdesk_core::config::{AppConfig, DatabaseConfig};

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database pool for direct queries.
    pub db_pool: PgPool,
    /// Application config.
    pub config: AppConfig,
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}

impl TestResponse {
    /// The `data` payload of a success envelope.
    pub fn data(&self) -> &Value {
        self.body.get("data").unwrap_or(&Value::Null)
    }
}

fn test_config(database_url: String) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            shutdown_grace_seconds: 5,
            cors: CorsConfig::default(),
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: 60,
        },
        auth: AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            jwt_ttl_hours: 1,
            password_min_length: 8,
        },
        bootstrap: BootstrapConfig::default(),
        logging: LoggingConfig {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        },
    }
}

impl TestApp {
    /// Create a new test application, or `None` when no test database
    /// is configured.
    pub async fn new() -> Option<Self> {
        let Ok(url) = std::env::var("LABDESK_TEST_DATABASE_URL") else {
            eprintln!("LABDESK_TEST_DATABASE_URL not set; skipping integration test");
            return None;
        };

        let config = test_config(url);

        let db_pool = labdesk_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        labdesk_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let state = AppState::new(config.clone(), db_pool.clone());
        let router = labdesk_api::router::build_router(state);

        Some(Self {
            router,
            db_pool,
            config,
        })
    }

    /// Clean all test data from the database.
    async fn clean_database(pool: &PgPool) {
        let tables = [
            "comment_edits",
            "endorsement_comments",
            "endorsements",
            "announcement_comments",
            "announcements",
            "qc_tests",
            "users",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {table}");
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a test user and return their ID.
    pub async fn create_test_user(
        &self,
        username: &str,
        password: &str,
        role: &str,
        department: &str,
    ) -> Uuid {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password(password).expect("Failed to hash password");
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO users (id, username, password_hash, first_name, last_name, role, department) \
             VALUES ($1, $2, $3, $4, $5, $6::user_role, $7::department)",
        )
        .bind(id)
        .bind(username)
        .bind(&hash)
        .bind(username)
        .bind("Test")
        .bind(role)
        .bind(department)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        id
    }

    /// Login and return the access token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .request("POST", "/api/users/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .data()
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app.
    ///
    /// The token travels in the `x-auth-token` header, as the intranet
    /// client sends it.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("x-auth-token", token);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}
