//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with database
//! - Helper functions for creating test data
//! - Authentication helpers
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL
//! env var). The definition service is left unconfigured; tests create
//! words with explicit definitions.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use sayings_journal_backend::build_router;
use sayings_journal_backend::db::Database;
use sayings_journal_backend::models::Account;
use sayings_journal_backend::services::enrich::LlmClient;
use sayings_journal_backend::AppState;

/// Test context containing database connection and test server.
///
/// Use this to set up integration tests with a real database connection.
/// Requires DATABASE_URL environment variable to be set.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);

        let state = AppState {
            db: db.clone(),
            llm: Arc::new(LlmClient::from_env()),
        };

        let app = build_router(state);

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Create a test account and return its ID and token.
    pub async fn create_test_account(&self, name: Option<&str>) -> (Uuid, String) {
        let account = self
            .db
            .create_account(name)
            .await
            .expect("Failed to create test account");
        (account.id, account.token)
    }

    /// Get account by token.
    pub async fn get_account_by_token(&self, token: &str) -> Option<Account> {
        self.db.get_account_by_token(token).await.ok().flatten()
    }

    /// Seed a word row directly, bypassing the create route.
    pub async fn seed_word(
        &self,
        account_id: Uuid,
        text: &str,
        definition: &str,
        examples: serde_json::Value,
    ) -> Uuid {
        let word = self
            .db
            .insert_word(account_id, text, definition, &examples)
            .await
            .expect("Failed to seed word");
        word.id
    }

    /// Format authorization header value.
    pub fn auth_header_value(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// Clean up test data for an account.
    ///
    /// Call this after tests to remove test data.
    pub async fn cleanup_account(&self, account_id: Uuid) {
        // Delete in order due to foreign keys
        let _ = sqlx::query("DELETE FROM words WHERE account_id = $1")
            .bind(account_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(account_id)
            .execute(self.db.pool())
            .await;
    }
}
