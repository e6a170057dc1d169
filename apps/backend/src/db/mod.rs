//! PostgreSQL database operations

use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Account Repository ===

    /// Create a new account with generated token
    pub async fn create_account(&self, name: Option<&str>) -> Result<Account> {
        let token = Uuid::new_v4().to_string();
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (token, name)
            VALUES ($1, $2)
            RETURNING id, token, name, created_at, last_seen_at
            "#,
        )
        .bind(&token)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    /// Get account by token
    pub async fn get_account_by_token(&self, token: &str) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, token, name, created_at, last_seen_at
            FROM accounts
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    /// Update account last_seen_at timestamp
    pub async fn update_last_seen(&self, account_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE accounts
            SET last_seen_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(account_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // === Word Repository ===

    /// Insert a new word; new words always start in to_learn
    pub async fn insert_word(
        &self,
        account_id: Uuid,
        text: &str,
        definition: &str,
        examples: &serde_json::Value,
    ) -> Result<DbWord> {
        let word = sqlx::query_as::<_, DbWord>(
            r#"
            INSERT INTO words (account_id, text, definition, examples, list)
            VALUES ($1, $2, $3, $4, 'to_learn')
            RETURNING id, account_id, text, definition, examples, list, created_at
            "#,
        )
        .bind(account_id)
        .bind(text)
        .bind(definition)
        .bind(examples)
        .fetch_one(&self.pool)
        .await?;

        Ok(word)
    }

    /// Get a word by id, scoped to the owning account
    pub async fn get_word(&self, account_id: Uuid, word_id: Uuid) -> Result<Option<DbWord>> {
        let word = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, account_id, text, definition, examples, list, created_at
            FROM words
            WHERE id = $1 AND account_id = $2
            "#,
        )
        .bind(word_id)
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(word)
    }

    /// Get all words for an account, optionally filtered by list,
    /// newest first
    pub async fn get_words(
        &self,
        account_id: Uuid,
        list: Option<WordList>,
    ) -> Result<Vec<DbWord>> {
        let words = match list {
            Some(list) => {
                sqlx::query_as::<_, DbWord>(
                    r#"
                    SELECT id, account_id, text, definition, examples, list, created_at
                    FROM words
                    WHERE account_id = $1 AND list = $2
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(account_id)
                .bind(list.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, DbWord>(
                    r#"
                    SELECT id, account_id, text, definition, examples, list, created_at
                    FROM words
                    WHERE account_id = $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(account_id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(words)
    }

    /// Get the quiz candidate set: to_learn and starred words, never
    /// learnt ones
    pub async fn get_quiz_candidates(&self, account_id: Uuid) -> Result<Vec<DbWord>> {
        let words = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, account_id, text, definition, examples, list, created_at
            FROM words
            WHERE account_id = $1 AND list IN ('to_learn', 'starred')
            ORDER BY created_at DESC
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }

    /// Delete a word, scoped to the owning account
    pub async fn delete_word(&self, account_id: Uuid, word_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM words
            WHERE id = $1 AND account_id = $2
            "#,
        )
        .bind(word_id)
        .bind(account_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Single-field list update keyed by word id
    pub async fn update_word_list(
        &self,
        account_id: Uuid,
        word_id: Uuid,
        list: WordList,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE words
            SET list = $3
            WHERE id = $1 AND account_id = $2
            "#,
        )
        .bind(word_id)
        .bind(account_id)
        .bind(list.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search across text, definition, and
    /// example sentences/answers
    pub async fn search_words(&self, account_id: Uuid, query: &str) -> Result<Vec<DbWord>> {
        let pattern = format!("%{}%", query);
        let words = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, account_id, text, definition, examples, list, created_at
            FROM words
            WHERE account_id = $1
              AND (text ILIKE $2 OR definition ILIKE $2 OR examples::text ILIKE $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(account_id)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }
}
