//! SQLite adapter for the [`QuizStore`] port
//!
//! Field constraints live here, at the storage boundary: non-empty
//! question and answer are checked before any write, and the UNIQUE
//! constraint on the question column is mapped back to a field message.

use async_trait::async_trait;
use quiz_application::{QuizStore, StoreError, validate_draft};
use quiz_domain::{Quiz, QuizDraft};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

mod migrate;

/// Quizzes seeded on first run, matching the original data set.
const SEED_QUIZZES: [(&str, &str); 4] = [
    ("Capital of Italy", "Roma"),
    ("Capital of France", "Paris"),
    ("Capital of Spain", "Madrid"),
    ("Capital of Portugal", "Lisboa"),
];

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SqliteInitError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Pooled SQLite store.
#[derive(Clone)]
pub struct SqliteQuizStore {
    pool: SqlitePool,
}

impl SqliteQuizStore {
    /// Connect to SQLite using the given URL.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the connection cannot be established
    /// or the per-connection pragmas fail during setup.
    pub async fn connect(database_url: &str) -> Result<Self, SqliteInitError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .after_connect(|conn, _meta| {
                Box::pin(async move {
                    sqlx::query("PRAGMA journal_mode = WAL;")
                        .execute(&mut *conn)
                        .await?;
                    sqlx::query("PRAGMA busy_timeout = 5000;")
                        .execute(&mut *conn)
                        .await?;
                    Ok(())
                })
            })
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the schema if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if migration queries fail.
    pub async fn migrate(&self) -> Result<(), SqliteInitError> {
        migrate::run_migrations(&self.pool).await
    }

    /// Insert the default quizzes when the table is empty.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the count or the inserts fail.
    pub async fn seed_if_empty(&self) -> Result<(), SqliteInitError> {
        let count: i64 = sqlx::query("SELECT COUNT(*) AS n FROM quizzes")
            .fetch_one(&self.pool)
            .await?
            .get("n");
        if count > 0 {
            return Ok(());
        }

        for (question, answer) in SEED_QUIZZES {
            sqlx::query("INSERT INTO quizzes (question, answer) VALUES (?1, ?2)")
                .bind(question)
                .bind(answer)
                .execute(&self.pool)
                .await?;
        }
        info!(quizzes = SEED_QUIZZES.len(), "seeded empty quiz store");
        Ok(())
    }
}

fn map_quiz_row(row: &sqlx::sqlite::SqliteRow) -> Quiz {
    Quiz::new(
        row.get::<i64, _>("id"),
        row.get::<String, _>("question"),
        row.get::<String, _>("answer"),
    )
}

fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return StoreError::Validation(vec!["this question already exists".to_string()]);
        }
    }
    StoreError::Connection(e.to_string())
}

#[async_trait]
impl QuizStore for SqliteQuizStore {
    async fn list(&self) -> Result<Vec<Quiz>, StoreError> {
        let rows = sqlx::query("SELECT id, question, answer FROM quizzes ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(rows.iter().map(map_quiz_row).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Quiz>, StoreError> {
        let row = sqlx::query("SELECT id, question, answer FROM quizzes WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.as_ref().map(map_quiz_row))
    }

    async fn create(&self, draft: &QuizDraft) -> Result<Quiz, StoreError> {
        let messages = validate_draft(&draft.question, &draft.answer);
        if !messages.is_empty() {
            return Err(StoreError::Validation(messages));
        }

        let result = sqlx::query("INSERT INTO quizzes (question, answer) VALUES (?1, ?2)")
            .bind(&draft.question)
            .bind(&draft.answer)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let id = result.last_insert_rowid();
        debug!(id, "quiz row inserted");
        Ok(Quiz::new(id, draft.question.clone(), draft.answer.clone()))
    }

    async fn update(&self, quiz: &Quiz) -> Result<Quiz, StoreError> {
        let messages = validate_draft(&quiz.question, &quiz.answer);
        if !messages.is_empty() {
            return Err(StoreError::Validation(messages));
        }

        let result = sqlx::query("UPDATE quizzes SET question = ?1, answer = ?2 WHERE id = ?3")
            .bind(&quiz.question)
            .bind(&quiz.answer)
            .bind(quiz.id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Connection(format!(
                "no row updated for id={}",
                quiz.id
            )));
        }
        Ok(quiz.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM quizzes WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteQuizStore>();
    }
}
