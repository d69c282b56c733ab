//! PostgreSQL implementation of QuestionRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use polls_core::entities::Question;
use polls_core::traits::{QuestionRepository, RepoResult};

use crate::models::QuestionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of QuestionRepository
#[derive(Clone)]
pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    /// Create a new PgQuestionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Question>> {
        let result = sqlx::query_as::<_, QuestionModel>(
            r#"
            SELECT id, question_text, pub_date
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Question::from))
    }

    #[instrument(skip(self))]
    async fn find_published_by_id(&self, id: i64) -> RepoResult<Option<Question>> {
        // Future-dated questions are filtered here so they are
        // indistinguishable from nonexistent ones.
        let result = sqlx::query_as::<_, QuestionModel>(
            r#"
            SELECT id, question_text, pub_date
            FROM questions
            WHERE id = $1 AND pub_date <= NOW()
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Question::from))
    }

    #[instrument(skip(self))]
    async fn latest_published(&self, limit: i64) -> RepoResult<Vec<Question>> {
        // Ties on pub_date fall back to insertion order via the primary key.
        let results = sqlx::query_as::<_, QuestionModel>(
            r#"
            SELECT id, question_text, pub_date
            FROM questions
            WHERE pub_date <= NOW()
            ORDER BY pub_date DESC, id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Question::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, text: &str, pub_date: DateTime<Utc>) -> RepoResult<Question> {
        let model = sqlx::query_as::<_, QuestionModel>(
            r#"
            INSERT INTO questions (question_text, pub_date)
            VALUES ($1, $2)
            RETURNING id, question_text, pub_date
            "#,
        )
        .bind(text)
        .bind(pub_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Question::from(model))
    }
}
