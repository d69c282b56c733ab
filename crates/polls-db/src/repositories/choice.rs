//! PostgreSQL implementation of ChoiceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use polls_core::entities::Choice;
use polls_core::traits::{ChoiceRepository, RepoResult};

use crate::models::ChoiceModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ChoiceRepository
#[derive(Clone)]
pub struct PgChoiceRepository {
    pool: PgPool,
}

impl PgChoiceRepository {
    /// Create a new PgChoiceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChoiceRepository for PgChoiceRepository {
    #[instrument(skip(self))]
    async fn find_by_question(&self, question_id: i64) -> RepoResult<Vec<Choice>> {
        let results = sqlx::query_as::<_, ChoiceModel>(
            r#"
            SELECT id, question_id, choice_text, votes
            FROM choices
            WHERE question_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Choice::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_scoped(&self, choice_id: i64, question_id: i64) -> RepoResult<Option<Choice>> {
        let result = sqlx::query_as::<_, ChoiceModel>(
            r#"
            SELECT id, question_id, choice_text, votes
            FROM choices
            WHERE id = $1 AND question_id = $2
            "#,
        )
        .bind(choice_id)
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Choice::from))
    }

    #[instrument(skip(self))]
    async fn record_vote(&self, choice_id: i64, question_id: i64) -> RepoResult<bool> {
        // Single-statement increment: concurrent votes cannot lose updates
        // the way a read-modify-write pair would.
        let result = sqlx::query(
            r#"
            UPDATE choices
            SET votes = votes + 1
            WHERE id = $1 AND question_id = $2
            "#,
        )
        .bind(choice_id)
        .bind(question_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn create(&self, question_id: i64, text: &str) -> RepoResult<Choice> {
        let model = sqlx::query_as::<_, ChoiceModel>(
            r#"
            INSERT INTO choices (question_id, choice_text)
            VALUES ($1, $2)
            RETURNING id, question_id, choice_text, votes
            "#,
        )
        .bind(question_id)
        .bind(text)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Choice::from(model))
    }
}
