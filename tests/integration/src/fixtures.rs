//! Test fixtures and data generators
//!
//! Provides reusable test data and response payload shapes for the
//! integration tests. Questions are created directly through the
//! repositories with a day offset relative to now, so tests can stage
//! past and future publish dates.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use chrono::{Duration, Utc};
use polls_core::{Choice, ChoiceRepository, Question, QuestionRepository};
use serde::Deserialize;

use crate::helpers::TestServer;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Build a unique question text
pub fn unique_text(prefix: &str) -> String {
    format!("{} {}?", prefix, unique_suffix())
}

/// Create a question whose publish date is offset by `days` from now.
/// Negative values publish in the past, positive values in the future.
pub async fn create_question(server: &TestServer, text: &str, days: i64) -> Result<Question> {
    let pub_date = Utc::now() + Duration::days(days);
    let question = server
        .state
        .service_context()
        .question_repo()
        .create(text, pub_date)
        .await?;
    Ok(question)
}

/// Create a choice for a question
pub async fn create_choice(server: &TestServer, question_id: i64, text: &str) -> Result<Choice> {
    let choice = server
        .state
        .service_context()
        .choice_repo()
        .create(question_id, text)
        .await?;
    Ok(choice)
}

/// Create a question with two choices, returning the question and choices
pub async fn create_question_with_choices(
    server: &TestServer,
    text: &str,
    days: i64,
) -> Result<(Question, Vec<Choice>)> {
    let question = create_question(server, text, days).await?;
    let first = create_choice(server, question.id, "Not much").await?;
    let second = create_choice(server, question.id, "The sky").await?;
    Ok((question, vec![first, second]))
}

/// Remove all questions and choices from the test database.
/// Callers must hold the database lock.
pub async fn reset_polls(server: &TestServer) -> Result<()> {
    sqlx::query("TRUNCATE TABLE choices, questions RESTART IDENTITY CASCADE")
        .execute(server.state.pool())
        .await?;
    Ok(())
}

// ============================================================================
// Response payloads
// ============================================================================

/// Question list response
#[derive(Debug, Deserialize)]
pub struct IndexPayload {
    pub latest_question_list: Vec<QuestionSummaryPayload>,
    pub message: Option<String>,
}

/// Question summary in the list response
#[derive(Debug, Deserialize)]
pub struct QuestionSummaryPayload {
    pub id: i64,
    pub question_text: String,
    pub pub_date: String,
}

/// Question detail response
#[derive(Debug, Deserialize)]
pub struct DetailPayload {
    pub id: i64,
    pub question_text: String,
    pub pub_date: String,
    pub choices: Vec<ChoicePayload>,
    pub error_message: Option<String>,
}

/// Choice in the detail response
#[derive(Debug, Deserialize)]
pub struct ChoicePayload {
    pub id: i64,
    pub choice_text: String,
}

/// Question results response
#[derive(Debug, Deserialize)]
pub struct ResultsPayload {
    pub id: i64,
    pub question_text: String,
    pub choices: Vec<ChoiceResultPayload>,
}

/// Choice with its tally in the results response
#[derive(Debug, Deserialize)]
pub struct ChoiceResultPayload {
    pub id: i64,
    pub choice_text: String,
    pub votes: i64,
}

/// Health check response
#[derive(Debug, Deserialize)]
pub struct HealthPayload {
    pub status: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
