//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use polls_core::entities::{Choice, Question};
use serde::Serialize;

// ============================================================================
// Poll Responses
// ============================================================================

/// Message shown when the index has nothing to list
pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

/// A question as it appears in the index listing
#[derive(Debug, Clone, Serialize)]
pub struct QuestionSummary {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl From<Question> for QuestionSummary {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            question_text: question.text,
            pub_date: question.pub_date,
        }
    }
}

/// Index response: the most recently published questions
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub latest_question_list: Vec<QuestionSummary>,
    /// Present only when there is nothing to list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IndexResponse {
    /// Build the index response; an empty list carries an explicit message
    pub fn new(questions: Vec<Question>) -> Self {
        let message = questions
            .is_empty()
            .then(|| NO_POLLS_MESSAGE.to_string());
        Self {
            latest_question_list: questions.into_iter().map(QuestionSummary::from).collect(),
            message,
        }
    }
}

/// A choice as it appears on the voting form
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceResponse {
    pub id: i64,
    pub choice_text: String,
}

impl From<Choice> for ChoiceResponse {
    fn from(choice: Choice) -> Self {
        Self {
            id: choice.id,
            choice_text: choice.text,
        }
    }
}

/// A choice with its vote count, as it appears on the results page
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceResultResponse {
    pub id: i64,
    pub choice_text: String,
    pub votes: i64,
}

impl From<Choice> for ChoiceResultResponse {
    fn from(choice: Choice) -> Self {
        Self {
            id: choice.id,
            choice_text: choice.text,
            votes: choice.votes,
        }
    }
}

/// Detail response: a question with its choices
#[derive(Debug, Serialize)]
pub struct QuestionDetailResponse {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub choices: Vec<ChoiceResponse>,
    /// Present only when a vote submission was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl QuestionDetailResponse {
    /// Build the detail response for a question and its choices
    pub fn new(question: Question, choices: Vec<Choice>) -> Self {
        Self {
            id: question.id,
            question_text: question.text,
            pub_date: question.pub_date,
            choices: choices.into_iter().map(ChoiceResponse::from).collect(),
            error_message: None,
        }
    }

    /// Attach a user-facing error message (rejected vote re-render)
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

/// Results response: a question with per-choice vote counts
#[derive(Debug, Serialize)]
pub struct QuestionResultsResponse {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub choices: Vec<ChoiceResultResponse>,
}

impl QuestionResultsResponse {
    /// Build the results response for a question and its choices
    pub fn new(question: Question, choices: Vec<Choice>) -> Self {
        Self {
            id: question.id,
            question_text: question.text,
            pub_date: question.pub_date,
            choices: choices.into_iter().map(ChoiceResultResponse::from).collect(),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "not ready" },
            database,
        }
    }
}
