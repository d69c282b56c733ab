//! Poll handlers
//!
//! Endpoints for listing questions, viewing a question, viewing results,
//! and casting votes.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Form, Json,
};
use polls_service::{
    IndexResponse, PollService, QuestionDetailResponse, QuestionResultsResponse, VoteForm,
    VoteOutcome,
};

use crate::response::{ApiError, ApiResult, Found};
use crate::state::AppState;

/// Parse a question id from its path segment.
///
/// A malformed id is reported as not found, the same as an id that
/// matches no record.
fn parse_question_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::not_found(format!("Question {raw}")))
}

/// List the latest questions
///
/// GET /polls
pub async fn index(State(state): State<AppState>) -> ApiResult<Json<IndexResponse>> {
    let service = PollService::new(state.service_context());
    let response = service.latest_questions().await?;
    Ok(Json(response))
}

/// Get a question with its choices
///
/// GET /polls/{question_id}
pub async fn detail(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> ApiResult<Json<QuestionDetailResponse>> {
    let question_id = parse_question_id(&question_id)?;

    let service = PollService::new(state.service_context());
    let response = service.question_detail(question_id).await?;
    Ok(Json(response))
}

/// Get a question with its vote counts
///
/// GET /polls/{question_id}/results
pub async fn results(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> ApiResult<Json<QuestionResultsResponse>> {
    let question_id = parse_question_id(&question_id)?;

    let service = PollService::new(state.service_context());
    let response = service.question_results(question_id).await?;
    Ok(Json(response))
}

/// Cast a vote for one of a question's choices
///
/// POST /polls/{question_id}/vote
///
/// A counted vote answers with a redirect to the results view so a
/// back/refresh cannot submit twice. A rejected submission re-renders the
/// detail payload with a message, still as a 200.
pub async fn vote(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    Form(form): Form<VoteForm>,
) -> ApiResult<Response> {
    let question_id = parse_question_id(&question_id)?;

    let service = PollService::new(state.service_context());
    let outcome = service
        .cast_vote(question_id, form.selected_choice())
        .await?;

    let response = match outcome {
        VoteOutcome::Recorded { question_id } => {
            Found(format!("/polls/{question_id}/results")).into_response()
        }
        VoteOutcome::NotSelected(detail) => Json(detail).into_response(),
    };

    Ok(response)
}
