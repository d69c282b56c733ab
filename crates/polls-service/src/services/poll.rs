//! Poll service
//!
//! Handles the index listing, question detail, results, and vote casting.

use tracing::{info, instrument};

use crate::dto::{IndexResponse, QuestionDetailResponse, QuestionResultsResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// How many questions the index lists
pub const LATEST_QUESTION_COUNT: i64 = 5;

/// Message attached to the detail view when a vote submission is unusable
pub const NO_CHOICE_MESSAGE: &str = "You didn't select a choice";

/// Outcome of a vote submission
#[derive(Debug)]
pub enum VoteOutcome {
    /// The vote was counted; the caller should redirect to the results view
    Recorded { question_id: i64 },
    /// Nothing usable was selected; the caller should re-render the detail
    /// view with the attached message. This is not an error status.
    NotSelected(QuestionDetailResponse),
}

/// Poll service
pub struct PollService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PollService<'a> {
    /// Create a new PollService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the most recently published questions, newest first.
    ///
    /// Future-dated questions never appear. An empty listing carries an
    /// explicit "no polls" message rather than a bare empty list.
    #[instrument(skip(self))]
    pub async fn latest_questions(&self) -> ServiceResult<IndexResponse> {
        let questions = self
            .ctx
            .question_repo()
            .latest_published(LATEST_QUESTION_COUNT)
            .await?;

        Ok(IndexResponse::new(questions))
    }

    /// Get a question with its choices.
    ///
    /// Future-dated questions are reported as not found, indistinguishable
    /// from questions that do not exist.
    #[instrument(skip(self))]
    pub async fn question_detail(&self, question_id: i64) -> ServiceResult<QuestionDetailResponse> {
        let question = self
            .ctx
            .question_repo()
            .find_published_by_id(question_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Question", question_id))?;

        let choices = self.ctx.choice_repo().find_by_question(question_id).await?;

        Ok(QuestionDetailResponse::new(question, choices))
    }

    /// Get a question with its current vote counts.
    ///
    /// No visibility filter here: future-dated questions are visible on the
    /// results view even though the detail view hides them.
    #[instrument(skip(self))]
    pub async fn question_results(&self, question_id: i64) -> ServiceResult<QuestionResultsResponse> {
        let question = self
            .ctx
            .question_repo()
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Question", question_id))?;

        let choices = self.ctx.choice_repo().find_by_question(question_id).await?;

        Ok(QuestionResultsResponse::new(question, choices))
    }

    /// Cast a vote for a choice of the given question.
    ///
    /// An unknown question is an error; a missing or unknown choice is not —
    /// it re-renders the detail view with a message so the voter can try
    /// again. A counted vote increments by exactly 1, atomically in storage.
    #[instrument(skip(self))]
    pub async fn cast_vote(
        &self,
        question_id: i64,
        selected_choice: Option<i64>,
    ) -> ServiceResult<VoteOutcome> {
        let question = self
            .ctx
            .question_repo()
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Question", question_id))?;

        let choice_id = match selected_choice {
            Some(id) => id,
            None => {
                info!(question_id, "Vote submitted without a choice");
                return self.rejected_vote(question).await;
            }
        };

        let counted = self
            .ctx
            .choice_repo()
            .record_vote(choice_id, question_id)
            .await?;

        if counted {
            info!(question_id, choice_id, "Vote recorded");
            Ok(VoteOutcome::Recorded { question_id })
        } else {
            info!(question_id, choice_id, "Vote submitted for unknown choice");
            self.rejected_vote(question).await
        }
    }

    /// Re-render the detail view for a rejected vote submission
    async fn rejected_vote(
        &self,
        question: polls_core::entities::Question,
    ) -> ServiceResult<VoteOutcome> {
        let choices = self.ctx.choice_repo().find_by_question(question.id).await?;
        let detail = QuestionDetailResponse::new(question, choices).with_error(NO_CHOICE_MESSAGE);
        Ok(VoteOutcome::NotSelected(detail))
    }
}
