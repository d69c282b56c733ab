//! # polls-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    ChoiceResponse, ChoiceResultResponse, HealthResponse, IndexResponse, QuestionDetailResponse,
    QuestionResultsResponse, QuestionSummary, ReadinessResponse, VoteForm, NO_POLLS_MESSAGE,
};
pub use services::{
    PollService, ServiceContext, ServiceError, ServiceResult, VoteOutcome, LATEST_QUESTION_COUNT,
    NO_CHOICE_MESSAGE,
};
