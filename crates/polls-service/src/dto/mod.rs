//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::VoteForm;

// Re-export commonly used response types
pub use responses::{
    ChoiceResponse, ChoiceResultResponse, HealthResponse, IndexResponse, QuestionDetailResponse,
    QuestionResultsResponse, QuestionSummary, ReadinessResponse, NO_POLLS_MESSAGE,
};
