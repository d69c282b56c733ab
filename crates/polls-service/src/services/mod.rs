//! Application services

mod context;
mod error;
mod poll;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use poll::{PollService, VoteOutcome, LATEST_QUESTION_COUNT, NO_CHOICE_MESSAGE};
