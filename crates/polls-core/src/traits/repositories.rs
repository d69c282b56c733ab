//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Handlers receive these as injected
//! dependencies rather than reaching for ambient global state.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Choice, Question};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Question Repository
// ============================================================================

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Find question by ID, regardless of publish date
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Question>>;

    /// Find question by ID, but only if its publish date is not in the future
    async fn find_published_by_id(&self, id: i64) -> RepoResult<Option<Question>>;

    /// List the most recently published questions (publish date not in the
    /// future), newest first. Ties on publish date keep insertion order.
    async fn latest_published(&self, limit: i64) -> RepoResult<Vec<Question>>;

    /// Create a new question, returning it with its assigned ID
    async fn create(&self, text: &str, pub_date: DateTime<Utc>) -> RepoResult<Question>;
}

// ============================================================================
// Choice Repository
// ============================================================================

#[async_trait]
pub trait ChoiceRepository: Send + Sync {
    /// List all choices for a question in insertion order
    async fn find_by_question(&self, question_id: i64) -> RepoResult<Vec<Choice>>;

    /// Find a choice by ID scoped to its owning question
    async fn find_scoped(&self, choice_id: i64, question_id: i64) -> RepoResult<Option<Choice>>;

    /// Atomically increment the vote counter of a choice scoped to its
    /// owning question. Returns false when no such choice exists.
    async fn record_vote(&self, choice_id: i64, question_id: i64) -> RepoResult<bool>;

    /// Create a new choice with zero votes, returning it with its assigned ID
    async fn create(&self, question_id: i64, text: &str) -> RepoResult<Choice>;
}
