//! Service context - dependency container for services
//!
//! Holds the repository implementations behind their trait objects so the
//! services (and handlers above them) never touch storage directly.

use std::sync::Arc;

use polls_core::traits::{ChoiceRepository, QuestionRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    question_repo: Arc<dyn QuestionRepository>,
    choice_repo: Arc<dyn ChoiceRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        question_repo: Arc<dyn QuestionRepository>,
        choice_repo: Arc<dyn ChoiceRepository>,
    ) -> Self {
        Self {
            question_repo,
            choice_repo,
        }
    }

    /// Get the question repository
    pub fn question_repo(&self) -> &dyn QuestionRepository {
        self.question_repo.as_ref()
    }

    /// Get the choice repository
    pub fn choice_repo(&self) -> &dyn ChoiceRepository {
        self.choice_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}
