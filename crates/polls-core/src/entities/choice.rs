//! Choice entity - one selectable answer to a Question

/// Choice entity
///
/// Invariant: `votes >= 0` and only ever grows through [`Choice::record_vote`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub votes: i64,
}

impl Choice {
    /// Create a new Choice with zero votes
    pub fn new(id: i64, question_id: i64, text: String) -> Self {
        Self {
            id,
            question_id,
            text,
            votes: 0,
        }
    }

    /// Record a single vote for this choice
    pub fn record_vote(&mut self) {
        self.votes += 1;
    }

    /// Check if the choice belongs to the given question
    #[inline]
    pub fn belongs_to(&self, question_id: i64) -> bool {
        self.question_id == question_id
    }
}
