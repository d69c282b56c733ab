//! Choice database model

use polls_core::entities::Choice;
use sqlx::FromRow;

/// Database model for the choices table
#[derive(Debug, Clone, FromRow)]
pub struct ChoiceModel {
    pub id: i64,
    pub question_id: i64,
    pub choice_text: String,
    pub votes: i64,
}

impl From<ChoiceModel> for Choice {
    fn from(model: ChoiceModel) -> Self {
        Choice {
            id: model.id,
            question_id: model.question_id,
            text: model.choice_text,
            votes: model.votes,
        }
    }
}
