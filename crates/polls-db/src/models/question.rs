//! Question database model

use chrono::{DateTime, Utc};
use polls_core::entities::Question;
use sqlx::FromRow;

/// Database model for the questions table
#[derive(Debug, Clone, FromRow)]
pub struct QuestionModel {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl From<QuestionModel> for Question {
    fn from(model: QuestionModel) -> Self {
        Question {
            id: model.id,
            text: model.question_text,
            pub_date: model.pub_date,
        }
    }
}
