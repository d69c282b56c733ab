//! Database row models

mod choice;
mod question;

pub use choice::ChoiceModel;
pub use question::QuestionModel;
