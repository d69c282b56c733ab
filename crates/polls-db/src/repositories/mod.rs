//! PostgreSQL repository implementations

mod choice;
mod error;
mod question;

pub use choice::PgChoiceRepository;
pub use question::PgQuestionRepository;
