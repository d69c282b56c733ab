//! Repository traits (ports) for the record store

mod repositories;

pub use repositories::{ChoiceRepository, QuestionRepository, RepoResult};
