//! Domain entities - core business objects

mod choice;
mod question;

pub use choice::Choice;
pub use question::{Question, RECENT_WINDOW_HOURS};
