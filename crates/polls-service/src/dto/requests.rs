//! Request DTOs for API endpoints

use serde::Deserialize;

/// Vote submission form
///
/// The `choice` field is what the voter selected. Browsers omit the field
/// entirely when nothing is selected, so it deserializes as `None` rather
/// than failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct VoteForm {
    pub choice: Option<String>,
}

impl VoteForm {
    /// Parse the submitted choice id, if any.
    ///
    /// A missing field and a non-numeric value are both "nothing usable
    /// was selected" to the vote flow.
    pub fn selected_choice(&self) -> Option<i64> {
        self.choice.as_deref().and_then(|raw| raw.parse().ok())
    }
}
