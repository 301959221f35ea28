use crate::domain::feedback::{FeedbackEntry, FeedbackError};
use crate::services::Clock;
use tracing::debug;

/// Session-local feedback state: the draft being typed and every entry
/// submitted so far, newest first. Nothing here outlives the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardSession {
    draft: String,
    entries: Vec<FeedbackEntry>,
}

impl BoardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    /// Replaces the draft verbatim
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Turns the draft into an entry at the front of the list and clears it.
    /// A blank draft is refused and left untouched.
    pub fn submit(&mut self, clock: &dyn Clock) -> Result<&FeedbackEntry, FeedbackError> {
        if self.draft.trim().is_empty() {
            debug!("Ignoring blank feedback submission");
            return Err(FeedbackError::EmptyText);
        }

        let entry = FeedbackEntry::new(&self.draft, clock.now_label())?;
        debug!(id = %entry.id, "Feedback submitted");

        self.entries.insert(0, entry);
        self.draft.clear();
        Ok(&self.entries[0])
    }
}
