use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("Feedback text cannot be empty")]
    EmptyText,
}

/// One submitted, timestamped piece of feedback
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackEntry {
    pub id: Uuid,
    pub text: String,
    pub submitted_at_label: String,
}

impl FeedbackEntry {
    /// Trims `text` and rejects it if nothing is left
    pub fn new(text: &str, submitted_at_label: impl Into<String>) -> Result<Self, FeedbackError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(FeedbackError::EmptyText);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            text: trimmed.to_string(),
            submitted_at_label: submitted_at_label.into(),
        })
    }
}
