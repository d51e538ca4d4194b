use serde::Deserialize;
use validator::Validate;

use crate::models::domain::QuizAnswers;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateRequest {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
}

impl GenerateRequest {
    /// The raw text with surrounding whitespace removed; whitespace-only
    /// input is rejected before any request is built.
    pub fn trimmed_text(&self) -> Option<&str> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    pub answers: QuizAnswers,
}
