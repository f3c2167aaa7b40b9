//! Question value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Choices offered when a question declares none.
pub const DEFAULT_CHOICES: [&str; 2] = ["Yes", "No"];

/// A single-choice survey question.
///
/// # Invariants
///
/// - `prompt` is non-empty
/// - `choices` is non-empty, every label is non-empty and unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    choices: Vec<String>,
}

impl Question {
    /// Creates a question with an explicit, ordered set of choices.
    ///
    /// An empty `choices` list falls back to [`DEFAULT_CHOICES`].
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the prompt or any label is blank
    /// - `InvalidFormat` if a label appears twice
    pub fn new(
        prompt: impl Into<String>,
        choices: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }

        let choices = if choices.is_empty() {
            DEFAULT_CHOICES.iter().map(|c| c.to_string()).collect()
        } else {
            choices
        };

        for (i, label) in choices.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(ValidationError::empty_field("choices"));
            }
            if choices[..i].contains(label) {
                return Err(ValidationError::invalid_format(
                    "choices",
                    format!("duplicate label '{}'", label),
                ));
            }
        }

        Ok(Self { prompt, choices })
    }

    /// Creates a question answered with "Yes" or "No".
    pub fn yes_no(prompt: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(prompt, Vec::new())
    }

    /// Returns the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the choice labels in display order.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Returns true if `label` is one of this question's choices.
    pub fn has_choice(&self, label: &str) -> bool {
        self.choices.iter().any(|c| c == label)
    }
}
