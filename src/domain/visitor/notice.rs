//! One-shot notices shown on the next rendered page.

use serde::{Deserialize, Serialize};

/// Message queued when a visitor requests a question out of order.
pub const INVALID_QUESTION_MESSAGE: &str = "You're trying to access an invalid question!";

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
}

impl NoticeLevel {
    /// Stable lowercase name, used as the CSS class on rendered pages.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
        }
    }
}

/// A message delivered once, on the next page rendered for the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    /// The warning queued for out-of-sequence question access.
    pub fn invalid_question() -> Self {
        Self::warning(INVALID_QUESTION_MESSAGE)
    }
}
