//! Visitor session aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, VisitorId};

use super::notice::Notice;

/// Per-visitor survey state.
///
/// # Invariants
///
/// - `answers.len()` is the index of the next unanswered question
/// - answers are only ever appended, or cleared as a whole by a restart
/// - `notices` are drained by the next render, never re-shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorSession {
    visitor_id: VisitorId,
    answers: Vec<String>,
    notices: Vec<Notice>,
    created_at: Timestamp,
    last_seen_at: Timestamp,
}

impl VisitorSession {
    /// Create an empty session for a visitor.
    pub fn new(visitor_id: VisitorId) -> Self {
        let now = Timestamp::now();
        Self {
            visitor_id,
            answers: Vec::new(),
            notices: Vec::new(),
            created_at: now,
            last_seen_at: now,
        }
    }

    /// Reconstitute a session from storage (no validation).
    pub fn reconstitute(
        visitor_id: VisitorId,
        answers: Vec<String>,
        notices: Vec<Notice>,
        created_at: Timestamp,
        last_seen_at: Timestamp,
    ) -> Self {
        Self {
            visitor_id,
            answers,
            notices,
            created_at,
            last_seen_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn visitor_id(&self) -> &VisitorId {
        &self.visitor_id
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Number of questions answered; also the index of the awaited question.
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    pub fn pending_notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn last_seen_at(&self) -> &Timestamp {
        &self.last_seen_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Forget every answer. Pending notices survive.
    pub fn reset_answers(&mut self) {
        self.answers.clear();
    }

    /// Append the answer to the awaited question.
    pub fn record_answer(&mut self, answer: impl Into<String>) {
        self.answers.push(answer.into());
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Remove and return all pending notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn touch(&mut self) {
        self.last_seen_at = Timestamp::now();
    }

    /// True if the session has been idle for longer than `idle_timeout_secs` at `now`.
    pub fn is_expired_at(&self, now: &Timestamp, idle_timeout_secs: u64) -> bool {
        self.last_seen_at.plus_secs(idle_timeout_secs).is_before(now)
    }
}
