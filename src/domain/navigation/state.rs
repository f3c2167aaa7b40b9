//! Progress state derived from the visitor's answer count.

/// Where a visitor stands in the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    /// Waiting for the answer to question `n`.
    AwaitingQuestion(usize),
    /// Every question answered. Terminal.
    Completed,
}

impl ProgressState {
    /// Derive the state from answers recorded and total questions.
    pub fn from_progress(answered: usize, question_count: usize) -> Self {
        if answered >= question_count {
            ProgressState::Completed
        } else {
            ProgressState::AwaitingQuestion(answered)
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ProgressState::Completed)
    }
}
