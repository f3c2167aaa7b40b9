//! Sequential-access decisions.
//!
//! The navigator is pure: it reads the answer count and the request, and
//! returns what should happen. Applying the outcome to a session is the
//! application layer's job.

use std::sync::Arc;

use crate::domain::survey::{Question, Survey};

use super::errors::NavigationError;
use super::state::ProgressState;

/// What to do with a question request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Render `question`, which is question `index`.
    ShowQuestion { index: usize, question: Question },
    /// Render the thank-you page.
    ShowComplete,
    /// Append `answer`, then continue at `next` or complete when `None`.
    Record { answer: String, next: Option<usize> },
    /// Send the visitor to question `to` without recording anything.
    Redirect { to: usize, error: NavigationError },
}

/// Decides view and submit requests against a fixed survey.
#[derive(Debug, Clone)]
pub struct Navigator {
    survey: Arc<Survey>,
    validate_choices: bool,
}

impl Navigator {
    /// Create a navigator that only accepts declared choice labels.
    pub fn new(survey: Arc<Survey>) -> Self {
        Self {
            survey,
            validate_choices: true,
        }
    }

    /// Accept any non-empty submitted value when `enabled` is false.
    pub fn with_choice_validation(mut self, enabled: bool) -> Self {
        self.validate_choices = enabled;
        self
    }

    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    pub fn question_count(&self) -> usize {
        self.survey.question_count()
    }

    /// Effective progress for `answered` recorded answers, never past the end.
    pub fn progress(&self, answered: usize) -> usize {
        let count = self.question_count();
        if answered > count {
            tracing::warn!(answered, count, "Recorded answers exceed survey length");
        }
        answered.min(count)
    }

    pub fn state(&self, answered: usize) -> ProgressState {
        ProgressState::from_progress(self.progress(answered), self.question_count())
    }

    /// Decide a request to view question `requested`.
    pub fn view(&self, answered: usize, requested: Option<usize>) -> NavigationOutcome {
        let n = match self.check_sequence(answered, requested) {
            Ok(n) => n,
            Err(redirect) => return redirect,
        };

        match self.state(n) {
            ProgressState::Completed => NavigationOutcome::ShowComplete,
            ProgressState::AwaitingQuestion(index) => match self.survey.question_at(index) {
                Ok(question) => NavigationOutcome::ShowQuestion {
                    index,
                    question: question.clone(),
                },
                Err(e) => self.out_of_range(index, e),
            },
        }
    }

    /// Decide a submission of `choice` for question `requested`.
    pub fn submit(
        &self,
        answered: usize,
        requested: Option<usize>,
        choice: Option<&str>,
    ) -> NavigationOutcome {
        let n = match self.check_sequence(answered, requested) {
            Ok(n) => n,
            Err(redirect) => return redirect,
        };

        let index = match self.state(n) {
            ProgressState::Completed => return NavigationOutcome::ShowComplete,
            ProgressState::AwaitingQuestion(index) => index,
        };

        let choice = match choice {
            Some(c) if !c.is_empty() => c,
            _ => {
                return NavigationOutcome::Redirect {
                    to: index,
                    error: NavigationError::MissingAnswer { index },
                }
            }
        };

        if self.validate_choices {
            let question = match self.survey.question_at(index) {
                Ok(q) => q,
                Err(e) => return self.out_of_range(index, e),
            };
            if !question.has_choice(choice) {
                return NavigationOutcome::Redirect {
                    to: index,
                    error: NavigationError::InvalidChoice {
                        index,
                        choice: choice.to_string(),
                    },
                };
            }
        }

        let next = index + 1;
        NavigationOutcome::Record {
            answer: choice.to_string(),
            next: (next < self.question_count()).then_some(next),
        }
    }

    fn check_sequence(
        &self,
        answered: usize,
        requested: Option<usize>,
    ) -> Result<usize, NavigationOutcome> {
        let expected = self.progress(answered);
        if requested == Some(expected) {
            Ok(expected)
        } else {
            Err(NavigationOutcome::Redirect {
                to: expected,
                error: NavigationError::OutOfSequence {
                    requested,
                    expected,
                },
            })
        }
    }

    fn out_of_range(
        &self,
        index: usize,
        error: crate::domain::survey::SurveyError,
    ) -> NavigationOutcome {
        tracing::warn!(index, error = %error, "Question lookup failed for awaited index");
        NavigationOutcome::Redirect {
            to: index,
            error: NavigationError::ProgressOutOfRange {
                answered: index,
                count: self.question_count(),
            },
        }
    }
}
