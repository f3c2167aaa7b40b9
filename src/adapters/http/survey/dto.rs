//! HTTP form DTOs for survey endpoints.

use serde::Deserialize;

/// Answer submission form (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerForm {
    /// The selected choice label. Absent when no radio button was picked.
    #[serde(default)]
    pub answer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_form_defaults_to_none() {
        let form = AnswerForm::default();
        assert!(form.answer.is_none());
    }
}
