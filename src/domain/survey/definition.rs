//! Survey definition.
//!
//! Surveys can be built in code or loaded from YAML:
//!
//! ```yaml
//! title: Customer Satisfaction Survey
//! instructions: Please fill out a survey about your experience with us.
//! questions:
//!   - prompt: Have you shopped here before?
//!   - prompt: On average, how much do you spend a month on frivolous things?
//!     choices: ["Less than $10,000", "$10,000 or more"]
//! ```
//!
//! A question without `choices` is a Yes/No question.

use std::path::Path;

use serde::Deserialize;

use crate::domain::foundation::ValidationError;

use super::errors::SurveyError;
use super::question::Question;

/// Immutable survey: title, instructions, and ordered questions.
///
/// # Invariants
///
/// - `title` is non-empty
/// - at least one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survey {
    title: String,
    instructions: String,
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct SurveyDocument {
    title: String,
    #[serde(default)]
    instructions: String,
    questions: Vec<QuestionDocument>,
}

#[derive(Debug, Deserialize)]
struct QuestionDocument {
    prompt: String,
    #[serde(default)]
    choices: Vec<String>,
}

impl Survey {
    /// Create a survey.
    ///
    /// # Errors
    ///
    /// - `Invalid` if the title is blank or there are no questions
    pub fn new(
        title: impl Into<String>,
        instructions: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, SurveyError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions").into());
        }

        Ok(Self {
            title,
            instructions: instructions.into(),
            questions,
        })
    }

    /// Parse and validate a YAML survey definition.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SurveyError> {
        let document: SurveyDocument = serde_yaml::from_str(yaml)?;

        let questions = document
            .questions
            .into_iter()
            .map(|q| Question::new(q.prompt, q.choices))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(document.title, document.instructions, questions)
    }

    /// Read, parse, and validate a YAML survey definition file.
    pub fn load_yaml_file(path: impl AsRef<Path>) -> Result<Self, SurveyError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| SurveyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the survey title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the instructions shown on the start page.
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Returns the number of questions.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Returns all questions in order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the question at `index`.
    ///
    /// # Errors
    ///
    /// - `QuestionOutOfRange` if `index >= question_count()`
    pub fn question_at(&self, index: usize) -> Result<&Question, SurveyError> {
        self.questions
            .get(index)
            .ok_or(SurveyError::QuestionOutOfRange {
                index,
                count: self.questions.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = r#"
title: Pet Survey
instructions: Tell us about your pets.
questions:
  - prompt: Do you own a cat?
  - prompt: Favourite colour?
    choices: [Red, Green, Blue]
"#;

    #[test]
    fn parses_yaml_definition() {
        let survey = Survey::from_yaml_str(YAML).unwrap();
        assert_eq!(survey.title(), "Pet Survey");
        assert_eq!(survey.instructions(), "Tell us about your pets.");
        assert_eq!(survey.question_count(), 2);
        assert_eq!(survey.question_at(0).unwrap().choices().len(), 2);
        assert_eq!(survey.question_at(1).unwrap().choices()[2], "Blue");
    }

    #[test]
    fn instructions_are_optional() {
        let survey =
            Survey::from_yaml_str("title: T\nquestions:\n  - prompt: Q?\n").unwrap();
        assert_eq!(survey.instructions(), "");
    }

    #[test]
    fn rejects_survey_without_questions() {
        let result = Survey::from_yaml_str("title: T\nquestions: []\n");
        assert!(matches!(result, Err(SurveyError::Invalid(_))));
    }

    #[test]
    fn rejects_blank_title() {
        let q = Question::yes_no("Q?").unwrap();
        assert!(Survey::new(" ", "", vec![q]).is_err());
    }

    #[test]
    fn rejects_malformed_yaml() {
        let result = Survey::from_yaml_str("title: [unterminated");
        assert!(matches!(result, Err(SurveyError::Parse(_))));
    }

    #[test]
    fn rejects_duplicate_choices_in_yaml() {
        let yaml = "title: T\nquestions:\n  - prompt: Q?\n    choices: [A, A]\n";
        assert!(matches!(
            Survey::from_yaml_str(yaml),
            Err(SurveyError::Invalid(_))
        ));
    }

    #[test]
    fn question_at_out_of_range_fails() {
        let survey = Survey::from_yaml_str(YAML).unwrap();
        assert!(matches!(
            survey.question_at(2),
            Err(SurveyError::QuestionOutOfRange { index: 2, count: 2 })
        ));
    }

    #[test]
    fn loads_definition_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let survey = Survey::load_yaml_file(file.path()).unwrap();
        assert_eq!(survey.question_count(), 2);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let err = Survey::load_yaml_file(&path).unwrap_err();
        assert!(matches!(err, SurveyError::Io { .. }));
        assert!(err.to_string().contains("missing.yaml"));
    }
}
