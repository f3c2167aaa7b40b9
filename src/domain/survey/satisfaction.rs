//! Built-in customer satisfaction survey, used when no definition file is configured.

use super::definition::Survey;
use super::errors::SurveyError;
use super::question::Question;

/// Returns the default customer satisfaction survey.
pub fn satisfaction_survey() -> Result<Survey, SurveyError> {
    Survey::new(
        "Customer Satisfaction Survey",
        "Please fill out a survey about your experience with us.",
        vec![
            Question::yes_no("Have you shopped here before?")?,
            Question::yes_no("Did someone else shop with you today?")?,
            Question::new(
                "On average, how much do you spend a month on frivolous things?",
                vec!["Less than $10,000".to_string(), "$10,000 or more".to_string()],
            )?,
            Question::yes_no("Are you likely to shop here again?")?,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satisfaction_survey_has_four_questions() {
        let survey = satisfaction_survey().unwrap();
        assert_eq!(survey.title(), "Customer Satisfaction Survey");
        assert_eq!(survey.question_count(), 4);
    }

    #[test]
    fn spending_question_has_custom_choices() {
        let survey = satisfaction_survey().unwrap();
        let q = survey.question_at(2).unwrap();
        assert!(q.has_choice("Less than $10,000"));
        assert!(!q.has_choice("Yes"));
    }
}
