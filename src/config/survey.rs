//! Survey definition configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::survey::{satisfaction_survey, Survey, SurveyError};

use super::error::ValidationError;

/// Which survey to serve and how strictly to check answers
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyConfig {
    /// YAML survey definition; the built-in satisfaction survey when unset
    pub definition_path: Option<PathBuf>,

    /// Reject submitted answers that are not one of the question's choices
    #[serde(default = "default_validate_choices")]
    pub validate_choices: bool,
}

impl SurveyConfig {
    /// Load the configured survey
    pub fn load_survey(&self) -> Result<Survey, SurveyError> {
        match &self.definition_path {
            Some(path) => Survey::load_yaml_file(path),
            None => satisfaction_survey(),
        }
    }

    /// Validate survey configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.definition_path {
            if !path.is_file() {
                return Err(ValidationError::SurveyDefinitionNotFound(path.clone()));
            }
        }
        Ok(())
    }
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            definition_path: None,
            validate_choices: default_validate_choices(),
        }
    }
}

fn default_validate_choices() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_survey_config_defaults() {
        let config = SurveyConfig::default();
        assert!(config.definition_path.is_none());
        assert!(config.validate_choices);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_loads_builtin_survey() {
        let survey = SurveyConfig::default().load_survey().unwrap();
        assert_eq!(survey.title(), "Customer Satisfaction Survey");
    }

    #[test]
    fn test_loads_definition_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title: File Survey\nquestions:\n  - prompt: Ok?").unwrap();

        let config = SurveyConfig {
            definition_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        assert!(config.validate().is_ok());
        assert_eq!(config.load_survey().unwrap().title(), "File Survey");
    }

    #[test]
    fn test_missing_definition_file_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let config = SurveyConfig {
            definition_path: Some(dir.path().join("nope.yaml")),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::SurveyDefinitionNotFound(_))
        ));
    }
}
