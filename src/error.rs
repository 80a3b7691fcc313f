//! Error handling for the skill lens application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillLensError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Synonym '{alternate}' maps to both '{existing}' and '{incoming}'")]
    SynonymConflict {
        alternate: String,
        existing: String,
        incoming: String,
    },

    #[error("Role not found: {role}{}", suggestion_hint(.suggestion))]
    RoleNotFound {
        role: String,
        suggestion: Option<String>,
    },

    #[error("Role catalog error: {0}")]
    Catalog(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(id) => format!(" (did you mean '{}'?)", id),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, SkillLensError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for SkillLensError {
    fn from(err: anyhow::Error) -> Self {
        SkillLensError::Processing(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_not_found_message_includes_suggestion() {
        let err = SkillLensError::RoleNotFound {
            role: "frontend-dev".to_string(),
            suggestion: Some("frontend-developer".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Role not found: frontend-dev (did you mean 'frontend-developer'?)"
        );

        let err = SkillLensError::RoleNotFound {
            role: "astronaut".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Role not found: astronaut");
    }

    #[test]
    fn test_anyhow_errors_become_processing_errors() {
        let err: SkillLensError = anyhow::anyhow!("pipeline stalled").into();
        assert!(matches!(err, SkillLensError::Processing(ref msg) if msg == "pipeline stalled"));
    }
}
