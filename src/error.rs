//! Extraction errors
//!
//! Every failure aborts extraction for the whole document. Each error has a
//! stable, user-facing message; solution failures additionally keep the
//! precise cause as their `source()` for diagnostics.

use serde::Serialize;
use std::path::PathBuf;

/// Broad class of an extraction failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required region or node is missing or has the wrong shape
    Structural,
    /// A value is present but semantically invalid
    Validation,
    /// A question's top-level field is empty after extraction
    Assembly,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    #[error("Answer missing")]
    AnswerMissing,

    #[error("A video solution should be a positive integer")]
    InvalidSolution(#[source] SolutionError),

    #[error("text is missing from question")]
    MissingText,

    #[error("answers are missing from question")]
    MissingAnswers,

    #[error("solution is missing from question")]
    MissingSolution,
}

impl ExtractionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractionError::AnswerMissing => ErrorKind::Structural,
            ExtractionError::InvalidSolution(_) => ErrorKind::Validation,
            ExtractionError::MissingText
            | ExtractionError::MissingAnswers
            | ExtractionError::MissingSolution => ErrorKind::Assembly,
        }
    }

    /// Underlying solution problem, if this is a solution failure
    pub fn solution_cause(&self) -> Option<&SolutionError> {
        match self {
            ExtractionError::InvalidSolution(cause) => Some(cause),
            _ => None,
        }
    }
}

/// Why a video solution region was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolutionError {
    #[error("Solution node missing")]
    MissingNode,

    #[error("Too many nodes")]
    TooManyNodes,

    #[error("Solution value missing")]
    MissingValue,

    #[error("Too many child nodes")]
    TooManyChildNodes,

    #[error("Non-empty string required")]
    EmptyString,

    #[error("Not a number")]
    NotANumber,

    #[error("Not positive number")]
    NotPositive,

    #[error("Not an integer")]
    NotAnInteger,
}

impl From<SolutionError> for ExtractionError {
    fn from(cause: SolutionError) -> Self {
        ExtractionError::InvalidSolution(cause)
    }
}

/// Failure to turn one challenge file into a processed document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid frontmatter: {0:#}")]
    Frontmatter(anyhow::Error),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl DocumentError {
    pub fn extraction(&self) -> Option<&ExtractionError> {
        match self {
            DocumentError::Extraction(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_solution_cause_is_hidden_from_message() {
        let err = ExtractionError::from(SolutionError::TooManyNodes);
        assert_eq!(
            err.to_string(),
            "A video solution should be a positive integer"
        );
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("Too many nodes"));
        assert_eq!(err.solution_cause(), Some(&SolutionError::TooManyNodes));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ExtractionError::AnswerMissing.kind(), ErrorKind::Structural);
        assert_eq!(ExtractionError::MissingText.kind(), ErrorKind::Assembly);
        assert_eq!(
            ExtractionError::MissingAnswers.to_string(),
            "answers are missing from question"
        );
        assert!(ExtractionError::MissingSolution.source().is_none());
    }

    #[test]
    fn test_document_error_wraps_extraction() {
        let err = DocumentError::from(ExtractionError::MissingText);
        assert_eq!(err.to_string(), "text is missing from question");
        assert_eq!(err.extraction(), Some(&ExtractionError::MissingText));

        let err = DocumentError::Frontmatter(anyhow::anyhow!("bad yaml"));
        assert_eq!(err.to_string(), "Invalid frontmatter: bad yaml");
        assert!(err.extraction().is_none());
    }
}
