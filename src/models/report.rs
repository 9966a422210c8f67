use super::ProcessedDocument;
use crate::error::{DocumentError, ErrorKind, ExtractionError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// A document that could not be processed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentFailure {
    /// File the failure belongs to
    pub path: PathBuf,
    /// User-facing message
    pub message: String,
    /// Extraction error class; `None` for read or frontmatter failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    /// Diagnostic root cause, when one is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl DocumentFailure {
    pub fn from_extraction(path: impl Into<PathBuf>, err: &ExtractionError) -> Self {
        Self {
            path: path.into(),
            message: err.to_string(),
            kind: Some(err.kind()),
            cause: err.solution_cause().map(|c| c.to_string()),
        }
    }

    pub fn from_document(path: impl Into<PathBuf>, err: &DocumentError) -> Self {
        match err.extraction() {
            Some(extraction) => Self::from_extraction(path, extraction),
            None => Self {
                path: path.into(),
                message: err.to_string(),
                kind: None,
                cause: None,
            },
        }
    }

    /// Format failure for display
    pub fn format(&self) -> String {
        match (&self.kind, &self.cause) {
            (Some(kind), Some(cause)) => format!(
                "{} [{}] {} ({})",
                self.path.display(),
                kind.label(),
                self.message,
                cause
            ),
            (Some(kind), None) => {
                format!("{} [{}] {}", self.path.display(), kind.label(), self.message)
            }
            _ => format!("{} - {}", self.path.display(), self.message),
        }
    }
}

impl ErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::Structural => "STRUCTURE",
            ErrorKind::Validation => "VALUE",
            ErrorKind::Assembly => "MISSING",
        }
    }
}

/// Output of a build run, handed to the publishing step
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildManifest {
    pub generated_at: DateTime<Utc>,
    pub documents: Vec<ProcessedDocument>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<DocumentFailure>,
}

impl BuildManifest {
    pub fn new(documents: Vec<ProcessedDocument>, failures: Vec<DocumentFailure>) -> Self {
        Self {
            generated_at: Utc::now(),
            documents,
            failures,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn question_count(&self) -> usize {
        self.documents.iter().map(|d| d.questions().len()).sum()
    }
}
