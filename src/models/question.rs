use crate::error::ExtractionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One candidate response of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Rendered answer markup
    pub answer: String,
    /// Rendered feedback markup; `None` when the answer has no feedback section
    pub feedback: Option<String>,
}

/// A validated quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Rendered prompt markup
    pub text: String,
    pub answers: Vec<Answer>,
    /// 1-based index of the correct entry in `answers`
    pub solution: u32,
}

impl Question {
    /// Assemble a question from extracted parts.
    ///
    /// Rejects an empty prompt, an empty answer list and an absent or zero
    /// solution; nothing partial is ever returned.
    pub fn assemble(
        text: String,
        answers: Vec<Answer>,
        solution: Option<u32>,
    ) -> Result<Self, ExtractionError> {
        if text.trim().is_empty() {
            return Err(ExtractionError::MissingText);
        }
        if answers.is_empty() {
            return Err(ExtractionError::MissingAnswers);
        }
        let solution = match solution {
            Some(n) if n > 0 => n,
            _ => return Err(ExtractionError::MissingSolution),
        };
        Ok(Self {
            text,
            answers,
            solution,
        })
    }
}

/// Results attached to a processed document for the publishing step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub questions: Vec<Question>,
}

/// Frontmatter of a challenge document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeMeta {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub challenge_type: Option<u32>,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub dashed_name: Option<String>,
    /// Keys this crate does not interpret, passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// A challenge document after a successful processing pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedDocument {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ChallengeMeta>,
    /// `sha256:<hex>` of the whitespace-normalized source
    pub checksum: String,
    pub metadata: DocumentMetadata,
}

impl ProcessedDocument {
    pub fn questions(&self) -> &[Question] {
        &self.metadata.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(html: &str) -> Answer {
        Answer {
            answer: html.to_string(),
            feedback: None,
        }
    }

    #[test]
    fn test_assemble_complete_question() {
        let q = Question::assemble("<p>Q</p>".to_string(), vec![answer("<p>A</p>")], Some(1))
            .unwrap();
        assert_eq!(q.solution, 1);
        assert_eq!(q.answers.len(), 1);
    }

    #[test]
    fn test_assemble_reports_first_missing_field() {
        assert_eq!(
            Question::assemble(String::new(), Vec::new(), None),
            Err(ExtractionError::MissingText)
        );
        assert_eq!(
            Question::assemble("<p>Q</p>".to_string(), Vec::new(), Some(1)),
            Err(ExtractionError::MissingAnswers)
        );
        assert_eq!(
            Question::assemble("<p>Q</p>".to_string(), vec![answer("<p>A</p>")], None),
            Err(ExtractionError::MissingSolution)
        );
        assert_eq!(
            Question::assemble("<p>Q</p>".to_string(), vec![answer("<p>A</p>")], Some(0)),
            Err(ExtractionError::MissingSolution)
        );
    }

    #[test]
    fn test_answer_serializes_null_feedback() {
        let json = serde_json::to_value(answer("<p>1</p>")).unwrap();
        assert!(json["feedback"].is_null());
    }
}
