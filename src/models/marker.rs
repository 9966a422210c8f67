use super::Node;
use serde::{Deserialize, Serialize};

/// Role of a marker heading inside a challenge document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// Opens the region holding every question of the document
    Questions,
    /// Opens a single question's prompt; also starts a new question group
    Text,
    /// Opens the answers of the current question
    Answers,
    /// Separates an answer from its feedback
    Feedback,
    /// Holds the 1-based index of the correct answer
    VideoSolution,
}

impl MarkerKind {
    pub const ALL: [MarkerKind; 5] = [
        MarkerKind::Questions,
        MarkerKind::Text,
        MarkerKind::Answers,
        MarkerKind::Feedback,
        MarkerKind::VideoSolution,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MarkerKind::Questions => "questions",
            MarkerKind::Text => "text",
            MarkerKind::Answers => "answers",
            MarkerKind::Feedback => "feedback",
            MarkerKind::VideoSolution => "video-solution",
        }
    }
}

/// Literal heading values that identify each marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSet {
    pub questions: String,
    pub text: String,
    pub answers: String,
    pub feedback: String,
    pub video_solution: String,
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            questions: "--questions--".to_string(),
            text: "--text--".to_string(),
            answers: "--answers--".to_string(),
            feedback: "--feedback--".to_string(),
            video_solution: "--video-solution--".to_string(),
        }
    }
}

impl MarkerSet {
    pub fn literal(&self, kind: MarkerKind) -> &str {
        match kind {
            MarkerKind::Questions => &self.questions,
            MarkerKind::Text => &self.text,
            MarkerKind::Answers => &self.answers,
            MarkerKind::Feedback => &self.feedback,
            MarkerKind::VideoSolution => &self.video_solution,
        }
    }

    /// Marker kind whose literal equals `value` exactly.
    pub fn kind_of(&self, value: &str) -> Option<MarkerKind> {
        MarkerKind::ALL
            .into_iter()
            .find(|kind| self.literal(*kind) == value)
    }

    /// Classify a node as a marker heading.
    ///
    /// Only headings whose first child is a text run equal to one of the
    /// literals count; the same text inside a paragraph is content.
    pub fn classify(&self, node: &Node) -> Option<MarkerKind> {
        match node {
            Node::Heading { children, .. } => match children.first() {
                Some(Node::Text { value }) => self.kind_of(value),
                _ => None,
            },
            _ => None,
        }
    }

    /// Every literal must be non-empty and distinct from the others.
    pub fn validate(&self) -> Result<(), String> {
        for (i, kind) in MarkerKind::ALL.iter().enumerate() {
            let literal = self.literal(*kind);
            if literal.trim().is_empty() {
                return Err(format!("marker '{}' must not be empty", kind.name()));
            }
            for other in &MarkerKind::ALL[i + 1..] {
                if self.literal(*other) == literal {
                    return Err(format!(
                        "markers '{}' and '{}' share the literal '{}'",
                        kind.name(),
                        other.name(),
                        literal
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Heading that opens any reserved region, i.e. one whose leading text
/// starts with `--`. Regions stop at such headings even when the literal is
/// not one this crate extracts (`--description--`, `--hints--`, ...).
pub fn is_region_heading(node: &Node) -> bool {
    match node {
        Node::Heading { children, .. } => matches!(
            children.first(),
            Some(Node::Text { value }) if value.starts_with("--")
        ),
        _ => false,
    }
}
