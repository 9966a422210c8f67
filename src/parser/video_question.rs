//! Video question extraction
//!
//! Turns the `--questions--` region of a challenge document into validated
//! [`Question`] records:
//!
//! ```text
//! # --questions--
//! ## --text--          prompt, opens a new question
//! ## --answers--       answers separated by thematic breaks,
//! ### --feedback--     each optionally followed by feedback
//! ## --video-solution--
//! ```
//!
//! Any malformed question fails the whole document.

use super::render::render;
use super::select::{before, between, find, split_on_thematic_break};
use crate::error::{ExtractionError, SolutionError};
use crate::models::{Answer, DocumentMetadata, MarkerKind, MarkerSet, Node, Question};

/// Extracts questions from document trees.
///
/// Holds only immutable marker configuration, so one instance can be shared
/// across threads and documents.
#[derive(Debug, Clone, Default)]
pub struct QuestionExtractor {
    markers: MarkerSet,
}

impl QuestionExtractor {
    pub fn new(markers: MarkerSet) -> Self {
        Self { markers }
    }

    /// Extract every question of `tree`, in document order.
    ///
    /// A tree without a questions marker yields an empty list.
    pub fn extract(&self, tree: &Node) -> Result<Vec<Question>, ExtractionError> {
        let nodes = match tree {
            Node::Root { children } => children.as_slice(),
            other => std::slice::from_ref(other),
        };

        let region = between(nodes, &self.markers, MarkerKind::Questions);
        if region.is_empty() {
            return Ok(Vec::new());
        }

        let questions = self
            .group_questions(region)
            .iter()
            .map(|group| self.question(group))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = questions.len(), "extracted video questions");
        Ok(questions)
    }

    /// Extract questions and store them on `metadata`.
    ///
    /// `metadata` is only written on success.
    pub fn attach(
        &self,
        tree: &Node,
        metadata: &mut DocumentMetadata,
    ) -> Result<(), ExtractionError> {
        metadata.questions = self.extract(tree)?;
        Ok(())
    }

    /// Split the questions region into one group per `--text--` marker
    fn group_questions(&self, region: Vec<Node>) -> Vec<Vec<Node>> {
        let mut groups: Vec<Vec<Node>> = Vec::new();
        let mut stray = 0usize;

        for node in region {
            if self.markers.classify(&node) == Some(MarkerKind::Text) {
                groups.push(Vec::new());
            }
            match groups.last_mut() {
                Some(group) => group.push(node),
                None => stray += 1,
            }
        }

        if stray > 0 {
            tracing::debug!(
                nodes = stray,
                "ignoring nodes before the first question text marker"
            );
        }
        groups
    }

    fn question(&self, nodes: &[Node]) -> Result<Question, ExtractionError> {
        let text_nodes = between(nodes, &self.markers, MarkerKind::Text);
        let answer_nodes = between(nodes, &self.markers, MarkerKind::Answers);
        let solution_nodes = between(nodes, &self.markers, MarkerKind::VideoSolution);

        let text = render(&text_nodes);
        let answers = self.answers(&answer_nodes)?;
        let solution = parse_solution(&solution_nodes).map_err(|cause| {
            tracing::warn!(%cause, "rejected video solution");
            ExtractionError::InvalidSolution(cause)
        })?;

        if solution as usize > answers.len() {
            tracing::warn!(
                solution,
                answers = answers.len(),
                "video solution points past the last answer"
            );
        }

        Question::assemble(text, answers, Some(solution))
    }

    fn answers(&self, nodes: &[Node]) -> Result<Vec<Answer>, ExtractionError> {
        if nodes.is_empty() {
            return Ok(Vec::new());
        }
        split_on_thematic_break(nodes)
            .into_iter()
            .map(|group| self.answer(group))
            .collect()
    }

    fn answer(&self, group: Vec<Node>) -> Result<Answer, ExtractionError> {
        let tree = Node::root(group);
        let has_feedback = find(&tree, |node| {
            self.markers.classify(node) == Some(MarkerKind::Feedback)
        })
        .is_some();

        if has_feedback {
            let answer_nodes = before(tree.children(), &self.markers, MarkerKind::Feedback);
            let feedback_nodes = between(tree.children(), &self.markers, MarkerKind::Feedback);

            if answer_nodes.is_empty() {
                return Err(ExtractionError::AnswerMissing);
            }

            return Ok(Answer {
                answer: render(&answer_nodes),
                feedback: Some(render(&feedback_nodes)),
            });
        }

        let answer = render(tree.children());
        if answer.is_empty() {
            return Err(ExtractionError::AnswerMissing);
        }
        Ok(Answer {
            answer,
            feedback: None,
        })
    }
}

/// Parse a video solution region into a 1-based answer index.
///
/// The region must be a single node holding a single literal child (plain
/// text or inline code) whose value is a positive integer.
pub fn parse_solution(nodes: &[Node]) -> Result<u32, SolutionError> {
    if nodes.len() > 1 {
        return Err(SolutionError::TooManyNodes);
    }
    let node = nodes.first().ok_or(SolutionError::MissingNode)?;

    let children = node.children();
    if children.len() > 1 {
        return Err(SolutionError::TooManyChildNodes);
    }
    let value = children
        .first()
        .and_then(Node::value)
        .ok_or(SolutionError::MissingValue)?;

    let value = value.trim();
    if value.is_empty() {
        return Err(SolutionError::EmptyString);
    }

    let number: f64 = value.parse().map_err(|_| SolutionError::NotANumber)?;
    if !number.is_finite() {
        return Err(SolutionError::NotANumber);
    }
    if number < 1.0 {
        return Err(SolutionError::NotPositive);
    }
    if number.fract() != 0.0 || number > f64::from(u32::MAX) {
        return Err(SolutionError::NotAnInteger);
    }

    Ok(number as u32)
}
