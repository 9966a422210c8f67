use super::frontmatter::{calculate_checksum, parse_document};
use super::markdown::parse_markdown;
use super::video_question::QuestionExtractor;
use crate::error::DocumentError;
use crate::models::{ChallengeMeta, DocumentMetadata, ProcessedDocument};
use std::path::Path;

/// Process one challenge source: frontmatter, markdown tree, questions.
///
/// Nothing is returned for a document with any invalid question.
pub fn process_source(
    path: &Path,
    source: &str,
    extractor: &QuestionExtractor,
) -> Result<ProcessedDocument, DocumentError> {
    let parsed = parse_document::<ChallengeMeta>(source).map_err(DocumentError::Frontmatter)?;
    let tree = parse_markdown(&parsed.body);

    let mut metadata = DocumentMetadata::default();
    extractor.attach(&tree, &mut metadata)?;

    Ok(ProcessedDocument {
        path: path.to_path_buf(),
        meta: parsed.frontmatter,
        checksum: calculate_checksum(source),
        metadata,
    })
}

/// Read and process a challenge file
pub fn process_file(
    path: &Path,
    extractor: &QuestionExtractor,
) -> Result<ProcessedDocument, DocumentError> {
    let _span = tracing::debug_span!("document", path = %path.display()).entered();

    let source = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    process_source(path, &source, extractor)
}
