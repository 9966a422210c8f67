use crate::error::DocumentError;
use crate::models::ChallengeMeta;
use crate::parser::{parse_document, parse_markdown};
use crate::Result;
use anyhow::Context;
use std::path::Path;

/// Print the markdown tree of a challenge body as JSON
pub fn run(path: &Path) -> Result<()> {
    let source = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = parse_document::<ChallengeMeta>(&source)
        .with_context(|| format!("Invalid frontmatter in {}", path.display()))?;

    let tree = parse_markdown(&parsed.body);
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}
