use super::inputs::collect_inputs;
use crate::models::{BuildManifest, DocumentFailure, ParserConfig};
use crate::parser::{process_file, QuestionExtractor};
use crate::Result;
use anyhow::{bail, Context};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Options for the build command
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub inputs: Vec<String>,
    /// Manifest destination; stdout when absent
    pub out: Option<PathBuf>,
    /// Overrides `keep_going` from the config when set
    pub keep_going: bool,
    pub config: Option<PathBuf>,
}

/// Run build command
pub fn run(options: &BuildOptions) -> Result<()> {
    let config = ParserConfig::resolve(options.config.as_deref())?;
    let keep_going = options.keep_going || config.keep_going;
    let files = collect_inputs(&options.inputs, &config)?;

    if files.is_empty() {
        bail!("No challenge files found");
    }

    let extractor = QuestionExtractor::new(config.markers.clone());
    let manifest = build(&files, &extractor, keep_going)?;
    let json = serde_json::to_string_pretty(&manifest)?;

    match &options.out {
        Some(out) => {
            write_manifest(out, &json)?;
            eprintln!(
                "{}",
                format!(
                    "📦 {} document(s), {} question(s) → {}",
                    manifest.documents.len(),
                    manifest.question_count(),
                    out.display()
                )
                .cyan()
            );
        }
        None => println!("{}", json),
    }

    if !manifest.is_success() {
        for failure in &manifest.failures {
            eprintln!("{}", format!("  ✗ {}", failure.format()).red());
        }
        bail!("{} document(s) failed", manifest.failures.len());
    }

    Ok(())
}

/// Process `files` in order.
///
/// Fail-fast aborts on the first failing document. With `keep_going` every
/// failure is recorded in the manifest and the remaining documents are still
/// processed.
pub fn build(
    files: &[PathBuf],
    extractor: &QuestionExtractor,
    keep_going: bool,
) -> Result<BuildManifest> {
    let mut documents = Vec::with_capacity(files.len());
    let mut failures = Vec::new();

    for path in files {
        match process_file(path, extractor) {
            Ok(doc) => documents.push(doc),
            Err(err) => {
                let failure = DocumentFailure::from_document(path, &err);
                if !keep_going {
                    bail!("{}", failure.format());
                }
                tracing::info!(path = %path.display(), error = %err, "skipping document");
                failures.push(failure);
            }
        }
    }

    Ok(BuildManifest::new(documents, failures))
}

fn write_manifest(out: &Path, json: &str) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(out, json).with_context(|| format!("Failed to write {}", out.display()))
}
