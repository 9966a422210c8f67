use super::inputs::collect_inputs;
use crate::models::{DocumentFailure, ParserConfig};
use crate::parser::{process_file, QuestionExtractor};
use crate::Result;
use anyhow::bail;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

/// Options for the validate command
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    pub inputs: Vec<String>,
    pub json: bool,
    pub config: Option<PathBuf>,
}

/// Validation result over a set of challenge files
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationSummary {
    pub valid: bool,
    pub documents: usize,
    pub questions: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<DocumentFailure>,
}

/// Validate every file; failures never stop the run.
pub fn validate(files: &[PathBuf], extractor: &QuestionExtractor) -> ValidationSummary {
    let mut summary = ValidationSummary {
        documents: files.len(),
        ..ValidationSummary::default()
    };

    for path in files {
        match process_file(path, extractor) {
            Ok(doc) => summary.questions += doc.questions().len(),
            Err(err) => summary
                .failures
                .push(DocumentFailure::from_document(path, &err)),
        }
    }

    summary.valid = summary.failures.is_empty();
    summary
}

/// Run validate command
pub fn run(options: &ValidateOptions) -> Result<()> {
    let config = ParserConfig::resolve(options.config.as_deref())?;
    let files = collect_inputs(&options.inputs, &config)?;
    let extractor = QuestionExtractor::new(config.markers.clone());

    if !options.json {
        println!("{}", format!("🔍 Validating {} challenge file(s)", files.len()).cyan());
        println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
    }

    let summary = validate(&files, &extractor);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for failure in &summary.failures {
            println!("   {} {}", "✗".red(), failure.format());
        }
        println!();
        if summary.valid {
            println!(
                "{}",
                format!(
                    "✅ {} document(s) valid, {} question(s)",
                    summary.documents, summary.questions
                )
                .green()
                .bold()
            );
        } else {
            println!(
                "{}",
                format!(
                    "❌ {} of {} document(s) failed",
                    summary.failures.len(),
                    summary.documents
                )
                .red()
                .bold()
            );
        }
    }

    if !summary.valid {
        bail!("Validation failed");
    }
    Ok(())
}
