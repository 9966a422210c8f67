use crate::models::ParserConfig;
use crate::Result;
use anyhow::Context;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolve CLI inputs into a sorted, de-duplicated list of challenge files.
///
/// Each input may be a file, a directory (walked recursively, keeping files
/// with a configured extension) or a glob pattern.
pub fn collect_inputs(inputs: &[String], config: &ParserConfig) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();

    for input in inputs {
        let path = Path::new(input);
        let before = files.len();

        if path.is_file() {
            files.insert(path.to_path_buf());
        } else if path.is_dir() {
            for entry in WalkDir::new(path).follow_links(true) {
                let entry = entry.with_context(|| format!("Failed to walk {}", input))?;
                if entry.file_type().is_file() && config.accepts(entry.path()) {
                    files.insert(entry.into_path());
                }
            }
        } else {
            let pattern =
                glob::glob(input).with_context(|| format!("Invalid glob pattern: {}", input))?;
            for matched in pattern {
                let matched = matched.with_context(|| format!("Failed to expand {}", input))?;
                if matched.is_file() {
                    files.insert(matched);
                }
            }
        }

        if files.len() == before {
            tracing::warn!(input = %input, "input matched no challenge files");
        }
    }

    Ok(files.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn layout() -> TempDir {
        let dir = TempDir::new().unwrap();
        let block = dir.path().join("curriculum/block-a");
        fs::create_dir_all(&block).unwrap();
        fs::write(block.join("b.md"), "# b").unwrap();
        fs::write(block.join("a.md"), "# a").unwrap();
        fs::write(block.join("notes.txt"), "skip").unwrap();
        dir
    }

    #[test]
    fn test_directory_is_walked_and_filtered() {
        let dir = layout();
        let root = dir.path().join("curriculum");
        let files =
            collect_inputs(&[root.display().to_string()], &ParserConfig::default()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_glob_and_file_inputs_deduplicate() {
        let dir = layout();
        let file = dir.path().join("curriculum/block-a/a.md");
        let pattern = format!("{}/curriculum/*/*.md", dir.path().display());
        let files = collect_inputs(
            &[file.display().to_string(), pattern],
            &ParserConfig::default(),
        )
        .unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_unmatched_input_is_empty() {
        let dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.md", dir.path().display());
        assert!(collect_inputs(&[pattern], &ParserConfig::default())
            .unwrap()
            .is_empty());
    }
}
