//! Challenge frontmatter
//!
//! Challenge files open with a YAML block fenced by `---` lines. Before
//! splitting, content is normalized:
//! - BOM (Byte Order Mark) stripping
//! - Line ending normalization (CRLF → LF)

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

/// Closing `---` at line start, followed by a newline or EOF
static CLOSING_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\n)---[ \t]*(?:\n|$)").expect("closing fence pattern is valid")
});

/// Challenge source with its frontmatter separated from the markdown body
#[derive(Debug, Clone)]
pub struct ParsedDocument<T> {
    /// Deserialized frontmatter, `None` when the file has none
    pub frontmatter: Option<T>,
    /// Markdown body (after frontmatter)
    pub body: String,
}

/// Split and deserialize optional frontmatter.
///
/// Content that does not start with `---` is treated as a body-only
/// document. Content that starts with `---` but never closes it is an error,
/// since the rest would otherwise be parsed as markdown.
pub fn parse_document<T: DeserializeOwned>(content: &str) -> Result<ParsedDocument<T>> {
    let normalized = normalize_content(content);

    if !normalized.starts_with("---") {
        return Ok(ParsedDocument {
            frontmatter: None,
            body: normalized,
        });
    }

    let (frontmatter_str, body) = split_frontmatter(&normalized)?;
    // An empty block deserializes like an empty mapping
    let yaml = if frontmatter_str.trim().is_empty() {
        "{}"
    } else {
        frontmatter_str.as_str()
    };
    let frontmatter: T = serde_yaml::from_str(yaml).context("Failed to parse YAML frontmatter")?;

    Ok(ParsedDocument {
        frontmatter: Some(frontmatter),
        body,
    })
}

/// Strip a leading BOM and normalize CRLF / CR line endings to LF
pub fn normalize_content(content: &str) -> String {
    let s = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split frontmatter from body
///
/// - Must start with `---` followed by a newline
/// - Must end with `---` at column 0; trailing whitespace is allowed
///
/// # Returns
/// * `(frontmatter_string, body_string)` tuple
pub fn split_frontmatter(content: &str) -> Result<(String, String)> {
    let Some(after_open) = content.strip_prefix("---\n") else {
        bail!("Document must start with YAML frontmatter (--- followed by a newline)")
    };

    match CLOSING_FENCE.find(after_open) {
        Some(m) => {
            let frontmatter = after_open[..m.start()].to_string();
            let body = after_open[m.end()..].to_string();
            Ok((frontmatter, body))
        }
        None => bail!("Frontmatter not properly closed (--- must be at line start)"),
    }
}

/// SHA256 checksum of whitespace-normalized content, as `sha256:<hex>`.
///
/// Trailing whitespace per line and trailing blank lines do not change it.
pub fn calculate_checksum(content: &str) -> String {
    let normalized = normalize_content(content)
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n");
    let mut hasher = Sha256::new();
    hasher.update(normalized.trim_end().as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestFrontmatter {
        id: String,
        title: String,
    }

    #[test]
    fn test_parse_simple_frontmatter() {
        let content = "---\nid: 5e9a093a74c4063ca6f7c14d\ntitle: Data Analysis Example A\n---\n\n# --questions--\n";
        let doc: ParsedDocument<TestFrontmatter> = parse_document(content).unwrap();
        let fm = doc.frontmatter.unwrap();
        assert_eq!(fm.id, "5e9a093a74c4063ca6f7c14d");
        assert_eq!(fm.title, "Data Analysis Example A");
        assert!(doc.body.contains("# --questions--"));
    }

    #[test]
    fn test_body_only_document() {
        let doc: ParsedDocument<TestFrontmatter> = parse_document("# --questions--\n").unwrap();
        assert!(doc.frontmatter.is_none());
        assert_eq!(doc.body, "# --questions--\n");
    }

    #[test]
    fn test_unclosed_frontmatter_is_error() {
        assert!(parse_document::<TestFrontmatter>("---\nid: x\n\n# body\n").is_err());
    }

    #[test]
    fn test_normalize_bom_and_crlf() {
        let normalized = normalize_content("\u{FEFF}---\r\nid: test\r\n---\r\n");
        assert_eq!(normalized, "---\nid: test\n---\n");
    }

    #[test]
    fn test_split_frontmatter_basic() {
        let (fm, body) = split_frontmatter("---\nkey: value\n---\n\nBody content").unwrap();
        assert_eq!(fm, "key: value");
        assert_eq!(body.trim(), "Body content");
    }

    #[test]
    fn test_split_frontmatter_empty_block() {
        let (fm, body) = split_frontmatter("---\n---\nBody").unwrap();
        assert_eq!(fm, "");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_frontmatter_no_body() {
        let (fm, body) = split_frontmatter("---\nkey: value\n---\n").unwrap();
        assert_eq!(fm, "key: value");
        assert!(body.is_empty());
    }

    #[test]
    fn test_split_frontmatter_missing_opening() {
        assert!(split_frontmatter("key: value\n---\n").is_err());
    }

    #[test]
    fn test_split_frontmatter_unclosed() {
        assert!(split_frontmatter("---\nunclosed").is_err());
        // The closing fence must start a line
        assert!(split_frontmatter("---\nkey: a ---\n").is_err());
    }

    #[test]
    fn test_split_frontmatter_reused_pattern() {
        for _ in 0..3 {
            let (fm, body) = split_frontmatter("---\nk: v\n---  \nrest").unwrap();
            assert_eq!(fm, "k: v");
            assert_eq!(body, "rest");
        }
    }

    #[test]
    fn test_checksum_whitespace_normalization() {
        assert_eq!(
            calculate_checksum("line1\nline2  \nline3\n\n"),
            calculate_checksum("line1\r\nline2\r\nline3")
        );
        assert_ne!(calculate_checksum("hello"), calculate_checksum("hello!"));
        assert!(calculate_checksum("x").starts_with("sha256:"));
    }
}
