use super::MarkerSet;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "challenge-parser.toml";

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// File extensions picked up when walking directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Record failing documents and continue instead of aborting the build
    #[serde(default)]
    pub keep_going: bool,

    /// Marker heading literals
    #[serde(default)]
    pub markers: MarkerSet,
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            keep_going: false,
            markers: MarkerSet::default(),
        }
    }
}

impl ParserConfig {
    /// Load config from `challenge-parser.toml` under `project_root`.
    ///
    /// A missing file yields the defaults.
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_file(&config_path)
    }

    /// Load config from an explicit path; the file must exist.
    pub fn load_file(config_path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        let config: ParserConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", config_path.display()))?;
        config
            .markers
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid markers in {}: {}", config_path.display(), e))?;
        Ok(config)
    }

    /// Resolve the config for a CLI invocation: explicit path or working directory.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => Self::load(&std::env::current_dir()?),
        }
    }

    /// Save config to `challenge-parser.toml` under `project_root`.
    pub fn save(&self, project_root: &Path) -> anyhow::Result<PathBuf> {
        let config_path = project_root.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }

    /// Whether `path` has one of the configured extensions
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ParserConfig::load(dir.path()).unwrap();
        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "keep_going = true\n\n[markers]\nfeedback = \"--why--\"\n",
        )
        .unwrap();

        let config = ParserConfig::load(dir.path()).unwrap();
        assert!(config.keep_going);
        assert_eq!(config.extensions, vec!["md"]);
        assert_eq!(config.markers.feedback, "--why--");
        assert_eq!(config.markers.text, "--text--");
    }

    #[test]
    fn test_rejects_duplicate_markers() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[markers]\nanswers = \"--text--\"\n",
        )
        .unwrap();
        assert!(ParserConfig::load(dir.path()).is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let config = ParserConfig {
            extensions: vec!["md".to_string(), "markdown".to_string()],
            ..ParserConfig::default()
        };
        config.save(dir.path()).unwrap();
        assert_eq!(ParserConfig::load(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_accepts_extension() {
        let config = ParserConfig::default();
        assert!(config.accepts(Path::new("a/b/challenge.md")));
        assert!(config.accepts(Path::new("challenge.MD")));
        assert!(!config.accepts(Path::new("challenge.txt")));
        assert!(!config.accepts(Path::new("README")));
    }
}
