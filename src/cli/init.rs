use crate::models::{ParserConfig, CONFIG_FILE};
use crate::Result;
use anyhow::bail;
use colored::Colorize;
use std::env;
use std::path::Path;

/// Write a default `challenge-parser.toml` in the current directory
pub fn run(force: bool) -> Result<()> {
    let project_root = env::current_dir()?;
    let path = write_default(&project_root, force)?;
    println!("{}", format!("✅ Wrote {}", path.display()).green());
    Ok(())
}

fn write_default(project_root: &Path, force: bool) -> Result<std::path::PathBuf> {
    if project_root.join(CONFIG_FILE).exists() && !force {
        bail!("{} already exists (use --force to overwrite)", CONFIG_FILE);
    }
    ParserConfig::default().save(project_root)
}
