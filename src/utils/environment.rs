use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the Claude directory path (~/.claude)
pub fn get_claude_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine the home directory")?;
    Ok(home.join(".claude"))
}

/// Get the per-project conversation log root (~/.claude/projects)
pub fn get_projects_dir() -> Result<PathBuf> {
    Ok(get_claude_dir()?.join("projects"))
}
