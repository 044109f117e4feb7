use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate};

use crate::config::RunConfig;
use crate::models::ProjectLogs;

/// Extension of per-session conversation logs
const LOG_FILE_EXTENSION: &str = "jsonl";

/// The projects root does not exist.
///
/// Returned inside an [`anyhow::Error`]; callers that want to report it instead of
/// failing can `downcast_ref::<DirectoryNotFound>()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNotFound {
    pub path: PathBuf,
}

impl fmt::Display for DirectoryNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Projects directory not found: {}", self.path.display())
    }
}

impl std::error::Error for DirectoryNotFound {}

/// Discover project directories and the log files that may hold the target date
///
/// Every immediate subdirectory of `config.projects_dir` is a project; its `*.jsonl`
/// files (one level, no recursion) are the candidates. Projects and files are sorted
/// by name so repeated runs visit them in the same order.
///
/// When `config.skip_stale_files` is set, a file whose modification time falls on a
/// local date before the target date is left out without being opened. Files whose
/// metadata cannot be read stay in, so the parser can report the problem.
///
/// # Errors
///
/// Returns a [`DirectoryNotFound`] error if the projects directory does not exist, or
/// a plain error if it exists but cannot be listed. Unreadable project directories
/// are logged and skipped.
pub fn discover_projects(config: &RunConfig) -> Result<Vec<ProjectLogs>> {
    let projects_dir = config.projects_dir();

    if !projects_dir.exists() {
        return Err(DirectoryNotFound { path: projects_dir.to_path_buf() }.into());
    }

    let entries = fs::read_dir(projects_dir)
        .with_context(|| format!("Failed to read projects directory: {}", projects_dir.display()))?;

    let mut project_dirs = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        // Skip if not a directory
        if !path.is_dir() {
            continue;
        }
        project_dirs.push(path);
    }
    project_dirs.sort();

    let mut projects = Vec::new();
    for project_dir in project_dirs {
        let name = match project_dir.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };

        match collect_log_files(&project_dir, config) {
            Ok((log_files, stale_files)) => {
                projects.push(ProjectLogs { name, project_dir, log_files, stale_files });
            }
            Err(e) => {
                tracing::warn!("Skipping project directory {}: {:#}", project_dir.display(), e);
            }
        }
    }

    Ok(projects)
}

/// Candidate log files of one project, plus how many the pre-filter dropped
fn collect_log_files(project_dir: &Path, config: &RunConfig) -> Result<(Vec<PathBuf>, usize)> {
    let entries = fs::read_dir(project_dir)
        .with_context(|| format!("Failed to read project directory: {}", project_dir.display()))?;

    let mut log_files = Vec::new();
    let mut stale_files = 0;

    for file in entries.flatten() {
        let file_path = file.path();
        let is_log = file_path.extension().is_some_and(|ext| ext == LOG_FILE_EXTENSION);
        if !is_log || file_path.is_dir() {
            continue;
        }

        if config.skip_stale_files
            && let Some(modified) = modified_local_date(&file_path)
            && modified < config.target_date
        {
            tracing::debug!("Skipping {} (last modified {})", file_path.display(), modified);
            stale_files += 1;
            continue;
        }

        log_files.push(file_path);
    }
    log_files.sort();

    Ok((log_files, stale_files))
}

/// Local calendar date of a file's last modification
pub fn modified_local_date(path: &Path) -> Option<NaiveDate> {
    let modified = fs::metadata(path).and_then(|m| m.modified()).ok()?;
    Some(DateTime::<Local>::from(modified).date_naive())
}
