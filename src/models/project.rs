use std::path::PathBuf;

/// A project directory under `~/.claude/projects` and the log files worth parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLogs {
    /// Directory name, used verbatim as the project label in the output
    pub name: String,
    pub project_dir: PathBuf,
    pub log_files: Vec<PathBuf>,
    /// Log files left out by the modification-time pre-filter
    pub stale_files: usize,
}
