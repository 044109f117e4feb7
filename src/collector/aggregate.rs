//! Aggregation of per-file digests into the daily result.
//!
//! # Error Handling Strategy
//!
//! Failures stay in the smallest scope that can absorb them:
//!
//! - **Lines**: malformed JSON and unparseable timestamps are dropped by the parser
//! - **Files**: read errors are stored on the file's [`FileDigest`](crate::models::FileDigest) and the run goes on
//! - **Projects root missing**: reported as [`DailyDigest::Missing`], not as an error
//!
//! Only a projects root that exists but cannot be listed propagates as `Err`.

use anyhow::Result;

use crate::collector::project_discovery::{DirectoryNotFound, discover_projects};
use crate::config::RunConfig;
use crate::models::DailyDigest;
use crate::parsers::parse_log_file;

/// Collect the target date's summaries and conversations across all projects
///
/// Files are visited project by project in discovery order. A file's digest is kept
/// only when it holds at least one summary or conversation entry; the totals count
/// kept entries only.
///
/// # Examples
///
/// ```no_run
/// use daily_digest::{RunConfig, collect_daily_digest, get_projects_dir};
///
/// let config = RunConfig::for_today(get_projects_dir()?);
/// let digest = collect_daily_digest(&config)?;
/// println!("{}", digest.to_pretty_json()?);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn collect_daily_digest(config: &RunConfig) -> Result<DailyDigest> {
    let date = config.date_string();

    let projects = match discover_projects(config) {
        Ok(projects) => projects,
        Err(e) => {
            if let Some(not_found) = e.downcast_ref::<DirectoryNotFound>() {
                tracing::warn!("{}", not_found);
                return Ok(DailyDigest::missing(date, not_found.to_string()));
            }
            return Err(e);
        }
    };

    let mut digest = DailyDigest::empty(date);
    let mut files_scanned = 0;
    let mut files_stale = 0;
    let mut files_failed = 0;

    for project in &projects {
        tracing::debug!(
            "Scanning {} log files in {}",
            project.log_files.len(),
            project.project_dir.display()
        );
        files_stale += project.stale_files;
        for log_file in &project.log_files {
            let file_digest = parse_log_file(log_file, &project.name, config);
            files_scanned += 1;
            if file_digest.error.is_some() {
                files_failed += 1;
            }
            digest.push(file_digest);
        }
    }

    tracing::info!(
        "Collected {} summaries and {} conversation entries from {} files ({} skipped as stale, {} failed)",
        digest.total_summaries(),
        digest.total_conversations(),
        files_scanned,
        files_stale,
        files_failed
    );

    Ok(digest)
}
