//! Run configuration threaded through every stage of the digest pipeline.
//!
//! A [`RunConfig`] is built once by the CLI (or by a library caller) and passed by
//! reference to discovery, parsing and aggregation. Nothing in the pipeline reads
//! ambient state such as the clock or environment variables on its own.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

/// Default truncation for user messages, in characters
pub const DEFAULT_USER_MAX_CHARS: usize = 2000;

/// Default truncation for assistant messages, in characters
pub const DEFAULT_ASSISTANT_MAX_CHARS: usize = 3000;

/// User messages starting with this prefix are command/tag markup, not typed prompts
pub const DEFAULT_MARKUP_PREFIX: &str = "<";

/// Cutoffs applied while extracting conversation text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionLimits {
    pub user_max_chars: usize,
    pub assistant_max_chars: usize,
    pub markup_prefix: String,
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self {
            user_max_chars: DEFAULT_USER_MAX_CHARS,
            assistant_max_chars: DEFAULT_ASSISTANT_MAX_CHARS,
            markup_prefix: DEFAULT_MARKUP_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub target_date: NaiveDate,
    pub projects_dir: PathBuf,
    pub limits: ExtractionLimits,
    /// Skip files whose last modification (local date) is before `target_date`.
    ///
    /// A session that crosses midnight and is never written to afterwards ends up
    /// with an mtime on the earlier day, so its post-midnight records are missed.
    /// The miss is accepted in exchange for not opening every historical log.
    pub skip_stale_files: bool,
}

impl RunConfig {
    pub fn new(target_date: NaiveDate, projects_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_date,
            projects_dir: projects_dir.into(),
            limits: ExtractionLimits::default(),
            skip_stale_files: true,
        }
    }

    /// Configuration for today's local date
    pub fn for_today(projects_dir: impl Into<PathBuf>) -> Self {
        Self::new(Local::now().date_naive(), projects_dir)
    }

    pub fn with_limits(mut self, limits: ExtractionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_skip_stale_files(mut self, skip: bool) -> Self {
        self.skip_stale_files = skip;
        self
    }

    pub fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    /// Target date in `YYYY-MM-DD` form, as it appears in the output
    pub fn date_string(&self) -> String {
        self.target_date.format("%Y-%m-%d").to_string()
    }
}
