//! Walks `~/.claude/projects` and folds each log file into the day's digest.
//!
//! - [`project_discovery`] finds project directories and candidate `*.jsonl` files,
//!   skipping files not modified since before the target date
//! - [`aggregate`] parses each candidate and keeps the files that contributed anything
//!
//! Line-level handling lives in the parser; see `parsers::conversation`.

pub mod aggregate;
pub mod project_discovery;

pub use aggregate::collect_daily_digest;
pub use project_discovery::{DirectoryNotFound, discover_projects};
