//! Daily Digest - One day of Claude Code conversations as a JSON report
//!
//! This library reads the per-project conversation logs Claude Code keeps under
//! `~/.claude/projects/` and extracts what happened on a single calendar day:
//!
//! - Session summaries recorded that day
//! - User prompts, minus tool-injected meta messages and command markup
//! - Assistant replies, text blocks only (thinking blocks are dropped)
//!
//! Dates are compared in the local time zone of the running process.
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use daily_digest::{RunConfig, collect_daily_digest};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let config = RunConfig::new(date, "/Users/alice/.claude/projects");
//! let digest = collect_daily_digest(&config)?;
//! println!("{} conversation entries", digest.total_conversations());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use collector::collect_daily_digest;
pub use config::{ExtractionLimits, RunConfig};
pub use models::{ConversationEntry, DailyDigest, FileDigest};
pub use parsers::parse_log_file;
pub use utils::get_projects_dir;
