//! JSONL parsing for Claude Code project conversation logs
//!
//! # Error Handling Strategy
//!
//! Parsing follows a **graceful degradation** approach suitable for a CLI report:
//!
//! - **Individual line failures**: blank lines, malformed JSON and non-object values are
//!   skipped silently (debug log only). A bad line never costs the rest of the file.
//!
//! - **Field drift**: record fields with an unexpected JSON type read as absent through
//!   [`deserializers::deserialize_lenient`], so a single odd field does not discard the
//!   record.
//!
//! - **Timestamps**: a record whose timestamp is missing or unparseable simply does not
//!   match the target date.
//!
//! - **File failures**: open/read errors (including invalid UTF-8) are captured in the
//!   file's digest together with whatever was read before the failure.

pub mod conversation;
pub mod deserializers;

pub use conversation::{parse_log_file, truncate_chars};
pub use deserializers::{local_date_of, parse_timestamp};
