//! Data models for the daily digest.
//!
//! - [`LogRecord`] - One line of a project conversation log, read best-effort
//! - [`MessageContent`] / [`ContentBlock`] - `message.content` as a string or typed blocks
//! - [`ConversationEntry`], [`FileDigest`], [`DailyDigest`] - What a run produces
//! - [`ProjectLogs`] - Discovered project directory and its candidate log files
//!
//! Input models use serde with the lenient field deserializers in
//! `parsers::deserializers`; output models only serialize.

pub mod digest;
pub mod project;
pub mod record;

pub use digest::{ConversationEntry, DailyDigest, FileDigest, Role};
pub use project::ProjectLogs;
pub use record::{ContentBlock, LogRecord, MessageBody, MessageContent, RecordKind};
