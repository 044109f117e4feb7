use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::RunConfig;
use crate::models::{ConversationEntry, FileDigest, LogRecord, RecordKind, Role};
use crate::parsers::deserializers::local_date_of;

/// Parse one project conversation log and keep what happened on the target date.
///
/// Never fails: an error while opening or reading the file is stored in
/// [`FileDigest::error`] and whatever was collected before it is kept. Lines that are
/// blank, not JSON, or not a JSON object are skipped, as are records whose timestamp
/// is missing, unparseable, or on another local date.
pub fn parse_log_file(path: &Path, project: &str, config: &RunConfig) -> FileDigest {
    let mut digest = FileDigest::new(path.display().to_string(), project);

    if let Err(e) = scan_log_file(path, config, &mut digest) {
        tracing::warn!("Failed to read {}: {:#}", path.display(), e);
        digest.error = Some(format!("{:#}", e));
    }

    digest
}

fn scan_log_file(path: &Path, config: &RunConfig, digest: &mut FileDigest) -> Result<()> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open conversation file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut skipped_count = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line
            .with_context(|| format!("Failed to read line {} of {}", line_num + 1, path.display()))?;

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<LogRecord>(line) {
            Ok(record) => apply_record(record, config, digest),
            Err(e) => {
                tracing::debug!("Skipping line {} in {}: {}", line_num + 1, path.display(), e);
                skipped_count += 1;
            }
        }
    }

    if skipped_count > 0 {
        tracing::debug!("Parsed {}: {} malformed lines skipped", path.display(), skipped_count);
    }

    Ok(())
}

/// Route one record into the digest if it falls on the target date
fn apply_record(record: LogRecord, config: &RunConfig, digest: &mut FileDigest) {
    let Some(timestamp) = record.timestamp.as_deref() else {
        return;
    };
    if local_date_of(timestamp) != Some(config.target_date) {
        return;
    }

    let limits = &config.limits;
    match record.kind {
        RecordKind::Summary => {
            if let Some(summary) = record.summary.filter(|s| !s.is_empty()) {
                digest.summaries.push(summary);
            }
        }
        RecordKind::User => {
            if record.is_meta() {
                return;
            }
            let Some(content) = record.extract_content() else {
                return;
            };
            if content.is_empty() || is_markup(&content, &limits.markup_prefix) {
                return;
            }
            digest.conversations.push(ConversationEntry {
                role: Role::User,
                content: truncate_chars(&content, limits.user_max_chars),
                timestamp: timestamp.to_string(),
            });
        }
        RecordKind::Assistant => {
            let Some(content) = record.extract_content().filter(|c| !c.is_empty()) else {
                return;
            };
            digest.conversations.push(ConversationEntry {
                role: Role::Assistant,
                content: truncate_chars(&content, limits.assistant_max_chars),
                timestamp: timestamp.to_string(),
            });
        }
        RecordKind::Other => {}
    }
}

/// An empty prefix disables the markup check
fn is_markup(content: &str, prefix: &str) -> bool {
    !prefix.is_empty() && content.starts_with(prefix)
}

/// First `max_chars` characters of `text`, cut on a char boundary
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
