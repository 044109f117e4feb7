//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, TimeZone, Utc};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Target date used across the integration tests
pub const TARGET_DATE: &str = "2024-06-01";

/// Local noon on the target date, written without an offset so it is read as local time
pub const ON_DAY: &str = "2024-06-01T12:00:00";

/// Local noon on the day before the target date
pub const DAY_BEFORE: &str = "2024-05-31T12:00:00";

pub fn target_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// The UTC `...Z` timestamp of local noon on the target date
pub fn on_day_utc() -> String {
    let noon = target_date().and_hms_opt(12, 0, 0).unwrap();
    Local
        .from_local_datetime(&noon)
        .earliest()
        .unwrap()
        .with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

/// Builder for a fake home directory holding `.claude/projects`
pub struct HomeDirBuilder {
    temp_dir: TempDir,
}

impl HomeDirBuilder {
    /// Create a new home directory with an empty `.claude/projects`
    pub fn new() -> Self {
        let builder = Self::without_projects();
        fs::create_dir_all(builder.projects_dir()).expect("Failed to create projects dir");
        builder
    }

    /// Create a home directory with no `.claude` at all
    pub fn without_projects() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Path to the fake home directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.temp_dir.path().join(".claude").join("projects")
    }

    /// Add a project directory with the given session files
    pub fn with_project(self, name: &str, sessions: &[SessionFileBuilder]) -> Self {
        let project_dir = self.projects_dir().join(name);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for session in sessions {
            session.create_in(&project_dir);
        }

        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for HomeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one `*.jsonl` session file
pub struct SessionFileBuilder {
    filename: String,
    lines: Vec<String>,
}

impl SessionFileBuilder {
    pub fn new(filename: &str) -> Self {
        Self { filename: filename.to_string(), lines: Vec::new() }
    }

    /// Add a record line
    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Add a raw line, e.g. malformed JSON
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) -> PathBuf {
        let file_path = dir.join(&self.filename);
        let mut file = fs::File::create(&file_path).expect("Failed to create session file");
        file.write_all(self.lines.join("\n").as_bytes()).expect("Failed to write session file");
        file_path
    }
}

/// Builder for a single log record
pub struct RecordBuilder {
    value: Value,
}

impl RecordBuilder {
    fn of_type(record_type: &str) -> Self {
        Self { value: json!({ "type": record_type, "timestamp": ON_DAY }) }
    }

    /// A `summary` record
    pub fn summary(text: &str) -> Self {
        let mut builder = Self::of_type("summary");
        builder.value["summary"] = json!(text);
        builder
    }

    /// A `user` record with plain string content
    pub fn user(text: &str) -> Self {
        Self::of_type("user").content(json!(text))
    }

    /// An `assistant` record with a single text block
    pub fn assistant(text: &str) -> Self {
        Self::of_type("assistant").content(json!([{ "type": "text", "text": text }]))
    }

    /// Any other record type
    pub fn other(record_type: &str) -> Self {
        Self::of_type(record_type)
    }

    /// Replace `message.content`
    pub fn content(mut self, content: Value) -> Self {
        let role = self.value["type"].clone();
        self.value["message"] = json!({ "role": role, "content": content });
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.value["timestamp"] = json!(timestamp);
        self
    }

    pub fn without_timestamp(mut self) -> Self {
        if let Some(obj) = self.value.as_object_mut() {
            obj.remove("timestamp");
        }
        self
    }

    pub fn meta(mut self) -> Self {
        self.value["isMeta"] = json!(true);
        self
    }

    /// Convert to a JSON line
    pub fn to_json(&self) -> String {
        self.value.to_string()
    }
}

/// A thinking block
pub fn thinking_block(text: &str) -> Value {
    json!({ "type": "thinking", "thinking": text })
}

/// A text block
pub fn text_block(text: &str) -> Value {
    json!({ "type": "text", "text": text })
}

/// A tool_use block
pub fn tool_use_block(id: &str, name: &str) -> Value {
    json!({ "type": "tool_use", "id": id, "name": name, "input": {} })
}

/// Helper to create a realistic home directory with two projects of activity
pub fn realistic_home_dir() -> TempDir {
    HomeDirBuilder::new()
        .with_project(
            "-Users-test-project1",
            &[SessionFileBuilder::new("session-1.jsonl")
                .with_record(RecordBuilder::summary("Refactor login flow"))
                .with_record(RecordBuilder::user("How do I fix the login bug?"))
                .with_record(RecordBuilder::assistant("Check the session cookie."))
                .with_record(RecordBuilder::user("Old question").timestamp(DAY_BEFORE))],
        )
        .with_project(
            "-Users-test-project2",
            &[SessionFileBuilder::new("session-2.jsonl")
                .with_record(RecordBuilder::user("<command-name>/clear</command-name>"))
                .with_record(RecordBuilder::user("Add a README"))],
        )
        .build()
}
