use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One retained message, already truncated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationEntry {
    pub role: Role,
    pub content: String,
    /// Timestamp exactly as it appeared in the log record
    pub timestamp: String,
}

/// Everything extracted from a single log file for the target date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDigest {
    pub file: String,
    pub project: String,
    pub summaries: Vec<String>,
    pub conversations: Vec<ConversationEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileDigest {
    pub fn new(file: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            project: project.into(),
            summaries: Vec::new(),
            conversations: Vec::new(),
            error: None,
        }
    }

    /// True when the file contributed nothing for the day
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty() && self.conversations.is_empty()
    }
}

/// Output of one run.
///
/// Serializes untagged, so the JSON is either
/// `{date, projects, total_summaries, total_conversations}` or, when the projects
/// directory is missing, `{date, error, projects: []}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DailyDigest {
    Found {
        date: String,
        projects: Vec<FileDigest>,
        total_summaries: usize,
        total_conversations: usize,
    },
    Missing {
        date: String,
        error: String,
        projects: Vec<FileDigest>,
    },
}

impl DailyDigest {
    pub fn empty(date: impl Into<String>) -> Self {
        DailyDigest::Found {
            date: date.into(),
            projects: Vec::new(),
            total_summaries: 0,
            total_conversations: 0,
        }
    }

    pub fn missing(date: impl Into<String>, error: impl Into<String>) -> Self {
        DailyDigest::Missing { date: date.into(), error: error.into(), projects: Vec::new() }
    }

    /// Add a file's results; files with nothing for the day are dropped
    pub fn push(&mut self, digest: FileDigest) {
        if digest.is_empty() {
            return;
        }
        if let DailyDigest::Found { projects, total_summaries, total_conversations, .. } = self {
            *total_summaries += digest.summaries.len();
            *total_conversations += digest.conversations.len();
            projects.push(digest);
        }
    }

    pub fn date(&self) -> &str {
        match self {
            DailyDigest::Found { date, .. } | DailyDigest::Missing { date, .. } => date,
        }
    }

    pub fn projects(&self) -> &[FileDigest] {
        match self {
            DailyDigest::Found { projects, .. } | DailyDigest::Missing { projects, .. } => projects,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DailyDigest::Found { .. } => None,
            DailyDigest::Missing { error, .. } => Some(error),
        }
    }

    pub fn total_summaries(&self) -> usize {
        match self {
            DailyDigest::Found { total_summaries, .. } => *total_summaries,
            DailyDigest::Missing { .. } => 0,
        }
    }

    pub fn total_conversations(&self) -> usize {
        match self {
            DailyDigest::Found { total_conversations, .. } => *total_conversations,
            DailyDigest::Missing { .. } => 0,
        }
    }

    /// Indented JSON with non-ASCII characters written literally
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
