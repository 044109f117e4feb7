use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::parsers::deserializers::{deserialize_lenient, is_truthy};

/// Kind of a log record, taken from its `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Summary,
    User,
    Assistant,
    #[default]
    #[serde(other)]
    Other,
}

/// One line of a conversation log.
///
/// Every field is best-effort: a field with an unexpected JSON type reads as absent
/// instead of rejecting the whole record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogRecord {
    #[serde(rename = "type", default, deserialize_with = "deserialize_kind")]
    pub kind: RecordKind,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub timestamp: Option<String>,
    #[serde(rename = "isMeta", default)]
    pub is_meta: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub message: Option<MessageBody>,
}

impl LogRecord {
    pub fn is_meta(&self) -> bool {
        self.is_meta.as_ref().is_some_and(is_truthy)
    }

    /// Text of `message.content`, see [`MessageContent::extract_text`]
    pub fn extract_content(&self) -> Option<String> {
        self.message.as_ref()?.content.as_ref()?.extract_text()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub content: Option<MessageContent>,
}

/// `message.content` is either a plain string or a list of typed blocks
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    PlainText(String),
    Blocks(Vec<ContentBlock>),
}

impl MessageContent {
    /// Plain text is returned verbatim, even when empty.
    ///
    /// For block lists, the `text` blocks are joined with newlines; thinking and tool
    /// blocks are dropped. A list with no text block at all yields `None`.
    pub fn extract_text(&self) -> Option<String> {
        match self {
            MessageContent::PlainText(text) => Some(text.clone()),
            MessageContent::Blocks(blocks) => {
                let texts: Vec<&str> = blocks
                    .iter()
                    .filter_map(|block| match block {
                        ContentBlock::Text { text } => Some(text.as_str()),
                        ContentBlock::Thinking | ContentBlock::Other => None,
                    })
                    .collect();

                if texts.is_empty() { None } else { Some(texts.join("\n")) }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Text { text: String },
    Thinking,
    Other,
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let block = match value.get("type").and_then(Value::as_str) {
            Some("text") => ContentBlock::Text {
                text: value.get("text").and_then(Value::as_str).unwrap_or_default().to_string(),
            },
            Some("thinking") => ContentBlock::Thinking,
            _ => ContentBlock::Other,
        };
        Ok(block)
    }
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<RecordKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_lenient::<D, RecordKind>(deserializer)?.unwrap_or_default())
}
