//! Chat domain entities

use serde::{Deserialize, Serialize};

/// Which side of the conversation produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Question,
    Answer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Question => "question",
            Role::Answer => "answer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The document an answer was retrieved from (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub name: String,
    pub url: String,
    pub last_modified: String,
}

impl SourceDocument {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        last_modified: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            last_modified: last_modified.into(),
        }
    }

    /// Build from the optional fields of an answer response.
    ///
    /// Returns `None` when the response names no document at all.
    pub fn from_parts(
        name: Option<String>,
        url: Option<String>,
        last_modified: Option<String>,
    ) -> Option<Self> {
        let name = name.unwrap_or_default();
        let url = url.unwrap_or_default();
        if name.is_empty() && url.is_empty() {
            return None;
        }
        Some(Self {
            name,
            url,
            last_modified: last_modified.unwrap_or_default(),
        })
    }
}

/// A message in a transcript (Entity)
///
/// Messages are immutable once created; fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_document: Option<SourceDocument>,
}

impl Message {
    pub fn question(text: impl Into<String>) -> Self {
        Self {
            role: Role::Question,
            text: text.into(),
            source_document: None,
        }
    }

    pub fn answer(text: impl Into<String>, source_document: Option<SourceDocument>) -> Self {
        Self {
            role: Role::Answer,
            text: text.into(),
            source_document,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_document(&self) -> Option<&SourceDocument> {
        self.source_document.as_ref()
    }
}
