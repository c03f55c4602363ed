//! Project domain entities

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A project registered with the QA service (Entity)
///
/// `name` is the unique key. Listing entries may lack a source URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_url: Option<String>,
}

impl Project {
    /// Create a project, returning None for an empty name
    pub fn try_new(name: impl Into<String>, source_url: Option<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            None
        } else {
            Some(Self { name, source_url })
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }
}

/// Registration form input.
///
/// The draft is kept by whoever collects the input and is cleared only after
/// the service accepted the registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub source_url: String,
}

impl ProjectDraft {
    pub fn new(name: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_url: source_url.into(),
        }
    }

    /// Check both fields are filled in, returning the trimmed values
    pub fn validate(&self) -> Result<(&str, &str), ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingProjectName);
        }
        let source_url = self.source_url.trim();
        if source_url.is_empty() {
            return Err(ValidationError::MissingSourceUrl);
        }
        Ok((name, source_url))
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.source_url.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.source_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_requires_name() {
        assert!(Project::try_new("", None).is_none());
        let p = Project::try_new("Alpha", Some("http://x".into())).unwrap();
        assert_eq!(p.name(), "Alpha");
        assert_eq!(p.source_url(), Some("http://x"));
    }

    #[test]
    fn test_draft_validation() {
        assert_eq!(
            ProjectDraft::new("", "http://x").validate(),
            Err(ValidationError::MissingProjectName)
        );
        assert_eq!(
            ProjectDraft::new("Alpha", "  ").validate(),
            Err(ValidationError::MissingSourceUrl)
        );
        assert_eq!(
            ProjectDraft::new(" Alpha ", "http://x").validate(),
            Ok(("Alpha", "http://x"))
        );
    }

    #[test]
    fn test_draft_clear() {
        let mut draft = ProjectDraft::new("Alpha", "http://x");
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
    }
}
