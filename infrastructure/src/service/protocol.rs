//! JSON bodies exchanged with the QA service.
//!
//! Field names follow the service's wire format (`project_name`, `spo_url`,
//! `documentUrl`, ...); conversion into domain types happens here so the
//! rest of the crate never sees them.

use ragchat_application::{GatewayError, QaAnswer, RegisteredProject};
use ragchat_domain::{Project, SourceDocument, preview};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum number of characters of an error body kept in a `GatewayError`
const ERROR_BODY_PREVIEW: usize = 200;

/// `POST answer` request
#[derive(Debug, Serialize)]
pub struct AskBody<'a> {
    pub user_question: &'a str,
    pub project_name: &'a str,
}

/// `POST answer` response
#[derive(Debug, Deserialize)]
pub struct AnswerBody {
    pub answer: String,
    #[serde(default, rename = "documentUrl")]
    pub document_url: Option<String>,
    #[serde(default, rename = "documentName")]
    pub document_name: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
}

impl AnswerBody {
    pub fn into_answer(self) -> QaAnswer {
        QaAnswer {
            answer: self.answer,
            source_document: SourceDocument::from_parts(
                self.document_name,
                self.document_url,
                self.last_modified,
            ),
        }
    }
}

/// Request body for registration (with URL) and deletion (name only)
#[derive(Debug, Serialize)]
pub struct ProjectBody<'a> {
    pub project_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spo_url: Option<&'a str>,
}

/// `GET projects` response.
///
/// `projects` is kept as raw JSON so one malformed entry cannot fail the
/// whole listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListBody {
    #[serde(default)]
    pub projects: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct ProjectRecord {
    #[serde(default)]
    project_name: Option<String>,
    #[serde(default)]
    spo_url: Option<Value>,
}

impl ProjectListBody {
    /// Keep only object entries that carry a non-empty `project_name`.
    ///
    /// A missing or non-array `projects` field yields an empty list.
    pub fn into_projects(self) -> Vec<Project> {
        let Some(Value::Array(entries)) = self.projects else {
            return Vec::new();
        };
        entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<ProjectRecord>(entry).ok())
            .filter_map(|record| {
                let source_url = record
                    .spo_url
                    .as_ref()
                    .and_then(Value::as_str)
                    .map(str::to_string);
                Project::try_new(record.project_name?, source_url)
            })
            .collect()
    }
}

/// `POST register` response
#[derive(Debug, Default, Deserialize)]
pub struct RegisterBody {
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub spo_url: Option<String>,
}

impl From<RegisterBody> for RegisteredProject {
    fn from(body: RegisterBody) -> Self {
        RegisteredProject {
            name: body.project_name,
            source_url: body.spo_url,
        }
    }
}

/// Map a non-2xx status to [`GatewayError::Server`]
pub fn check_status(status: u16, body: &str) -> Result<(), GatewayError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(GatewayError::Server {
            status,
            body: preview(body.trim(), ERROR_BODY_PREVIEW),
        })
    }
}

/// Check the status and decode a JSON body
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, GatewayError> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| GatewayError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_body_wire_names() {
        let body = AskBody {
            user_question: "What is X?",
            project_name: "Alpha",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "user_question": "What is X?", "project_name": "Alpha" })
        );
    }

    #[test]
    fn test_answer_maps_source_document() {
        let body: AnswerBody = decode_body(
            200,
            r#"{"answer":"X is Y","documentUrl":"http://a/doc","documentName":"doc.pdf","last_modified":"2024-01-01"}"#,
        )
        .unwrap();
        let answer = body.into_answer();
        assert_eq!(answer.answer, "X is Y");
        assert_eq!(
            answer.source_document,
            Some(SourceDocument::new("doc.pdf", "http://a/doc", "2024-01-01"))
        );
    }

    #[test]
    fn test_answer_without_document() {
        let body: AnswerBody = decode_body(200, r#"{"answer":"No sources"}"#).unwrap();
        assert!(body.into_answer().source_document.is_none());
    }

    #[test]
    fn test_answer_missing_field_is_decode_error() {
        let result: Result<AnswerBody, _> = decode_body(200, r#"{"documentName":"doc.pdf"}"#);
        assert!(matches!(result, Err(GatewayError::Decode(_))));

        let result: Result<AnswerBody, _> = decode_body(200, "<html>oops</html>");
        assert!(matches!(result, Err(GatewayError::Decode(_))));
    }

    #[test]
    fn test_non_success_status_is_server_error() {
        let result: Result<AnswerBody, _> = decode_body(500, "  internal error \n");
        assert_eq!(
            result.unwrap_err(),
            GatewayError::Server {
                status: 500,
                body: "internal error".to_string(),
            }
        );
        assert!(check_status(204, "").is_ok());
    }

    #[test]
    fn test_listing_filters_unusable_entries() {
        let body: ProjectListBody =
            decode_body(200, r#"{"projects":[null,{"project_name":"A"},{}]}"#).unwrap();
        let projects = body.into_projects();
        assert_eq!(projects, vec![Project::try_new("A", None).unwrap()]);
    }

    #[test]
    fn test_listing_drops_empty_and_non_string_names() {
        let body: ProjectListBody = decode_body(
            200,
            r#"{"projects":[{"project_name":""},{"project_name":5},"B",{"project_name":"C","spo_url":"http://c"}]}"#,
        )
        .unwrap();
        let projects = body.into_projects();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name(), "C");
        assert_eq!(projects[0].source_url(), Some("http://c"));
    }

    #[test]
    fn test_listing_keeps_entry_with_odd_source_url() {
        let body: ProjectListBody = decode_body(
            200,
            r#"{"projects":[{"project_name":"D","spo_url":42},{"project_name":"E","spo_url":null}]}"#,
        )
        .unwrap();
        let projects = body.into_projects();
        assert_eq!(
            projects,
            vec![
                Project::try_new("D", None).unwrap(),
                Project::try_new("E", None).unwrap(),
            ]
        );
    }

    #[test]
    fn test_listing_without_array() {
        let missing: ProjectListBody = decode_body(200, "{}").unwrap();
        assert!(missing.into_projects().is_empty());

        let not_array: ProjectListBody = decode_body(200, r#"{"projects":"A"}"#).unwrap();
        assert!(not_array.into_projects().is_empty());
    }

    #[test]
    fn test_delete_body_omits_url() {
        let body = ProjectBody {
            project_name: "Alpha",
            spo_url: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"project_name":"Alpha"}"#
        );
    }

    #[test]
    fn test_register_body_into_registered_project() {
        let body: RegisterBody = decode_body(200, r#"{"project_name":"Gamma"}"#).unwrap();
        let registered = RegisteredProject::from(body);
        assert_eq!(registered.name.as_deref(), Some("Gamma"));
        assert!(registered.source_url.is_none());
    }
}
