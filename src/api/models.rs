//! Data model for gist records.
//!
//! `GistSummary` is the one-line record produced by the list operation,
//! `GistDetail` the full per-gist resource, and `FileInfo` the local
//! assembly used when building a create request.

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Deserialize;
use serde_json::Value;

/// One entry from the gist list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistSummary {
    /// Unique gist identifier. The API may serve it as a string or a number.
    pub id: String,
    /// Whether the gist is publicly visible.
    pub public: bool,
    /// Gist description. Empty when the API reports null.
    pub description: String,
}

impl GistSummary {
    /// Builds a summary from one element of the list response.
    ///
    /// Returns `None` when the element is missing any of the `id`,
    /// `public`, or `description` keys, or carries them with unusable
    /// types. Malformed records are skipped rather than failing the
    /// whole fetch.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let id = match obj.get("id")? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };

        let public = obj.get("public")?.as_bool()?;

        let description = match obj.get("description")? {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            _ => return None,
        };

        Some(Self {
            id,
            public,
            description,
        })
    }
}

/// The complete result of a paginated list fetch.
///
/// `truncated` is set when the walk stopped early because a page failed
/// to fetch or decode, so callers can distinguish "no more pages" from
/// "something went wrong part way through".
#[derive(Debug, Clone, Default)]
pub struct GistList {
    /// Valid records accumulated across all fetched pages.
    pub gists: Vec<GistSummary>,
    /// True when the fetch ended before the last page was reached.
    pub truncated: bool,
}

/// Full per-gist resource as returned by `GET /gists/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GistDetail {
    pub id: String,
    pub description: Option<String>,
    pub public: bool,
    /// Filename to file record mapping.
    #[serde(default)]
    pub files: BTreeMap<String, GistFile>,
}

/// A single file inside a gist resource.
#[derive(Debug, Clone, Deserialize)]
pub struct GistFile {
    /// Raw content, which may be base64 or plain depending on API version.
    pub content: Option<String>,
}

impl GistFile {
    /// Returns the file content as text.
    ///
    /// Content is base64-decoded when it decodes cleanly to UTF-8, and
    /// returned verbatim otherwise.
    pub fn decoded(&self) -> String {
        let raw = match &self.content {
            Some(raw) => raw,
            None => return String::new(),
        };

        match BASE64.decode(raw.trim_end()) {
            Ok(bytes) => String::from_utf8(bytes).unwrap_or_else(|_| raw.clone()),
            Err(_) => raw.clone(),
        }
    }
}

/// A local file staged for a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub content: String,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_from_value_string_id() {
        let value = json!({"id": "abc123", "public": true, "description": "notes"});
        let summary = GistSummary::from_value(&value).unwrap();
        assert_eq!(summary.id, "abc123");
        assert!(summary.public);
        assert_eq!(summary.description, "notes");
    }

    #[test]
    fn test_summary_from_value_numeric_id() {
        let value = json!({"id": 1, "public": false, "description": "x"});
        let summary = GistSummary::from_value(&value).unwrap();
        assert_eq!(summary.id, "1");
        assert!(!summary.public);
    }

    #[test]
    fn test_summary_from_value_null_description() {
        let value = json!({"id": "a", "public": true, "description": null});
        let summary = GistSummary::from_value(&value).unwrap();
        assert_eq!(summary.description, "");
    }

    #[test]
    fn test_summary_from_value_missing_keys() {
        assert!(GistSummary::from_value(&json!({"public": true, "description": "d"})).is_none());
        assert!(GistSummary::from_value(&json!({"id": "a", "description": "d"})).is_none());
        assert!(GistSummary::from_value(&json!({"id": "a", "public": true})).is_none());
        assert!(GistSummary::from_value(&json!("not-an-object")).is_none());
    }

    #[test]
    fn test_gist_file_decoded_base64() {
        let file = GistFile {
            content: Some(BASE64.encode("test-content-A")),
        };
        assert_eq!(file.decoded(), "test-content-A");
    }

    #[test]
    fn test_gist_file_decoded_plain_fallback() {
        let file = GistFile {
            content: Some("not valid base64!".to_string()),
        };
        assert_eq!(file.decoded(), "not valid base64!");
    }

    #[test]
    fn test_gist_file_decoded_empty() {
        let file = GistFile { content: None };
        assert_eq!(file.decoded(), "");
    }

    #[test]
    fn test_gist_detail_deserialize() {
        let json = r#"{
            "id": "1",
            "description": "test-gist",
            "public": true,
            "files": {
                "file-A.txt": {"content": "hello"}
            }
        }"#;

        let detail: GistDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.id, "1");
        assert_eq!(detail.files.len(), 1);
        assert_eq!(detail.files["file-A.txt"].decoded(), "hello");
    }
}
