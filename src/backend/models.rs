//! Data types shared between the file service and the widget.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A file stored on the server, as returned by `POST /files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileData {
    /// Server-assigned opaque id.
    pub id: String,
    /// Original filename.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
impl FileData {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size: None,
            created_at: None,
        }
    }
}

/// A local file picked in the drop zone but not uploaded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    pub size: Option<u64>,
}

impl SelectedFile {
    /// Builds a selection from a path reported by the file picker.
    ///
    /// The display name is the last path component, or the whole path if it has none.
    pub fn from_path(path: impl Into<PathBuf>, size: Option<u64>) -> Self {
        let path = path.into();
        let name = file_name_of(&path);
        Self { name, path, size }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_data_parses_minimal_response() {
        let file: FileData = serde_json::from_str(r#"{"id":"1","name":"a.txt"}"#).unwrap();
        assert_eq!(file, FileData::new("1", "a.txt"));
    }

    #[test]
    fn test_file_data_parses_full_server_metadata() {
        let json = r#"{
            "id": "0b6f3c1e-8f8e-4c55-9d4e-3f1d3c0a7e11",
            "name": "report.pdf",
            "size": 2048,
            "created_at": "2025-03-01T12:30:00Z"
        }"#;
        let file: FileData = serde_json::from_str(json).unwrap();

        assert_eq!(file.name, "report.pdf");
        assert_eq!(file.size, Some(2048));
        assert_eq!(
            file.created_at.map(|date| date.to_rfc3339()),
            Some("2025-03-01T12:30:00+00:00".to_string())
        );
    }

    #[test]
    fn test_file_data_rejects_missing_id() {
        assert!(serde_json::from_str::<FileData>(r#"{"name":"a.txt"}"#).is_err());
    }

    #[test]
    fn test_selected_file_uses_last_path_component() {
        let file = SelectedFile::from_path("/home/user/docs/notes.md", Some(12));
        assert_eq!(file.name, "notes.md");
        assert_eq!(file.path, PathBuf::from("/home/user/docs/notes.md"));
        assert_eq!(file.size, Some(12));
    }
}
