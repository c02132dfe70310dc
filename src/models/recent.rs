//! Recently opened documents, as supplied by the host.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A host-tracked reference to a previously opened document.
///
/// Serialized in camelCase to match the desktop app's `recent.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentItem {
    /// Display name shown on the start screen
    pub file_name: String,
    /// Location the host reopens the document from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// When the document was last opened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened: Option<DateTime<Utc>>,
}

impl RecentItem {
    /// Creates a recent item with only a display name.
    pub fn named(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            path: None,
            last_opened: None,
        }
    }

    /// Creates a recent item pointing at a file on disk.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Self {
            file_name,
            path: Some(path),
            last_opened: None,
        }
    }
}

/// One element of the recent-items file: a full record or a bare path.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecentEntry {
    Item(RecentItem),
    Path(PathBuf),
}

impl From<RecentEntry> for RecentItem {
    fn from(entry: RecentEntry) -> Self {
        match entry {
            RecentEntry::Item(item) => item,
            RecentEntry::Path(path) => Self::at_path(path),
        }
    }
}

/// Loads the host's recent-items list from a JSON array.
///
/// Elements are either objects or plain path strings, which are shown by their
/// file name. A missing file means no recent items. Order in the file is
/// display order and is kept as-is.
pub fn load_recent_items(path: &Path) -> Result<Vec<RecentItem>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).context(format!(
        "Failed to read recent items file: {}",
        path.display()
    ))?;

    let entries: Vec<RecentEntry> = serde_json::from_str(&content).context(format!(
        "Failed to parse recent items file: {}",
        path.display()
    ))?;

    Ok(entries.into_iter().map(RecentItem::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let items = load_recent_items(&temp_dir.path().join("recent.json")).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_load_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("recent.json");
        fs::write(
            &file,
            r#"[
                {"fileName": "b.json", "path": "/data/b.json"},
                {"fileName": "a.json", "lastOpened": "2024-03-01T10:00:00Z"},
                {"fileName": "c.json"}
            ]"#,
        )
        .unwrap();

        let items = load_recent_items(&file).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["b.json", "a.json", "c.json"]);
        assert_eq!(items[0].path, Some(PathBuf::from("/data/b.json")));
        assert!(items[1].last_opened.is_some());
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("recent.json");
        fs::write(&file, "{ not a list").unwrap();

        let err = load_recent_items(&file).unwrap_err();
        assert!(err.to_string().contains("Failed to parse recent items file"));
    }

    #[test]
    fn test_load_accepts_bare_paths() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("recent.json");
        fs::write(
            &file,
            r#"["/data/cats.udt.json", {"fileName": "dogs.json"}]"#,
        )
        .unwrap();

        let items = load_recent_items(&file).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], RecentItem::at_path("/data/cats.udt.json"));
        assert_eq!(items[0].file_name, "cats.udt.json");
        assert_eq!(items[1], RecentItem::named("dogs.json"));
    }

    #[test]
    fn test_at_path_uses_file_name() {
        let item = RecentItem::at_path("/home/me/cats.udt.json");
        assert_eq!(item.file_name, "cats.udt.json");
        assert_eq!(item.path, Some(PathBuf::from("/home/me/cats.udt.json")));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&RecentItem::named("a.json")).unwrap();
        assert_eq!(json, r#"{"fileName":"a.json"}"#);
    }
}
