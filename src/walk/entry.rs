// src/walk/entry.rs
// =============================================================================
// The record produced for every file the walker discovers.
// =============================================================================

use serde::Serialize;

use crate::github::ContentItem;

/// One discovered file.
///
/// Entries are built during a walk, handed to exactly one action, and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Base name, e.g. "A.md"
    pub name: String,
    /// Slash-joined path from the repository root, e.g. "SpringFramework/A.md"
    pub path: String,
    /// Link to the rendered file in the web UI
    pub view_url: String,
    /// Raw content link; only needed when the file gets downloaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl FileEntry {
    // Builds an entry from a listing item found in `parent`
    //
    // Returns None when the item has no web link, since such an entry can be
    // neither reported nor exported.
    pub fn from_item(parent: &str, item: ContentItem) -> Option<Self> {
        let view_url = item.html_url?;
        Some(FileEntry {
            path: join_path(parent, &item.name),
            name: item.name,
            view_url,
            download_url: item.download_url,
        })
    }
}

/// Joins a directory path and a child name with '/'.
///
/// An empty parent means the repository root, so no leading slash is added.
pub fn join_path(parent: &str, name: &str) -> String {
    let parent = parent.trim_matches('/');
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::EntryKind;

    fn item(name: &str, html_url: Option<&str>) -> ContentItem {
        ContentItem {
            kind: EntryKind::File,
            name: name.to_string(),
            path: format!("ignored/{}", name),
            html_url: html_url.map(str::to_string),
            download_url: None,
        }
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "A.md"), "A.md");
        assert_eq!(join_path("docs", "A.md"), "docs/A.md");
        assert_eq!(join_path("/docs/", "A.md"), "docs/A.md");
    }

    #[test]
    fn test_from_item_uses_walker_path() {
        let entry = FileEntry::from_item("SpringFramework", item("A.md", Some("https://x/A.md"))).unwrap();
        assert_eq!(entry.path, "SpringFramework/A.md");
        assert_eq!(entry.name, "A.md");
        assert_eq!(entry.view_url, "https://x/A.md");
    }

    #[test]
    fn test_from_item_without_link_is_skipped() {
        assert!(FileEntry::from_item("", item("A.md", None)).is_none());
    }

    #[test]
    fn test_json_omits_missing_download_url() {
        let entry = FileEntry::from_item("", item("A.md", Some("https://x/A.md"))).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("download_url"));
    }
}
