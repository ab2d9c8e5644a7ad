// src/github/fake.rs
// =============================================================================
// In-memory ContentsSource used by the walker and action tests.
// =============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use reqwest::StatusCode;

use super::{ContentItem, ContentsSource, EntryKind};
use crate::error::{DiscoveryError, IoError};

#[derive(Default)]
pub struct FakeSource {
    listings: HashMap<String, Vec<ContentItem>>,
    failing: Vec<String>,
    raw: HashMap<String, String>,
    /// Every path passed to `list`, in call order
    pub listed: RefCell<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file under `dir` with predictable links.
    pub fn file(mut self, dir: &str, name: &str) -> Self {
        let path = crate::walk::join_path(dir, name);
        self.listings.entry(dir.to_string()).or_default().push(ContentItem {
            kind: EntryKind::File,
            name: name.to_string(),
            path: path.clone(),
            html_url: Some(format!("https://example.com/view/{}", path)),
            download_url: Some(format!("https://example.com/raw/{}", path)),
        });
        self
    }

    /// Adds a sub-directory `name` under `dir`.
    pub fn dir(mut self, dir: &str, name: &str) -> Self {
        let path = crate::walk::join_path(dir, name);
        self.listings.entry(dir.to_string()).or_default().push(ContentItem {
            kind: EntryKind::Dir,
            name: name.to_string(),
            path: path.clone(),
            html_url: Some(format!("https://example.com/tree/{}", path)),
            download_url: None,
        });
        self.listings.entry(path).or_default();
        self
    }

    /// Adds an arbitrary item under `dir`.
    pub fn item(mut self, dir: &str, item: ContentItem) -> Self {
        self.listings.entry(dir.to_string()).or_default().push(item);
        self
    }

    /// Makes listing `dir` fail with HTTP 500.
    pub fn failing(mut self, dir: &str) -> Self {
        self.failing.push(dir.to_string());
        self
    }

    /// Registers content behind a download URL.
    pub fn raw(mut self, url: &str, content: &str) -> Self {
        self.raw.insert(url.to_string(), content.to_string());
        self
    }
}

impl ContentsSource for FakeSource {
    async fn list(&self, path: &str) -> Result<Vec<ContentItem>, DiscoveryError> {
        self.listed.borrow_mut().push(path.to_string());

        if self.failing.iter().any(|p| p == path) {
            return Err(DiscoveryError::Status {
                path: path.to_string(),
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }

        self.listings
            .get(path)
            .cloned()
            .ok_or_else(|| DiscoveryError::Status {
                path: path.to_string(),
                status: StatusCode::NOT_FOUND,
            })
    }

    async fn fetch_raw(&self, url: &str) -> Result<String, IoError> {
        self.raw.get(url).cloned().ok_or_else(|| IoError::FetchStatus {
            url: url.to_string(),
            status: StatusCode::NOT_FOUND,
        })
    }
}
