// src/github/contents.rs
// =============================================================================
// Talks to the repository contents API.
//
// Two calls are all the tool ever makes:
// - Listing call:  GET <api-root>/repos/{owner}/{repo}/contents/{path}
//                  returns a JSON array with one object per child
// - Content fetch: GET {download_url}
//                  returns the raw file text
//
// The walker and the save action only see the `ContentsSource` trait, so they
// can be driven by an in-memory source in tests.
//
// Rust concepts:
// - Traits: a shared interface implemented by the real and fake sources
// - serde: turning the JSON listing into typed structs
// =============================================================================

use std::time::Duration;

use reqwest::{header, Client};
use serde::Deserialize;
use url::Url;

use super::repo_url::RepoRef;
use crate::error::{DiscoveryError, IoError};

/// Default root of the public contents API
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

/// The `type` discriminator of a listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    /// symlink, submodule, or anything newer
    #[serde(other)]
    Other,
}

/// One child returned by a listing call.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Where listings and raw content come from.
pub trait ContentsSource {
    /// Lists the immediate children of `path` ("" = repository root).
    async fn list(&self, path: &str) -> Result<Vec<ContentItem>, DiscoveryError>;

    /// Fetches the raw text behind a download URL.
    async fn fetch_raw(&self, url: &str) -> Result<String, IoError>;
}

/// `ContentsSource` backed by the HTTP API.
pub struct GithubClient {
    client: Client,
    api_root: Url,
    repo: RepoRef,
}

impl GithubClient {
    // Builds the client for one repository
    //
    // The API refuses requests without a User-Agent, so one is always set.
    pub fn new(api_root: &str, repo: RepoRef, timeout: Duration) -> anyhow::Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        let api_root = Url::parse(api_root)
            .map_err(|e| anyhow::anyhow!("Invalid API root '{}': {}", api_root, e))?;
        if api_root.cannot_be_a_base() {
            anyhow::bail!("Invalid API root '{}': not a base URL", api_root);
        }

        Ok(Self {
            client,
            api_root,
            repo,
        })
    }

    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    // Builds the listing URL for a directory
    //
    // Each path segment is pushed separately so the url crate percent-encodes
    // it; a name like "Spring Notes" becomes "Spring%20Notes".
    pub fn listing_url(&self, path: &str) -> Url {
        let mut url = self.api_root.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["repos", self.repo.owner.as_str(), self.repo.repo.as_str(), "contents"])
                .extend(path.split('/').filter(|s| !s.is_empty()));
        }
        if let Some(reference) = &self.repo.reference {
            url.query_pairs_mut().append_pair("ref", reference);
        }
        url
    }
}

impl ContentsSource for GithubClient {
    async fn list(&self, path: &str) -> Result<Vec<ContentItem>, DiscoveryError> {
        let url = self.listing_url(path);
        log::debug!("GET {}", url);

        let request_error = |source: reqwest::Error| DiscoveryError::Request {
            path: path.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;

        if !response.status().is_success() {
            return Err(DiscoveryError::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }

        response
            .json::<Vec<ContentItem>>()
            .await
            .map_err(request_error)
    }

    async fn fetch_raw(&self, url: &str) -> Result<String, IoError> {
        log::debug!("GET {}", url);

        let fetch_error = |source: reqwest::Error| IoError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(fetch_error)?;

        if !response.status().is_success() {
            return Err(IoError::FetchStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }

        response.text().await.map_err(fetch_error)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is #[serde(other)]?
//    - A catch-all for enum variants we don't know about
//    - "symlink" or "submodule" deserialize to EntryKind::Other instead of
//      failing the whole listing
//
// 2. Why Option<String> for html_url and download_url?
//    - The API sends null for some entries (directories have no download URL)
//    - #[serde(default)] also accepts the field being absent
//
// 3. Why async fn in a trait?
//    - Supported since Rust 1.75
//    - Callers use it through generics (S: ContentsSource), never `dyn`
//
// 4. Why map_err?
//    - reqwest::Error knows nothing about which directory we were listing
//    - map_err wraps it with that context before `?` returns it
// -----------------------------------------------------------------------------
