// src/github/mod.rs
// =============================================================================
// This module handles everything that touches the remote repository.
//
// Currently implements:
// - Parsing repository URLs into owner/repo (+ optional ref and start path)
// - Listing directory contents through the contents API
// - Fetching raw file content from a download URL
//
// Not handled on purpose: authentication, rate limits, retries.
// =============================================================================

mod contents;
mod repo_url;

pub use contents::{ContentItem, ContentsSource, EntryKind, GithubClient, DEFAULT_API_ROOT};
pub use repo_url::{parse_repo_url, RepoRef};

#[cfg(test)]
pub mod fake;
