// src/error.rs
// =============================================================================
// Error types shared by the discovery and action modules.
//
// Two kinds cover the whole tool:
// - DiscoveryError: the repository URL is malformed, a listing call failed,
//   or the walk finished without finding any file
// - IoError: fetching raw content failed, or writing locally failed
//
// Both are wrapped by `Error`, which is what every flow returns. main.rs
// turns any `Error` into a printed message and exit code 1.
//
// Rust concepts:
// - thiserror: derive Display/Error impls from attributes
// - #[from]: lets `?` convert a DiscoveryError/IoError into an Error
// =============================================================================

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Failures while locating files in a repository.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("invalid repository URL: {0}")]
    InvalidRepoUrl(String),

    #[error("failed to list '{path}': {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to list '{path}': HTTP {status}")]
    Status { path: String, status: StatusCode },

    #[error("no files found under '{path}'")]
    NoFiles { path: String },
}

/// Failures while fetching content or writing output.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("'{name}' has no download URL")]
    MissingDownloadUrl { name: String },

    #[error("refusing to save '{name}': not a plain file name")]
    InvalidName { name: String },

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to fetch {url}: HTTP {status}")]
    FetchStatus { url: String, status: StatusCode },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Io(#[from] IoError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl DiscoveryError {
    /// Shorthand for the "walk came back empty" case.
    pub fn no_files(path: &str) -> Self {
        let path = if path.is_empty() { "/" } else { path };
        DiscoveryError::NoFiles {
            path: path.to_string(),
        }
    }
}
