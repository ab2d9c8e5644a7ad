// src/github/repo_url.rs
// =============================================================================
// Turns a human-facing repository URL into the pieces the contents API needs.
//
// Supported formats:
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - github.com/owner/repo                         (scheme optional)
//   - https://github.com/owner/repo/tree/main/docs  (ref + start directory)
//
// Only the path matters: the host is not checked, so GitHub Enterprise or
// mirrors with the same URL shape work too. No network access happens here.
// =============================================================================

use url::Url;

use crate::error::DiscoveryError;

/// Owner/repository pair, plus whatever a tree/blob URL pinned down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
    /// Branch, tag or commit taken from `tree/<ref>/...`, if any
    pub reference: Option<String>,
    /// Directory below the repository root taken from the URL ("" = root)
    pub subpath: String,
}

// Parses a repository URL
//
// The first two non-empty path segments are owner and repo. Anything
// shorter is rejected.
//
// Example:
//   "https://github.com/rust-lang/rust" -> owner "rust-lang", repo "rust"
pub fn parse_repo_url(input: &str) -> Result<RepoRef, DiscoveryError> {
    let trimmed = input.trim();

    // Url::parse needs a scheme; "github.com/o/r" gets one added
    let parsed = Url::parse(trimmed)
        .or_else(|_| Url::parse(&format!("https://{}", trimmed)))
        .map_err(|_| DiscoveryError::InvalidRepoUrl(input.to_string()))?;

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    if segments.len() < 2 {
        return Err(DiscoveryError::InvalidRepoUrl(input.to_string()));
    }

    let owner = segments[0].to_string();
    let repo = segments[1].trim_end_matches(".git").to_string();

    if repo.is_empty() {
        return Err(DiscoveryError::InvalidRepoUrl(input.to_string()));
    }

    // owner/repo/tree/<ref>/<sub/dir>
    let (reference, subpath) = match segments.get(2..) {
        Some([kind, reference, rest @ ..]) if *kind == "tree" || *kind == "blob" => {
            (Some(reference.to_string()), rest.join("/"))
        }
        _ => (None, String::new()),
    };

    Ok(RepoRef {
        owner,
        repo,
        reference,
        subpath,
    })
}
