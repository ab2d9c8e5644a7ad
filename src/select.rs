// src/select.rs
// =============================================================================
// Chooses which discovered files an action receives.
//
// - pick_random: one file, uniformly at random (download / link flows)
// - take_all:    every file, unchanged and in order (export flow)
//
// Both refuse an empty collection with DiscoveryError::NoFiles, so no action
// ever runs without something to act on.
// =============================================================================

use rand::Rng;

use crate::error::DiscoveryError;
use crate::walk::FileEntry;

/// Picks one entry with uniform probability using the thread-local RNG.
pub fn pick_random(files: Vec<FileEntry>, start: &str) -> Result<FileEntry, DiscoveryError> {
    pick_random_with(files, start, &mut rand::thread_rng())
}

/// Same as `pick_random`, with a caller-supplied RNG.
pub fn pick_random_with<R: Rng + ?Sized>(
    mut files: Vec<FileEntry>,
    start: &str,
    rng: &mut R,
) -> Result<FileEntry, DiscoveryError> {
    if files.is_empty() {
        return Err(DiscoveryError::no_files(start));
    }
    let index = rng.gen_range(0..files.len());
    Ok(files.swap_remove(index))
}

/// Passes the whole collection through, rejecting an empty one.
pub fn take_all(files: Vec<FileEntry>, start: &str) -> Result<Vec<FileEntry>, DiscoveryError> {
    if files.is_empty() {
        return Err(DiscoveryError::no_files(start));
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn entries(names: &[&str]) -> Vec<FileEntry> {
        names
            .iter()
            .map(|name| FileEntry {
                name: name.to_string(),
                path: name.to_string(),
                view_url: format!("https://example.com/{}", name),
                download_url: None,
            })
            .collect()
    }

    #[test]
    fn test_pick_from_single_entry() {
        let picked = pick_random(entries(&["only.md"]), "").unwrap();
        assert_eq!(picked.name, "only.md");
    }

    #[test]
    fn test_every_entry_can_be_picked() {
        let names = ["a.md", "b.md", "c.md"];
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(pick_random(entries(&names), "").unwrap().name);
        }
        assert_eq!(seen.len(), names.len());
    }

    #[test]
    fn test_pick_from_empty_is_no_files() {
        let result = pick_random(Vec::new(), "docs");
        assert!(matches!(result, Err(DiscoveryError::NoFiles { path }) if path == "docs"));
    }

    #[test]
    fn test_take_all_keeps_order() {
        let all = take_all(entries(&["b.md", "a.md"]), "").unwrap();
        let names: Vec<_> = all.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b.md", "a.md"]);
    }

    #[test]
    fn test_take_all_rejects_empty() {
        assert!(take_all(Vec::new(), "").is_err());
    }
}
