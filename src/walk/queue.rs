// src/walk/queue.rs
// =============================================================================
// This module walks a repository's directory tree breadth-first.
//
// How it works:
// 1. Start with the starting directory in a queue
// 2. List its contents (one API call per directory)
// 3. Keep every file as a FileEntry
// 4. Queue every sub-directory while the depth budget allows
// 5. Repeat until the queue is empty
//
// Depth is counted in listing round trips from the starting directory, not
// from the repository root:
//   max_depth = Some(0): only the starting directory
//   max_depth = Some(2): starting directory + two levels below it
//   max_depth = None:    keep going until no directories remain
//
// Failures:
// - The starting directory failing aborts the walk: the cause is logged and
//   the walk reports "no files found"
// - Any other directory failing is logged and contributes zero files
//
// Rust concepts:
// - VecDeque: FIFO worklist instead of recursion
// - HashSet: to never list the same directory twice
// - Generics: the walk works over any ContentsSource
// =============================================================================

use std::collections::{HashSet, VecDeque};

use super::entry::{join_path, FileEntry};
use crate::error::DiscoveryError;
use crate::github::{ContentsSource, EntryKind};

// A directory waiting to be listed
#[derive(Debug, Clone)]
struct WalkItem {
    path: String,
    // How many more levels may be descended below this one (None = no limit)
    remaining: Option<usize>,
}

impl WalkItem {
    // The budget a child of this directory gets, or None if it can't be visited
    fn child_budget(&self) -> Option<Option<usize>> {
        match self.remaining {
            None => Some(None),
            Some(0) => None,
            Some(n) => Some(Some(n - 1)),
        }
    }
}

// Walks the tree below `start` and returns every file found
//
// Parameters:
//   source: where listings come from
//   start: directory to start from ("" = repository root)
//   max_depth: extra levels to descend below `start`, None for unbounded
//
// Returns: files in discovery order (listing order, level by level).
// An empty Vec is a valid result; deciding that it is a failure is up to
// the caller.
pub async fn walk_tree<S: ContentsSource>(
    source: &S,
    start: &str,
    max_depth: Option<usize>,
) -> Result<Vec<FileEntry>, DiscoveryError> {
    let start = start.trim_matches('/').to_string();

    let mut queue = VecDeque::new();
    queue.push_back(WalkItem {
        path: start.clone(),
        remaining: max_depth,
    });

    let mut visited = HashSet::new();
    let mut files = Vec::new();

    while let Some(item) = queue.pop_front() {
        if !visited.insert(item.path.clone()) {
            continue;
        }

        log::info!("Listing '{}'", display_path(&item.path));

        let contents = match source.list(&item.path).await {
            Ok(contents) => contents,
            Err(e) if item.path == start => {
                log::error!("Could not list '{}': {}", display_path(&start), e);
                return Err(DiscoveryError::no_files(&start));
            }
            Err(e) => {
                log::warn!("Skipping directory '{}': {}", item.path, e);
                continue;
            }
        };

        for entry in contents {
            match entry.kind {
                EntryKind::File => {
                    let name = entry.name.clone();
                    match FileEntry::from_item(&item.path, entry) {
                        Some(file) => files.push(file),
                        None => log::warn!(
                            "Skipping '{}': listing has no html_url",
                            join_path(&item.path, &name)
                        ),
                    }
                }
                EntryKind::Dir => {
                    if let Some(remaining) = item.child_budget() {
                        queue.push_back(WalkItem {
                            path: join_path(&item.path, &entry.name),
                            remaining,
                        });
                    }
                }
                EntryKind::Other => {
                    log::debug!("Ignoring '{}' ({})", entry.path, entry.name);
                }
            }
        }
    }

    Ok(files)
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a queue instead of recursion?
//    - An async fn can't call itself without boxing its future
//    - A VecDeque worklist keeps the walk a plain loop
//    - Popping from the front gives breadth-first order
//
// 2. What is Option<Option<usize>>?
//    - The outer Option answers "may this child be visited at all?"
//    - The inner Option is the child's own budget (None = unlimited)
//
// 3. What does `Err(e) if item.path == start` do?
//    - A match guard: the arm only matches when the condition holds
//    - Only the starting directory's failure ends the walk
//
// 4. Why does HashSet::insert work as a check?
//    - insert() returns false when the value was already present
//    - So one call both records and tests "visited"
// -----------------------------------------------------------------------------
