// src/walk/mod.rs
// =============================================================================
// This module discovers files in a remote repository.
//
// Features:
// - Breadth-first walk starting from any directory
// - Configurable depth limit, or unbounded
// - A failing sub-directory is skipped, not fatal
// =============================================================================

mod entry;
mod queue;

pub use entry::FileEntry;
#[cfg(test)]
pub use entry::join_path;
pub use queue::walk_tree;
