// src/action/mod.rs
// =============================================================================
// Terminal actions: what happens to the files a walk discovered.
//
// Submodules:
// - save:   download one file to disk
// - link:   print one file's web link
// - export: write all files to a CSV
//
// Exactly one of them runs per invocation.
// =============================================================================

mod export;
mod link;
mod save;

pub use export::export_csv;
pub use link::report_link;
pub use save::save_entry;
