// src/action/link.rs
// =============================================================================
// Link-Reporter: prints where a chosen file can be viewed.
//
// No network access here; everything needed was gathered by the walk.
// =============================================================================

use crate::error::IoError;
use crate::walk::FileEntry;

/// Prints the entry and returns its view URL.
pub fn report_link(entry: &FileEntry, json: bool) -> Result<String, IoError> {
    println!("{}", render_link(entry, json)?);
    Ok(entry.view_url.clone())
}

// Formats the report
//
// Human form:
//   Random file selected: A.md
//   File URL: https://github.com/.../A.md
fn render_link(entry: &FileEntry, json: bool) -> Result<String, IoError> {
    if json {
        Ok(serde_json::to_string_pretty(entry)?)
    } else {
        Ok(format!(
            "🎯 Random file selected: {}\n🔗 File URL: {}",
            entry.name, entry.view_url
        ))
    }
}
