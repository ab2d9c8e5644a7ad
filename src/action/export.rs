// src/action/export.rs
// =============================================================================
// CSV-Exporter: writes every discovered file as a name/link row.
//
// Output layout:
//   articleName,articleUrl
//   SpringFramework/A.md,https://github.com/.../A.md
//
// articleName is the path from the repository root. Fields are quoted only
// when they contain a comma, a quote or a line break; rows end with CRLF.
// =============================================================================

use std::io::Write;
use std::path::Path;

use crate::error::{DiscoveryError, IoError, Result};
use crate::walk::FileEntry;

const HEADER: [&str; 2] = ["articleName", "articleUrl"];

// Writes `files` to `output`
//
// Returns: number of data rows written
//
// An empty collection is refused before the file is touched. The parent
// directory is not created; a missing one is a write error.
pub async fn export_csv(files: &[FileEntry], start: &str, output: &Path) -> Result<usize> {
    if files.is_empty() {
        return Err(DiscoveryError::no_files(start).into());
    }

    let mut buffer = Vec::new();
    write_csv(files, &mut buffer).map_err(|source| IoError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    tokio::fs::write(output, buffer)
        .await
        .map_err(|source| IoError::Write {
            path: output.to_path_buf(),
            source,
        })?;

    Ok(files.len())
}

// Renders the header and one row per file into `out`.
fn write_csv(files: &[FileEntry], out: &mut impl Write) -> std::io::Result<()> {
    write_row(out, &HEADER)?;
    for file in files {
        write_row(out, &[file.path.as_str(), file.view_url.as_str()])?;
    }
    Ok(())
}

fn write_row(out: &mut impl Write, fields: &[&str]) -> std::io::Result<()> {
    let row: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    write!(out, "{}\r\n", row.join(","))
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
