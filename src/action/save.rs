// src/action/save.rs
// =============================================================================
// Save-to-Disk: downloads one file's raw content and writes it locally.
//
// Steps:
// 1. Fetch the content behind the entry's download URL
// 2. Create the output directory (and parents) if missing
// 3. Write <output_dir>/<name>, replacing any existing file
//
// The name is checked and the fetch happens before anything touches the
// disk, so a rejected name or a failed download leaves nothing behind.
// =============================================================================

use std::path::{Component, Path, PathBuf};

use crate::error::{IoError, Result};
use crate::github::ContentsSource;
use crate::walk::FileEntry;

// Downloads `entry` into `output_dir`
//
// Returns: the path of the written file
pub async fn save_entry<S: ContentsSource>(
    source: &S,
    entry: &FileEntry,
    output_dir: &Path,
) -> Result<PathBuf> {
    let url = entry
        .download_url
        .as_deref()
        .ok_or_else(|| IoError::MissingDownloadUrl {
            name: entry.name.clone(),
        })?;

    check_file_name(&entry.name)?;

    let content = source.fetch_raw(url).await?;
    log::info!("Downloaded {} ({} bytes)", entry.path, content.len());

    Ok(save_file(&entry.name, &content, output_dir).await?)
}

// The name comes from the remote listing; it must be a single normal path
// component so the file lands directly inside the output directory.
fn check_file_name(name: &str) -> std::result::Result<(), IoError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(IoError::InvalidName {
            name: name.to_string(),
        }),
    }
}

// Writes `content` to `output_dir/name`, creating the directory if needed
async fn save_file(name: &str, content: &str, output_dir: &Path) -> std::result::Result<PathBuf, IoError> {
    check_file_name(name)?;

    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|source| IoError::Write {
            path: output_dir.to_path_buf(),
            source,
        })?;

    let file_path = output_dir.join(name);
    tokio::fs::write(&file_path, content)
        .await
        .map_err(|source| IoError::Write {
            path: file_path.clone(),
            source,
        })?;

    Ok(file_path)
}
