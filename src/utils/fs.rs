//! Path resolution and directory listing helpers

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{Error, Result};

/// Resolve `path` against `cwd` unless it is already absolute
pub fn resolve_path(path: impl AsRef<Path>, cwd: &Path) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// An entry of a directory listing
#[derive(Debug, Clone)]
pub struct DirEntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// List the immediate children of `dir`, sorted by name.
///
/// Symlinks are followed when deciding whether an entry is a directory. Names
/// that are not valid UTF-8 are converted lossily.
pub async fn list_dir_sorted(dir: &Path) -> Result<Vec<DirEntryInfo>> {
    let mut reader = fs::read_dir(dir)
        .await
        .map_err(|e| Error::filesystem(dir, e))?;

    let mut entries = Vec::new();
    while let Some(entry) = reader
        .next_entry()
        .await
        .map_err(|e| Error::filesystem(dir, e))?
    {
        let path = entry.path();
        let metadata = fs::metadata(&path)
            .await
            .map_err(|e| Error::filesystem(&path, e))?;
        entries.push(DirEntryInfo {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            is_dir: metadata.is_dir(),
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Read a UTF-8 file, mapping failures to [`Error::Filesystem`]
pub async fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::filesystem(path, e))
}
