//! Output port for rendered files

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};

/// Destination for rendered files
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write `content` to `path`, creating parent directories and replacing
    /// any existing file
    async fn write_file(&self, path: &Path, content: &str) -> Result<()>;
}

/// Output service that writes rendered files to the filesystem
pub struct FileSystemOutput;

impl FileSystemOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutputService for FileSystemOutput {
    async fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::filesystem(parent, e))?;
        }

        let mut file = fs::File::create(path)
            .await
            .map_err(|e| Error::filesystem(path, e))?;
        file.write_all(content.as_bytes())
            .await
            .map_err(|e| Error::filesystem(path, e))?;
        file.flush().await.map_err(|e| Error::filesystem(path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("a/b/c.txt");

        FileSystemOutput::new().write_file(&target, "hello").await.unwrap();
        assert_eq!(fs::read_to_string(&target).await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("c.txt");
        fs::write(&target, "a much longer previous body").await.unwrap();

        FileSystemOutput::new().write_file(&target, "new").await.unwrap();
        assert_eq!(fs::read_to_string(&target).await.unwrap(), "new");
    }
}
