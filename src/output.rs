//! Target directory checks, file naming, and partial-file cleanup.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::error::ImageError;
use crate::params::ImageFormat;

/// Resolve the download directory and check that it can take a new file.
///
/// `None` means the system temp directory.
///
/// # Errors
///
/// Returns [`ImageError::Directory`] if the path does not exist, is not a
/// directory, or is read-only.
pub fn resolve_directory(dir: Option<&Path>) -> Result<PathBuf, ImageError> {
    let dir = dir.map_or_else(std::env::temp_dir, Path::to_path_buf);
    let reject = |reason: &str| ImageError::Directory { path: dir.clone(), reason: reason.into() };

    let meta = std::fs::metadata(&dir).map_err(|e| reject(&e.to_string()))?;
    if !meta.is_dir() {
        return Err(reject("not a directory"));
    }
    if meta.permissions().readonly() {
        return Err(reject("directory is read-only"));
    }
    Ok(dir)
}

/// Generate a random filename: 32 hex digits plus the format's extension.
///
/// The digest covers the host address (when known), the current time in
/// nanoseconds, and a random 64-bit value.
#[must_use]
pub fn unique_filename(server_addr: Option<&str>, format: ImageFormat) -> String {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let salt: u64 = rand::thread_rng().gen();

    let mut hasher = Sha256::new();
    hasher.update(server_addr.unwrap_or_default().as_bytes());
    hasher.update(nanos.to_le_bytes());
    hasher.update(salt.to_le_bytes());
    let digest = hasher.finalize();

    format!("{}.{}", hex::encode(&digest[..16]), format.as_str())
}

/// A file being downloaded. Removed on drop unless [`commit`] was called.
///
/// [`commit`]: PartialFile::commit
#[derive(Debug)]
pub struct PartialFile {
    path: PathBuf,
    file: Option<File>,
    committed: bool,
}

impl PartialFile {
    /// Create the file. Fails if it already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().write(true).create_new(true).open(&path)?;
        Ok(Self { path, file: Some(file), committed: false })
    }

    /// Path of the file on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append bytes to the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn write_all(&mut self, data: &[u8]) -> std::io::Result<()> {
        match self.file.as_mut() {
            Some(f) => f.write_all(data),
            None => Err(std::io::Error::other("file already closed")),
        }
    }

    /// Flush, close, and keep the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails; the file is then removed.
    pub fn commit(mut self) -> std::io::Result<PathBuf> {
        if let Some(mut f) = self.file.take() {
            f.flush()?;
            f.sync_all()?;
        }
        self.committed = true;
        Ok(std::mem::take(&mut self.path))
    }
}

impl Drop for PartialFile {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        // Close before unlinking.
        drop(self.file.take());
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!("failed to remove partial file {}: {e}", self.path.display());
        }
    }
}
