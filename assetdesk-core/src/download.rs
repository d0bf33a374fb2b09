// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Save-as-file side effect for downloads
//!
//! The coordinator fetches bytes and derives a filename; where the file
//! ends up is up to the [`DownloadSink`].

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use thiserror::Error;

/// Destination of downloaded resources.
pub trait DownloadSink: Send + Sync {
    /// Saves `bytes` under `file_name`, returning where it went.
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, SinkError>;
}

/// Writes downloads into a directory.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink writing into `dir`
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, SinkError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, SinkError> {
        check_file_name(file_name)?;
        let path = self.dir.join(file_name);
        atomic_write(&path, bytes)?;
        Ok(path)
    }
}

/// Keeps downloads in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    saved: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Files saved so far, in order.
    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().clone()
    }
}

impl DownloadSink for MemorySink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, SinkError> {
        check_file_name(file_name)?;
        self.saved
            .lock()
            .push((file_name.to_string(), bytes.to_vec()));
        Ok(PathBuf::from(file_name))
    }
}

/// Refuses names that are empty or would leave the target directory.
fn check_file_name(file_name: &str) -> Result<(), SinkError> {
    let escapes = file_name.contains('/')
        || file_name.contains('\\')
        || file_name == "."
        || file_name == "..";
    if file_name.trim().is_empty() || escapes {
        return Err(SinkError::InvalidName(file_name.to_string()));
    }
    Ok(())
}

/// Atomic file write (write to temp, then rename)
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), SinkError> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".part");
    let temp_path = PathBuf::from(temp_name);

    fs::write(&temp_path, data)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Errors that can occur saving a download
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// Name empty or not a plain filename
    #[error("invalid file name: {0:?}")]
    InvalidName(String),
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        SinkError::Io(err.to_string())
    }
}
