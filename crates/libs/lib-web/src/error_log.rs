//! # Error Log File
//!
//! Append-only error log used in production. One line per failed request,
//! prefixed with an RFC 3339 timestamp. The file is never rotated or
//! truncated by this code.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Handle to the error log file.
#[derive(Clone, Debug)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the log directory recursively if absent.
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    /// Append one timestamped line, creating the file on first use.
    pub fn append(&self, timestamp: &str, message: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} - {}", timestamp, message)
    }
}

// endregion: --- Tests
