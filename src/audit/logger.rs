//! The activity log file
//!
//! One line per change. Lines are never rewritten, so a crash can at worst
//! leave a partial final line.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{SpendwiseError, SpendwiseResult};

use super::entry::AuditEntry;

/// Appends [`AuditEntry`] lines to `audit.log` and reads them back for
/// `spendwise activity`
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Record one change
    ///
    /// The file is created on first use and flushed before returning, so the
    /// entry survives even if the command fails afterwards.
    pub fn log(&self, entry: &AuditEntry) -> SpendwiseResult<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| SpendwiseError::Json(format!("Cannot encode activity entry: {}", e)))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| io_error("open", &self.log_path, e))?;
        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| io_error("append to", &self.log_path, e))
    }

    /// Every recorded change in the order it happened
    ///
    /// No file yet means no activity. Blank lines are skipped; any other line
    /// that is not an entry fails the whole read with its line number.
    pub fn read_all(&self) -> SpendwiseResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("open", &self.log_path, e)),
        };

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| io_error("read", &self.log_path, e))?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line).map_err(|e| {
                SpendwiseError::Parse(format!("Activity log line {} is not valid: {}", index + 1, e))
            })?;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// The last `count` changes, still oldest first
    pub fn read_recent(&self, count: usize) -> SpendwiseResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        Ok(entries.split_off(skip))
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

fn io_error(action: &str, path: &Path, e: std::io::Error) -> SpendwiseError {
    SpendwiseError::Io(format!("Cannot {} activity log {}: {}", action, path.display(), e))
}
