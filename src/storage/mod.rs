//! Storage layer for SpendWise
//!
//! Three independent JSON blobs (profile, expenses, settings), each written
//! in full after every change, plus the audit log.

pub mod expenses;
pub mod file_io;
pub mod profile;

pub use expenses::{add_to_list, parse_expenses, retain_recent, retention_cutoff, ExpenseRepository};
pub use file_io::{read_json, write_json_atomic};
pub use profile::ProfileRepository;

use std::sync::RwLock;

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::SpendwisePaths;
use crate::config::settings::AppSettings;
use crate::error::{SpendwiseError, SpendwiseResult};

/// A blob that failed to parse and was replaced by its default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub blob: &'static str,
    pub message: String,
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SpendwisePaths,
    pub profile: ProfileRepository,
    pub expenses: ExpenseRepository,
    settings: RwLock<AppSettings>,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: SpendwisePaths) -> SpendwiseResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            profile: ProfileRepository::new(paths.profile_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            settings: RwLock::new(AppSettings::default()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &SpendwisePaths {
        &self.paths
    }

    /// Load all three blobs
    ///
    /// A blob that fails to parse falls back to its default value and is
    /// reported as a warning instead of failing the session. Any other error
    /// (permissions, I/O) is returned.
    pub fn load_all(&self, today: NaiveDate) -> SpendwiseResult<Vec<LoadWarning>> {
        let mut warnings = Vec::new();

        if let Err(e) = self.profile.load() {
            warnings.push(fallback_or_fail("profile", e)?);
        }

        if let Err(e) = self.expenses.load(today) {
            warnings.push(fallback_or_fail("expenses", e)?);
        }

        match AppSettings::load(&self.paths) {
            Ok(loaded) => self.replace_settings(loaded)?,
            Err(e) => {
                warnings.push(fallback_or_fail("settings", e)?);
                self.replace_settings(AppSettings::default())?;
            }
        }

        Ok(warnings)
    }

    /// Current settings snapshot
    pub fn settings(&self) -> SpendwiseResult<AppSettings> {
        let settings = self.settings.read().map_err(|e| {
            SpendwiseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(settings.clone())
    }

    /// Replace the in-memory settings and write them to disk
    pub fn save_settings(&self, settings: AppSettings) -> SpendwiseResult<()> {
        settings.save(&self.paths)?;
        self.replace_settings(settings)
    }

    fn replace_settings(&self, settings: AppSettings) -> SpendwiseResult<()> {
        let mut current = self.settings.write().map_err(|e| {
            SpendwiseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *current = settings;
        Ok(())
    }

    /// Append an entry to the audit log
    pub fn log(&self, entry: AuditEntry) -> SpendwiseResult<()> {
        self.audit.log(&entry)
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Wipe every persisted blob and reset in-memory state to first run
    pub fn wipe(&self) -> SpendwiseResult<()> {
        self.profile.clear()?;
        self.expenses.clear()?;
        file_io::remove_if_exists(self.paths.settings_file())?;
        self.replace_settings(AppSettings::default())
    }

    /// Whether a profile is registered
    pub fn is_registered(&self) -> SpendwiseResult<bool> {
        Ok(self.profile.get()?.is_some())
    }
}

fn fallback_or_fail(blob: &'static str, err: SpendwiseError) -> SpendwiseResult<LoadWarning> {
    if err.is_parse() {
        Ok(LoadWarning {
            blob,
            message: err.to_string(),
        })
    } else {
        Err(err)
    }
}
