//! JSON snapshot export
//!
//! Everything SpendWise persists (profile, settings, expenses) in one
//! document, with schema versioning and a small metadata block.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::config::settings::AppSettings;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Expense, Money, UserProfile};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full snapshot of the persisted state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub profile: Option<UserProfile>,

    pub settings: AppSettings,

    /// Expenses in store order (newest first)
    pub expenses: Vec<Expense>,

    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    /// Sum of all exported expenses, in rupees
    pub total_spent: f64,

    pub earliest_expense: Option<String>,

    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Build a snapshot from the loaded storage
    pub fn from_storage(storage: &Storage) -> SpendwiseResult<Self> {
        let profile = storage.profile.get()?;
        let settings = storage.settings()?;
        let expenses = storage.expenses.get_all()?;

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            total_spent: expenses.iter().map(|e| e.amount).sum::<Money>().as_f64(),
            earliest_expense: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            profile,
            settings,
            expenses,
            metadata,
        })
    }

    /// Check the snapshot was produced by a compatible version and is
    /// internally consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.expense_count != self.expenses.len() {
            return Err(format!(
                "Metadata lists {} expenses but {} are present",
                self.metadata.expense_count,
                self.expenses.len()
            ));
        }

        Ok(())
    }
}

/// Export the full snapshot to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> SpendwiseResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| SpendwiseError::Export(e.to_string()))
}

/// Read a snapshot back, e.g. to verify an export file
pub fn read_json_export(json_str: &str) -> SpendwiseResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| SpendwiseError::Parse(e.to_string()))?;
    export.validate().map_err(SpendwiseError::Parse)?;
    Ok(export)
}
