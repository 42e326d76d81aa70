//! Expense repository for JSON storage
//!
//! Holds the working set of expenses, newest first, and applies the rolling
//! two-month retention window whenever the list is loaded.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{Months, NaiveDate};

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Expense, ExpenseDraft};

use super::file_io::{read_text, remove_if_exists, write_json_atomic};

/// Number of calendar months kept on load
pub const RETENTION_MONTHS: u32 = 2;

/// Oldest date that is *not* retained: records must be strictly after it
pub fn retention_cutoff(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(RETENTION_MONTHS))
        .unwrap_or(NaiveDate::MIN)
}

/// Drop records dated on or before the cutoff, keeping order otherwise
pub fn retain_recent(expenses: Vec<Expense>, today: NaiveDate) -> Vec<Expense> {
    let cutoff = retention_cutoff(today);
    expenses.into_iter().filter(|e| e.date > cutoff).collect()
}

/// Parse a persisted expense list and apply retention
pub fn parse_expenses(raw: &str, today: NaiveDate) -> SpendwiseResult<Vec<Expense>> {
    let parsed: Vec<Expense> = serde_json::from_str(raw)
        .map_err(|e| SpendwiseError::Parse(format!("Failed to parse expense list: {}", e)))?;
    Ok(retain_recent(parsed, today))
}

/// Create a record from a draft and prepend it to a list
///
/// Never fails; defaults fill any missing field.
pub fn add_to_list(
    draft: ExpenseDraft,
    current: &[Expense],
    today: NaiveDate,
) -> (Vec<Expense>, Expense) {
    let created = Expense::from_draft(draft, today);
    let mut list = Vec::with_capacity(current.len() + 1);
    list.push(created.clone());
    list.extend_from_slice(current);
    (list, created)
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk, keeping only the retention window
    ///
    /// A missing file loads as an empty list. A corrupt file is an error and
    /// leaves the in-memory list empty.
    pub fn load(&self, today: NaiveDate) -> SpendwiseResult<()> {
        let mut data = self.data.write().map_err(|e| {
            SpendwiseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.clear();

        if let Some(raw) = read_text(&self.path)? {
            *data = parse_expenses(&raw, today)?;
        }

        Ok(())
    }

    /// Write the full list to disk
    pub fn save(&self) -> SpendwiseResult<()> {
        let data = self.data.read().map_err(|e| {
            SpendwiseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        write_json_atomic(&self.path, &*data)
    }

    /// Create a record from the draft and put it at the front of the list
    pub fn add(&self, draft: ExpenseDraft, today: NaiveDate) -> SpendwiseResult<Expense> {
        let mut data = self.data.write().map_err(|e| {
            SpendwiseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let (list, created) = add_to_list(draft, &data, today);
        *data = list;
        Ok(created)
    }

    /// All expenses, newest first
    pub fn get_all(&self) -> SpendwiseResult<Vec<Expense>> {
        let data = self.data.read().map_err(|e| {
            SpendwiseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    pub fn count(&self) -> SpendwiseResult<usize> {
        let data = self.data.read().map_err(|e| {
            SpendwiseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }

    /// Empty the list and remove the file
    pub fn clear(&self) -> SpendwiseResult<()> {
        let mut data = self.data.write().map_err(|e| {
            SpendwiseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.clear();
        remove_if_exists(&self.path)
    }
}
