//! Expense service
//!
//! The two ways an expense enters the store: the validated manual form and
//! the bill scanner, which hands over a draft that is inserted as-is.

use chrono::NaiveDate;

use crate::audit::{AuditEntry, EntityType, Operation};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Expense, ExpenseDraft, Notification};
use crate::storage::Storage;

use super::alert::evaluate_budget_alert;
use super::validation::ExpenseForm;

/// Where an expense came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource {
    Manual,
    Scan,
}

impl std::fmt::Display for EntrySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntrySource::Manual => write!(f, "manual entry"),
            EntrySource::Scan => write!(f, "bill scan"),
        }
    }
}

/// Result of adding an expense
#[derive(Debug, Clone)]
pub struct AddedExpense {
    pub expense: Expense,
    /// Budget alert raised by this expense, if any
    pub alert: Option<Notification>,
}

/// Service for adding and listing expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Submit the manual entry form
    ///
    /// Fails with a validation error (and leaves the form touched) when the
    /// draft is invalid; nothing is stored in that case.
    pub fn add_manual(
        &self,
        form: &mut ExpenseForm,
        today: NaiveDate,
    ) -> SpendwiseResult<AddedExpense> {
        self.require_profile()?;
        let draft = form.submit(today)?;
        self.insert(draft, EntrySource::Manual, today)
    }

    /// Insert a bill-scan draft without field validation
    pub fn add_scanned(&self, draft: ExpenseDraft, today: NaiveDate) -> SpendwiseResult<AddedExpense> {
        self.require_profile()?;
        self.insert(draft, EntrySource::Scan, today)
    }

    fn insert(
        &self,
        draft: ExpenseDraft,
        source: EntrySource,
        today: NaiveDate,
    ) -> SpendwiseResult<AddedExpense> {
        let expense = self.storage.expenses.add(draft, today)?;
        self.storage.expenses.save()?;

        self.storage.log(
            AuditEntry::record(Operation::Create, EntityType::Expense, expense.id.to_string())
                .named(expense.label())
                .after(&expense)
                .summary(format!("added via {}", source)),
        )?;

        let settings = self.storage.settings()?;
        let alert = evaluate_budget_alert(&expense, &settings);

        Ok(AddedExpense { expense, alert })
    }

    /// Expenses newest first, optionally truncated
    pub fn list(&self, limit: Option<usize>) -> SpendwiseResult<Vec<Expense>> {
        let mut expenses = self.storage.expenses.get_all()?;
        if let Some(limit) = limit {
            expenses.truncate(limit);
        }
        Ok(expenses)
    }

    fn require_profile(&self) -> SpendwiseResult<()> {
        if self.storage.is_registered()? {
            Ok(())
        } else {
            Err(SpendwiseError::NotRegistered)
        }
    }
}
