//! Service layer for SpendWise
//!
//! Business rules on top of the storage layer: validation, budget alerts,
//! registration and settings changes.

pub mod alert;
pub mod expense;
pub mod profile;
pub mod settings;
pub mod validation;

pub use alert::{alert_message, evaluate_budget_alert};
pub use expense::{AddedExpense, EntrySource, ExpenseService};
pub use profile::ProfileService;
pub use settings::SettingsService;
pub use validation::{validate_draft, ExpenseForm, Field, ValidationErrors};
