//! Core data models for SpendWise
//!
//! The expense-tracking domain: profile, expenses and their drafts,
//! categories, amounts and session notifications.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod notification;
pub mod profile;

pub use category::{Category, UnknownCategory};
pub use expense::{parse_iso_date, Expense, ExpenseDraft, DATE_FORMAT};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError, CURRENCY_SYMBOL};
pub use notification::{Notification, NotificationList};
pub use profile::UserProfile;
