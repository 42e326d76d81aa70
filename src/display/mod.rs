//! Display formatting for terminal output

pub mod expense;
pub mod report;
pub mod settings;

pub use expense::{format_expense_details, format_expense_history};
pub use report::{format_monthly_summary, format_weekly_dashboard};
pub use settings::{format_notifications, format_profile, format_settings};
