//! Reports module for SpendWise
//!
//! The weekly dashboard and the monthly savings summary. Both are read-only
//! views over the retained expense list and the current settings.

pub mod monthly;
pub mod weekly;

pub use monthly::{MonthSummary, MonthlySummaryReport};
pub use weekly::{CategorySpend, DaySpend, WeeklyDashboard, WEEK_DAYS};
