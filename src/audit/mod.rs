//! Audit logging for SpendWise
//!
//! Every change to the profile, the expense list or the settings is recorded
//! as one line of JSON in an append-only log next to the data directory.
//!
//! ```rust,ignore
//! use spendwise::audit::{AuditEntry, AuditLogger, EntityType, Operation};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(
//!     &AuditEntry::record(Operation::Create, EntityType::Expense, expense.id.to_string())
//!         .named(expense.label())
//!         .after(&expense),
//! )?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
