//! SpendWise - personal expense tracker
//!
//! Users register a profile, log expenses by hand or from a bill scan, and
//! get an alert whenever a single expense is over their weekly limit. Only
//! the last two months of expenses are kept.
//!
//! # Architecture
//!
//! - `config`: data directory resolution and the persisted budget settings
//! - `error`: the crate error type
//! - `models`: money, categories, expenses, profile, notifications
//! - `storage`: JSON blob repositories
//! - `audit`: JSONL activity log
//! - `services`: validation, alerts, registration and settings rules
//! - `session`: the single owning application state
//! - `reports`, `display`, `export`, `cli`: read-only views and the command line
//!
//! # Example
//!
//! ```rust,ignore
//! use spendwise::config::paths::SpendwisePaths;
//! use spendwise::session::Session;
//!
//! let today = chrono::Local::now().date_naive();
//! let (mut session, _warnings) = Session::open(SpendwisePaths::new()?, today)?;
//! session.register("Asha", "9876543210")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod storage;

pub use error::SpendwiseError;
