//! Configuration module for SpendWise
//!
//! - Data directory resolution
//! - Persisted budget settings

pub mod paths;
pub mod settings;

pub use paths::SpendwisePaths;
pub use settings::{AppSettings, SettingsUpdate};
