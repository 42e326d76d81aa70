//! CLI command handlers
//!
//! Bridges the clap argument parsing with the session and service layer.

pub mod export;
pub mod expense;
pub mod profile;
pub mod report;
pub mod settings;

pub use export::{handle_export_command, ExportCommands};
pub use expense::{handle_add_command, handle_history_command, handle_scan_command, AddArgs};
pub use profile::{
    handle_activity_command, handle_register_command, handle_reset_command, handle_share_command,
};
pub use report::{handle_dashboard_command, handle_summary_command};
pub use settings::{handle_settings_command, SettingsCommands};
