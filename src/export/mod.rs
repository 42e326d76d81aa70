//! Export module for SpendWise
//!
//! - CSV: the expense history, spreadsheet-compatible
//! - JSON: machine-readable snapshot of all persisted state
//! - YAML: human-readable snapshot of all persisted state

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_expenses_csv, export_filename, format_expenses_csv, CSV_HEADER, CSV_MIME};
pub use json::{export_full_json, read_json_export, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, read_yaml_export};
