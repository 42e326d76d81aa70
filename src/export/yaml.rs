//! YAML snapshot export, the human-readable twin of the JSON export

use std::io::Write;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full snapshot to YAML with a short comment header
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> SpendwiseResult<()> {
    let export = FullExport::from_storage(storage)?;

    let header = format!(
        "# SpendWise data export\n# Generated: {}\n# App Version: {}\n#\n# Expenses older than two months are not included.\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| SpendwiseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SpendwiseError::Export(e.to_string()))
}

/// Read a YAML snapshot back
pub fn read_yaml_export(yaml_str: &str) -> SpendwiseResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| SpendwiseError::Parse(e.to_string()))?;
    export.validate().map_err(SpendwiseError::Parse)?;
    Ok(export)
}
