//! CLI commands for data export

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::export::{json, yaml, CSV_MIME};
use crate::session::Session;

/// Snapshot format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SnapshotFormat {
    Json,
    /// Human-readable
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the expense history to CSV
    Csv {
        /// Output file (defaults to spendwise_expenses_<date>.csv in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export profile, settings and expenses to a single file
    All {
        /// Output file path
        output: PathBuf,

        #[arg(short, long, value_enum, default_value = "json")]
        format: SnapshotFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

pub fn handle_export_command(session: &Session, cmd: ExportCommands) -> SpendwiseResult<()> {
    match cmd {
        ExportCommands::Csv { output } => {
            let export = session.export_csv()?;
            let output = output.unwrap_or_else(|| PathBuf::from(&export.filename));
            std::fs::write(&output, export.content)
                .map_err(|e| export_error(&output, e))?;

            let count = session.storage().expenses.count()?;
            println!("Exported {} expenses to: {}", count, output.display());
            println!("Content type: {}", CSV_MIME);
        }
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let file = File::create(&output).map_err(|e| export_error(&output, e))?;
            let mut writer = BufWriter::new(file);

            match format {
                SnapshotFormat::Json => json::export_full_json(session.storage(), &mut writer, pretty)?,
                SnapshotFormat::Yaml => yaml::export_full_yaml(session.storage(), &mut writer)?,
            }
            writer.flush().map_err(|e| export_error(&output, e))?;
            drop(writer);

            // Read the file back so a truncated or unreadable snapshot is reported now
            let written = std::fs::read_to_string(&output).map_err(|e| export_error(&output, e))?;
            let snapshot = match format {
                SnapshotFormat::Json => json::read_json_export(&written)?,
                SnapshotFormat::Yaml => yaml::read_yaml_export(&written)?,
            };

            println!("Full data exported to: {}", output.display());
            println!(
                "Verified {} expenses (schema {})",
                snapshot.expenses.len(),
                snapshot.schema_version
            );
        }
    }

    Ok(())
}

fn export_error(path: &Path, e: std::io::Error) -> SpendwiseError {
    SpendwiseError::Export(format!("Failed to write {}: {}", path.display(), e))
}
