use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use spendwise::cli::{
    handle_activity_command, handle_add_command, handle_dashboard_command, handle_export_command,
    handle_history_command, handle_register_command, handle_reset_command, handle_scan_command,
    handle_settings_command, handle_share_command, handle_summary_command, AddArgs,
    ExportCommands, SettingsCommands,
};
use spendwise::config::paths::SpendwisePaths;
use spendwise::display::format_notifications;
use spendwise::session::Session;

#[derive(Parser)]
#[command(
    name = "spendwise",
    version,
    about = "Personal expense tracker with weekly budget alerts",
    long_about = "SpendWise keeps a rolling two-month record of your expenses, \
                  warns when a single expense is over your weekly limit and \
                  summarises how much you saved each month."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create your profile (first run)
    Register {
        /// Your name
        name: String,
        /// 10-digit mobile number used for budget alerts
        mobile: String,
    },

    /// Add an expense by hand
    Add(AddArgs),

    /// Add an expense from a bill-scan payload (JSON)
    Scan {
        /// Path to the scanner output
        payload: PathBuf,
    },

    /// List recorded expenses, newest first
    #[command(alias = "ls")]
    History {
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// This week's spending against the weekly limit
    Dashboard,

    /// Spending and savings per month
    Summary,

    /// Budget settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Generate a share link for your history
    Share,

    /// Delete all data and start over
    Reset {
        /// Skip the warning and delete immediately
        #[arg(long)]
        force: bool,
    },

    /// Show recent changes from the activity log
    Activity {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show where data is stored
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendwisePaths::new()?;
    let today = Local::now().date_naive();
    let (mut session, warnings) = Session::open(paths.clone(), today)?;

    for warning in &warnings {
        eprintln!(
            "Warning: stored {} could not be read and was reset ({})",
            warning.blob, warning.message
        );
    }

    match cli.command {
        Some(Commands::Register { name, mobile }) => {
            handle_register_command(&mut session, &name, &mobile)?;
        }
        Some(Commands::Add(args)) => handle_add_command(&mut session, args)?,
        Some(Commands::Scan { payload }) => handle_scan_command(&mut session, payload)?,
        Some(Commands::History { limit }) => handle_history_command(&session, limit)?,
        Some(Commands::Dashboard) => handle_dashboard_command(&session)?,
        Some(Commands::Summary) => handle_summary_command(&session)?,
        Some(Commands::Settings(cmd)) => handle_settings_command(&mut session, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&session, cmd)?,
        Some(Commands::Share) => handle_share_command(&session)?,
        Some(Commands::Reset { force }) => handle_reset_command(&mut session, force)?,
        Some(Commands::Activity { limit }) => handle_activity_command(&session, limit)?,
        Some(Commands::Config) => {
            println!("SpendWise Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Activity log:   {}", paths.audit_log().display());
            println!("Registered:     {}", session.profile()?.is_some());
        }
        None => {
            println!("SpendWise - personal expense tracker");
            println!();
            println!("Run 'spendwise --help' for usage information.");
            if session.profile()?.is_none() {
                println!("Run 'spendwise register <name> <mobile>' to get started.");
            }
        }
    }

    if !session.notifications().is_empty() {
        println!();
        print!("{}", format_notifications(session.notifications().all()));
        session.dismiss_notifications();
    }

    Ok(())
}
