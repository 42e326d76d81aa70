//! Settings CLI commands

use clap::Subcommand;

use crate::config::settings::SettingsUpdate;
use crate::display::settings::{format_profile, format_settings};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::Money;
use crate::session::Session;

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show the profile and budget settings
    Show,
    /// Change the weekly limit and/or monthly budget
    Set {
        /// Weekly expense limit in rupees
        #[arg(short, long)]
        weekly_limit: Option<String>,
        /// Monthly savings target in rupees
        #[arg(short, long)]
        monthly_budget: Option<String>,
    },
}

pub fn handle_settings_command(session: &mut Session, cmd: SettingsCommands) -> SpendwiseResult<()> {
    match cmd {
        SettingsCommands::Show => {
            if let Some(profile) = session.profile()? {
                print!("{}", format_profile(&profile));
            }
            print!("{}", format_settings(&session.settings()?));
        }
        SettingsCommands::Set {
            weekly_limit,
            monthly_budget,
        } => {
            let update = SettingsUpdate {
                weekly_limit: weekly_limit.as_deref().map(parse_amount).transpose()?,
                monthly_budget: monthly_budget.as_deref().map(parse_amount).transpose()?,
            };
            let settings = session.update_settings(update)?;
            println!("Settings updated");
            print!("{}", format_settings(&settings));
        }
    }

    Ok(())
}

fn parse_amount(s: &str) -> SpendwiseResult<Money> {
    Money::parse(s).map_err(|e| SpendwiseError::InvalidInput(e.to_string()))
}
