//! Report CLI commands

use crate::display::report::{format_monthly_summary, format_weekly_dashboard};
use crate::error::SpendwiseResult;
use crate::reports::{MonthlySummaryReport, WeeklyDashboard};
use crate::session::Session;

/// Handle `spendwise dashboard`
pub fn handle_dashboard_command(session: &Session) -> SpendwiseResult<()> {
    let dashboard = WeeklyDashboard::generate(session.storage(), session.today())?;
    print!("{}", format_weekly_dashboard(&dashboard));
    Ok(())
}

/// Handle `spendwise summary`
pub fn handle_summary_command(session: &Session) -> SpendwiseResult<()> {
    let report = MonthlySummaryReport::generate(session.storage())?;
    print!("{}", format_monthly_summary(&report));
    Ok(())
}
