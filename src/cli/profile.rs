//! Profile CLI commands: register, share, reset and the activity log

use crate::error::SpendwiseResult;
use crate::session::Session;

/// Handle `spendwise register <name> <mobile>`
pub fn handle_register_command(session: &mut Session, name: &str, mobile: &str) -> SpendwiseResult<()> {
    let profile = session.register(name, mobile)?;
    let settings = session.settings()?;

    println!("Welcome, {}!", profile.name);
    println!("Budget alerts will go to {}", settings.phone_number);
    Ok(())
}

/// Handle `spendwise share`
pub fn handle_share_command(session: &Session) -> SpendwiseResult<()> {
    let link = session.share_link()?;
    println!("Share link for your history:");
    println!("  {}", link);
    Ok(())
}

/// Handle `spendwise reset`
pub fn handle_reset_command(session: &mut Session, force: bool) -> SpendwiseResult<()> {
    if !force {
        let count = session.storage().expenses.count()?;
        println!("WARNING: This deletes your profile, settings and {} expenses.", count);
        println!("It cannot be undone.");
        println!();
        println!("To proceed, run again with --force flag:");
        println!("  spendwise reset --force");
        return Ok(());
    }

    session.reset()?;
    println!("All data cleared. Run 'spendwise register <name> <mobile>' to start again.");
    Ok(())
}

/// Handle `spendwise activity`
pub fn handle_activity_command(session: &Session, limit: usize) -> SpendwiseResult<()> {
    let entries = session.storage().audit().read_recent(limit)?;
    if entries.is_empty() {
        println!("No activity recorded.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
