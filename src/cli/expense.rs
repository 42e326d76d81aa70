//! Expense CLI commands: manual entry, bill scan and history

use clap::Args;
use std::path::PathBuf;

use crate::display::expense::{format_expense_details, format_expense_history};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{parse_iso_date, Category, ExpenseDraft, Money};
use crate::services::{AddedExpense, ExpenseService};
use crate::session::Session;

/// Arguments for a manual expense
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount in rupees (e.g., "250" or "99.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category (Food, Transport, Shopping, Bills, Entertainment, Health, Education, Other)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Expense date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Handle `spendwise add`
pub fn handle_add_command(session: &mut Session, args: AddArgs) -> SpendwiseResult<()> {
    let amount = Money::parse(&args.amount).map_err(|e| SpendwiseError::InvalidInput(e.to_string()))?;

    let mut form = session.new_form();
    form.set_amount(Some(amount));

    if let Some(category) = args.category {
        let category = category.parse::<Category>().map_err(|e| {
            SpendwiseError::InvalidInput(format!("{} Choose one of: {}", e, Category::names()))
        })?;
        form.set_category(Some(category.to_string()));
    }

    if let Some(description) = args.description {
        form.set_description(description);
    }

    if let Some(date) = args.date {
        let parsed = parse_iso_date(&date).ok_or_else(|| {
            SpendwiseError::InvalidInput(format!("Invalid date '{}'. Use YYYY-MM-DD.", date))
        })?;
        form.set_date(Some(parsed));
    }

    let added = session.add_manual(&mut form)?;
    print_added(&added);
    Ok(())
}

/// Handle `spendwise scan <payload>`
///
/// The payload is the bill scanner's output: a JSON object with optional
/// `amount`, `category`, `description` and `date`. It is stored without
/// field validation.
pub fn handle_scan_command(session: &mut Session, payload: PathBuf) -> SpendwiseResult<()> {
    let raw = std::fs::read_to_string(&payload).map_err(|e| {
        SpendwiseError::Io(format!("Failed to read {}: {}", payload.display(), e))
    })?;
    let draft: ExpenseDraft = serde_json::from_str(&raw).map_err(|e| {
        SpendwiseError::Parse(format!("Invalid scan payload {}: {}", payload.display(), e))
    })?;

    let added = session.add_scanned(draft)?;
    print_added(&added);
    Ok(())
}

/// Handle `spendwise history`
pub fn handle_history_command(session: &Session, limit: Option<usize>) -> SpendwiseResult<()> {
    let expenses = ExpenseService::new(session.storage()).list(limit)?;
    print!("{}", format_expense_history(&expenses));
    Ok(())
}

fn print_added(added: &AddedExpense) {
    println!("Added expense");
    print!("{}", format_expense_details(&added.expense));
}
