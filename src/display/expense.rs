//! Expense display formatting
//!
//! The history view is a table; a single expense gets a short detail block.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Expense, Money, DATE_FORMAT};

use super::report::truncate;

const DESCRIPTION_WIDTH: usize = 30;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            date: expense.date.format(DATE_FORMAT).to_string(),
            category: expense.category.to_string(),
            description: truncate(&expense.description, DESCRIPTION_WIDTH),
            amount: expense.amount.to_string(),
        }
    }
}

/// Format the history as a table, newest first
pub fn format_expense_history(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded in the last two months.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses.iter().map(ExpenseRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    format!(
        "{}\n{} expense(s), total {}\n",
        table,
        expenses.len(),
        total
    )
}

/// Format a freshly added expense
pub fn format_expense_details(expense: &Expense) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format(DATE_FORMAT)));
    output.push_str(&format!("Amount:      {}\n", expense.amount));
    output.push_str(&format!("Category:    {}\n", expense.category));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    output
}
