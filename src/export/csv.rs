//! CSV export of the expense history
//!
//! The description column is always quoted; the other columns never contain
//! commas (dates, category names, plain numbers).

use chrono::NaiveDate;
use std::io::Write;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Expense, DATE_FORMAT};

/// Header row of every CSV export
pub const CSV_HEADER: &str = "Date,Category,Description,Amount (INR)";

/// MIME type of the exported file
pub const CSV_MIME: &str = "text/csv";

/// `spendwise_expenses_<yyyy-MM-dd>.csv`
pub fn export_filename(today: NaiveDate) -> String {
    format!("spendwise_expenses_{}.csv", today.format(DATE_FORMAT))
}

/// Format expenses as CSV text, header first, rows in the given order
///
/// Rows are joined with `\n` and there is no trailing newline.
pub fn format_expenses_csv(expenses: &[Expense]) -> String {
    let mut lines = Vec::with_capacity(expenses.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for expense in expenses {
        lines.push(format!(
            "{},{},{},{}",
            expense.date.format(DATE_FORMAT),
            expense.category,
            quote(&expense.description),
            expense.amount.to_plain_string()
        ));
    }

    lines.join("\n")
}

/// Write the expense CSV, refusing when there is nothing to export
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> SpendwiseResult<()> {
    if expenses.is_empty() {
        return Err(SpendwiseError::Precondition(
            "No data available to export.".into(),
        ));
    }

    writer
        .write_all(format_expenses_csv(expenses).as_bytes())
        .map_err(|e| SpendwiseError::Export(e.to_string()))
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, Money};

    fn expense(date: (i32, u32, u32), category: &str, description: &str, amount: Money) -> Expense {
        let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        Expense::from_draft(
            ExpenseDraft::new()
                .amount(amount)
                .category(category)
                .description(description)
                .date(date),
            date,
        )
    }

    #[test]
    fn test_single_row_with_comma() {
        let expenses = vec![expense((2024, 1, 5), "Food", "Lunch, out", Money::from_rupees(250))];
        assert_eq!(
            format_expenses_csv(&expenses),
            "Date,Category,Description,Amount (INR)\n2024-01-05,Food,\"Lunch, out\",250"
        );
    }

    #[test]
    fn test_quotes_are_doubled_and_order_kept() {
        let expenses = vec![
            expense((2024, 1, 6), "Shopping", "12\" pizza pan", Money::from_paise(49_950)),
            expense((2024, 1, 5), "Bills", "", Money::from_paise(1_205)),
        ];
        let csv = format_expenses_csv(&expenses);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2024-01-06,Shopping,\"12\"\" pizza pan\",499.5");
        assert_eq!(lines[2], "2024-01-05,Bills,\"\",12.05");
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_header_only_when_formatting_nothing() {
        assert_eq!(format_expenses_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn test_export_refuses_empty_list() {
        let mut buffer = Vec::new();
        let err = export_expenses_csv(&[], &mut buffer).unwrap_err();

        assert!(err.is_precondition());
        assert_eq!(err.to_string(), "No data available to export.");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_export_writes_text() {
        let expenses = vec![expense((2024, 1, 5), "Food", "Chai", Money::from_rupees(20))];
        let mut buffer = Vec::new();
        export_expenses_csv(&expenses, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with(CSV_HEADER));
        assert!(text.ends_with("2024-01-05,Food,\"Chai\",20"));
    }

    #[test]
    fn test_filename() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(export_filename(today), "spendwise_expenses_2025-03-09.csv");
    }
}
