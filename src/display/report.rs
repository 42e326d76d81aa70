//! Report formatting for terminal output

use crate::models::Money;
use crate::reports::{MonthlySummaryReport, WeeklyDashboard};

const REPORT_WIDTH: usize = 56;
const BAR_WIDTH: usize = 24;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Horizontal bar scaled against `max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to `max_len` characters, ending with an ellipsis when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

pub fn format_weekly_dashboard(dashboard: &WeeklyDashboard) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Weekly Dashboard: {} to {}\n",
        dashboard.start_date, dashboard.end_date
    ));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    let max_day = dashboard
        .days
        .iter()
        .map(|d| d.total)
        .max()
        .unwrap_or_else(Money::zero);
    for day in &dashboard.days {
        output.push_str(&format!(
            "{:<4} {} {:>12}\n",
            day.label,
            format_bar(day.total.as_f64(), max_day.as_f64(), BAR_WIDTH),
            day.total.to_string()
        ));
    }

    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!("This week:    {}\n", dashboard.week_total));
    output.push_str(&format!(
        "Weekly limit: {} ({} used)\n",
        dashboard.weekly_limit,
        format_percentage(dashboard.limit_used_percentage())
    ));
    if dashboard.limit_exceeded() {
        output.push_str(&format!(
            "Over limit by {}\n",
            -dashboard.remaining
        ));
    } else {
        output.push_str(&format!("Remaining:    {}\n", dashboard.remaining));
    }

    output.push('\n');
    if dashboard.categories.is_empty() {
        output.push_str("No spending recorded yet.\n");
        return output;
    }

    output.push_str(&format!(
        "Spending by category (last two months, {} expenses, {})\n",
        dashboard.expense_count, dashboard.total_spent
    ));
    for category in &dashboard.categories {
        output.push_str(&format!(
            "  {:<14} {:>12} {:>4} {:>6}\n",
            category.category.as_str(),
            category.total.to_string(),
            category.expense_count,
            format_percentage(category.percentage)
        ));
    }

    output
}

pub fn format_monthly_summary(report: &MonthlySummaryReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Monthly Summary (savings target {})\n",
        report.monthly_budget
    ));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    if report.months.is_empty() {
        output.push_str("No spending recorded yet.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<16} {:>12} {:>6} {:>12}\n",
        "Month", "Spent", "Count", "Savings"
    ));
    for month in &report.months {
        let marker = if month.is_over_budget() { " !" } else { "" };
        output.push_str(&format!(
            "{:<16} {:>12} {:>6} {:>12}{}\n",
            month.label(),
            month.total.to_string(),
            month.expense_count,
            month.savings.to_string(),
            marker
        ));
    }

    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!("Total savings: {}\n", report.total_savings()));

    output
}
