//! Weekly dashboard
//!
//! Spending for the seven days ending today against the weekly limit, plus a
//! category breakdown over the whole retained history.

use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

use crate::config::settings::AppSettings;
use crate::error::SpendwiseResult;
use crate::models::{Category, Expense, Money};
use crate::storage::Storage;

/// Number of days in the dashboard window, today included
pub const WEEK_DAYS: i64 = 7;

/// Spending on a single day of the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySpend {
    pub date: NaiveDate,
    /// Short weekday name, e.g. `Mon`
    pub label: String,
    pub total: Money,
}

/// Spending in one category
#[derive(Debug, Clone)]
pub struct CategorySpend {
    pub category: Category,
    pub total: Money,
    pub expense_count: usize,
    /// Share of all retained spending
    pub percentage: f64,
}

#[derive(Debug, Clone)]
pub struct WeeklyDashboard {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Oldest day first
    pub days: Vec<DaySpend>,
    pub week_total: Money,
    pub weekly_limit: Money,
    /// Limit minus week total; negative once the limit is passed
    pub remaining: Money,
    /// Largest share first
    pub categories: Vec<CategorySpend>,
    /// Total over all retained expenses
    pub total_spent: Money,
    pub expense_count: usize,
}

impl WeeklyDashboard {
    pub fn generate(storage: &Storage, today: NaiveDate) -> SpendwiseResult<Self> {
        let expenses = storage.expenses.get_all()?;
        let settings = storage.settings()?;
        Ok(Self::from_expenses(&expenses, &settings, today))
    }

    pub fn from_expenses(expenses: &[Expense], settings: &AppSettings, today: NaiveDate) -> Self {
        let start_date = today - Duration::days(WEEK_DAYS - 1);

        let days: Vec<DaySpend> = (0..WEEK_DAYS)
            .map(|offset| {
                let date = start_date + Duration::days(offset);
                let total = expenses
                    .iter()
                    .filter(|e| e.date == date)
                    .map(|e| e.amount)
                    .sum();
                DaySpend {
                    date,
                    label: date.format("%a").to_string(),
                    total,
                }
            })
            .collect();

        let week_total: Money = days.iter().map(|d| d.total).sum();
        let total_spent: Money = expenses.iter().map(|e| e.amount).sum();

        let mut by_category: HashMap<Category, (Money, usize)> = HashMap::new();
        for expense in expenses {
            let entry = by_category
                .entry(expense.category)
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let mut categories: Vec<CategorySpend> = by_category
            .into_iter()
            .map(|(category, (total, expense_count))| CategorySpend {
                category,
                total,
                expense_count,
                percentage: percentage_of(total, total_spent),
            })
            .collect();
        categories.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        Self {
            start_date,
            end_date: today,
            days,
            week_total,
            weekly_limit: settings.weekly_limit,
            remaining: settings.weekly_limit - week_total,
            categories,
            total_spent,
            expense_count: expenses.len(),
        }
    }

    /// Whether this week's spending is above the weekly limit
    pub fn limit_exceeded(&self) -> bool {
        self.week_total > self.weekly_limit
    }

    /// Fraction of the weekly limit used, as a percentage
    pub fn limit_used_percentage(&self) -> f64 {
        percentage_of(self.week_total, self.weekly_limit)
    }
}

fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.paise() as f64 / whole.paise() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDraft;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(date: NaiveDate, category: &str, rupees: i64) -> Expense {
        Expense::from_draft(
            ExpenseDraft::new()
                .amount(Money::from_rupees(rupees))
                .category(category)
                .date(date),
            date,
        )
    }

    fn settings(limit: i64) -> AppSettings {
        AppSettings {
            weekly_limit: Money::from_rupees(limit),
            ..AppSettings::default()
        }
    }

    #[test]
    fn test_week_window_and_totals() {
        // 2025-06-15 is a Sunday
        let today = day(2025, 6, 15);
        let expenses = vec![
            expense(day(2025, 6, 15), "Food", 200),
            expense(day(2025, 6, 9), "Transport", 100),
            expense(day(2025, 6, 8), "Food", 1000),
        ];

        let dashboard = WeeklyDashboard::from_expenses(&expenses, &settings(5000), today);

        assert_eq!(dashboard.start_date, day(2025, 6, 9));
        assert_eq!(dashboard.days.len(), 7);
        assert_eq!(dashboard.days[0].label, "Mon");
        assert_eq!(dashboard.days[0].total, Money::from_rupees(100));
        assert_eq!(dashboard.days[6].label, "Sun");
        assert_eq!(dashboard.days[6].total, Money::from_rupees(200));
        assert_eq!(dashboard.week_total, Money::from_rupees(300));
        assert_eq!(dashboard.remaining, Money::from_rupees(4700));
        assert!(!dashboard.limit_exceeded());
        assert_eq!(dashboard.total_spent, Money::from_rupees(1300));
    }

    #[test]
    fn test_limit_exceeded() {
        let today = day(2025, 6, 15);
        let expenses = vec![expense(today, "Bills", 600)];

        let dashboard = WeeklyDashboard::from_expenses(&expenses, &settings(500), today);
        assert!(dashboard.limit_exceeded());
        assert_eq!(dashboard.remaining, Money::from_rupees(-100));
        assert!((dashboard.limit_used_percentage() - 120.0).abs() < 0.001);
    }

    #[test]
    fn test_category_breakdown() {
        let today = day(2025, 6, 15);
        let expenses = vec![
            expense(today, "Food", 300),
            expense(today, "Food", 100),
            expense(today, "Health", 100),
        ];

        let dashboard = WeeklyDashboard::from_expenses(&expenses, &settings(5000), today);
        assert_eq!(dashboard.categories.len(), 2);
        assert_eq!(dashboard.categories[0].category, Category::Food);
        assert_eq!(dashboard.categories[0].expense_count, 2);
        assert!((dashboard.categories[0].percentage - 80.0).abs() < 0.001);
        assert_eq!(dashboard.categories[1].category, Category::Health);
    }

    #[test]
    fn test_empty_history() {
        let today = day(2025, 6, 15);
        let dashboard = WeeklyDashboard::from_expenses(&[], &settings(5000), today);

        assert!(dashboard.categories.is_empty());
        assert!(dashboard.week_total.is_zero());
        assert_eq!(dashboard.limit_used_percentage(), 0.0);
    }
}
