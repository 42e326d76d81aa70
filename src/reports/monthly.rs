//! Monthly summary: spending and savings against the monthly budget

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::config::settings::AppSettings;
use crate::error::SpendwiseResult;
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// One calendar month of spending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub total: Money,
    pub expense_count: usize,
    /// Monthly budget minus the total; negative when overspent
    pub savings: Money,
}

impl MonthSummary {
    /// e.g. `June 2025`
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.year, self.month))
    }

    pub fn is_over_budget(&self) -> bool {
        self.savings.is_negative()
    }
}

#[derive(Debug, Clone)]
pub struct MonthlySummaryReport {
    pub monthly_budget: Money,
    /// Newest month first
    pub months: Vec<MonthSummary>,
}

impl MonthlySummaryReport {
    pub fn generate(storage: &Storage) -> SpendwiseResult<Self> {
        let expenses = storage.expenses.get_all()?;
        let settings = storage.settings()?;
        Ok(Self::from_expenses(&expenses, &settings))
    }

    pub fn from_expenses(expenses: &[Expense], settings: &AppSettings) -> Self {
        let mut by_month: BTreeMap<(i32, u32), (Money, usize)> = BTreeMap::new();
        for expense in expenses {
            let entry = by_month
                .entry((expense.date.year(), expense.date.month()))
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let months = by_month
            .into_iter()
            .rev()
            .map(|((year, month), (total, expense_count))| MonthSummary {
                year,
                month,
                total,
                expense_count,
                savings: settings.monthly_budget - total,
            })
            .collect();

        Self {
            monthly_budget: settings.monthly_budget,
            months,
        }
    }

    pub fn total_savings(&self) -> Money {
        self.months.iter().map(|m| m.savings).sum()
    }
}
