//! Budget alert evaluation
//!
//! Runs once per added expense. No SMS is actually sent; the alert is a
//! session notification that names the number it would have gone to.

use crate::config::settings::AppSettings;
use crate::models::{Expense, Notification};

/// Text of the budget-exceeded alert
pub fn alert_message(expense: &Expense, phone_number: &str) -> String {
    format!(
        "ALERT: Expense of {} exceeds weekly limit! SMS sent to {}",
        expense.amount, phone_number
    )
}

/// Raise an alert when a single expense is above the weekly limit
///
/// An expense exactly at the limit does not alert.
pub fn evaluate_budget_alert(expense: &Expense, settings: &AppSettings) -> Option<Notification> {
    if expense.amount > settings.weekly_limit {
        Some(Notification::new(alert_message(expense, &settings.phone_number)))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, Money};
    use chrono::NaiveDate;

    fn expense(amount: Money) -> Expense {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        Expense::from_draft(ExpenseDraft::new().amount(amount), today)
    }

    fn settings() -> AppSettings {
        AppSettings {
            weekly_limit: Money::from_rupees(5000),
            phone_number: "+91 9876543210".into(),
            ..AppSettings::default()
        }
    }

    #[test]
    fn test_over_limit_alerts() {
        let alert = evaluate_budget_alert(&expense(Money::from_rupees(5001)), &settings()).unwrap();
        assert_eq!(
            alert.message,
            "ALERT: Expense of ₹5001 exceeds weekly limit! SMS sent to +91 9876543210"
        );
    }

    #[test]
    fn test_at_limit_is_silent() {
        assert!(evaluate_budget_alert(&expense(Money::from_rupees(5000)), &settings()).is_none());
        assert!(evaluate_budget_alert(&expense(Money::from_rupees(12)), &settings()).is_none());
    }

    #[test]
    fn test_fractional_amount_in_message() {
        let alert = evaluate_budget_alert(&expense(Money::from_paise(500_050)), &settings()).unwrap();
        assert!(alert.message.contains("₹5000.5"));
    }
}
