//! Settings, profile and notification output

use crate::config::settings::AppSettings;
use crate::models::{Notification, UserProfile};

pub fn format_settings(settings: &AppSettings) -> String {
    let phone = if settings.phone_number.is_empty() {
        "(not set)"
    } else {
        settings.phone_number.as_str()
    };

    format!(
        "Weekly limit:   {}\nMonthly budget: {}\nAlert phone:    {}\n",
        settings.weekly_limit, settings.monthly_budget, phone
    )
}

pub fn format_profile(profile: &UserProfile) -> String {
    format!("Name:   {}\nMobile: {}\n", profile.name, profile.mobile)
}

/// One line per notification, newest first
pub fn format_notifications(notifications: &[Notification]) -> String {
    notifications
        .iter()
        .map(|n| format!("[{}] {}\n", n.raised_at.format("%H:%M"), n.message))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_without_phone() {
        let output = format_settings(&AppSettings::default());
        assert!(output.contains("Weekly limit:   ₹5000"));
        assert!(output.contains("Monthly budget: ₹25000"));
        assert!(output.contains("(not set)"));
    }

    #[test]
    fn test_notifications() {
        let output = format_notifications(&[Notification::new("ALERT: test")]);
        assert!(output.trim_end().ends_with("ALERT: test"));
        assert_eq!(output.lines().count(), 1);
    }
}
