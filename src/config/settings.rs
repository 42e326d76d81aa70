//! User settings for SpendWise
//!
//! Budget limits and the alert phone number. Stored as
//! `{"weeklyLimit": .., "monthlyBudget": .., "phoneNumber": ..}`.

use serde::{Deserialize, Serialize};

use super::paths::SpendwisePaths;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::Money;
use crate::storage::file_io::{read_json, write_json_atomic};

fn default_weekly_limit() -> Money {
    Money::from_rupees(5000)
}

fn default_monthly_budget() -> Money {
    Money::from_rupees(25000)
}

/// Persisted application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Any single expense above this raises a budget alert
    #[serde(default = "default_weekly_limit")]
    pub weekly_limit: Money,

    /// Monthly spending target used for savings in the monthly summary
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: Money,

    /// Alert number, set once from the profile at registration
    #[serde(default)]
    pub phone_number: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            weekly_limit: default_weekly_limit(),
            monthly_budget: default_monthly_budget(),
            phone_number: String::new(),
        }
    }
}

/// Changes requested through the settings form
///
/// The phone number has no field here; it is read-only after registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub weekly_limit: Option<Money>,
    pub monthly_budget: Option<Money>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.weekly_limit.is_none() && self.monthly_budget.is_none()
    }
}

impl AppSettings {
    /// Load settings, returning defaults when the file doesn't exist
    ///
    /// A file that exists but doesn't parse is reported as a `Parse` error so
    /// the caller can decide to fall back.
    pub fn load(paths: &SpendwisePaths) -> SpendwiseResult<Self> {
        read_json(paths.settings_file())
    }

    pub fn save(&self, paths: &SpendwisePaths) -> SpendwiseResult<()> {
        write_json_atomic(paths.settings_file(), self)
    }

    /// Apply an update, rejecting non-positive amounts
    ///
    /// Either every field applies or none does.
    pub fn apply(&mut self, update: SettingsUpdate) -> SpendwiseResult<()> {
        if let Some(limit) = update.weekly_limit {
            if !limit.is_positive() {
                return Err(SpendwiseError::InvalidInput(
                    "Weekly limit must be greater than zero.".into(),
                ));
            }
        }
        if let Some(budget) = update.monthly_budget {
            if !budget.is_positive() {
                return Err(SpendwiseError::InvalidInput(
                    "Monthly budget must be greater than zero.".into(),
                ));
            }
        }

        if let Some(limit) = update.weekly_limit {
            self.weekly_limit = limit;
        }
        if let Some(budget) = update.monthly_budget {
            self.monthly_budget = budget;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.weekly_limit, Money::from_rupees(5000));
        assert_eq!(settings.monthly_budget, Money::from_rupees(25000));
        assert!(settings.phone_number.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendwisePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = AppSettings::default();
        settings.weekly_limit = Money::from_rupees(3000);
        settings.phone_number = "+91 9876543210".into();
        settings.save(&paths).unwrap();

        let loaded = AppSettings::load(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendwisePaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(AppSettings::load(&paths).unwrap(), AppSettings::default());
    }

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_value(AppSettings::default()).unwrap();
        assert_eq!(json["weeklyLimit"], 5000);
        assert_eq!(json["monthlyBudget"], 25000);
        assert_eq!(json["phoneNumber"], "");

        let partial: AppSettings = serde_json::from_str(r#"{"weeklyLimit": 1200}"#).unwrap();
        assert_eq!(partial.weekly_limit, Money::from_rupees(1200));
        assert_eq!(partial.monthly_budget, Money::from_rupees(25000));
    }

    #[test]
    fn test_apply_rejects_non_positive() {
        let mut settings = AppSettings::default();
        let update = SettingsUpdate {
            weekly_limit: Some(Money::from_rupees(2000)),
            monthly_budget: Some(Money::zero()),
        };

        assert!(settings.apply(update).is_err());
        assert_eq!(settings.weekly_limit, Money::from_rupees(5000));

        settings
            .apply(SettingsUpdate {
                weekly_limit: Some(Money::from_rupees(2000)),
                monthly_budget: None,
            })
            .unwrap();
        assert_eq!(settings.weekly_limit, Money::from_rupees(2000));
    }
}
