//! Settings service
//!
//! Updates weekly limit and monthly budget. The phone number is only ever
//! written by registration.

use crate::audit::{AuditEntry, EntityType, Operation};
use crate::config::settings::{AppSettings, SettingsUpdate};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::storage::Storage;

pub struct SettingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SettingsService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> SpendwiseResult<AppSettings> {
        self.storage.settings()
    }

    /// Apply an update, persist it and return the new settings
    ///
    /// Alerts already raised are not re-evaluated against the new limit.
    pub fn update(&self, update: SettingsUpdate) -> SpendwiseResult<AppSettings> {
        if update.is_empty() {
            return Err(SpendwiseError::InvalidInput(
                "Nothing to update. Pass --weekly-limit and/or --monthly-budget.".into(),
            ));
        }

        let before = self.storage.settings()?;
        let mut after = before.clone();
        after.apply(update)?;

        if after == before {
            return Ok(after);
        }

        self.storage.save_settings(after.clone())?;
        self.storage.log(
            AuditEntry::record(Operation::Update, EntityType::Settings, "settings")
                .before(&before)
                .after(&after)
                .summary(describe_changes(&before, &after)),
        )?;

        Ok(after)
    }
}

/// e.g. `weeklyLimit: ₹5000 -> ₹3000`
fn describe_changes(before: &AppSettings, after: &AppSettings) -> String {
    let mut changes = Vec::new();
    if before.weekly_limit != after.weekly_limit {
        changes.push(format!(
            "weeklyLimit: {} -> {}",
            before.weekly_limit, after.weekly_limit
        ));
    }
    if before.monthly_budget != after.monthly_budget {
        changes.push(format!(
            "monthlyBudget: {} -> {}",
            before.monthly_budget, after.monthly_budget
        ));
    }
    changes.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendwisePaths;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendwisePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage
            .load_all(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
            .unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_update_persists_and_audits() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SettingsService::new(&storage);

        let updated = service
            .update(SettingsUpdate {
                weekly_limit: Some(Money::from_rupees(3000)),
                monthly_budget: None,
            })
            .unwrap();
        assert_eq!(updated.weekly_limit, Money::from_rupees(3000));
        assert_eq!(AppSettings::load(storage.paths()).unwrap(), updated);

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].summary.as_deref(), Some("weeklyLimit: ₹5000 -> ₹3000"));
    }

    #[test]
    fn test_rejects_empty_and_invalid_updates() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SettingsService::new(&storage);

        assert!(service.update(SettingsUpdate::default()).is_err());
        assert!(service
            .update(SettingsUpdate {
                weekly_limit: None,
                monthly_budget: Some(Money::from_rupees(-1)),
            })
            .is_err());
        assert_eq!(service.get().unwrap(), AppSettings::default());
    }

    #[test]
    fn test_unchanged_update_is_not_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SettingsService::new(&storage);

        service
            .update(SettingsUpdate {
                weekly_limit: Some(Money::from_rupees(5000)),
                monthly_budget: None,
            })
            .unwrap();
        assert!(storage.audit().read_all().unwrap().is_empty());
    }
}
