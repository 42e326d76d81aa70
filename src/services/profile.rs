//! Profile service: first-run registration and full reset

use crate::audit::{AuditEntry, EntityType, Operation};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::UserProfile;
use crate::storage::Storage;

pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register the single profile and derive the alert phone number from it
    pub fn register(&self, name: &str, mobile: &str) -> SpendwiseResult<UserProfile> {
        if let Some(existing) = self.storage.profile.get()? {
            return Err(SpendwiseError::AlreadyRegistered(existing.name));
        }

        let profile = UserProfile::new(name, mobile);
        profile.validate()?;

        self.storage.profile.set(profile.clone())?;
        self.storage.profile.save()?;

        let mut settings = self.storage.settings()?;
        settings.phone_number = profile.alert_phone_number();
        self.storage.save_settings(settings)?;

        self.storage.log(
            AuditEntry::record(Operation::Create, EntityType::Profile, "profile")
                .named(profile.name.clone())
                .after(&profile),
        )?;

        Ok(profile)
    }

    pub fn get(&self) -> SpendwiseResult<Option<UserProfile>> {
        self.storage.profile.get()
    }

    /// The registered profile, or `NotRegistered`
    pub fn require(&self) -> SpendwiseResult<UserProfile> {
        self.storage.profile.get()?.ok_or(SpendwiseError::NotRegistered)
    }

    /// Wipe profile, expenses and settings, returning to first-run state
    pub fn reset(&self) -> SpendwiseResult<()> {
        let profile = self.storage.profile.get()?;
        let expense_count = self.storage.expenses.count()?;

        self.storage.wipe()?;

        let mut entry = AuditEntry::record(Operation::Delete, EntityType::Profile, "profile")
            .summary(format!("reset: removed profile, settings and {} expenses", expense_count));
        if let Some(profile) = profile {
            entry = entry.named(profile.name.clone()).before(&profile);
        }
        self.storage.log(entry)
    }
}
