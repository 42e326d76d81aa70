//! The running application session
//!
//! A `Session` owns the storage (profile, expenses, settings) and the
//! in-memory notification list. Every mutating operation updates memory and
//! then writes the affected blob in full.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::config::paths::SpendwisePaths;
use crate::config::settings::{AppSettings, SettingsUpdate};
use crate::error::SpendwiseResult;
use crate::export::csv::{export_expenses_csv, export_filename};
use crate::models::{ExpenseDraft, NotificationList, UserProfile};
use crate::services::{
    AddedExpense, ExpenseForm, ExpenseService, ProfileService, SettingsService,
};
use crate::storage::{LoadWarning, Storage};

/// Base URL of generated share links
pub const SHARE_BASE_URL: &str = "https://spendwise.ai/share/history";

/// Length of the random share token
const SHARE_TOKEN_LEN: usize = 10;

/// A CSV export ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

pub struct Session {
    storage: Storage,
    notifications: NotificationList,
    today: NaiveDate,
}

impl Session {
    /// Open the session, loading every blob once
    ///
    /// Blobs that fail to parse start from their defaults and are returned as
    /// warnings.
    pub fn open(paths: SpendwisePaths, today: NaiveDate) -> SpendwiseResult<(Self, Vec<LoadWarning>)> {
        let storage = Storage::new(paths)?;
        let warnings = storage.load_all(today)?;
        Ok((
            Self {
                storage,
                notifications: NotificationList::new(),
                today,
            },
            warnings,
        ))
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn notifications(&self) -> &NotificationList {
        &self.notifications
    }

    pub fn profile(&self) -> SpendwiseResult<Option<UserProfile>> {
        ProfileService::new(&self.storage).get()
    }

    pub fn settings(&self) -> SpendwiseResult<AppSettings> {
        self.storage.settings()
    }

    /// An empty entry form with today's defaults
    pub fn new_form(&self) -> ExpenseForm {
        ExpenseForm::new(self.today)
    }

    pub fn register(&mut self, name: &str, mobile: &str) -> SpendwiseResult<UserProfile> {
        ProfileService::new(&self.storage).register(name, mobile)
    }

    /// Submit the manual entry form
    pub fn add_manual(&mut self, form: &mut ExpenseForm) -> SpendwiseResult<AddedExpense> {
        let added = ExpenseService::new(&self.storage).add_manual(form, self.today)?;
        self.raise(&added);
        Ok(added)
    }

    /// Insert a draft produced by the bill scanner
    pub fn add_scanned(&mut self, draft: ExpenseDraft) -> SpendwiseResult<AddedExpense> {
        let added = ExpenseService::new(&self.storage).add_scanned(draft, self.today)?;
        self.raise(&added);
        Ok(added)
    }

    fn raise(&mut self, added: &AddedExpense) {
        if let Some(alert) = &added.alert {
            self.notifications.push(alert.clone());
        }
    }

    pub fn update_settings(&mut self, update: SettingsUpdate) -> SpendwiseResult<AppSettings> {
        ProfileService::new(&self.storage).require()?;
        SettingsService::new(&self.storage).update(update)
    }

    /// Build the CSV export of the current history
    pub fn export_csv(&self) -> SpendwiseResult<CsvExport> {
        let expenses = self.storage.expenses.get_all()?;
        let mut content = Vec::new();
        export_expenses_csv(&expenses, &mut content)?;

        Ok(CsvExport {
            filename: export_filename(self.today),
            content: String::from_utf8_lossy(&content).into_owned(),
        })
    }

    /// A cosmetic share link; nothing is uploaded
    pub fn share_link(&self) -> SpendwiseResult<String> {
        ProfileService::new(&self.storage).require()?;
        let token: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(SHARE_TOKEN_LEN)
            .collect();
        Ok(format!("{}/{}", SHARE_BASE_URL, token))
    }

    pub fn dismiss_notifications(&mut self) {
        self.notifications.clear();
    }

    /// Wipe all persisted state; the session is unregistered afterwards
    pub fn reset(&mut self) -> SpendwiseResult<()> {
        ProfileService::new(&self.storage).reset()?;
        self.notifications.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpendwiseError;
    use crate::models::Money;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn open_session(temp_dir: &TempDir) -> Session {
        let paths = SpendwisePaths::with_base_dir(temp_dir.path().to_path_buf());
        let (session, warnings) = Session::open(paths, today()).unwrap();
        assert!(warnings.is_empty());
        session
    }

    fn registered_session(temp_dir: &TempDir) -> Session {
        let mut session = open_session(temp_dir);
        session.register("Asha", "9876543210").unwrap();
        session
    }

    #[test]
    fn test_operations_need_registration() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = open_session(&temp_dir);

        let mut form = session.new_form();
        form.set_amount(Some(Money::from_rupees(10)));
        assert!(matches!(session.add_manual(&mut form), Err(SpendwiseError::NotRegistered)));
        assert!(matches!(session.share_link(), Err(SpendwiseError::NotRegistered)));
        assert!(matches!(
            session.update_settings(SettingsUpdate {
                weekly_limit: Some(Money::from_rupees(100)),
                monthly_budget: None,
            }),
            Err(SpendwiseError::NotRegistered)
        ));
    }

    #[test]
    fn test_alert_goes_to_notifications() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = registered_session(&temp_dir);

        session
            .add_scanned(ExpenseDraft::new().amount(Money::from_rupees(5001)))
            .unwrap();
        session
            .add_scanned(ExpenseDraft::new().amount(Money::from_rupees(5000)))
            .unwrap();

        assert_eq!(session.notifications().len(), 1);
        assert_eq!(
            session.notifications().latest().unwrap().message,
            "ALERT: Expense of ₹5001 exceeds weekly limit! SMS sent to +91 9876543210"
        );

        session.dismiss_notifications();
        assert!(session.notifications().is_empty());
    }

    #[test]
    fn test_settings_change_does_not_re_alert() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = registered_session(&temp_dir);

        session
            .add_scanned(ExpenseDraft::new().amount(Money::from_rupees(800)))
            .unwrap();
        session
            .update_settings(SettingsUpdate {
                weekly_limit: Some(Money::from_rupees(500)),
                monthly_budget: None,
            })
            .unwrap();

        assert!(session.notifications().is_empty());
    }

    #[test]
    fn test_state_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let added = {
            let mut session = registered_session(&temp_dir);
            let mut form = session.new_form();
            form.set_amount(Some(Money::from_paise(12_050)));
            form.set_category(Some("Food".into()));
            form.set_description("Thali");
            session.add_manual(&mut form).unwrap()
        };

        let session = open_session(&temp_dir);
        let expenses = session.storage().expenses.get_all().unwrap();
        assert_eq!(expenses[0], added.expense);
        assert_eq!(session.profile().unwrap().unwrap().name, "Asha");
        assert_eq!(session.settings().unwrap().phone_number, "+91 9876543210");
    }

    #[test]
    fn test_export_csv() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = registered_session(&temp_dir);

        let err = session.export_csv().unwrap_err();
        assert!(err.is_precondition());

        session
            .add_scanned(
                ExpenseDraft::new()
                    .amount(Money::from_rupees(250))
                    .category("Food")
                    .description("Lunch, out"),
            )
            .unwrap();
        let export = session.export_csv().unwrap();
        assert_eq!(export.filename, "spendwise_expenses_2025-06-15.csv");
        assert!(export.content.ends_with("2025-06-15,Food,\"Lunch, out\",250"));
    }

    #[test]
    fn test_share_link_format() {
        let temp_dir = TempDir::new().unwrap();
        let session = registered_session(&temp_dir);

        let link = session.share_link().unwrap();
        let token = link.strip_prefix("https://spendwise.ai/share/history/").unwrap();
        assert_eq!(token.len(), SHARE_TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(link, session.share_link().unwrap());
    }

    #[test]
    fn test_reset_returns_to_first_run() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = registered_session(&temp_dir);
        session
            .add_scanned(ExpenseDraft::new().amount(Money::from_rupees(9000)))
            .unwrap();

        session.reset().unwrap();

        assert!(session.profile().unwrap().is_none());
        assert!(session.notifications().is_empty());
        assert_eq!(session.settings().unwrap(), AppSettings::default());

        let reopened = open_session(&temp_dir);
        assert!(reopened.profile().unwrap().is_none());
        assert_eq!(reopened.storage().expenses.count().unwrap(), 0);
    }
}
