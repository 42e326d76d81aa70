//! Expense entry validation
//!
//! `validate_draft` is a pure function of the draft and today's date and is
//! meant to be re-run after every edit. `ExpenseForm` pairs a draft with the
//! "touched" flag that decides when errors are shown and enforced.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Category, ExpenseDraft, Money};

pub const AMOUNT_REQUIRED: &str = "Amount must be greater than zero.";
pub const CATEGORY_REQUIRED: &str = "Please select a category.";
pub const DATE_REQUIRED: &str = "Date is required.";
pub const DATE_IN_FUTURE: &str = "Expense date cannot be in the future.";

/// Form fields that can carry an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Amount,
    Category,
    Date,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Amount => write!(f, "amount"),
            Field::Category => write!(f, "category"),
            Field::Date => write!(f, "date"),
        }
    }
}

/// Field name to message; empty means the draft is valid
pub type ValidationErrors = BTreeMap<Field, String>;

/// Check every rule and collect all failures
pub fn validate_draft(draft: &ExpenseDraft, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match draft.amount {
        Some(amount) if amount.is_positive() => {}
        _ => {
            errors.insert(Field::Amount, AMOUNT_REQUIRED.to_string());
        }
    }

    match draft.category.as_deref().map(str::trim) {
        None | Some("") => {
            errors.insert(Field::Category, CATEGORY_REQUIRED.to_string());
        }
        Some(name) => {
            if let Err(unknown) = name.parse::<Category>() {
                errors.insert(Field::Category, unknown.to_string());
            }
        }
    }

    match draft.date {
        None => {
            errors.insert(Field::Date, DATE_REQUIRED.to_string());
        }
        Some(date) if date > today => {
            errors.insert(Field::Date, DATE_IN_FUTURE.to_string());
        }
        Some(_) => {}
    }

    errors
}

/// The manual entry form: a draft plus whether the user has touched it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    draft: ExpenseDraft,
    touched: bool,
}

impl ExpenseForm {
    /// A fresh form: no amount, category Other, empty description, today
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: ExpenseDraft::new()
                .category(Category::Other.as_str())
                .description("")
                .date(today),
            touched: false,
        }
    }

    pub fn draft(&self) -> &ExpenseDraft {
        &self.draft
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn set_amount(&mut self, amount: Option<Money>) {
        self.draft.amount = amount;
        self.touched = true;
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.draft.category = category;
        self.touched = true;
    }

    /// Description is free text and never fails, so it doesn't touch the form
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = Some(description.into());
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.draft.date = date;
        self.touched = true;
    }

    /// Errors for the current draft, whether or not they're shown yet
    pub fn errors(&self, today: NaiveDate) -> ValidationErrors {
        validate_draft(&self.draft, today)
    }

    /// Errors to display: none until the form is touched
    pub fn visible_errors(&self, today: NaiveDate) -> ValidationErrors {
        if self.touched {
            self.errors(today)
        } else {
            ValidationErrors::new()
        }
    }

    /// Submit is only disabled once the form is touched and invalid
    pub fn can_submit(&self, today: NaiveDate) -> bool {
        !self.touched || self.errors(today).is_empty()
    }

    /// Attempt a submit
    ///
    /// Marks the form touched. On success returns the draft and resets the
    /// form; on failure the draft is kept so the user can fix it.
    pub fn submit(&mut self, today: NaiveDate) -> SpendwiseResult<ExpenseDraft> {
        self.touched = true;

        let errors = self.errors(today);
        if !errors.is_empty() {
            return Err(SpendwiseError::Validation(errors));
        }

        let submitted = std::mem::replace(self, Self::new(today));
        Ok(submitted.draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn valid_draft() -> ExpenseDraft {
        ExpenseDraft::new()
            .amount(Money::from_rupees(250))
            .category("Food")
            .date(today())
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate_draft(&valid_draft(), today()).is_empty());
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        for paise in [0, -1, -25_000] {
            let mut draft = valid_draft();
            draft.amount = Some(Money::from_paise(paise));
            let errors = validate_draft(&draft, today());
            assert_eq!(errors.get(&Field::Amount).map(String::as_str), Some(AMOUNT_REQUIRED));
        }

        let mut draft = valid_draft();
        draft.amount = None;
        assert!(validate_draft(&draft, today()).contains_key(&Field::Amount));
    }

    #[test]
    fn test_category_rules() {
        let mut draft = valid_draft();
        draft.category = Some("   ".into());
        assert_eq!(
            validate_draft(&draft, today()).get(&Field::Category).map(String::as_str),
            Some(CATEGORY_REQUIRED)
        );

        draft.category = None;
        assert!(validate_draft(&draft, today()).contains_key(&Field::Category));

        draft.category = Some("Yachts".into());
        assert_eq!(
            validate_draft(&draft, today()).get(&Field::Category).map(String::as_str),
            Some("Unknown category 'Yachts'.")
        );
    }

    #[test]
    fn test_date_rules() {
        let mut draft = valid_draft();

        draft.date = today().succ_opt();
        assert_eq!(
            validate_draft(&draft, today()).get(&Field::Date).map(String::as_str),
            Some(DATE_IN_FUTURE)
        );

        draft.date = Some(today());
        assert!(!validate_draft(&draft, today()).contains_key(&Field::Date));

        draft.date = today().pred_opt();
        assert!(!validate_draft(&draft, today()).contains_key(&Field::Date));

        draft.date = None;
        assert_eq!(
            validate_draft(&draft, today()).get(&Field::Date).map(String::as_str),
            Some(DATE_REQUIRED)
        );
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = validate_draft(&ExpenseDraft::new(), today());
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_untouched_form_hides_errors() {
        let form = ExpenseForm::new(today());
        assert!(!form.is_touched());
        assert!(form.errors(today()).contains_key(&Field::Amount));
        assert!(form.visible_errors(today()).is_empty());
        assert!(form.can_submit(today()));
    }

    #[test]
    fn test_editing_touches_form() {
        let mut form = ExpenseForm::new(today());
        form.set_description("Lunch");
        assert!(!form.is_touched());

        form.set_amount(Some(Money::zero()));
        assert!(form.is_touched());
        assert!(!form.can_submit(today()));
        assert!(form.visible_errors(today()).contains_key(&Field::Amount));

        form.set_amount(Some(Money::from_rupees(90)));
        assert!(form.can_submit(today()));
    }

    #[test]
    fn test_failed_submit_keeps_draft() {
        let mut form = ExpenseForm::new(today());
        let err = form.submit(today()).unwrap_err();

        assert!(err.is_validation());
        assert!(form.is_touched());
        assert_eq!(form.draft().category.as_deref(), Some("Other"));
    }

    #[test]
    fn test_successful_submit_resets_form() {
        let mut form = ExpenseForm::new(today());
        form.set_amount(Some(Money::from_rupees(40)));
        form.set_category(Some("Transport".into()));
        form.set_description("Metro");

        let draft = form.submit(today()).unwrap();
        assert_eq!(draft.amount, Some(Money::from_rupees(40)));
        assert_eq!(draft.description.as_deref(), Some("Metro"));

        assert_eq!(form, ExpenseForm::new(today()));
    }
}
