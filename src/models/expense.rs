//! Expense model
//!
//! An expense is immutable once created. Drafts are the partially-filled
//! shape produced by the entry form and the bill scanner.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// Date format used on disk and in exports
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// Amount spent (positive for anything that passed validation)
    pub amount: Money,

    pub category: Category,

    #[serde(default)]
    pub description: String,

    /// Calendar date the money was spent
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
}

impl Expense {
    /// Build a full record from a draft, filling defaults for missing fields
    ///
    /// Missing amount becomes zero, category `Other`, description empty and
    /// date `today`. This never fails; checking the draft is the caller's job.
    pub fn from_draft(draft: ExpenseDraft, today: NaiveDate) -> Self {
        let category = draft
            .category
            .as_deref()
            .and_then(|c| c.parse::<Category>().ok())
            .unwrap_or_default();

        Self {
            id: ExpenseId::new(),
            amount: draft.amount.unwrap_or_default(),
            category,
            description: draft.description.unwrap_or_default(),
            date: draft.date.unwrap_or(today),
        }
    }

    /// Description if present, otherwise the category name
    pub fn label(&self) -> &str {
        if self.description.trim().is_empty() {
            self.category.as_str()
        } else {
            &self.description
        }
    }
}

/// A partially-filled expense awaiting validation or insertion
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExpenseDraft {
    #[serde(default)]
    pub amount: Option<Money>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "iso_date::deserialize_optional")]
    pub date: Option<NaiveDate>,
}

impl ExpenseDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Parse a stored date: either `YYYY-MM-DD` or a full RFC 3339 timestamp
///
/// Timestamps are converted to local time before taking the calendar date.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Local).date_naive())
}

mod iso_date {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_iso_date(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO-8601 date '{}'", s)))
    }

    pub fn deserialize_optional<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse_iso_date(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO-8601 date '{}'", s))),
        }
    }
}
