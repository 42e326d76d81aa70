//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// The persisted blobs whose changes are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Profile,
    Expense,
    Settings,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Profile => write!(f, "Profile"),
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Settings => write!(f, "Settings"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Entity state before the operation (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Entity state after the operation (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    /// Start an entry stamped with the current time
    pub fn record(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name: None,
            before: None,
            after: None,
            summary: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.entity_name = Some(name.into());
        self
    }

    pub fn before<T: Serialize>(mut self, value: &T) -> Self {
        self.before = serde_json::to_value(value).ok();
        self
    }

    pub fn after<T: Serialize>(mut self, value: &T) -> Self {
        self.after = serde_json::to_value(value).ok();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// One line for terminal output, plus the summary on a second line
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(summary) = &self.summary {
            output.push_str(&format!("\n  {}", summary));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display() {
        assert_eq!(Operation::Delete.to_string(), "DELETE");
        assert_eq!(EntityType::Settings.to_string(), "Settings");
    }

    #[test]
    fn test_builder_fills_states() {
        let entry = AuditEntry::record(Operation::Update, EntityType::Settings, "settings")
            .before(&json!({"weeklyLimit": 5000}))
            .after(&json!({"weeklyLimit": 3000}))
            .summary("weeklyLimit: 5000 -> 3000");

        assert_eq!(entry.before.unwrap()["weeklyLimit"], 5000);
        assert_eq!(entry.after.unwrap()["weeklyLimit"], 3000);
        assert_eq!(entry.summary.as_deref(), Some("weeklyLimit: 5000 -> 3000"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::record(Operation::Create, EntityType::Expense, "exp-1234abcd");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["operation"], "create");
        assert_eq!(json["entity_type"], "expense");
        assert!(json.get("before").is_none());
        assert!(json.get("summary").is_none());
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::record(Operation::Create, EntityType::Profile, "profile")
            .named("Asha")
            .summary("registered");

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE Profile profile (Asha)"));
        assert!(formatted.ends_with("\n  registered"));
    }
}
