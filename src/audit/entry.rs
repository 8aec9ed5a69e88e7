//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Panel inputs were changed
    Update,
    /// Cash was added to the stash
    Deposit,
    /// A checklist item was switched on or off
    Toggle,
    /// State was cleared back to defaults
    Reset,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Update => write!(f, "UPDATE"),
            Operation::Deposit => write!(f, "DEPOSIT"),
            Operation::Toggle => write!(f, "TOGGLE"),
            Operation::Reset => write!(f, "RESET"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    BudgetInputs,
    FreedomInputs,
    LoanInputs,
    Stash,
    SafetyChecklist,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::BudgetInputs => write!(f, "BudgetInputs"),
            EntityType::FreedomInputs => write!(f, "FreedomInputs"),
            EntityType::LoanInputs => write!(f, "LoanInputs"),
            EntityType::Stash => write!(f, "Stash"),
            EntityType::SafetyChecklist => write!(f, "SafetyChecklist"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// ID of the affected entity
    pub entity_id: String,

    /// JSON representation of the entity after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Short human-readable description of the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    pub fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            after: None,
            summary: None,
        }
    }

    /// Attach the entity state after the operation
    pub fn with_after<T: Serialize>(mut self, entity: &T) -> Self {
        self.after = serde_json::to_value(entity).ok();
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

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
    fn test_operation_display() {
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Deposit.to_string(), "DEPOSIT");
    }

    #[test]
    fn test_builder() {
        let entry = AuditEntry::new(Operation::Update, EntityType::LoanInputs, "loan")
            .with_after(&json!({"amount": "2000"}))
            .with_summary("amount: 1000 -> 2000");

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.after, Some(json!({"amount": "2000"})));
        assert_eq!(entry.summary.as_deref(), Some("amount: 1000 -> 2000"));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::new(Operation::Toggle, EntityType::SafetyChecklist, "faceid");

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""entity_type":"safety_checklist""#));
        assert!(!json.contains("after"));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Toggle);
        assert_eq!(deserialized.entity_type, EntityType::SafetyChecklist);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::new(Operation::Update, EntityType::BudgetInputs, "budget")
            .with_summary("income: 450");

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE"));
        assert!(formatted.contains("BudgetInputs"));
        assert!(formatted.contains("income: 450"));
    }
}
