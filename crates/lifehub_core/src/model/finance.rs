//! Finance entry domain model.
//!
//! # Invariants
//! - `kind` is one of the two closed ledger sides.
//! - `amount` is kept as the submitted string; numeric interpretation
//!   happens at aggregation time (see `metrics::finance`).

use crate::model::payload::{self, ValidationError};
use crate::repo::{sort_date, Entity, EntryId, SortKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ledger side of a finance entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinanceKind {
    Income,
    Expense,
}

impl FinanceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

/// One persisted finance entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finance {
    pub id: EntryId,
    pub description: String,
    pub amount: String,
    pub category: String,
    pub kind: FinanceKind,
    pub date: String,
}

/// Validated creation/update payload for a finance entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceFields {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub kind: FinanceKind,
    pub date: String,
}

/// Validates a raw finance payload.
pub fn validate(raw: &Value) -> Result<FinanceFields, ValidationError> {
    let map = payload::object(raw)?;
    let kind_text = payload::required_text(map, "kind")?;
    let kind = FinanceKind::parse(&kind_text).ok_or(ValidationError::UnknownVariant {
        field: "kind",
        value: kind_text,
    })?;
    Ok(FinanceFields {
        description: payload::required_text(map, "description")?,
        amount: payload::required_text(map, "amount")?,
        category: payload::required_text(map, "category")?,
        kind,
        date: payload::required_text(map, "date")?,
    })
}

impl Entity for Finance {
    const KIND: &'static str = "finance";
    type Fields = FinanceFields;

    fn assemble(id: EntryId, fields: FinanceFields) -> Self {
        Self {
            id,
            description: fields.description,
            amount: fields.amount,
            category: fields.category,
            kind: fields.kind,
            date: fields.date,
        }
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Date(sort_date(&self.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_a_complete_entry() {
        let fields = validate(&json!({
            "description": "Salary",
            "amount": "500",
            "category": "work",
            "kind": "income",
            "date": "2024-01-15",
        }))
        .expect("complete payload must validate");
        assert_eq!(fields.kind, FinanceKind::Income);
        assert_eq!(fields.amount, "500");
    }

    #[test]
    fn rejects_unknown_kind_and_preserves_case_sensitivity() {
        let err = validate(&json!({
            "description": "Rent",
            "amount": "900",
            "category": "housing",
            "kind": "Expense",
            "date": "2024-01-01",
        }))
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownVariant {
                field: "kind",
                value: "Expense".to_string(),
            }
        );
    }

    #[test]
    fn rejects_empty_amount() {
        let err = validate(&json!({
            "description": "Rent",
            "amount": "",
            "category": "housing",
            "kind": "expense",
            "date": "2024-01-01",
        }))
        .unwrap_err();
        assert_eq!(err, ValidationError::EmptyField("amount"));
    }
}
