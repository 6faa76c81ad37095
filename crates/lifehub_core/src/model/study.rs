//! Study tracking domain model.
//!
//! # Invariants
//! - `progress` is a whole number in [0, 100]; absence means 0.
//! - Studies list by progress, not by date, unlike the other kinds.

use crate::model::payload::{self, ValidationError};
use crate::repo::{Entity, EntryId, SortKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One persisted study record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Study {
    pub id: EntryId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub progress: u8,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub notes: Option<String>,
}

/// Validated creation/update payload for a study record.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyFields {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub progress: u8,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub notes: Option<String>,
}

/// Validates a raw study payload.
pub fn validate(raw: &Value) -> Result<StudyFields, ValidationError> {
    let map = payload::object(raw)?;
    let progress = match payload::coerce_integer(map, "progress")? {
        None => 0,
        Some(value) if (0..=100).contains(&value) => value as u8,
        Some(_) => return Err(ValidationError::OutOfRange("progress")),
    };
    Ok(StudyFields {
        title: payload::required_text(map, "title")?,
        description: payload::optional_text(map, "description")?,
        category: payload::required_text(map, "category")?,
        progress,
        start_date: payload::optional_text(map, "startDate")?,
        end_date: payload::optional_text(map, "endDate")?,
        notes: payload::optional_text(map, "notes")?,
    })
}

impl Entity for Study {
    const KIND: &'static str = "study";
    type Fields = StudyFields;

    fn assemble(id: EntryId, fields: StudyFields) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            category: fields.category,
            progress: fields.progress,
            start_date: fields.start_date,
            end_date: fields.end_date,
            notes: fields.notes,
        }
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Progress(self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn progress_defaults_to_zero_and_coerces_from_strings() {
        let absent = validate(&json!({
            "title": "Rust book",
            "category": "programming",
        }))
        .expect("progress is optional");
        assert_eq!(absent.progress, 0);

        let coerced = validate(&json!({
            "title": "Rust book",
            "category": "programming",
            "progress": "60",
        }))
        .expect("numeric string must coerce");
        assert_eq!(coerced.progress, 60);
    }

    #[test]
    fn rejects_progress_outside_bounds() {
        let err = validate(&json!({
            "title": "Rust book",
            "category": "programming",
            "progress": 101,
        }))
        .unwrap_err();
        assert_eq!(err, ValidationError::OutOfRange("progress"));
    }

    #[test]
    fn study_serializes_with_camel_case_date_fields() {
        let study = Study::assemble(
            EntryId::nil(),
            validate(&json!({
                "title": "Linear algebra",
                "category": "math",
                "progress": 20,
                "startDate": "2024-01-01",
            }))
            .unwrap(),
        );
        let wire = serde_json::to_value(&study).unwrap();
        assert_eq!(wire["startDate"], "2024-01-01");
        assert_eq!(wire["endDate"], Value::Null);
    }
}
