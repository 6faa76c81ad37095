//! Workout entry domain model.
//!
//! # Invariants
//! - `sets` and `reps` are whole numbers, at least 1, coerced from
//!   numeric input of either JSON type.
//! - `weight` stays a free-form string (units are the user's business).

use crate::model::payload::{self, ValidationError};
use crate::repo::{sort_date, Entity, EntryId, SortKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One persisted workout entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: EntryId,
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: Option<String>,
    pub date: String,
    pub notes: Option<String>,
}

/// Validated creation/update payload for a workout entry.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutFields {
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: Option<String>,
    pub date: String,
    pub notes: Option<String>,
}

/// Validates a raw workout payload.
pub fn validate(raw: &Value) -> Result<WorkoutFields, ValidationError> {
    let map = payload::object(raw)?;
    Ok(WorkoutFields {
        exercise: payload::required_text(map, "exercise")?,
        sets: positive_count(map, "sets")?,
        reps: positive_count(map, "reps")?,
        weight: payload::optional_text(map, "weight")?,
        date: payload::required_text(map, "date")?,
        notes: payload::optional_text(map, "notes")?,
    })
}

fn positive_count(
    map: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<u32, ValidationError> {
    let count = payload::required_integer(map, field)?;
    if !(1..=i64::from(u32::MAX)).contains(&count) {
        return Err(ValidationError::OutOfRange(field));
    }
    Ok(count as u32)
}

impl Entity for Workout {
    const KIND: &'static str = "workout";
    type Fields = WorkoutFields;

    fn assemble(id: EntryId, fields: WorkoutFields) -> Self {
        Self {
            id,
            exercise: fields.exercise,
            sets: fields.sets,
            reps: fields.reps,
            weight: fields.weight,
            date: fields.date,
            notes: fields.notes,
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
    fn coerces_counts_from_strings() {
        let fields = validate(&json!({
            "exercise": "Squat",
            "sets": "4",
            "reps": 8,
            "date": "2024-02-10",
        }))
        .expect("numeric strings must coerce");
        assert_eq!(fields.sets, 4);
        assert_eq!(fields.reps, 8);
        assert_eq!(fields.weight, None);
    }

    #[test]
    fn rejects_zero_and_fractional_counts() {
        let zero = validate(&json!({
            "exercise": "Squat",
            "sets": 0,
            "reps": 8,
            "date": "2024-02-10",
        }))
        .unwrap_err();
        assert_eq!(zero, ValidationError::OutOfRange("sets"));

        let fractional = validate(&json!({
            "exercise": "Squat",
            "sets": 3,
            "reps": 7.5,
            "date": "2024-02-10",
        }))
        .unwrap_err();
        assert_eq!(fractional, ValidationError::NotAWholeNumber("reps"));
    }
}
