//! Meal entry domain model.
//!
//! # Invariants
//! - `calories` is non-negative and defaults to 0 when absent.
//! - `meal_slot` is one of the six closed day-part labels.
//! - Macro fields stay free-form strings; only the calorie total is
//!   aggregated numerically (see `metrics::nutrition`).

use crate::model::payload::{self, ValidationError};
use crate::repo::{sort_date, Entity, EntryId, SortKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Day part a meal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    MorningSnack,
    Lunch,
    AfternoonSnack,
    Dinner,
    Supper,
}

impl MealSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::MorningSnack => "morning_snack",
            Self::Lunch => "lunch",
            Self::AfternoonSnack => "afternoon_snack",
            Self::Dinner => "dinner",
            Self::Supper => "supper",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "breakfast" => Some(Self::Breakfast),
            "morning_snack" => Some(Self::MorningSnack),
            "lunch" => Some(Self::Lunch),
            "afternoon_snack" => Some(Self::AfternoonSnack),
            "dinner" => Some(Self::Dinner),
            "supper" => Some(Self::Supper),
            _ => None,
        }
    }
}

/// One persisted meal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: EntryId,
    pub name: String,
    pub calories: f64,
    pub protein: Option<String>,
    pub carbs: Option<String>,
    pub fat: Option<String>,
    pub date: String,
    pub meal_slot: MealSlot,
    pub notes: Option<String>,
}

/// Validated creation/update payload for a meal entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MealFields {
    pub name: String,
    pub calories: f64,
    pub protein: Option<String>,
    pub carbs: Option<String>,
    pub fat: Option<String>,
    pub date: String,
    pub meal_slot: MealSlot,
    pub notes: Option<String>,
}

/// Validates a raw meal payload.
pub fn validate(raw: &Value) -> Result<MealFields, ValidationError> {
    let map = payload::object(raw)?;
    let calories = payload::coerce_number(map, "calories")?.unwrap_or(0.0);
    if calories < 0.0 {
        return Err(ValidationError::OutOfRange("calories"));
    }
    let slot_text = payload::required_text(map, "mealSlot")?;
    let meal_slot = MealSlot::parse(&slot_text).ok_or(ValidationError::UnknownVariant {
        field: "mealSlot",
        value: slot_text,
    })?;
    Ok(MealFields {
        name: payload::required_text(map, "name")?,
        calories,
        protein: payload::optional_text(map, "protein")?,
        carbs: payload::optional_text(map, "carbs")?,
        fat: payload::optional_text(map, "fat")?,
        date: payload::required_text(map, "date")?,
        meal_slot,
        notes: payload::optional_text(map, "notes")?,
    })
}

impl Entity for Meal {
    const KIND: &'static str = "meal";
    type Fields = MealFields;

    fn assemble(id: EntryId, fields: MealFields) -> Self {
        Self {
            id,
            name: fields.name,
            calories: fields.calories,
            protein: fields.protein,
            carbs: fields.carbs,
            fat: fields.fat,
            date: fields.date,
            meal_slot: fields.meal_slot,
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
    fn calories_default_to_zero_when_absent() {
        let fields = validate(&json!({
            "name": "Oats",
            "date": "2024-02-01",
            "mealSlot": "breakfast",
        }))
        .expect("calories are optional");
        assert_eq!(fields.calories, 0.0);
        assert_eq!(fields.meal_slot, MealSlot::Breakfast);
    }

    #[test]
    fn rejects_negative_calories_and_unknown_slots() {
        let negative = validate(&json!({
            "name": "Oats",
            "calories": -10,
            "date": "2024-02-01",
            "mealSlot": "breakfast",
        }))
        .unwrap_err();
        assert_eq!(negative, ValidationError::OutOfRange("calories"));

        let slot = validate(&json!({
            "name": "Oats",
            "date": "2024-02-01",
            "mealSlot": "brunch",
        }))
        .unwrap_err();
        assert_eq!(
            slot,
            ValidationError::UnknownVariant {
                field: "mealSlot",
                value: "brunch".to_string(),
            }
        );
    }

    #[test]
    fn meal_serializes_with_camel_case_slot_field() {
        let meal = Meal::assemble(
            EntryId::nil(),
            validate(&json!({
                "name": "Rice",
                "calories": "320",
                "date": "2024-02-01",
                "mealSlot": "lunch",
            }))
            .unwrap(),
        );
        let wire = serde_json::to_value(&meal).unwrap();
        assert_eq!(wire["mealSlot"], "lunch");
        assert_eq!(wire["calories"], 320.0);
    }
}
