//! Nutrition profile domain model.
//!
//! One profile exists at a time (single tenant); saving a new one
//! replaces it. Targets are always derived from the submitted
//! biometrics by the core calculator, never taken from the client.

use crate::metrics::nutrition::{ActivityLevel, Biometrics, Goal, MacroPlan, Sex};
use crate::model::payload::{self, ValidationError};
use crate::repo::EntryId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stored biometrics plus the macro plan derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionProfile {
    pub id: EntryId,
    pub age: u32,
    pub sex: Sex,
    pub weight: f64,
    pub height: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub target_calories: i64,
    pub target_protein: i64,
    pub target_carbs: i64,
    pub target_fat: i64,
}

impl NutritionProfile {
    /// Assembles a profile from validated biometrics and their plan.
    pub fn assemble(id: EntryId, biometrics: Biometrics, plan: MacroPlan) -> Self {
        Self {
            id,
            age: biometrics.age,
            sex: biometrics.sex,
            weight: biometrics.weight_kg,
            height: biometrics.height_cm,
            activity_level: biometrics.activity,
            goal: biometrics.goal,
            target_calories: plan.target_calories,
            target_protein: plan.protein_grams,
            target_carbs: plan.carb_grams,
            target_fat: plan.fat_grams,
        }
    }
}

/// Validates a raw nutrition-profile payload into biometrics.
pub fn validate(raw: &Value) -> Result<Biometrics, ValidationError> {
    let map = payload::object(raw)?;

    let age = payload::required_integer(map, "age")?;
    if !(1..=150).contains(&age) {
        return Err(ValidationError::OutOfRange("age"));
    }

    let weight_kg = payload::required_number(map, "weight")?;
    let height_cm = payload::required_number(map, "height")?;
    if weight_kg <= 0.0 {
        return Err(ValidationError::OutOfRange("weight"));
    }
    if height_cm <= 0.0 {
        return Err(ValidationError::OutOfRange("height"));
    }

    let sex_text = payload::required_text(map, "sex")?;
    let sex = Sex::parse(&sex_text).ok_or(ValidationError::UnknownVariant {
        field: "sex",
        value: sex_text,
    })?;
    let activity_text = payload::required_text(map, "activityLevel")?;
    let activity = ActivityLevel::parse(&activity_text).ok_or(ValidationError::UnknownVariant {
        field: "activityLevel",
        value: activity_text,
    })?;
    let goal_text = payload::required_text(map, "goal")?;
    let goal = Goal::parse(&goal_text).ok_or(ValidationError::UnknownVariant {
        field: "goal",
        value: goal_text,
    })?;

    Ok(Biometrics {
        age: age as u32,
        sex,
        weight_kg,
        height_cm,
        activity,
        goal,
    })
}
