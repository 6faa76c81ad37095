//! Calorie and TDEE/macro calculators.
//!
//! # Responsibility
//! - Sum per-meal calories for dashboard display.
//! - Derive daily calorie and macro targets from biometrics using the
//!   Mifflin-St Jeor equation.
//!
//! # Invariants
//! - All functions are pure; rounding is `f64::round` (half away from
//!   zero), matching the presentation layer's arithmetic.
//! - Macro split is fixed at 30% protein, 40% carbs, 30% fat.

use crate::model::meal::Meal;
use serde::{Deserialize, Serialize};

const WEIGHT_LOSS_DEFICIT: f64 = 500.0;
const MUSCLE_GAIN_SURPLUS: f64 = 300.0;
const PROTEIN_CALORIE_SHARE: f64 = 0.30;
const CARB_CALORIE_SHARE: f64 = 0.40;
const FAT_CALORIE_SHARE: f64 = 0.30;
const CALORIES_PER_GRAM_PROTEIN: f64 = 4.0;
const CALORIES_PER_GRAM_CARBS: f64 = 4.0;
const CALORIES_PER_GRAM_FAT: f64 = 9.0;

/// Biological sex used by the BMR equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
}

impl Sex {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "M" => Some(Self::M),
            "F" => Some(Self::F),
            _ => None,
        }
    }
}

/// Weekly activity level, each label bound to a fixed TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Intense,
    VeryIntense,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Intense => 1.725,
            Self::VeryIntense => 1.9,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sedentary" => Some(Self::Sedentary),
            "light" => Some(Self::Light),
            "moderate" => Some(Self::Moderate),
            "intense" => Some(Self::Intense),
            "very_intense" => Some(Self::VeryIntense),
            _ => None,
        }
    }
}

/// Dietary goal shifting the calorie target off TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    Maintenance,
    MuscleGain,
}

impl Goal {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "weight_loss" => Some(Self::WeightLoss),
            "maintenance" => Some(Self::Maintenance),
            "muscle_gain" => Some(Self::MuscleGain),
            _ => None,
        }
    }

    fn target_from(self, tdee: f64) -> f64 {
        match self {
            Self::WeightLoss => tdee - WEIGHT_LOSS_DEFICIT,
            Self::Maintenance => tdee,
            Self::MuscleGain => tdee + MUSCLE_GAIN_SURPLUS,
        }
    }
}

/// Raw calculator input as submitted by a form: numbers arrive as
/// strings, selections may still be unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacroRequest {
    pub age: String,
    pub sex: Option<Sex>,
    pub weight: String,
    pub height: String,
    pub activity: Option<ActivityLevel>,
    pub goal: Option<Goal>,
}

/// Parsed biometrics, ready for the calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biometrics {
    pub age: u32,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

/// Derived daily targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroPlan {
    /// Basal metabolic rate, rounded for display.
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    pub protein_grams: i64,
    pub carb_grams: i64,
    pub fat_grams: i64,
}

/// Sums per-meal calories.
pub fn calorie_total(meals: &[Meal]) -> f64 {
    meals.iter().map(|meal| meal.calories).sum()
}

/// Computes the macro plan from raw form input.
///
/// Returns `None` when any input is missing or unparseable; the
/// calculator is a no-op in that case, not an error.
pub fn macro_plan(request: &MacroRequest) -> Option<MacroPlan> {
    let biometrics = Biometrics {
        age: request.age.trim().parse().ok()?,
        sex: request.sex?,
        weight_kg: parse_finite(&request.weight)?,
        height_cm: parse_finite(&request.height)?,
        activity: request.activity?,
        goal: request.goal?,
    };
    Some(plan(&biometrics))
}

/// Computes the macro plan from already-parsed biometrics.
pub fn plan(biometrics: &Biometrics) -> MacroPlan {
    // Mifflin-St Jeor; TDEE is rounded before the goal offset, as the
    // presentation layer always did.
    let base = 10.0 * biometrics.weight_kg + 6.25 * biometrics.height_cm
        - 5.0 * f64::from(biometrics.age);
    let bmr = match biometrics.sex {
        Sex::M => base + 5.0,
        Sex::F => base - 161.0,
    };
    let tdee = (bmr * biometrics.activity.multiplier()).round();
    let target = biometrics.goal.target_from(tdee);

    MacroPlan {
        bmr: bmr.round() as i64,
        tdee: tdee as i64,
        target_calories: target as i64,
        protein_grams: grams(target, PROTEIN_CALORIE_SHARE, CALORIES_PER_GRAM_PROTEIN),
        carb_grams: grams(target, CARB_CALORIE_SHARE, CALORIES_PER_GRAM_CARBS),
        fat_grams: grams(target, FAT_CALORIE_SHARE, CALORIES_PER_GRAM_FAT),
    }
}

fn grams(target_calories: f64, share: f64, calories_per_gram: f64) -> i64 {
    (target_calories * share / calories_per_gram).round() as i64
}

fn parse_finite(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}
