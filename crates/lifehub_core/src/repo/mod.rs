//! In-memory repository.
//!
//! # Responsibility
//! - Own one keyed collection per entity kind plus the single
//!   nutrition-profile slot.
//!
//! # Invariants
//! - Constructed once at process start and injected into callers; no
//!   ambient global store.
//! - No operation spans two collections, so there is nothing to keep
//!   transactionally consistent across kinds.

pub mod collection;

pub use collection::{sort_date, Collection, Entity, EntryId, SortKey};

use crate::model::finance::Finance;
use crate::model::meal::Meal;
use crate::model::profile::NutritionProfile;
use crate::model::study::Study;
use crate::model::task::Task;
use crate::model::workout::Workout;

/// Authoritative in-memory store for all entity kinds.
///
/// Data lives only in process memory and is lost on restart; that is a
/// deliberate non-goal, not an accident.
#[derive(Default)]
pub struct Repository {
    pub finances: Collection<Finance>,
    pub workouts: Collection<Workout>,
    pub meals: Collection<Meal>,
    pub tasks: Collection<Task>,
    pub studies: Collection<Study>,
    nutrition_profile: Option<NutritionProfile>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored nutrition profile, if one was saved.
    pub fn nutrition_profile(&self) -> Option<&NutritionProfile> {
        self.nutrition_profile.as_ref()
    }

    /// Replaces the nutrition profile; there is at most one.
    pub fn set_nutrition_profile(&mut self, profile: NutritionProfile) -> &NutritionProfile {
        self.nutrition_profile.insert(profile)
    }
}
