//! Core domain logic for LifeHub.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod metrics;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::finance::{Finance, FinanceFields, FinanceKind};
pub use model::meal::{Meal, MealFields, MealSlot};
pub use model::payload::ValidationError;
pub use model::profile::NutritionProfile;
pub use model::study::{Study, StudyFields};
pub use model::task::{Priority, Task, TaskFields};
pub use model::workout::{Workout, WorkoutFields};
pub use repo::{Collection, Entity, EntryId, Repository, SortKey};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
