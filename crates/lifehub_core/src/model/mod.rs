//! Typed domain records and payload validation.
//!
//! # Responsibility
//! - Define the five tracked entity kinds plus the nutrition profile.
//! - Turn raw JSON payloads into validated field sets or a structured
//!   `ValidationError`; nothing unvalidated reaches the repository.
//!
//! # Invariants
//! - Required string fields are non-empty.
//! - Enum fields match their closed value sets exactly.
//! - Validation is pure: no I/O, no clock, no randomness.

pub mod finance;
pub mod meal;
pub mod payload;
pub mod profile;
pub mod study;
pub mod task;
pub mod workout;
