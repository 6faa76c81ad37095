//! Derived-metric calculators.
//!
//! Pure, stateless aggregation over in-memory collections. The
//! presentation layer consumes these numbers verbatim, so the numeric
//! policy here (rounding, invalid-amount handling) is the contract.

pub mod finance;
pub mod nutrition;
pub mod study;
