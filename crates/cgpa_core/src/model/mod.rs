//! Domain model for grade-point aggregation.
//!
//! # Responsibility
//! - Define the canonical data structures used by the calculation core.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - A `Subject` only exists with in-range credits and a scale grade.
//! - Raw form input is represented by `SubjectDraft`, never by `Subject`.

pub mod grade;
pub mod subject;
