//! Credit-weighted aggregation over validated subject entries.
//!
//! # Responsibility
//! - Validate a whole submission and produce one aggregate score.
//! - Report every failing row at once instead of stopping at the first.

pub mod aggregate;
