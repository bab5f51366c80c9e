//! Core domain logic for the CGPA calculator.
//! This crate is the single source of truth for grading invariants.

pub mod calc;
pub mod logging;
pub mod model;
pub mod service;

pub use calc::aggregate::{compute_cgpa, CgpaError, CgpaResult, CgpaSummary, EntryError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::grade::{Grade, GradeParseError};
pub use model::subject::{
    Subject, SubjectDraft, SubjectValidationError, MAX_CREDITS, MIN_CREDITS,
};
pub use service::cgpa_service::CgpaService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
