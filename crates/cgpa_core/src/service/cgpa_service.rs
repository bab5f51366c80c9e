//! CGPA use-case service.
//!
//! # Responsibility
//! - Provide the single calculation entry point for core callers.
//! - Emit structured log events around each calculation.
//!
//! # Invariants
//! - Service APIs never bypass row validation in the calc module.
//! - The service holds no state; every call is independent.

use crate::calc::aggregate::{compute_cgpa, CgpaError, CgpaResult, CgpaSummary};
use crate::model::grade::Grade;
use crate::model::subject::SubjectDraft;
use log::{info, warn};

/// Stateless use-case wrapper over the aggregation core.
#[derive(Debug, Clone, Copy, Default)]
pub struct CgpaService;

impl CgpaService {
    /// Creates the service.
    pub fn new() -> Self {
        Self
    }

    /// Calculates the CGPA for one submission.
    ///
    /// # Contract
    /// - Delegates validation and aggregation to [`compute_cgpa`] unchanged.
    /// - Logs an info event on success and a warn event on failure; the
    ///   outcome itself is returned, never swallowed.
    pub fn calculate(&self, drafts: &[SubjectDraft]) -> CgpaResult<CgpaSummary> {
        let outcome = compute_cgpa(drafts);
        match &outcome {
            Ok(summary) => {
                info!(
                    "event=cgpa_calculated module=service status=ok subjects={} total_credits={} cgpa={}",
                    summary.subject_count,
                    summary.total_credits,
                    summary.formatted_cgpa()
                );
            }
            Err(CgpaError::Invalid(errors)) => {
                warn!(
                    "event=cgpa_rejected module=service status=error reason=validation rows={} failures={}",
                    drafts.len(),
                    errors.len()
                );
            }
            Err(CgpaError::NoSubjects) => {
                warn!(
                    "event=cgpa_rejected module=service status=error reason=no_subjects rows={}",
                    drafts.len()
                );
            }
        }
        outcome
    }

    /// Ordered grade scale for rendering the grading-system table.
    pub fn grade_scale(&self) -> &'static [Grade] {
        &Grade::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::CgpaService;
    use crate::calc::aggregate::CgpaError;
    use crate::model::subject::SubjectDraft;

    #[test]
    fn calculate_matches_direct_computation() {
        let service = CgpaService::new();
        let drafts = vec![SubjectDraft::new("4", "A"), SubjectDraft::new("3", "B+")];

        let summary = service.calculate(&drafts).expect("valid submission");
        assert_eq!(summary.formatted_cgpa(), "7.57");
        assert_eq!(summary.total_credits, 7.0);
    }

    #[test]
    fn calculate_surfaces_failures_unchanged() {
        let service = CgpaService::new();
        let outcome = service.calculate(&[]);
        assert_eq!(outcome, Err(CgpaError::NoSubjects));
    }

    #[test]
    fn grade_scale_lists_the_full_scale_once() {
        let service = CgpaService::new();
        let scale = service.grade_scale();
        assert_eq!(scale.len(), 7);
        assert_eq!(scale[0].symbol(), "O");
        assert_eq!(scale[6].symbol(), "U");
    }
}
