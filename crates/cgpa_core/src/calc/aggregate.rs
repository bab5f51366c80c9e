//! CGPA aggregation over a sequence of raw subject rows.
//!
//! # Responsibility
//! - Apply per-row validation and accumulate credit-weighted points.
//! - Keep the numeric result independent of row order.
//!
//! # Invariants
//! - No partial aggregate is produced when any row fails validation.
//! - Row errors are reported in input order, 0-based.
//! - `total_credits > 0` whenever a summary is returned.

use crate::model::subject::{Subject, SubjectDraft, SubjectValidationError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for aggregation APIs.
pub type CgpaResult<T> = Result<T, CgpaError>;

/// Validation failure pinned to its row in the submitted sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryError {
    /// 0-based position of the failing row in the input.
    pub index: usize,
    /// What was wrong with the row.
    pub kind: SubjectValidationError,
}

impl Display for EntryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Rows are numbered from 1 wherever users see them.
        write!(f, "subject {}: {}", self.index + 1, self.kind)
    }
}

/// Submission-level failure for one aggregation call.
#[derive(Debug, Clone, PartialEq)]
pub enum CgpaError {
    /// One or more rows failed validation; carries every failure.
    Invalid(Vec<EntryError>),
    /// Every row was blank, or the input was empty.
    NoSubjects,
}

impl Display for CgpaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(errors) => {
                write!(f, "{} invalid subject row(s):", errors.len())?;
                for error in errors {
                    write!(f, " [{error}]")?;
                }
                Ok(())
            }
            Self::NoSubjects => write!(f, "no subjects to aggregate"),
        }
    }
}

impl Error for CgpaError {}

/// Aggregate outcome of one successful calculation.
///
/// `cgpa` keeps the exact quotient; use [`CgpaSummary::formatted_cgpa`] for
/// the 2-decimal display form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CgpaSummary {
    /// Credit-weighted mean of grade points.
    pub cgpa: f64,
    /// Sum of credits over contributing rows.
    pub total_credits: f64,
    /// Number of rows that contributed to the aggregate.
    pub subject_count: u32,
}

impl CgpaSummary {
    /// CGPA rounded to the display precision of 2 decimal digits.
    pub fn formatted_cgpa(&self) -> String {
        format!("{:.2}", self.cgpa)
    }
}

/// Computes the credit-weighted grade-point average of a submission.
///
/// Each row is judged independently: blank rows are skipped, failing rows
/// are collected, and valid rows accumulate `credits` and
/// `credits x grade points`. The sums are commutative, so row order never
/// changes the numeric result.
///
/// # Errors
/// - `CgpaError::Invalid` with every row failure, in input order.
/// - `CgpaError::NoSubjects` when no row contributed.
pub fn compute_cgpa(drafts: &[SubjectDraft]) -> CgpaResult<CgpaSummary> {
    let mut errors: Vec<EntryError> = Vec::new();
    let mut total_credits = 0.0_f64;
    let mut total_points = 0.0_f64;
    let mut subject_count = 0_u32;

    for (index, draft) in drafts.iter().enumerate() {
        match Subject::from_draft(draft) {
            Ok(None) => {}
            Ok(Some(subject)) => {
                total_credits += subject.credits;
                total_points += subject.weighted_points();
                subject_count += 1;
                debug!(
                    "event=subject_scored module=calc status=ok row={} credits={} grade={} points={} weighted={}",
                    index + 1,
                    subject.credits,
                    subject.grade,
                    subject.grade.points(),
                    subject.weighted_points()
                );
            }
            Err(kinds) => {
                errors.extend(kinds.into_iter().map(|kind| EntryError { index, kind }));
            }
        }
    }

    if !errors.is_empty() {
        return Err(CgpaError::Invalid(errors));
    }
    if subject_count == 0 {
        return Err(CgpaError::NoSubjects);
    }

    Ok(CgpaSummary {
        cgpa: total_points / total_credits,
        total_credits,
        subject_count,
    })
}
