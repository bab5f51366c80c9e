//! Subject entry model and per-entry validation.
//!
//! # Responsibility
//! - Represent one form row exactly as captured (`SubjectDraft`).
//! - Turn raw rows into validated `Subject` values, or report every
//!   field-level problem the row has.
//!
//! # Invariants
//! - `Subject::credits` is finite and within `[MIN_CREDITS, MAX_CREDITS]`.
//! - A fully blank draft is "absent", never an error.
//! - Validation reports all failing fields of a row, credits first.

use crate::model::grade::Grade;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lower bound for subject credits, inclusive.
pub const MIN_CREDITS: f64 = 1.0;
/// Upper bound for subject credits, inclusive.
pub const MAX_CREDITS: f64 = 10.0;

/// One subject row as captured by the presentation layer, unvalidated.
///
/// Both fields carry the raw widget text: an empty string means the field
/// was left blank. Fractional credit values are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectDraft {
    /// Raw text of the credits input.
    pub credits: String,
    /// Raw selected grade symbol.
    pub grade: String,
}

impl SubjectDraft {
    /// Creates a draft from raw field values.
    pub fn new(credits: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            credits: credits.into(),
            grade: grade.into(),
        }
    }

    /// Creates an untouched row, as rendered before any user input.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Whether both fields are empty after trimming.
    ///
    /// Blank rows are excluded from aggregation without raising an error.
    pub fn is_blank(&self) -> bool {
        self.credits.trim().is_empty() && self.grade.trim().is_empty()
    }
}

/// Field-level validation failure for one subject row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubjectValidationError {
    /// Credits field is empty, non-numeric, or outside `[1, 10]`.
    InvalidCredits {
        /// The rejected raw text, trimmed.
        raw: String,
    },
    /// Grade field was left empty while the row is otherwise populated.
    MissingGrade,
    /// Grade field holds a symbol the scale does not define.
    UnknownGrade {
        /// The rejected symbol, trimmed.
        symbol: String,
    },
}

impl Display for SubjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredits { raw } => {
                write!(f, "credits must be a number between 1 and 10, got `{raw}`")
            }
            Self::MissingGrade => write!(f, "grade selection is required"),
            Self::UnknownGrade { symbol } => {
                write!(f, "grade `{symbol}` is not part of the grading scale")
            }
        }
    }
}

impl Error for SubjectValidationError {}

/// Validated subject entry ready for aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Credit weight, finite, within `[MIN_CREDITS, MAX_CREDITS]`.
    pub credits: f64,
    /// Scale grade.
    pub grade: Grade,
}

impl Subject {
    /// Creates a validated subject from an already-parsed credit value.
    ///
    /// # Errors
    /// - `InvalidCredits` when `credits` is not finite or out of range.
    pub fn new(credits: f64, grade: Grade) -> Result<Self, SubjectValidationError> {
        if !credits.is_finite() || !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
            return Err(SubjectValidationError::InvalidCredits {
                raw: credits.to_string(),
            });
        }
        Ok(Self { credits, grade })
    }

    /// Validates one raw row.
    ///
    /// # Contract
    /// - Fully blank row -> `Ok(None)` (skipped, not an error).
    /// - Valid row -> `Ok(Some(subject))`.
    /// - Failing row -> `Err` with every failing field, credits first.
    pub fn from_draft(draft: &SubjectDraft) -> Result<Option<Self>, Vec<SubjectValidationError>> {
        if draft.is_blank() {
            return Ok(None);
        }

        let mut errors = Vec::new();

        let credits = parse_credits(draft.credits.as_str());
        if credits.is_none() {
            errors.push(SubjectValidationError::InvalidCredits {
                raw: draft.credits.trim().to_string(),
            });
        }

        let grade_text = draft.grade.trim();
        let grade = if grade_text.is_empty() {
            errors.push(SubjectValidationError::MissingGrade);
            None
        } else {
            match grade_text.parse::<Grade>() {
                Ok(grade) => Some(grade),
                Err(err) => {
                    errors.push(SubjectValidationError::UnknownGrade { symbol: err.symbol });
                    None
                }
            }
        };

        // A missing side always pushed an error above, so the fallback arm
        // never returns an empty error list.
        match (credits, grade) {
            (Some(credits), Some(grade)) if errors.is_empty() => {
                Ok(Some(Self { credits, grade }))
            }
            _ => Err(errors),
        }
    }

    /// Contribution of this subject to the weighted point sum.
    pub fn weighted_points(&self) -> f64 {
        self.credits * f64::from(self.grade.points())
    }
}

fn parse_credits(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() || !(MIN_CREDITS..=MAX_CREDITS).contains(&value) {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::{parse_credits, Subject, SubjectValidationError};
    use crate::model::grade::Grade;

    #[test]
    fn parse_credits_bounds_are_inclusive() {
        assert_eq!(parse_credits("1"), Some(1.0));
        assert_eq!(parse_credits("10"), Some(10.0));
        assert_eq!(parse_credits("0.5"), None);
        assert_eq!(parse_credits("10.5"), None);
    }

    #[test]
    fn parse_credits_rejects_non_numeric_and_non_finite_text() {
        assert_eq!(parse_credits("four"), None);
        assert_eq!(parse_credits(""), None);
        assert_eq!(parse_credits("inf"), None);
        assert_eq!(parse_credits("NaN"), None);
    }

    #[test]
    fn new_rejects_out_of_range_credits() {
        let err = Subject::new(11.0, Grade::A).unwrap_err();
        assert_eq!(
            err,
            SubjectValidationError::InvalidCredits {
                raw: "11".to_string()
            }
        );
    }

    #[test]
    fn weighted_points_multiplies_credits_by_scale_points() {
        let subject = Subject::new(4.0, Grade::BPlus).expect("in-range subject");
        assert_eq!(subject.weighted_points(), 28.0);
    }
}
