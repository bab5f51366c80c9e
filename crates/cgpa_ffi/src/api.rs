//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Map core outcomes to UI-ready envelopes with notification texts.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Envelope messages are stable strings the UI can show verbatim.

use cgpa_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CgpaError, CgpaService, EntryError, SubjectDraft, SubjectValidationError,
};

const MSG_SUCCESS: &str = "CGPA calculated successfully.";
const MSG_INVALID: &str = "Please fill in all required fields correctly.";
const MSG_NO_SUBJECTS: &str = "Please add at least one course to calculate CGPA.";

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for an identical `level + log_dir` pair.
/// - Never panics; returns empty string on success, message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One row of the grading-system table shown by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeScaleItem {
    /// Canonical letter form (`"A+"`).
    pub symbol: String,
    /// Integer point value on the 10-point scale.
    pub points: u32,
}

/// Returns the institutional grade scale in display order.
///
/// # FFI contract
/// - Sync call, non-blocking, never panics.
/// - Ordering is stable: highest grade first.
#[flutter_rust_bridge::frb(sync)]
pub fn grade_scale() -> Vec<GradeScaleItem> {
    CgpaService::new()
        .grade_scale()
        .iter()
        .map(|grade| GradeScaleItem {
            symbol: grade.symbol().to_string(),
            points: grade.points(),
        })
        .collect()
}

/// One subject row exactly as captured by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectFormRow {
    /// Raw text of the credits input ("" when blank).
    pub credits: String,
    /// Raw selected grade symbol ("" when nothing selected).
    pub grade: String,
}

/// Field-level problem pinned to one form row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 0-based row position in the submitted list.
    pub row_index: u32,
    /// Failing field: `credits` or `grade`.
    pub field: String,
    /// UI-ready message for inline display next to the field.
    pub message: String,
}

/// Calculation envelope for the result panel and notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResponse {
    /// Whether an aggregate was produced.
    pub ok: bool,
    /// CGPA formatted to 2 decimal digits, present only on success.
    pub cgpa: Option<String>,
    /// Sum of credits over contributing rows (0 on failure).
    pub total_credits: f64,
    /// Number of rows that contributed (0 on failure).
    pub subject_count: u32,
    /// Every failing row and field, in input order.
    pub row_errors: Vec<RowError>,
    /// Notification text for the UI toast.
    pub message: String,
}

/// Calculates the CGPA for the submitted form rows.
///
/// # FFI contract
/// - Sync call, O(rows), non-blocking, never panics.
/// - Blank rows are skipped; failing rows are all reported at once.
/// - `row_errors` is empty exactly when `ok` is true or no row was filled.
#[flutter_rust_bridge::frb(sync)]
pub fn calculate_cgpa(rows: Vec<SubjectFormRow>) -> CalculationResponse {
    let drafts = rows
        .into_iter()
        .map(|row| SubjectDraft::new(row.credits, row.grade))
        .collect::<Vec<_>>();

    match CgpaService::new().calculate(&drafts) {
        Ok(summary) => CalculationResponse {
            ok: true,
            cgpa: Some(summary.formatted_cgpa()),
            total_credits: summary.total_credits,
            subject_count: summary.subject_count,
            row_errors: Vec::new(),
            message: MSG_SUCCESS.to_string(),
        },
        Err(CgpaError::Invalid(errors)) => CalculationResponse {
            ok: false,
            cgpa: None,
            total_credits: 0.0,
            subject_count: 0,
            row_errors: errors.iter().map(to_row_error).collect(),
            message: MSG_INVALID.to_string(),
        },
        Err(CgpaError::NoSubjects) => CalculationResponse {
            ok: false,
            cgpa: None,
            total_credits: 0.0,
            subject_count: 0,
            row_errors: Vec::new(),
            message: MSG_NO_SUBJECTS.to_string(),
        },
    }
}

fn to_row_error(error: &EntryError) -> RowError {
    let (field, message) = match &error.kind {
        SubjectValidationError::InvalidCredits { .. } => {
            ("credits", "Valid credits (1-10) required".to_string())
        }
        SubjectValidationError::MissingGrade => {
            ("grade", "Grade selection is required".to_string())
        }
        SubjectValidationError::UnknownGrade { symbol } => (
            "grade",
            format!("Grade `{symbol}` is not part of the grading scale"),
        ),
    };
    RowError {
        row_index: u32::try_from(error.index).unwrap_or(u32::MAX),
        field: field.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        calculate_cgpa, core_version, grade_scale, init_logging, ping, SubjectFormRow,
    };

    fn row(credits: &str, grade: &str) -> SubjectFormRow {
        SubjectFormRow {
            credits: credits.to_string(),
            grade: grade.to_string(),
        }
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/cgpa-logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn grade_scale_lists_symbols_highest_first() {
        let scale = grade_scale();
        assert_eq!(scale.len(), 7);
        assert_eq!(scale[0].symbol, "O");
        assert_eq!(scale[0].points, 10);
        assert_eq!(scale[6].symbol, "U");
        assert_eq!(scale[6].points, 0);
    }

    #[test]
    fn calculate_returns_formatted_summary() {
        let response = calculate_cgpa(vec![row("4", "A"), row("3", "B+")]);
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.cgpa.as_deref(), Some("7.57"));
        assert_eq!(response.total_credits, 7.0);
        assert_eq!(response.subject_count, 2);
        assert!(response.row_errors.is_empty());
        assert_eq!(response.message, "CGPA calculated successfully.");
    }

    #[test]
    fn calculate_reports_every_failing_field() {
        let response = calculate_cgpa(vec![row("11", "A"), row("3", "")]);
        assert!(!response.ok);
        assert_eq!(response.cgpa, None);
        assert_eq!(response.row_errors.len(), 2);
        assert_eq!(response.row_errors[0].row_index, 0);
        assert_eq!(response.row_errors[0].field, "credits");
        assert_eq!(response.row_errors[0].message, "Valid credits (1-10) required");
        assert_eq!(response.row_errors[1].row_index, 1);
        assert_eq!(response.row_errors[1].field, "grade");
        assert_eq!(
            response.message,
            "Please fill in all required fields correctly."
        );
    }

    #[test]
    fn calculate_asks_for_a_course_when_everything_is_blank() {
        let response = calculate_cgpa(vec![row("", ""), SubjectFormRow::default()]);
        assert!(!response.ok);
        assert!(response.row_errors.is_empty());
        assert_eq!(
            response.message,
            "Please add at least one course to calculate CGPA."
        );
    }
}
