//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cgpa_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use cgpa_core::{compute_cgpa, SubjectDraft};

fn main() {
    println!("cgpa_core ping={}", cgpa_core::ping());
    println!("cgpa_core version={}", cgpa_core::core_version());

    // Fixed sample submission exercising the aggregation path end to end.
    let sample = vec![SubjectDraft::new("4", "A"), SubjectDraft::new("3", "B+")];
    match compute_cgpa(&sample) {
        Ok(summary) => println!(
            "cgpa_core sample_cgpa={} total_credits={}",
            summary.formatted_cgpa(),
            summary.total_credits
        ),
        Err(err) => println!("cgpa_core sample_error={err}"),
    }
}
