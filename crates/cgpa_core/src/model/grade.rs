//! Institutional grade scale.
//!
//! # Responsibility
//! - Define the closed set of letter grades and their point values.
//! - Provide parsing and display in the canonical symbol form.
//!
//! # Invariants
//! - Every grade that can be constructed has a point value; there is no
//!   "unknown grade" state inside the domain.
//! - Point values are integers in `0..=10`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Letter grade on the institutional 10-point scale.
///
/// Serialized in symbol form (`"A+"`, not `"APlus"`) so values round-trip
/// unchanged through form payloads and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Outstanding, 10 points.
    O,
    /// 9 points.
    #[serde(rename = "A+")]
    APlus,
    /// 8 points.
    A,
    /// 7 points.
    #[serde(rename = "B+")]
    BPlus,
    /// 6 points.
    B,
    /// 5 points.
    C,
    /// Fail/unsatisfactory, 0 points. Credits still count toward the total.
    U,
}

impl Grade {
    /// Full scale in display order, highest grade first.
    pub const ALL: [Grade; 7] = [
        Grade::O,
        Grade::APlus,
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::C,
        Grade::U,
    ];

    /// Point value assigned by the institutional scale.
    pub fn points(self) -> u32 {
        match self {
            Grade::O => 10,
            Grade::APlus => 9,
            Grade::A => 8,
            Grade::BPlus => 7,
            Grade::B => 6,
            Grade::C => 5,
            Grade::U => 0,
        }
    }

    /// Canonical letter form as shown to users.
    pub fn symbol(self) -> &'static str {
        match self {
            Grade::O => "O",
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::U => "U",
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parse failure for a symbol outside the grade scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeParseError {
    /// The rejected input, trimmed.
    pub symbol: String,
}

impl Display for GradeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown grade symbol `{}`; expected one of O|A+|A|B+|B|C|U",
            self.symbol
        )
    }
}

impl Error for GradeParseError {}

impl FromStr for Grade {
    type Err = GradeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Grade::ALL
            .into_iter()
            .find(|grade| grade.symbol() == trimmed)
            .ok_or_else(|| GradeParseError {
                symbol: trimmed.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{Grade, GradeParseError};

    #[test]
    fn scale_is_ordered_highest_first() {
        let points = Grade::ALL.map(Grade::points);
        assert_eq!(points, [10, 9, 8, 7, 6, 5, 0]);
    }

    #[test]
    fn parse_accepts_surrounding_whitespace() {
        assert_eq!(" A+ ".parse::<Grade>(), Ok(Grade::APlus));
    }

    #[test]
    fn parse_rejects_lowercase_and_unknown_symbols() {
        assert_eq!(
            "o".parse::<Grade>(),
            Err(GradeParseError {
                symbol: "o".to_string()
            })
        );
        assert!("F".parse::<Grade>().is_err());
    }
}
