// ============================================================================
// Number Type
// Syntactic classification of a numeric literal
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shape of a numeric literal as written in the input.
///
/// Purely descriptive: every value is summed as a `Decimal` regardless
/// of its type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumberType {
    /// No fractional point and no exponent (e.g. `42`, `-7`)
    Integer,
    /// Exponent marker present (e.g. `1e3`, `2.5E-4`)
    Float,
    /// Fractional point without exponent (e.g. `3.14`)
    Decimal,
}

impl NumberType {
    /// All variants, in reporting order.
    pub const ALL: [NumberType; 3] = [NumberType::Integer, NumberType::Float, NumberType::Decimal];

    /// Classify an already-trimmed literal.
    ///
    /// The exponent check wins over the fractional point, so `1.5e2` is a
    /// `Float`.
    pub fn classify(literal: &str) -> Self {
        if literal.contains(['e', 'E']) {
            NumberType::Float
        } else if literal.contains('.') {
            NumberType::Decimal
        } else {
            NumberType::Integer
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NumberType::Integer => "integer",
            NumberType::Float => "float",
            NumberType::Decimal => "decimal",
        }
    }
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
