// ============================================================================
// Number Validator
// Parses raw tokens into exact decimals with type detection and memoization
// ============================================================================

use super::cache::ValidationCache;
use super::errors::{NumericError, NumericResult};
use crate::domain::NumberType;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Tokens rejected before parsing, compared case-insensitively
const RESERVED_TOKENS: [&str; 3] = ["nan", "inf", "-inf"];

/// Fractional digits past this many are below the decimal's smallest unit
/// and round away entirely.
const MAX_EXPANDED_FRACTION: i64 = 64;

/// Integer digits past this many can never fit the 96-bit mantissa.
const MAX_EXPANDED_INTEGER: i64 = 30;

/// Outcome of validating one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Token parsed to an exact decimal
    Valid {
        value: Decimal,
        number_type: NumberType,
    },
    /// Token rejected; `message` embeds the trimmed text
    Invalid {
        message: String,
        reason: NumericError,
    },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid { .. })
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            Validation::Valid { value, .. } => Some(*value),
            Validation::Invalid { .. } => None,
        }
    }

    pub fn number_type(&self) -> Option<NumberType> {
        match self {
            Validation::Valid { number_type, .. } => Some(*number_type),
            Validation::Invalid { .. } => None,
        }
    }

    /// Human-readable rejection message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Validation::Valid { .. } => None,
            Validation::Invalid { message, .. } => Some(message),
        }
    }
}

/// Parse an already-trimmed literal without touching any cache.
///
/// Exponent forms (`1e3`, `2.5E-4`) are first expanded to positional
/// notation, so both forms share one rule: fractional digits beyond what
/// a 96-bit decimal can carry (at most 28 places) are rounded to the
/// nearest representable value, while an integer part too large for the
/// mantissa is rejected as `OutOfRange`.
pub fn parse_literal(literal: &str) -> NumericResult<(Decimal, NumberType)> {
    if literal.is_empty() {
        return Err(NumericError::Empty);
    }

    let lowered = literal.to_ascii_lowercase();
    if RESERVED_TOKENS.contains(&lowered.as_str()) {
        return Err(NumericError::NonFinite);
    }

    let number_type = NumberType::classify(literal);
    let value = match number_type {
        NumberType::Float => Decimal::from_str(&expand_exponent(literal)?)?,
        NumberType::Integer | NumberType::Decimal => Decimal::from_str(literal)?,
    };

    Ok((value, number_type))
}

/// Rewrite `<mantissa>e<exponent>` as a plain positional literal.
fn expand_exponent(literal: &str) -> NumericResult<String> {
    let (mantissa, exponent) = literal
        .split_once(['e', 'E'])
        .ok_or(NumericError::InvalidInput)?;
    let exponent: i32 = exponent.parse().map_err(|_| NumericError::InvalidInput)?;

    let (sign, unsigned) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let well_formed = !(int_part.is_empty() && frac_part.is_empty())
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        return Err(NumericError::InvalidInput);
    }

    let digits = format!("{}{}", int_part, frac_part);
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok("0".to_string());
    }

    // Position of the decimal point relative to the first significant digit
    let point = int_part.len() as i64 - (digits.len() - significant.len()) as i64
        + i64::from(exponent);
    let width = significant.len() as i64;

    if point > MAX_EXPANDED_INTEGER {
        return Err(NumericError::OutOfRange);
    }
    if point < -MAX_EXPANDED_FRACTION {
        return Ok("0".to_string());
    }

    let expanded = if point <= 0 {
        format!("{}0.{}{}", sign, "0".repeat((-point) as usize), significant)
    } else if point >= width {
        format!("{}{}{}", sign, significant, "0".repeat((point - width) as usize))
    } else {
        let (whole, fraction) = significant.split_at(point as usize);
        format!("{}{}.{}", sign, whole, fraction)
    };
    Ok(expanded)
}

/// Validates raw tokens, memoizing every outcome (valid or not).
///
/// The cache is owned state rather than a global; share one validator
/// across calls to share its cache. Single-threaded use only.
#[derive(Debug, Clone, Default)]
pub struct NumberValidator {
    cache: ValidationCache,
}

impl NumberValidator {
    /// Create a validator whose cache holds at most `cache_capacity` entries
    pub fn new(cache_capacity: usize) -> Self {
        Self {
            cache: ValidationCache::new(cache_capacity),
        }
    }

    /// Validate a raw token.
    ///
    /// Whitespace is trimmed first and the trimmed text is the cache key,
    /// so `" 5 "` and `"5"` share an entry. A cached outcome is returned
    /// without re-parsing or re-logging.
    pub fn validate(&mut self, raw: &str) -> Validation {
        let key = raw.trim();
        if let Some(outcome) = self.cache.get(key) {
            return outcome.clone();
        }

        let outcome = match parse_literal(key) {
            Ok((value, number_type)) => Validation::Valid { value, number_type },
            Err(reason) => {
                tracing::warn!("Validation failed for input: {}", key);
                Validation::Invalid {
                    message: format!("Invalid number: {}", key),
                    reason,
                }
            }
        };

        self.cache.insert(key.to_string(), outcome.clone());
        outcome
    }

    pub fn cache(&self) -> &ValidationCache {
        &self.cache
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
