// ============================================================================
// Numeric Module
// Literal validation with exact decimal parsing
// ============================================================================
//
// This module provides:
// - NumberValidator: trims, rejects non-finite tokens, parses and classifies
// - ValidationCache: bounded memo with full-clear eviction
// - NumericError: reasons a literal or a running total is rejected
//
// Design principles:
// - No floating-point operations
// - Invalid input is a value (Validation::Invalid), never a panic
// - Cache state is owned by the validator, never global

mod cache;
mod errors;
mod validator;

pub use cache::ValidationCache;
pub use errors::{NumericError, NumericResult};
pub use validator::{parse_literal, NumberValidator, Validation};
