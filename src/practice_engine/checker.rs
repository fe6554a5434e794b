//! Answer-equality policy used when the user submits an answer.
//!
//! | Expected answer | Rule |
//! |-----------------|------|
//! | number, FD or DO unit | parsed input within [`APPROX_EPSILON`] |
//! | number, any other unit | parsed input exactly equal |
//! | fraction string | case-insensitive string match |
//!
//! Unparseable input is simply wrong, never an error.

use crate::practice_engine::models::{Answer, Unit};

/// Tolerance for units whose answers are inherently floating-point.
pub const APPROX_EPSILON: f64 = f64::EPSILON * 100.0;

pub fn check_answer(unit: Unit, expected: &Answer, input: &str) -> bool {
    let input = input.trim();
    let expected = match expected {
        Answer::Fraction(canonical) => return input.to_lowercase() == canonical.to_lowercase(),
        Answer::Integer(n) => *n as f64,
        Answer::Decimal(x) => *x,
    };
    let given = match input.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return false,
    };
    if unit.has_approximate_answers() {
        (given - expected).abs() < APPROX_EPSILON
    } else {
        given == expected
    }
}
