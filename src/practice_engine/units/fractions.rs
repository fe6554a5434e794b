//! Fraction and decimal units: conversions, fraction operations, decimal
//! operations.
//!
//! ## Units in this file
//!
//! - **FD Fractions & Decimals** — fraction → decimal over denominators that
//!   always terminate, or a 1–2 digit decimal → reduced fraction. The
//!   "(decimal)" / "(fraction)" hint is localized.
//! - **FO Fraction Operations** — `n1/d1 op n2/d2` with n ∈ [1, 9],
//!   d ∈ [2, 10]; the answer is the reduced fraction string.
//! - **DO Decimal Operations** — two decimals in [0.1, 10] with 1–2 digits;
//!   the answer is rounded to 4 fractional digits.

use rand::Rng;

use crate::practice_engine::{
    expr::{ClauseJoin, Expr, Op, Statement},
    helpers::{draw_decimal, four_ops, fraction_answer, pick},
    localization::{Localizer, MessageKey},
    models::{Answer, Problem},
    numeric::{decimal_to_fraction, round_to, Decimal, UNDEFINED},
};

/// Denominators whose every proper fraction has a terminating decimal.
pub const TERMINATING_DENOMINATORS: [i64; 14] = [2, 4, 5, 8, 10, 16, 20, 25, 32, 40, 50, 64, 80, 100];

/// Decimal answers are rounded to this many fractional digits.
pub const DECIMAL_ANSWER_PLACES: u32 = 4;

fn undefined() -> Answer {
    Answer::Fraction(UNDEFINED.to_string())
}

// ═══════════════════════════════════════════════════════════════════════════════
// FD — Fractions & Decimals
// ═══════════════════════════════════════════════════════════════════════════════

pub fn generate_fractions_decimals<R: Rng>(rng: &mut R, lang: &Localizer<'_>) -> Problem {
    if rng.gen_bool(0.5) {
        let den = pick(rng, &TERMINATING_DENOMINATORS);
        let num = rng.gen_range(1..den);
        fraction_to_decimal(num, den, lang)
    } else {
        let places = if rng.gen_bool(0.5) { 1 } else { 2 };
        let scaled = rng.gen_range(1..10i64.pow(places));
        decimal_to_fraction_problem(Decimal::new(scaled, places), lang)
    }
}

/// `num/den = ? (decimal)`
pub fn fraction_to_decimal(num: i64, den: i64, lang: &Localizer<'_>) -> Problem {
    let statement = Statement::asking(Expr::Frac(num, den))
        .with_clause(ClauseJoin::Space, format!("({})", lang.get(MessageKey::Decimal)), None);
    let answer = if den == 0 {
        undefined()
    } else {
        Answer::Decimal(num as f64 / den as f64)
    };
    Problem::new(statement, answer)
}

/// `0.25 = ? (fraction)`
pub fn decimal_to_fraction_problem(value: Decimal, lang: &Localizer<'_>) -> Problem {
    let statement = Statement::asking(Expr::Dec(value))
        .with_clause(ClauseJoin::Space, format!("({})", lang.get(MessageKey::Fraction)), None);
    Problem::new(statement, Answer::Fraction(decimal_to_fraction(value.to_f64())))
}

// ═══════════════════════════════════════════════════════════════════════════════
// FO — Fraction Operations
// ═══════════════════════════════════════════════════════════════════════════════

pub fn generate_fraction_operations<R: Rng>(rng: &mut R) -> Problem {
    let num1 = rng.gen_range(1..=9);
    let den1 = rng.gen_range(2..=10);
    let num2 = rng.gen_range(1..=9);
    let den2 = rng.gen_range(2..=10);
    let op = four_ops(rng);
    fraction_operation(num1, den1, op, num2, den2)
}

/// `num1/den1 op num2/den2 = ?`, answered as a reduced fraction string.
pub fn fraction_operation(num1: i64, den1: i64, op: Op, num2: i64, den2: i64) -> Problem {
    let expr = Expr::bin(op, Expr::Frac(num1, den1), Expr::Frac(num2, den2));
    let answer = match expr.eval(None) {
        Some(value) => fraction_answer(value),
        None => undefined(),
    };
    Problem::new(Statement::asking(expr), answer)
}

// ═══════════════════════════════════════════════════════════════════════════════
// DO — Decimal Operations
// ═══════════════════════════════════════════════════════════════════════════════

pub fn generate_decimal_operations<R: Rng>(rng: &mut R) -> Problem {
    let lhs = draw_decimal(rng);
    let rhs = draw_decimal(rng);
    let op = four_ops(rng);
    decimal_operation(lhs, op, rhs)
}

/// `lhs op rhs = ?`, computed exactly and rounded to 4 digits.
pub fn decimal_operation(lhs: Decimal, op: Op, rhs: Decimal) -> Problem {
    let expr = Expr::bin(op, Expr::Dec(lhs), Expr::Dec(rhs));
    let answer = match expr.eval(None) {
        Some(value) => Answer::Decimal(round_to(value.to_f64(), DECIMAL_ANSWER_PLACES)),
        None => undefined(),
    };
    Problem::new(Statement::asking(expr), answer)
}
