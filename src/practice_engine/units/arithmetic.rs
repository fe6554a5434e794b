//! Whole-number arithmetic units: addition/subtraction,
//! multiplication/division, order of operations.
//!
//! ## Units in this file
//!
//! - **AS Addition & Subtraction** — two integers in [1, 100]; subtraction is
//!   always written larger-minus-smaller.
//! - **MD Multiplication & Division** — factors in [1, 12] × [2, 13];
//!   division is built backwards from the quotient, so it is always exact.
//! - **OO Order of Operations** — five templates over operands in [1, 9].
//!   Templates with a parenthesized difference reject draws that would go
//!   non-positive; templates with a division search the divisor space of the
//!   dividend before giving up on the draw.

use log::debug;
use rand::Rng;

use crate::practice_engine::{
    expr::{Expr, Op, Statement},
    helpers::{divisors_in, draw_until, or_fallback, pick},
    models::{Answer, Problem, Unit},
};

// ═══════════════════════════════════════════════════════════════════════════════
// AS — Addition & Subtraction
// ═══════════════════════════════════════════════════════════════════════════════

pub fn generate_addition_subtraction<R: Rng>(rng: &mut R) -> Problem {
    let num1 = rng.gen_range(1..=100);
    let num2 = rng.gen_range(1..=100);
    let op = if rng.gen_bool(0.5) { Op::Add } else { Op::Sub };
    addition_subtraction(num1, num2, op)
}

/// `op` is `Op::Sub` for a difference; anything else is a sum.
pub fn addition_subtraction(num1: i64, num2: i64, op: Op) -> Problem {
    let (expr, answer) = match op {
        Op::Sub => {
            let (big, small) = if num1 < num2 { (num2, num1) } else { (num1, num2) };
            (Expr::bin(Op::Sub, Expr::Int(big), Expr::Int(small)), big - small)
        }
        _ => (Expr::bin(Op::Add, Expr::Int(num1), Expr::Int(num2)), num1 + num2),
    };
    Problem::new(Statement::expr(expr), Answer::Integer(answer))
}

// ═══════════════════════════════════════════════════════════════════════════════
// MD — Multiplication & Division
// ═══════════════════════════════════════════════════════════════════════════════

pub fn generate_multiplication_division<R: Rng>(rng: &mut R) -> Problem {
    let num1 = rng.gen_range(1..=12);
    let num2 = rng.gen_range(2..=13);
    let op = if rng.gen_bool(0.5) { Op::Mul } else { Op::Div };
    multiplication_division(num1, num2, op)
}

/// `op` is `Op::Div` for `(num1*num2) / num2`; anything else is `num1 * num2`.
pub fn multiplication_division(num1: i64, num2: i64, op: Op) -> Problem {
    let (expr, answer) = match op {
        Op::Div => (Expr::bin(Op::Div, Expr::Int(num1 * num2), Expr::Int(num2)), num1),
        _ => (Expr::bin(Op::Mul, Expr::Int(num1), Expr::Int(num2)), num1 * num2),
    };
    Problem::new(Statement::expr(expr), Answer::Integer(answer))
}

// ═══════════════════════════════════════════════════════════════════════════════
// OO — Order of Operations
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderTemplate {
    /// `(a + b) * c - d`
    SumThenScale,
    /// `a + b * (c - d)`, needs `c > d`
    ScaleThenDifference,
    /// `a * b / c + d`, needs `c | a*b`
    ProductThenQuotient,
    /// `d + (a + b) / c`, needs `c | a+b`
    SumThenQuotient,
    /// `(a + b) * (c - d)`, needs `c > d`
    GroupedProduct,
}

impl OrderTemplate {
    pub const ALL: [OrderTemplate; 5] = [
        OrderTemplate::SumThenScale,
        OrderTemplate::ScaleThenDifference,
        OrderTemplate::ProductThenQuotient,
        OrderTemplate::SumThenQuotient,
        OrderTemplate::GroupedProduct,
    ];

    fn expr(self, a: i64, b: i64, c: i64, d: i64) -> Expr {
        let int = Expr::Int;
        match self {
            OrderTemplate::SumThenScale => Expr::bin(
                Op::Sub,
                Expr::bin(Op::Mul, Expr::group(Expr::bin(Op::Add, int(a), int(b))), int(c)),
                int(d),
            ),
            OrderTemplate::ScaleThenDifference => Expr::bin(
                Op::Add,
                int(a),
                Expr::bin(Op::Mul, int(b), Expr::group(Expr::bin(Op::Sub, int(c), int(d)))),
            ),
            OrderTemplate::ProductThenQuotient => Expr::bin(
                Op::Add,
                Expr::bin(Op::Div, Expr::bin(Op::Mul, int(a), int(b)), int(c)),
                int(d),
            ),
            OrderTemplate::SumThenQuotient => Expr::bin(
                Op::Add,
                int(d),
                Expr::bin(Op::Div, Expr::group(Expr::bin(Op::Add, int(a), int(b))), int(c)),
            ),
            OrderTemplate::GroupedProduct => Expr::bin(
                Op::Mul,
                Expr::group(Expr::bin(Op::Add, int(a), int(b))),
                Expr::group(Expr::bin(Op::Sub, int(c), int(d))),
            ),
        }
    }

    /// The dividend of the template's division step, if it has one.
    fn dividend(self, a: i64, b: i64) -> Option<i64> {
        match self {
            OrderTemplate::ProductThenQuotient => Some(a * b),
            OrderTemplate::SumThenQuotient     => Some(a + b),
            _ => None,
        }
    }
}

pub fn generate_order_of_operations<R: Rng>(rng: &mut R) -> Problem {
    let result = draw_until(rng, Unit::OrderOfOperations, |rng| {
        let template = pick(rng, &OrderTemplate::ALL);
        let a = rng.gen_range(1..=9);
        let b = rng.gen_range(1..=9);
        let mut c = rng.gen_range(1..=9);
        let d = rng.gen_range(1..=9);
        if let Some(dividend) = template.dividend(a, b) {
            c = exact_divisor(rng, dividend, c)?;
        }
        order_of_operations(template, a, b, c, d)
    });
    or_fallback(result, || {
        Problem::new(
            Statement::expr(OrderTemplate::SumThenScale.expr(2, 3, 4, 5)),
            Answer::Integer(15),
        )
    })
}

/// Keep `candidate` if it divides `dividend`, otherwise pick another divisor
/// in [2, 9]. `None` when the dividend has no such divisor.
fn exact_divisor<R: Rng>(rng: &mut R, dividend: i64, candidate: i64) -> Option<i64> {
    if candidate >= 2 && dividend % candidate == 0 {
        return Some(candidate);
    }
    let divisors = divisors_in(dividend, 2..=9);
    if divisors.is_empty() {
        debug!("order of operations: {dividend} has no divisor in [2, 9]");
        return None;
    }
    Some(pick(rng, &divisors))
}

/// Build one template from fixed operands; `None` if the operands break the
/// template's whole-number contract.
pub fn order_of_operations(template: OrderTemplate, a: i64, b: i64, c: i64, d: i64) -> Option<Problem> {
    let needs_positive_difference = matches!(
        template,
        OrderTemplate::ScaleThenDifference | OrderTemplate::GroupedProduct
    );
    if needs_positive_difference && c <= d {
        return None;
    }
    if let Some(dividend) = template.dividend(a, b) {
        if c == 0 || dividend % c != 0 {
            return None;
        }
    }
    let expr = template.expr(a, b, c, d);
    let value = expr.eval(None)?;
    if !value.is_whole() {
        return None;
    }
    Some(Problem::new(Statement::expr(expr), Answer::Integer(value.numerator())))
}
