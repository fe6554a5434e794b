//! MX — Mixed Operations: integers, fractions and decimals in one expression.
//!
//! Four templates. Every one with a division step checks that the division
//! comes out clean before the draw is accepted, and the whole problem is
//! redrawn otherwise. Intermediate values are exact [`Fraction`]s, reduced
//! after every operation.
//!
//! [`Fraction`]: crate::practice_engine::numeric::Fraction

use rand::Rng;

use crate::practice_engine::{
    expr::{Expr, Op, Statement},
    helpers::{draw_until, or_fallback, whole_or_fraction},
    models::{Answer, Problem, Unit},
    numeric::Decimal,
};

/// The operands of one mixed-operations template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixedDraw {
    /// `n * p/q + m`
    ScaledFraction { n: i64, p: i64, q: i64, m: i64 },
    /// `p/q / r/s + n`; the quotient must be whole.
    FractionQuotient { p: i64, q: i64, r: i64, s: i64, n: i64 },
    /// `x / k + y`; `x` must split into `k` equal parts at its own precision.
    DecimalQuotient { x: Decimal, k: i64, y: Decimal },
    /// `(a + b / c) * p/q`; `c` must divide `b`.
    GroupedQuotient { a: i64, b: i64, c: i64, p: i64, q: i64 },
}

impl MixedDraw {
    fn random<R: Rng>(rng: &mut R) -> MixedDraw {
        match rng.gen_range(0..4) {
            0 => MixedDraw::ScaledFraction {
                n: rng.gen_range(2..=9),
                p: rng.gen_range(1..=9),
                q: rng.gen_range(2..=9),
                m: rng.gen_range(1..=9),
            },
            1 => MixedDraw::FractionQuotient {
                p: rng.gen_range(1..=9),
                q: rng.gen_range(2..=6),
                r: rng.gen_range(1..=9),
                s: rng.gen_range(2..=6),
                n: rng.gen_range(1..=9),
            },
            2 => MixedDraw::DecimalQuotient {
                x: Decimal::new(rng.gen_range(10..=99), 1),
                k: rng.gen_range(2..=9),
                y: Decimal::new(rng.gen_range(1..=99), 1),
            },
            _ => MixedDraw::GroupedQuotient {
                a: rng.gen_range(1..=9),
                b: rng.gen_range(2..=20),
                c: rng.gen_range(2..=9),
                p: rng.gen_range(1..=9),
                q: rng.gen_range(2..=9),
            },
        }
    }

    fn expr(self) -> Expr {
        match self {
            MixedDraw::ScaledFraction { n, p, q, m } => Expr::bin(
                Op::Add,
                Expr::bin(Op::Mul, Expr::Int(n), Expr::Frac(p, q)),
                Expr::Int(m),
            ),
            MixedDraw::FractionQuotient { p, q, r, s, n } => Expr::bin(
                Op::Add,
                Expr::bin(Op::Div, Expr::Frac(p, q), Expr::Frac(r, s)),
                Expr::Int(n),
            ),
            MixedDraw::DecimalQuotient { x, k, y } => Expr::bin(
                Op::Add,
                Expr::bin(Op::Div, Expr::Dec(x), Expr::Int(k)),
                Expr::Dec(y),
            ),
            MixedDraw::GroupedQuotient { a, b, c, p, q } => Expr::bin(
                Op::Mul,
                Expr::group(Expr::bin(Op::Add, Expr::Int(a), Expr::bin(Op::Div, Expr::Int(b), Expr::Int(c)))),
                Expr::Frac(p, q),
            ),
        }
    }

    /// Does every division in the template come out clean?
    fn divides_cleanly(self) -> bool {
        match self {
            MixedDraw::ScaledFraction { q, .. } => q != 0,
            MixedDraw::FractionQuotient { p, q, r, s, .. } => {
                q != 0 && s != 0 && r != 0 && (p * s) % (q * r) == 0
            }
            MixedDraw::DecimalQuotient { x, k, .. } => k != 0 && x.scaled % k == 0,
            MixedDraw::GroupedQuotient { b, c, q, .. } => c != 0 && q != 0 && b % c == 0,
        }
    }
}

pub fn generate_mixed_operations<R: Rng>(rng: &mut R) -> Problem {
    let result = draw_until(rng, Unit::MixedOperations, |rng| mixed_operation(MixedDraw::random(rng)));
    or_fallback(result, || {
        let draw = MixedDraw::ScaledFraction { n: 3, p: 2, q: 5, m: 4 };
        Problem::new(Statement::asking(draw.expr()), Answer::Fraction("26/5".to_string()))
    })
}

/// `None` when a division in the template would leave a remainder.
pub fn mixed_operation(draw: MixedDraw) -> Option<Problem> {
    if !draw.divides_cleanly() {
        return None;
    }
    let expr = draw.expr();
    let value = expr.eval(None)?;
    let answer = match draw {
        MixedDraw::DecimalQuotient { .. } => Answer::Decimal(value.to_f64()),
        _ => whole_or_fraction(value),
    };
    Some(Problem::new(Statement::asking(expr), answer))
}
