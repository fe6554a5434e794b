//! Shared building blocks for the unit generators.
//!
//! Generators that can draw an unusable configuration (a division that leaves
//! a remainder, a parenthesized difference that goes negative, a boundary
//! that makes the answer non-positive) wrap their draw in [`draw_until`]. It
//! retries a bounded number of times; the generator then hands the result to
//! [`or_fallback`], which substitutes a fixed known-good problem if every
//! attempt was rejected. Callers therefore always receive a valid problem.

use log::{debug, warn};
use rand::Rng;

use crate::practice_engine::{
    error::{DrillError, Result},
    expr::Op,
    models::{Answer, Problem, Unit},
    numeric::{Decimal, Fraction},
};

/// Upper bound on draws per problem before falling back.
pub const MAX_ATTEMPTS: u32 = 256;

/// Run `draw` until it returns `Some`, at most [`MAX_ATTEMPTS`] times.
pub fn draw_until<R: Rng, T>(
    rng: &mut R,
    unit: Unit,
    mut draw: impl FnMut(&mut R) -> Option<T>,
) -> Result<T> {
    for attempt in 1..=MAX_ATTEMPTS {
        if let Some(value) = draw(rng) {
            if attempt > 1 {
                debug!("{unit}: accepted draw after {} rejection(s)", attempt - 1);
            }
            return Ok(value);
        }
    }
    Err(DrillError::Exhausted { unit, attempts: MAX_ATTEMPTS })
}

/// Unwrap a [`draw_until`] result, or log and build the fallback problem.
pub fn or_fallback(result: Result<Problem>, fallback: impl FnOnce() -> Problem) -> Problem {
    match result {
        Ok(problem) => problem,
        Err(e) => {
            warn!("{e}; using fallback problem");
            fallback()
        }
    }
}

/// Uniform choice from a non-empty slice.
pub fn pick<R: Rng, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// One of `+ - * /` with equal probability.
pub fn four_ops<R: Rng>(rng: &mut R) -> Op {
    pick(rng, &[Op::Add, Op::Sub, Op::Mul, Op::Div])
}

/// A decimal with 1 or 2 fractional digits (equally likely) in `[0.1, 10]`.
pub fn draw_decimal<R: Rng>(rng: &mut R) -> Decimal {
    let places = rng.gen_range(1..=2u32);
    let scale = 10i64.pow(places);
    Decimal::new(rng.gen_range(scale / 10..=10 * scale), places)
}

/// Divisors of `n` within `range`.
pub fn divisors_in(n: i64, range: std::ops::RangeInclusive<i64>) -> Vec<i64> {
    range.filter(|d| *d != 0 && n % d == 0).collect()
}

/// Canonical fraction-string answer.
pub fn fraction_answer(value: Fraction) -> Answer {
    Answer::Fraction(value.canonical())
}

/// Integer answer when `value` is whole, canonical fraction otherwise.
pub fn whole_or_fraction(value: Fraction) -> Answer {
    if value.is_whole() {
        Answer::Integer(value.numerator())
    } else {
        fraction_answer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice_engine::expr::{Expr, Statement};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn draw_until_retries_until_accepted() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut calls = 0;
        let got = draw_until(&mut rng, Unit::Powers, |_| {
            calls += 1;
            (calls == 5).then_some(calls)
        });
        assert_eq!(got.unwrap(), 5);
    }

    #[test]
    fn draw_until_gives_up_after_bound() {
        let mut rng = StdRng::seed_from_u64(3);
        let got: Result<()> = draw_until(&mut rng, Unit::Inequalities, |_| None);
        match got {
            Err(DrillError::Exhausted { unit, attempts }) => {
                assert_eq!(unit, Unit::Inequalities);
                assert_eq!(attempts, MAX_ATTEMPTS);
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }

    #[test]
    fn or_fallback_substitutes_on_exhaustion() {
        let fallback = || Problem::new(Statement::expr(Expr::Int(1)), Answer::Integer(1));
        let err = Err(DrillError::Exhausted { unit: Unit::Powers, attempts: 1 });
        assert_eq!(or_fallback(err, fallback).answer, Answer::Integer(1));
    }

    #[test]
    fn decimals_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let d = draw_decimal(&mut rng);
            assert!(d.places == 1 || d.places == 2);
            let v = d.to_f64();
            assert!((0.1..=10.0).contains(&v), "{d}");
        }
    }

    #[test]
    fn divisors_in_range() {
        assert_eq!(divisors_in(12, 2..=9), vec![2, 3, 4, 6]);
        assert!(divisors_in(11, 2..=9).is_empty());
        assert!(divisors_in(1, 2..=9).is_empty());
    }

    #[test]
    fn whole_fractions_become_integers() {
        assert_eq!(whole_or_fraction(Fraction::new(6, 3).unwrap()), Answer::Integer(2));
        assert_eq!(whole_or_fraction(Fraction::new(3, 6).unwrap()), Answer::Fraction("1/2".into()));
    }
}
