//! Algebra units: variables & expressions, linear equations, inequalities,
//! powers, algebraic identities.
//!
//! ## Units in this file
//!
//! - **VE Variables & Expressions** — evaluate `c x + k` at a given x; the
//!   connective ("if x =") is localized.
//! - **LE Linear Equations** — `x + b = c` or `a x = c`, built backwards from
//!   the integer solution.
//! - **IQ Inequalities** — `x + A op B` or `A x op B`; the answer is the
//!   smallest (for `>`) or largest (for `<`) integer satisfying it. A `>`
//!   draw whose answer would be non-positive is redrawn.
//! - **PW Powers** — base ∈ [2, 6], exponent ∈ [2, 4].
//! - **AO Algebraic Operations** — `(a+b)²`, `(a−b)²`, `(a+b)(a−b)`.

use rand::Rng;

use crate::practice_engine::{
    expr::{ClauseJoin, Expr, Op, Relation, Statement},
    helpers::{draw_until, or_fallback, pick},
    localization::{Localizer, MessageKey},
    models::{Answer, Problem, Unit},
    numeric::Fraction,
};

// ═══════════════════════════════════════════════════════════════════════════════
// VE — Variables & Expressions
// ═══════════════════════════════════════════════════════════════════════════════

pub fn generate_variables_expressions<R: Rng>(rng: &mut R, lang: &Localizer<'_>) -> Problem {
    let coefficient = rng.gen_range(1..=5);
    let constant = rng.gen_range(1..=10);
    let x_value = rng.gen_range(1..=10);
    variables_expression(coefficient, constant, x_value, lang)
}

/// `{coefficient}x + {constant} {ifX} {x_value}`
pub fn variables_expression(coefficient: i64, constant: i64, x_value: i64, lang: &Localizer<'_>) -> Problem {
    let statement = Statement::expr(Expr::bin(Op::Add, Expr::Term(coefficient, 'x'), Expr::Int(constant)))
        .with_clause(ClauseJoin::Space, lang.get(MessageKey::IfX), Some(Expr::Int(x_value)));
    Problem::new(statement, Answer::Integer(coefficient * x_value + constant))
}

// ═══════════════════════════════════════════════════════════════════════════════
// LE — Linear Equations
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearForm {
    /// `x + b = c`
    Shifted,
    /// `a x = c`
    Scaled,
}

pub fn generate_linear_equations<R: Rng>(rng: &mut R) -> Problem {
    let a = rng.gen_range(1..=5);
    let b = rng.gen_range(1..=10);
    let x = rng.gen_range(1..=10);
    let form = if rng.gen_bool(0.5) { LinearForm::Shifted } else { LinearForm::Scaled };
    linear_equation(form, a, b, x)
}

/// The right-hand side is derived from the solution `x`.
pub fn linear_equation(form: LinearForm, a: i64, b: i64, x: i64) -> Problem {
    let statement = match form {
        LinearForm::Shifted => Statement::relation(
            Expr::bin(Op::Add, Expr::Var('x'), Expr::Int(b)),
            Relation::Eq,
            Expr::Int(x + b),
        ),
        LinearForm::Scaled => Statement::relation(Expr::Term(a, 'x'), Relation::Eq, Expr::Int(a * x)),
    };
    Problem::new(statement, Answer::Integer(x))
}

// ═══════════════════════════════════════════════════════════════════════════════
// IQ — Inequalities
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InequalityForm {
    /// `x + A op B`
    Shifted,
    /// `A x op B`
    Scaled,
}

pub fn generate_inequalities<R: Rng>(rng: &mut R, lang: &Localizer<'_>) -> Problem {
    let result = draw_until(rng, Unit::Inequalities, |rng| {
        let form = if rng.gen_bool(0.5) { InequalityForm::Shifted } else { InequalityForm::Scaled };
        let a = match form {
            InequalityForm::Shifted => rng.gen_range(1..=5),
            InequalityForm::Scaled  => rng.gen_range(2..=5),
        };
        let b = rng.gen_range(5..=19);
        let relation = pick(rng, &[Relation::Gt, Relation::Lt]);
        inequality(form, a, relation, b, lang)
    });
    or_fallback(result, || inequality_problem(InequalityForm::Shifted, 3, Relation::Gt, 9, 7, lang))
}

/// `None` when the relation is not strict, or when a `>` problem's answer
/// would not be positive.
pub fn inequality(form: InequalityForm, a: i64, relation: Relation, b: i64, lang: &Localizer<'_>) -> Option<Problem> {
    let boundary = match form {
        InequalityForm::Shifted => Fraction::whole(b - a),
        InequalityForm::Scaled  => Fraction::new(b, a)?,
    };
    let answer = match relation {
        Relation::Gt => boundary.floor() + 1,
        Relation::Lt => boundary.ceil() - 1,
        Relation::Eq => return None,
    };
    if relation == Relation::Gt && answer <= 0 {
        return None;
    }
    Some(inequality_problem(form, a, relation, b, answer, lang))
}

fn inequality_problem(
    form: InequalityForm, a: i64, relation: Relation, b: i64,
    answer: i64, lang: &Localizer<'_>,
) -> Problem {
    let lhs = match form {
        InequalityForm::Shifted => Expr::bin(Op::Add, Expr::Var('x'), Expr::Int(a)),
        InequalityForm::Scaled  => Expr::Term(a, 'x'),
    };
    let extreme = match relation {
        Relation::Gt => MessageKey::SmallestInteger,
        _            => MessageKey::LargestInteger,
    };
    let prompt = format!(
        "{} {} {}",
        lang.get(MessageKey::Give),
        lang.get(extreme),
        lang.get(MessageKey::Satisfies)
    );
    let statement = Statement::relation(lhs, relation, Expr::Int(b)).with_clause(ClauseJoin::Sentence, prompt, None);
    Problem::new(statement, Answer::Integer(answer))
}

// ═══════════════════════════════════════════════════════════════════════════════
// PW — Powers
// ═══════════════════════════════════════════════════════════════════════════════

pub fn generate_powers<R: Rng>(rng: &mut R) -> Problem {
    let base = rng.gen_range(2..=6);
    let exponent = rng.gen_range(2..=4);
    powers(base, exponent)
}

/// `{base}^{exponent} = ?`
pub fn powers(base: i64, exponent: u32) -> Problem {
    Problem::new(
        Statement::asking(Expr::pow(Expr::Int(base), exponent)),
        Answer::Integer(base.pow(exponent)),
    )
}

// ═══════════════════════════════════════════════════════════════════════════════
// AO — Algebraic Operations
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityForm {
    /// `(a + b)^2`
    SquareOfSum,
    /// `(a - b)^2`
    SquareOfDifference,
    /// `(a + b)(a - b)`
    DifferenceOfSquares,
}

pub fn generate_algebraic_operations<R: Rng>(rng: &mut R) -> Problem {
    let a = rng.gen_range(1..=10);
    let b = rng.gen_range(1..=10);
    let form = pick(
        rng,
        &[IdentityForm::SquareOfSum, IdentityForm::SquareOfDifference, IdentityForm::DifferenceOfSquares],
    );
    algebraic_identity(form, a, b)
}

pub fn algebraic_identity(form: IdentityForm, a: i64, b: i64) -> Problem {
    let sum = || Expr::group(Expr::bin(Op::Add, Expr::Int(a), Expr::Int(b)));
    let difference = || Expr::group(Expr::bin(Op::Sub, Expr::Int(a), Expr::Int(b)));
    let (expr, answer) = match form {
        IdentityForm::SquareOfSum         => (Expr::pow(sum(), 2), (a + b) * (a + b)),
        IdentityForm::SquareOfDifference  => (Expr::pow(difference(), 2), (a - b) * (a - b)),
        IdentityForm::DifferenceOfSquares => (Expr::bin(Op::Implicit, sum(), difference()), (a + b) * (a - b)),
    };
    Problem::new(Statement::asking(expr), Answer::Integer(answer))
}
