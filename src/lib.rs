//! # math_drill_gen
//!
//! An offline, deterministic generator of arithmetic and algebra practice
//! problems.
//!
//! Twelve units cover whole-number arithmetic, fractions and decimals, order
//! of operations, mixed operations, expressions, linear equations,
//! inequalities, powers and algebraic identities. Every generated problem is
//! *clean*: divisions are exact, fraction answers are fully reduced, decimal
//! answers terminate, and inequality answers are well defined. Draws that
//! would break this are redrawn internally; the caller only ever sees a valid
//! problem.
//!
//! ## How it works
//!
//! 1. Create a [`ProblemRequest`] with a unit (or a category, or any unit),
//!    an optional RNG seed, and a locale.
//! 2. Call [`generate_exercise`] — the engine picks the unit, draws operands,
//!    rejects unclean draws, and builds the statement and its exact answer.
//! 3. The returned [`Exercise`] carries a plain-text statement, a structured
//!    statement for a math typesetter, and the answer. Check user input with
//!    [`Exercise::check`].
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{generate_exercise, Category, ProblemRequest, Unit};
//!
//! // Minimal — entropy seed, default locale:
//! let exercise = generate_exercise(ProblemRequest::new(Unit::FractionsOperations));
//! println!("{}", exercise.problem.display_text);
//!
//! // Reproducible, English phrasing:
//! let exercise = generate_exercise(
//!     ProblemRequest::new(Unit::Inequalities).seeded(42).with_locale("en"),
//! );
//! println!("{} → {}", exercise.problem.display_text, exercise.problem.answer);
//! println!("LaTeX: {}", exercise.problem.typeset.to_latex());
//! assert!(exercise.check(&exercise.problem.answer.to_string()));
//!
//! // Random algebra unit:
//! let exercise = generate_exercise(ProblemRequest::new(Category::Algebra));
//! println!("{}: {}", exercise.unit, exercise.problem.display_text);
//! ```

pub mod practice_engine;

// Convenience re-exports so callers can use `math_drill_gen::generate_exercise`
// directly without reaching into `practice_engine::`.
pub use practice_engine::{
    check_answer, decimal_to_fraction, exercise_payload, gcd, generate_exercise,
    generate_exercise_with, generate_problem, simplify_fraction, Answer, Catalog, Category,
    DrillError, Exercise, Expr, Fraction, Localizer, MathDisplay, MessageKey, Problem,
    ProblemRequest, Relation, Statement, Unit, UnitSelector, DEFAULT_LOCALE,
};

#[cfg(test)]
mod tests;
