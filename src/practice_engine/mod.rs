//! Core practice engine — problem generation, exact numerics and answer checking.
//!
//! ## Module overview
//!
//! | Module         | Purpose |
//! |----------------|---------|
//! | `models`       | Shared types: units, requests, problems, answers, exercises |
//! | `numeric`      | GCD, canonical fraction strings, `Fraction`, `Decimal`, rounding |
//! | `expr`         | Structured statements with plain, LaTeX and exact-value views |
//! | `localization` | Message catalog and the locale-bound `Localizer` |
//! | `helpers`      | Bounded rejection sampling and small drawing helpers |
//! | `generator`    | Entry points `generate_exercise()` / `generate_problem()` |
//! | `checker`      | Answer-equality policy |
//! | `view`         | JSON payload for the exercise page |
//! | `units`        | The twelve unit generators, grouped by number kind |

pub mod checker;
pub mod error;
pub mod expr;
pub mod generator;
pub mod helpers;
pub mod localization;
pub mod models;
pub mod numeric;
pub mod units;
pub mod view;

pub use checker::check_answer;
pub use error::{DrillError, Result};
pub use expr::{Expr, Relation, Statement};
pub use generator::{generate_exercise, generate_exercise_with, generate_problem};
pub use localization::{Catalog, Localizer, MessageKey, DEFAULT_LOCALE};
pub use models::{
    Answer, Category, Exercise, MathDisplay, Problem, ProblemRequest, Unit, UnitSelector,
};
pub use numeric::{decimal_to_fraction, gcd, simplify_fraction, Fraction};
pub use view::exercise_payload;
