use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::practice_engine::{
    checker::check_answer,
    error::DrillError,
    expr::Statement,
    localization::DEFAULT_LOCALE,
};

// ---------------------------------------------------------------------------
// Units and categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Arithmetic,
    Algebra,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Arithmetic => write!(f, "arithmetic"),
            Category::Algebra    => write!(f, "algebra"),
        }
    }
}

/// One problem family. Each variant is bound to exactly one generator in
/// `units::*` and dispatched by `generator::generate_exercise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Unit {
    AdditionSubtraction,
    MultiplicationDivision,
    FractionsDecimals,
    FractionsOperations,
    DecimalOperations,
    OrderOfOperations,
    MixedOperations,
    VariablesExpressions,
    LinearEquations,
    Inequalities,
    Powers,
    AlgebraicOperations,
}

impl Unit {
    /// Every unit in display order (arithmetic first, then algebra).
    pub const ALL: [Unit; 12] = [
        Unit::AdditionSubtraction,
        Unit::MultiplicationDivision,
        Unit::FractionsDecimals,
        Unit::FractionsOperations,
        Unit::DecimalOperations,
        Unit::OrderOfOperations,
        Unit::MixedOperations,
        Unit::VariablesExpressions,
        Unit::LinearEquations,
        Unit::Inequalities,
        Unit::Powers,
        Unit::AlgebraicOperations,
    ];

    /// Stable identifier the display layer binds its unit table to.
    pub fn id(self) -> &'static str {
        match self {
            Unit::AdditionSubtraction    => "additionSubtraction",
            Unit::MultiplicationDivision => "multiplicationDivision",
            Unit::FractionsDecimals      => "fractionsDecimals",
            Unit::FractionsOperations    => "fractionsOperations",
            Unit::DecimalOperations      => "decimalOperations",
            Unit::OrderOfOperations      => "orderOfOperations",
            Unit::MixedOperations        => "mixedOperations",
            Unit::VariablesExpressions   => "variablesExpressions",
            Unit::LinearEquations        => "linearEquations",
            Unit::Inequalities           => "inequalities",
            Unit::Powers                 => "powers",
            Unit::AlgebraicOperations    => "algebraicOperations",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Unit::AdditionSubtraction
            | Unit::MultiplicationDivision
            | Unit::FractionsDecimals
            | Unit::FractionsOperations
            | Unit::DecimalOperations
            | Unit::OrderOfOperations
            | Unit::MixedOperations => Category::Arithmetic,
            Unit::VariablesExpressions
            | Unit::LinearEquations
            | Unit::Inequalities
            | Unit::Powers
            | Unit::AlgebraicOperations => Category::Algebra,
        }
    }

    /// Two-letter prefix of exercise ids.
    pub fn prefix(self) -> &'static str {
        match self {
            Unit::AdditionSubtraction    => "AS",
            Unit::MultiplicationDivision => "MD",
            Unit::FractionsDecimals      => "FD",
            Unit::FractionsOperations    => "FO",
            Unit::DecimalOperations      => "DO",
            Unit::OrderOfOperations      => "OO",
            Unit::MixedOperations        => "MX",
            Unit::VariablesExpressions   => "VE",
            Unit::LinearEquations        => "LE",
            Unit::Inequalities           => "IQ",
            Unit::Powers                 => "PW",
            Unit::AlgebraicOperations    => "AO",
        }
    }

    /// Units whose numeric answers are compared with a tolerance.
    pub fn has_approximate_answers(self) -> bool {
        matches!(self, Unit::FractionsDecimals | Unit::DecimalOperations)
    }

    pub fn in_category(category: Category) -> impl Iterator<Item = Unit> {
        Unit::ALL.into_iter().filter(move |u| u.category() == category)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Unit::AdditionSubtraction    => "Addition & Subtraction",
            Unit::MultiplicationDivision => "Multiplication & Division",
            Unit::FractionsDecimals      => "Fractions & Decimals",
            Unit::FractionsOperations    => "Fraction Operations",
            Unit::DecimalOperations      => "Decimal Operations",
            Unit::OrderOfOperations      => "Order of Operations",
            Unit::MixedOperations        => "Mixed Operations",
            Unit::VariablesExpressions   => "Variables & Expressions",
            Unit::LinearEquations        => "Linear Equations",
            Unit::Inequalities           => "Inequalities",
            Unit::Powers                 => "Powers",
            Unit::AlgebraicOperations    => "Algebraic Operations",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Unit {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|u| u.id() == s)
            .ok_or_else(|| DrillError::UnknownUnit(s.to_string()))
    }
}

/// Which unit to draw from: a fixed one, a random one of a category, or any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSelector {
    Unit(Unit),
    Category(Category),
    Any,
}

impl UnitSelector {
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Unit {
        match self {
            UnitSelector::Unit(unit) => unit,
            UnitSelector::Category(category) => {
                let units: Vec<Unit> = Unit::in_category(category).collect();
                units[rng.gen_range(0..units.len())]
            }
            UnitSelector::Any => Unit::ALL[rng.gen_range(0..Unit::ALL.len())],
        }
    }
}

impl From<Unit> for UnitSelector {
    fn from(unit: Unit) -> Self {
        UnitSelector::Unit(unit)
    }
}

impl From<Category> for UnitSelector {
    fn from(category: Category) -> Self {
        UnitSelector::Category(category)
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub selector: UnitSelector,
    /// `Some(seed)` reproduces the exact same exercise; `None` uses entropy.
    pub rng_seed: Option<u64>,
    /// Locale code looked up in the message catalog, e.g. `"en"` or `"id"`.
    pub locale: String,
}

impl ProblemRequest {
    /// Entropy seeding and the default locale.
    pub fn new(selector: impl Into<UnitSelector>) -> Self {
        ProblemRequest {
            selector: selector.into(),
            rng_seed: None,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// The exact answer to a problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Integer(i64),
    Decimal(f64),
    /// Canonical reduced fraction (`"-3/4"`), or `"Undefined"`.
    Fraction(String),
}

impl Answer {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Answer::Integer(n) => Some(*n as f64),
            Answer::Decimal(x) => Some(*x),
            Answer::Fraction(_) => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Integer(n)  => write!(f, "{}", n),
            Answer::Decimal(x)  => write!(f, "{}", x),
            Answer::Fraction(s) => write!(f, "{}", s),
        }
    }
}

/// One generated problem. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Plain-text statement with ASCII operators.
    pub display_text: String,
    /// Structured statement for a math typesetter.
    pub typeset: Statement,
    pub answer: Answer,
}

impl Problem {
    pub fn new(typeset: Statement, answer: Answer) -> Self {
        Problem {
            display_text: typeset.to_plain(),
            typeset,
            answer,
        }
    }
}

/// A problem tagged with the unit it came from and a stable id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// `"{PREFIX}-{8 hex digits}"`, reproducible for a seeded request.
    pub exercise_id: String,
    pub unit: Unit,
    pub problem: Problem,
}

impl Exercise {
    /// Compare a user's raw input against this exercise's answer.
    pub fn check(&self, input: &str) -> bool {
        check_answer(self.unit, &self.problem.answer, input)
    }
}

/// Math display toggle of the exercise page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MathDisplay {
    Typeset,
    PlainText,
}

impl fmt::Display for MathDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathDisplay::Typeset   => write!(f, "typeset"),
            MathDisplay::PlainText => write!(f, "plainText"),
        }
    }
}
