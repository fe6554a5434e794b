//! Structured problem statements.
//!
//! A [`Statement`] is the markup-agnostic form of a problem: the display layer
//! renders it with [`Statement::to_latex`] for a math typesetter, and the
//! plain-text form ([`Statement::to_plain`]) becomes `Problem::display_text`.
//! Both renderings come from the same tree, so they can never disagree.
//!
//! [`Expr::eval`] evaluates a tree exactly over [`Fraction`]s. Generators use
//! it to compute answers from the very expression they display.

use serde::{Deserialize, Serialize};

use crate::practice_engine::numeric::{Decimal, Fraction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    /// Juxtaposition, e.g. `(a + b)(a - b)`.
    Implicit,
}

impl Op {
    fn plain(self) -> &'static str {
        match self {
            Op::Add      => "+",
            Op::Sub      => "-",
            Op::Mul      => "*",
            Op::Div      => "/",
            Op::Implicit => "",
        }
    }

    fn latex(self) -> &'static str {
        match self {
            Op::Add      => "+",
            Op::Sub      => "-",
            Op::Mul      => "\\times",
            Op::Div      => "\\div",
            Op::Implicit => "",
        }
    }

    /// Fraction operands of these operators are parenthesized in plain text.
    fn binds_tightly(self) -> bool {
        matches!(self, Op::Mul | Op::Div | Op::Implicit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Int(i64),
    Dec(Decimal),
    /// Numerator and denominator exactly as drawn (not reduced).
    Frac(i64, i64),
    Var(char),
    /// Coefficient times a variable, e.g. `3x`.
    Term(i64, char),
    /// The `?` placeholder.
    Unknown,
    Bin(Op, Box<Expr>, Box<Expr>),
    Group(Box<Expr>),
    Pow(Box<Expr>, u32),
}

impl Expr {
    pub fn bin(op: Op, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Bin(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn group(inner: Expr) -> Expr {
        Expr::Group(Box::new(inner))
    }

    pub fn pow(base: Expr, exponent: u32) -> Expr {
        Expr::Pow(Box::new(base), exponent)
    }

    /// Plain ASCII rendering (`*`, `/`, `^`).
    pub fn to_plain(&self) -> String {
        self.plain(false)
    }

    fn plain(&self, tight: bool) -> String {
        match self {
            Expr::Int(n) => n.to_string(),
            Expr::Dec(d) => d.to_string(),
            Expr::Frac(n, d) if tight => format!("({n}/{d})"),
            Expr::Frac(n, d) => format!("{n}/{d}"),
            Expr::Var(v) => v.to_string(),
            Expr::Term(1, v) => v.to_string(),
            Expr::Term(c, v) => format!("{c}{v}"),
            Expr::Unknown => "?".to_string(),
            Expr::Bin(Op::Implicit, l, r) => format!("{}{}", l.plain(true), r.plain(true)),
            Expr::Bin(op, l, r) => {
                let tight = op.binds_tightly();
                format!("{} {} {}", l.plain(tight), op.plain(), r.plain(tight))
            }
            Expr::Group(inner) => format!("({})", inner.plain(false)),
            Expr::Pow(base, k) => format!("{}^{k}", base.plain(true)),
        }
    }

    /// LaTeX rendering for KaTeX-style typesetters.
    pub fn to_latex(&self) -> String {
        match self {
            Expr::Int(n) => n.to_string(),
            Expr::Dec(d) => d.to_string(),
            Expr::Frac(n, d) => format!("\\frac{{{n}}}{{{d}}}"),
            Expr::Var(v) => v.to_string(),
            Expr::Term(1, v) => v.to_string(),
            Expr::Term(c, v) => format!("{c}{v}"),
            Expr::Unknown => "?".to_string(),
            Expr::Bin(Op::Implicit, l, r) => format!("{}{}", l.to_latex(), r.to_latex()),
            Expr::Bin(op, l, r) => format!("{} {} {}", l.to_latex(), op.latex(), r.to_latex()),
            Expr::Group(inner) => format!("({})", inner.to_latex()),
            Expr::Pow(base, k) => format!("{}^{{{k}}}", base.to_latex()),
        }
    }

    /// Exact value of the tree, with `x` bound to every variable.
    ///
    /// `None` for division by zero, a zero denominator, an unbound variable,
    /// or the `?` placeholder.
    pub fn eval(&self, x: Option<Fraction>) -> Option<Fraction> {
        match self {
            Expr::Int(n) => Some(Fraction::whole(*n)),
            Expr::Dec(d) => Some(d.to_fraction()),
            Expr::Frac(n, d) => Fraction::new(*n, *d),
            Expr::Var(_) => x,
            Expr::Term(c, _) => x.map(|v| v * Fraction::whole(*c)),
            Expr::Unknown => None,
            Expr::Bin(op, l, r) => {
                let (l, r) = (l.eval(x)?, r.eval(x)?);
                match op {
                    Op::Add => Some(l + r),
                    Op::Sub => Some(l - r),
                    Op::Mul | Op::Implicit => Some(l * r),
                    Op::Div => l.checked_div(r),
                }
            }
            Expr::Group(inner) => inner.eval(x),
            Expr::Pow(base, k) => Some(base.eval(x)?.pow(*k)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    Eq,
    Gt,
    Lt,
}

impl Relation {
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Eq => "=",
            Relation::Gt => ">",
            Relation::Lt => "<",
        }
    }

    /// Does `lhs <rel> rhs` hold?
    pub fn holds(self, lhs: Fraction, rhs: Fraction) -> bool {
        let diff = lhs - rhs;
        match self {
            Relation::Eq => diff.is_zero(),
            Relation::Gt => diff.numerator() > 0,
            Relation::Lt => diff.numerator() < 0,
        }
    }
}

/// How a trailing clause attaches to the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClauseJoin {
    /// `3x + 2 if x = 5`
    Space,
    /// `x + 3 > 9. Give the smallest integer …`
    Sentence,
}

/// Localized prose trailing the math, optionally followed by a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub join: ClauseJoin,
    pub text: String,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub lhs: Expr,
    pub relation: Option<(Relation, Expr)>,
    pub clause: Option<Clause>,
}

impl Statement {
    /// A bare expression, e.g. `12 - 7`.
    pub fn expr(lhs: Expr) -> Self {
        Statement { lhs, relation: None, clause: None }
    }

    /// `lhs = ?`
    pub fn asking(lhs: Expr) -> Self {
        Statement::relation(lhs, Relation::Eq, Expr::Unknown)
    }

    pub fn relation(lhs: Expr, relation: Relation, rhs: Expr) -> Self {
        Statement { lhs, relation: Some((relation, rhs)), clause: None }
    }

    pub fn with_clause(mut self, join: ClauseJoin, text: impl Into<String>, value: Option<Expr>) -> Self {
        self.clause = Some(Clause { join, text: text.into(), value });
        self
    }

    pub fn to_plain(&self) -> String {
        let mut out = self.lhs.to_plain();
        if let Some((rel, rhs)) = &self.relation {
            out.push_str(&format!(" {} {}", rel.symbol(), rhs.to_plain()));
        }
        if let Some(clause) = &self.clause {
            out.push_str(match clause.join {
                ClauseJoin::Space    => " ",
                ClauseJoin::Sentence => ". ",
            });
            out.push_str(&clause.text);
            if let Some(value) = &clause.value {
                out.push(' ');
                out.push_str(&value.to_plain());
            }
        }
        out
    }

    pub fn to_latex(&self) -> String {
        let mut out = self.lhs.to_latex();
        if let Some((rel, rhs)) = &self.relation {
            out.push_str(&format!(" {} {}", rel.symbol(), rhs.to_latex()));
        }
        if let Some(clause) = &self.clause {
            if clause.join == ClauseJoin::Sentence {
                out.push('.');
            }
            out.push_str(&format!(" \\text{{ {} }}", escape_latex_text(&clause.text)));
            if let Some(value) = &clause.value {
                out.push(' ');
                out.push_str(&value.to_latex());
            }
        }
        out
    }
}

/// Escape characters that are special inside `\text{…}`.
fn escape_latex_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '{' | '}' | '$' | '&' | '#' | '%' | '_' => {
                out.push('\\');
                out.push(ch);
            }
            '^' => out.push_str("\\^{}"),
            '~' => out.push_str("\\~{}"),
            _ => out.push(ch),
        }
    }
    out
}
