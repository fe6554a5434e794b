//! Crate-level tests for `math_drill_gen`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical exercise; different seeds → varied output |
//! | Structural | Id prefixes; plain text matches the structured statement; self-check passes |
//! | Clean results | Plain text re-parsed and evaluated equals the answer (OO, MX); no undefined answers |
//! | Selection | Category selectors stay in their category; unit ids parse back |
//! | Localization | Locale changes phrasing only; missing catalogs give placeholders |
//! | Serialization | Answers serialize as a JSON number or string |

use rand::{rngs::StdRng, SeedableRng};

use crate::practice_engine::{
    generate_exercise, generate_exercise_with, generate_problem,
    numeric::{Decimal, Fraction, UNDEFINED},
    Answer, Catalog, Category, DrillError, ProblemRequest, Unit,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Deterministic English request for one unit.
fn req(unit: Unit, seed: u64) -> ProblemRequest {
    ProblemRequest::new(unit).seeded(seed).with_locale("en")
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

/// Evaluate a plain-text arithmetic statement (`+ - * /`, parentheses,
/// integers and decimals) with standard precedence, exactly.
fn eval_plain(text: &str) -> Option<Fraction> {
    let text = text.strip_suffix(" = ?").unwrap_or(text);
    let tokens: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut parser = PlainParser { tokens, pos: 0 };
    let value = parser.sum()?;
    (parser.pos == parser.tokens.len()).then_some(value)
}

struct PlainParser {
    tokens: Vec<char>,
    pos: usize,
}

impl PlainParser {
    fn peek(&self) -> Option<char> {
        self.tokens.get(self.pos).copied()
    }

    fn sum(&mut self) -> Option<Fraction> {
        let mut acc = self.product()?;
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.pos += 1;
            let rhs = self.product()?;
            acc = if op == '+' { acc + rhs } else { acc - rhs };
        }
        Some(acc)
    }

    fn product(&mut self) -> Option<Fraction> {
        let mut acc = self.atom()?;
        while let Some(op @ ('*' | '/')) = self.peek() {
            self.pos += 1;
            let rhs = self.atom()?;
            acc = if op == '*' { acc * rhs } else { acc.checked_div(rhs)? };
        }
        Some(acc)
    }

    fn atom(&mut self) -> Option<Fraction> {
        if self.peek() == Some('(') {
            self.pos += 1;
            let inner = self.sum()?;
            if self.peek() != Some(')') {
                return None;
            }
            self.pos += 1;
            return Some(inner);
        }
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.pos += 1;
        }
        let literal: String = self.tokens[start..self.pos].iter().collect();
        match literal.split_once('.') {
            Some((int, frac)) => {
                let scaled: i64 = format!("{int}{frac}").parse().ok()?;
                Some(Decimal::new(scaled, frac.len() as u32).to_fraction())
            }
            None => Some(Fraction::whole(literal.parse().ok()?)),
        }
    }
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_exercise() {
    for unit in Unit::ALL {
        let a = generate_exercise(req(unit, 12345));
        let b = generate_exercise(req(unit, 12345));
        assert_eq!(a, b, "exercise mismatch for {unit:?}");
    }
}

#[test]
fn different_seeds_produce_varied_problems() {
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = generate_exercise(req(Unit::AdditionSubtraction, seed));
        let b = generate_exercise(req(Unit::AdditionSubtraction, seed + 500));
        if a.problem.display_text == b.problem.display_text {
            same_count += 1;
        }
    }
    assert!(
        same_count < pairs as usize / 4,
        "Too many identical problems across different seeds ({same_count}/{pairs})"
    );
}

#[test]
fn entropy_seed_produces_a_valid_exercise() {
    let e = generate_exercise(ProblemRequest::new(Unit::OrderOfOperations));
    assert!(e.exercise_id.starts_with("OO-"));
    assert!(!e.problem.display_text.is_empty());
    assert!(e.check(&e.problem.answer.to_string()));
}

// ── structural invariants ─────────────────────────────────────────────────────

#[test]
fn every_exercise_id_starts_with_unit_prefix() {
    for unit in Unit::ALL {
        let e = generate_exercise(req(unit, 1));
        let (prefix, hex) = e.exercise_id.split_once('-').unwrap();
        assert_eq!(prefix, unit.prefix(), "{}", e.exercise_id);
        assert_eq!(hex.len(), 8);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()), "{}", e.exercise_id);
    }
}

#[test]
fn display_text_matches_structured_statement() {
    for unit in Unit::ALL {
        for seed in SEEDS {
            let p = generate_exercise(req(unit, seed)).problem;
            assert_eq!(p.display_text, p.typeset.to_plain(), "{unit:?} seed={seed}");
            assert!(!p.typeset.to_latex().is_empty());
        }
    }
}

#[test]
fn revealed_answer_passes_its_own_check() {
    for unit in Unit::ALL {
        for seed in 0..40 {
            let e = generate_exercise(req(unit, seed));
            let shown = e.problem.answer.to_string();
            assert!(e.check(&shown), "{unit:?} seed={seed}: '{shown}' rejected for {}", e.problem.display_text);
        }
    }
}

#[test]
fn no_unit_produces_an_undefined_answer() {
    let lang = Catalog::builtin().localizer("en");
    let mut rng = StdRng::seed_from_u64(2024);
    for unit in Unit::ALL {
        for _ in 0..200 {
            let p = generate_problem(unit, &mut rng, &lang);
            assert_ne!(p.answer, Answer::Fraction(UNDEFINED.to_string()), "{unit:?}: {}", p.display_text);
        }
    }
}

// ── clean results ─────────────────────────────────────────────────────────────

#[test]
fn order_of_operations_text_evaluates_to_integer_answer() {
    for seed in 0..500 {
        let p = generate_exercise(req(Unit::OrderOfOperations, seed)).problem;
        let Answer::Integer(n) = p.answer else { panic!("non-integer answer for {}", p.display_text) };
        let value = eval_plain(&p.display_text).unwrap();
        assert!(value.is_whole(), "{} = {value}", p.display_text);
        assert_eq!(value, Fraction::whole(n), "{}", p.display_text);
    }
}

#[test]
fn mixed_operations_text_evaluates_to_answer() {
    for seed in 0..500 {
        let p = generate_exercise(req(Unit::MixedOperations, seed)).problem;
        let value = eval_plain(&p.display_text).unwrap();
        match &p.answer {
            Answer::Integer(n) => assert_eq!(value, Fraction::whole(*n), "{}", p.display_text),
            Answer::Fraction(s) => assert_eq!(&value.canonical(), s, "{}", p.display_text),
            Answer::Decimal(x) => assert_eq!(value.to_f64(), *x, "{}", p.display_text),
        }
    }
}

#[test]
fn fraction_operation_text_evaluates_to_answer() {
    for seed in 0..200 {
        let p = generate_exercise(req(Unit::FractionsOperations, seed)).problem;
        let Answer::Fraction(s) = &p.answer else { panic!("non-fraction answer") };
        assert_eq!(&eval_plain(&p.display_text).unwrap().canonical(), s, "{}", p.display_text);
    }
}

#[test]
fn subtraction_never_goes_negative() {
    for seed in 0..300 {
        let p = generate_exercise(req(Unit::AdditionSubtraction, seed)).problem;
        let Answer::Integer(n) = p.answer else { panic!("non-integer answer") };
        assert!(n >= 0, "{}", p.display_text);
        assert_eq!(eval_plain(&p.display_text), Some(Fraction::whole(n)));
    }
}

#[test]
fn plain_parser_follows_precedence() {
    assert_eq!(eval_plain("2 + 3 * 4"), Some(Fraction::whole(14)));
    assert_eq!(eval_plain("(2 + 3) * 4 = ?"), Some(Fraction::whole(20)));
    assert_eq!(eval_plain("8 / 4 / 2"), Some(Fraction::whole(1)));
    assert_eq!(eval_plain("0.5 + 1.25"), Some(Fraction::new(7, 4).unwrap()));
    assert_eq!(eval_plain("(1 + 2"), None);
}

// ── selection ─────────────────────────────────────────────────────────────────

#[test]
fn category_selector_stays_in_category() {
    for category in [Category::Arithmetic, Category::Algebra] {
        let mut seen = std::collections::HashSet::new();
        for seed in 0..200 {
            let e = generate_exercise(ProblemRequest::new(category).seeded(seed));
            assert_eq!(e.unit.category(), category, "{:?}", e.unit);
            seen.insert(e.unit);
        }
        assert_eq!(seen.len(), Unit::in_category(category).count(), "{category:?}: {seen:?}");
    }
}

#[test]
fn unit_ids_parse_back() {
    for unit in Unit::ALL {
        assert_eq!(unit.id().parse::<Unit>().unwrap(), unit);
    }
    match "geometry".parse::<Unit>() {
        Err(DrillError::UnknownUnit(id)) => assert_eq!(id, "geometry"),
        other => panic!("expected UnknownUnit, got {other:?}"),
    }
}

#[test]
fn categories_match_the_unit_table() {
    assert_eq!(Unit::in_category(Category::Arithmetic).count(), 7);
    assert_eq!(Unit::in_category(Category::Algebra).count(), 5);
    assert_eq!(Unit::Inequalities.category(), Category::Algebra);
    assert_eq!(Unit::MixedOperations.category(), Category::Arithmetic);
}

// ── localization ──────────────────────────────────────────────────────────────

#[test]
fn locale_changes_phrasing_but_not_the_problem() {
    for unit in [Unit::VariablesExpressions, Unit::Inequalities, Unit::FractionsDecimals] {
        for seed in SEEDS {
            let en = generate_exercise(req(unit, seed));
            let id = generate_exercise(req(unit, seed).with_locale("id"));
            assert_eq!(en.exercise_id, id.exercise_id);
            assert_eq!(en.problem.answer, id.problem.answer, "{unit:?} seed={seed}");
            assert_eq!(en.problem.typeset.lhs, id.problem.typeset.lhs);
            assert_ne!(en.problem.display_text, id.problem.display_text, "{unit:?} seed={seed}");
        }
    }
}

#[test]
fn missing_catalog_yields_placeholders_not_failures() {
    let empty = Catalog::default();
    let e = generate_exercise_with(req(Unit::VariablesExpressions, 3), &empty);
    assert!(e.problem.display_text.contains("[ifX]"), "{}", e.problem.display_text);

    let e = generate_exercise_with(req(Unit::Inequalities, 3), &empty);
    assert!(e.problem.display_text.contains("[give]"), "{}", e.problem.display_text);
    assert!(e.problem.display_text.contains("[satisfies]"), "{}", e.problem.display_text);
}

#[test]
fn loaded_catalog_is_used_for_phrasing() {
    let catalog = Catalog::from_json(r#"{ "en": { "ifX": "when x =" } }"#).unwrap();
    let e = generate_exercise_with(req(Unit::VariablesExpressions, 9), &catalog);
    assert!(e.problem.display_text.contains(" when x = "), "{}", e.problem.display_text);
}

// ── serialization ─────────────────────────────────────────────────────────────

#[test]
fn answers_serialize_as_number_or_string() {
    assert_eq!(serde_json::to_value(Answer::Integer(27)).unwrap(), serde_json::json!(27));
    assert_eq!(serde_json::to_value(Answer::Decimal(0.875)).unwrap(), serde_json::json!(0.875));
    assert_eq!(serde_json::to_value(Answer::Fraction("3/4".into())).unwrap(), serde_json::json!("3/4"));
}

#[test]
fn exercise_round_trips_through_json() {
    let e = generate_exercise(req(Unit::FractionsOperations, 77));
    let json = serde_json::to_string(&e).unwrap();
    let back: crate::practice_engine::Exercise = serde_json::from_str(&json).unwrap();
    assert_eq!(back, e);
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["unit"], "fractionsOperations");
}
