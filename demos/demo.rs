//! Tour of all twelve practice units.
//!
//! Run with: `cargo run --example demo`
//! (set `RUST_LOG=debug` to watch rejected draws being redrawn)
//!
//! 1. **Locale comparison** — the same inequality (same seed = same numbers)
//!    phrased in Indonesian and English.
//! 2. **All units** — one exercise per unit with fixed seeds, shown in both
//!    plain-text and typeset form, and checked against a right and a wrong
//!    answer.

use math_drill_gen::{
    exercise_payload, generate_exercise, Category, MathDisplay, ProblemRequest, Unit,
};

fn print_exercise(unit: Unit, seed: u64, locale: &str) {
    let exercise = generate_exercise(ProblemRequest::new(unit).seeded(seed).with_locale(locale));
    let problem = &exercise.problem;

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{} — {}]  Locale: {}  ID: {}",
        exercise.unit, exercise.unit.category(), locale, exercise.exercise_id);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Text:  {}", problem.display_text);
    println!("  LaTeX: {}", problem.typeset.to_latex());
    println!("  Answer: {}", problem.answer);

    let right = problem.answer.to_string();
    println!("  check({right:?}) = {}", exercise.check(&right));
    println!("  check(\"0\") = {}", exercise.check("0"));
    println!();
}

fn main() {
    env_logger::init();

    println!("=== Same inequality, two locales ===\n");
    print_exercise(Unit::Inequalities, 7, "id");
    print_exercise(Unit::Inequalities, 7, "en");

    println!("=== One exercise per unit ===\n");
    for (i, unit) in Unit::ALL.into_iter().enumerate() {
        print_exercise(unit, 100 + i as u64, "en");
    }

    println!("=== Display payload for a random algebra exercise ===\n");
    let exercise = generate_exercise(ProblemRequest::new(Category::Algebra).with_locale("en"));
    for mode in [MathDisplay::Typeset, MathDisplay::PlainText] {
        let payload = exercise_payload(&exercise, mode);
        println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    }
}
