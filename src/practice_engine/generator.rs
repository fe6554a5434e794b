use log::debug;
use rand::RngCore;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::practice_engine::{
    localization::{Catalog, Localizer},
    models::{Exercise, Problem, ProblemRequest, Unit},
    units::{algebra, arithmetic, fractions, mixed},
};

/// Exercise id from the unit prefix and the request's RNG.
fn make_exercise_id(unit: Unit, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", unit.prefix(), rng.next_u32())
}

/// Variant-indexed dispatch: one fresh problem of `unit`.
pub fn generate_problem<R: Rng>(unit: Unit, rng: &mut R, lang: &Localizer<'_>) -> Problem {
    match unit {
        Unit::AdditionSubtraction    => arithmetic::generate_addition_subtraction(rng),
        Unit::MultiplicationDivision => arithmetic::generate_multiplication_division(rng),
        Unit::OrderOfOperations      => arithmetic::generate_order_of_operations(rng),

        Unit::FractionsDecimals      => fractions::generate_fractions_decimals(rng, lang),
        Unit::FractionsOperations    => fractions::generate_fraction_operations(rng),
        Unit::DecimalOperations      => fractions::generate_decimal_operations(rng),

        Unit::MixedOperations        => mixed::generate_mixed_operations(rng),

        Unit::VariablesExpressions   => algebra::generate_variables_expressions(rng, lang),
        Unit::LinearEquations        => algebra::generate_linear_equations(rng),
        Unit::Inequalities           => algebra::generate_inequalities(rng, lang),
        Unit::Powers                 => algebra::generate_powers(rng),
        Unit::AlgebraicOperations    => algebra::generate_algebraic_operations(rng),
    }
}

/// Generate an exercise with the built-in English/Indonesian phrases.
pub fn generate_exercise(request: ProblemRequest) -> Exercise {
    generate_exercise_with(request, Catalog::builtin())
}

/// Generate an exercise, phrasing localized text from `catalog`.
pub fn generate_exercise_with(request: ProblemRequest, catalog: &Catalog) -> Exercise {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let unit = request.selector.resolve(&mut rng);
    let exercise_id = make_exercise_id(unit, &mut rng);
    let lang = catalog.localizer(&request.locale);
    let problem = generate_problem(unit, &mut rng, &lang);

    debug!("{exercise_id} [{}]: {}", lang.locale(), problem.display_text);

    Exercise { exercise_id, unit, problem }
}
