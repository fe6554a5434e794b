use serde_json::{json, Value};

use crate::practice_engine::models::{Answer, Exercise, MathDisplay};

/// Text shown by the "show answer" action.
pub fn revealed_answer(answer: &Answer) -> String {
    answer.to_string()
}

/// Statement content for the active math display mode.
pub fn display_content(exercise: &Exercise, mode: MathDisplay) -> String {
    match mode {
        MathDisplay::Typeset   => exercise.problem.typeset.to_latex(),
        MathDisplay::PlainText => exercise.problem.display_text.clone(),
    }
}

/// Build the payload the exercise page renders.
///
/// `content` is LaTeX in typeset mode and the plain statement otherwise;
/// `plainText` is always included so the page can fall back when the
/// typesetter fails.
pub fn exercise_payload(exercise: &Exercise, mode: MathDisplay) -> Value {
    json!({
        "exerciseId": exercise.exercise_id,
        "unitId":     exercise.unit.id(),
        "category":   exercise.unit.category().to_string(),
        "mode":       mode.to_string(),
        "content":    display_content(exercise, mode),
        "plainText":  exercise.problem.display_text,
        "answerText": revealed_answer(&exercise.problem.answer),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice_engine::{
        models::Unit,
        units::algebra::powers,
    };

    fn exercise() -> Exercise {
        Exercise {
            exercise_id: "PW-0000002A".to_string(),
            unit: Unit::Powers,
            problem: powers(3, 3),
        }
    }

    #[test]
    fn typeset_payload_carries_latex() {
        let v = exercise_payload(&exercise(), MathDisplay::Typeset);
        assert_eq!(v["exerciseId"], "PW-0000002A");
        assert_eq!(v["unitId"], "powers");
        assert_eq!(v["category"], "algebra");
        assert_eq!(v["mode"], "typeset");
        assert_eq!(v["content"], "3^{3} = ?");
        assert_eq!(v["plainText"], "3^3 = ?");
        assert_eq!(v["answerText"], "27");
    }

    #[test]
    fn plain_payload_carries_display_text() {
        let v = exercise_payload(&exercise(), MathDisplay::PlainText);
        assert_eq!(v["mode"], "plainText");
        assert_eq!(v["content"], "3^3 = ?");
    }

    #[test]
    fn revealed_answers_format_by_kind() {
        assert_eq!(revealed_answer(&Answer::Integer(-4)), "-4");
        assert_eq!(revealed_answer(&Answer::Decimal(0.875)), "0.875");
        assert_eq!(revealed_answer(&Answer::Fraction("3/4".into())), "3/4");
    }
}
