//! Grading a candidate answer against a question.
//!
//! Comparisons are case-insensitive and ignore surrounding whitespace. An
//! empty candidate is never correct, and essays are never auto-graded.

use crate::model::{Question, QuestionKind};

/// Decide whether `candidate` answers `question` correctly.
pub fn is_correct(question: &Question, candidate: &str) -> bool {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return false;
    }

    match question.kind() {
        QuestionKind::TrueFalse => true_false(question, candidate),
        QuestionKind::Matching => matching(question, candidate),
        QuestionKind::ShortAnswer | QuestionKind::MultipleChoice => question
            .correct_answers()
            .any(|a| same_text(&a.text, candidate)),
        QuestionKind::Essay | QuestionKind::Unknown => false,
    }
}

fn same_text(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

// Accepts the full label ("true") or its initial ("t").
fn true_false(question: &Question, candidate: &str) -> bool {
    let mut chars = candidate.chars();
    let initial = match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    };

    question.correct_answers().any(|a| {
        same_text(&a.text, candidate) || initial.is_some_and(|c| a.text.starts_with(c))
    })
}

fn matching(question: &Question, candidate: &str) -> bool {
    let mut pairs = question
        .correct_answers()
        .filter_map(|a| a.match_target.as_deref().map(|t| (a.text.as_str(), t)));

    match candidate.split_once("->") {
        Some((left, right)) => pairs.any(|(l, r)| same_text(l, left) && same_text(r, right)),
        None => pairs.any(|(_, r)| same_text(r, candidate)),
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Question;
    use crate::parser::parse_str;

    fn question(input: &str) -> Question {
        parse_str(input).questions.into_iter().next().unwrap()
    }

    #[test]
    fn short_answer_is_case_insensitive() {
        let q = question("::Q:: Capital of France? {=Paris}");
        assert!(q.is_correct("PARIS"));
        assert!(q.is_correct("  paris "));
        assert!(!q.is_correct("Lyon"));
    }

    #[test]
    fn multiple_choice_accepts_any_correct_option() {
        let q = question("::Q:: Pick a prime {=2 =3 ~4}");
        assert!(q.is_correct("2"));
        assert!(q.is_correct("3"));
        assert!(!q.is_correct("4"));
    }

    #[test]
    fn true_false_compares_correct_element() {
        let q = question("::Q:: Sky is blue {TRUE}");
        assert!(q.is_correct("true"));
        assert!(q.is_correct("T"));
        assert!(!q.is_correct("FALSE"));
        assert!(!q.is_correct("f"));

        let q = question("::Q:: Grass is red {F}");
        assert!(q.is_correct("False"));
        assert!(!q.is_correct("TRUE"));
    }

    #[test]
    fn matching_accepts_pair_or_target() {
        let q = question("::Q:: Match {=Apple -> Fruit =Carrot -> Vegetable}");
        assert!(q.is_correct("Apple -> Fruit"));
        assert!(q.is_correct("apple->fruit"));
        assert!(q.is_correct("Fruit"));
        assert!(q.is_correct("vegetable"));
        assert!(!q.is_correct("Apple -> Vegetable"));
        assert!(!q.is_correct("Apple"));
    }

    #[test]
    fn essay_is_never_correct() {
        let q = question("::Q:: Describe the water cycle.");
        assert!(!q.is_correct("Evaporation, condensation, precipitation"));
        assert!(!q.is_correct(""));
    }

    #[test]
    fn empty_candidate_is_never_correct() {
        let q = question("::Q:: Capital of France? {=Paris}");
        assert!(!q.is_correct(""));
        assert!(!q.is_correct("   "));
    }
}
