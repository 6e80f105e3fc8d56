//! Question kind inference.
//!
//! The kind is never declared in the source; it is derived from a summary of
//! the answer set by an ordered decision table. Matching is checked first
//! because a matching pair would otherwise look like a short answer, and
//! short answer vs multiple choice depends only on the presence of a wrong
//! option, not on how many options are correct.

use crate::model::{Answer, QuestionKind, FALSE_LABEL, TRUE_LABEL};

/// The facts about an answer set that decide its kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnswerSummary {
    pub has_wrong: bool,
    pub has_correct: bool,
    pub has_match: bool,
    pub is_binary_true_false: bool,
}

impl AnswerSummary {
    pub fn of(answers: &[Answer]) -> Self {
        let is_binary_true_false = answers.len() == 2
            && answers.iter().any(|a| a.text == TRUE_LABEL)
            && answers.iter().any(|a| a.text == FALSE_LABEL);

        Self {
            has_wrong: answers.iter().any(|a| !a.is_correct),
            has_correct: answers.iter().any(|a| a.is_correct),
            has_match: answers.iter().any(|a| a.match_target.is_some()),
            is_binary_true_false,
        }
    }
}

/// Classify an answer set: Matching > TrueFalse > Essay > ShortAnswer > MultipleChoice.
pub fn classify(summary: &AnswerSummary) -> QuestionKind {
    match (
        summary.has_match,
        summary.is_binary_true_false,
        summary.has_correct,
        summary.has_wrong,
    ) {
        (true, _, _, _) => QuestionKind::Matching,
        (false, true, _, _) => QuestionKind::TrueFalse,
        (false, false, false, false) => QuestionKind::Essay,
        (false, false, true, false) => QuestionKind::ShortAnswer,
        (false, false, _, true) => QuestionKind::MultipleChoice,
    }
}
