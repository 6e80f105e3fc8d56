//! Exam assembly error types.
//!
//! Parsing never fails and validity checks return violations; these errors
//! are for the operations that must refuse to go on, such as writing an exam
//! that breaks the rules.

use thiserror::Error;

use crate::collection::ExamViolation;

/// Errors raised while selecting or assembling an exam.
#[derive(Debug, Error)]
pub enum ExamError {
    /// The assembled collection breaks one or more exam rules.
    #[error("invalid exam: {}", join(.violations))]
    InvalidExam { violations: Vec<ExamViolation> },

    /// Requested ids that are not in the bank.
    #[error("questions not found: {}", .0.join(", "))]
    UnknownQuestions(Vec<String>),

    /// No id was requested at all.
    #[error("no question ids given")]
    EmptySelection,
}

impl ExamError {
    /// The violated rules, if this is an invalid-exam error.
    pub fn violations(&self) -> &[ExamViolation] {
        match self {
            ExamError::InvalidExam { violations } => violations,
            _ => &[],
        }
    }
}

fn join(violations: &[ExamViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_exam_lists_every_violation() {
        let err = ExamError::InvalidExam {
            violations: vec![
                ExamViolation::TooFewQuestions { count: 2, min: 15 },
                ExamViolation::DuplicateId {
                    id: "Q1".into(),
                    occurrences: 2,
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "invalid exam: exam has 2 question(s), at least 15 required; question id 'Q1' appears 2 times"
        );
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn unknown_questions_message() {
        let err = ExamError::UnknownQuestions(vec!["Q9".into(), "Q10".into()]);
        assert_eq!(err.to_string(), "questions not found: Q9, Q10");
        assert!(err.violations().is_empty());
    }
}
