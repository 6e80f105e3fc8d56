//! Ordered question collections and exam validity rules.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Question;

/// Size bounds a collection must respect to be an exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRules {
    /// Minimum number of questions (inclusive).
    #[serde(default = "default_min_questions")]
    pub min_questions: usize,
    /// Maximum number of questions (inclusive).
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,
}

fn default_min_questions() -> usize {
    15
}

fn default_max_questions() -> usize {
    20
}

impl Default for ExamRules {
    fn default() -> Self {
        Self {
            min_questions: default_min_questions(),
            max_questions: default_max_questions(),
        }
    }
}

/// One exam rule a collection breaks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExamViolation {
    #[error("exam has {count} question(s), at least {min} required")]
    TooFewQuestions { count: usize, min: usize },

    #[error("exam has {count} question(s), at most {max} allowed")]
    TooManyQuestions { count: usize, max: usize },

    #[error("question id '{id}' appears {occurrences} times")]
    DuplicateId { id: String, occurrences: usize },
}

/// An ordered sequence of questions.
///
/// Additions are never rejected: the same type serves open-ended banks and
/// finished exams, and exam validity is a query.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuestionCollection {
    questions: Vec<Question>,
}

impl QuestionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a question, even if its id is already present.
    pub fn add(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Remove every question with this id, returning how many were removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.questions.len();
        self.questions.retain(|q| q.id() != id);
        before - self.questions.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.questions.iter().any(|q| q.id() == id)
    }

    /// First question with this id.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The live question sequence, in insertion order.
    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Questions whose statement, answer texts or match targets contain
    /// `keyword`, ignoring case.
    pub fn search(&self, keyword: &str) -> Vec<&Question> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let hit = |text: &str| text.to_lowercase().contains(&needle);

        self.questions
            .iter()
            .filter(|q| {
                hit(q.statement())
                    || q.answers().iter().any(|a| {
                        hit(&a.text) || a.match_target.as_deref().is_some_and(|t| hit(t))
                    })
            })
            .collect()
    }

    /// True when the collection holds 15 to 20 questions with distinct ids.
    pub fn is_valid_exam(&self) -> bool {
        self.exam_violations(&ExamRules::default()).is_empty()
    }

    /// Every rule broken under `rules`, recomputed on each call.
    pub fn exam_violations(&self, rules: &ExamRules) -> Vec<ExamViolation> {
        let mut violations = Vec::new();
        let count = self.questions.len();

        if count < rules.min_questions {
            violations.push(ExamViolation::TooFewQuestions {
                count,
                min: rules.min_questions,
            });
        } else if count > rules.max_questions {
            violations.push(ExamViolation::TooManyQuestions {
                count,
                max: rules.max_questions,
            });
        }

        let mut occurrences: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for question in &self.questions {
            let seen = occurrences.entry(question.id()).or_insert(0);
            if *seen == 0 {
                order.push(question.id());
            }
            *seen += 1;
        }
        for id in order {
            let n = occurrences[id];
            if n > 1 {
                violations.push(ExamViolation::DuplicateId {
                    id: id.to_string(),
                    occurrences: n,
                });
            }
        }

        violations
    }
}

impl FromIterator<Question> for QuestionCollection {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        Self {
            questions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Question> for QuestionCollection {
    fn extend<I: IntoIterator<Item = Question>>(&mut self, iter: I) {
        self.questions.extend(iter);
    }
}

impl<'a> IntoIterator for &'a QuestionCollection {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

impl IntoIterator for QuestionCollection {
    type Item = Question;
    type IntoIter = std::vec::IntoIter<Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.into_iter()
    }
}
