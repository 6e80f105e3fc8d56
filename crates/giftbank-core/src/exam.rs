//! Exam assembly, re-emission and scoring.
//!
//! An exam file is the `source_text` of its questions joined by blank lines,
//! so it parses back into the same ids, kinds and answer sets.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::collection::{ExamRules, QuestionCollection};
use crate::error::ExamError;
use crate::model::Question;

/// Pick questions from a bank by id, in the order the ids are given.
///
/// Ids match exactly first, then case-insensitively. Every id that matches
/// nothing is reported at once.
pub fn select_by_ids<S: AsRef<str>>(
    bank: &QuestionCollection,
    ids: &[S],
) -> Result<Vec<Question>, ExamError> {
    if ids.is_empty() {
        return Err(ExamError::EmptySelection);
    }

    let mut selected = Vec::with_capacity(ids.len());
    let mut missing = Vec::new();

    for id in ids {
        let id = id.as_ref().trim();
        let found = bank.get(id).or_else(|| {
            let lowered = id.to_lowercase();
            bank.iter().find(|q| q.id().to_lowercase() == lowered)
        });
        match found {
            Some(question) => selected.push(question.clone()),
            None => missing.push(id.to_string()),
        }
    }

    if missing.is_empty() {
        Ok(selected)
    } else {
        Err(ExamError::UnknownQuestions(missing))
    }
}

/// Build an exam, skipping repeated ids, and check it against `rules`.
pub fn build_exam(
    questions: impl IntoIterator<Item = Question>,
    rules: &ExamRules,
) -> Result<QuestionCollection, ExamError> {
    let mut exam = QuestionCollection::new();
    for question in questions {
        if exam.contains(question.id()) {
            tracing::debug!(id = question.id(), "skipping repeated question");
            continue;
        }
        exam.add(question);
    }

    let violations = exam.exam_violations(rules);
    if violations.is_empty() {
        Ok(exam)
    } else {
        Err(ExamError::InvalidExam { violations })
    }
}

/// Render questions back to question-bank text.
pub fn render_exam(exam: &QuestionCollection) -> String {
    let mut out = exam
        .iter()
        .map(Question::source_text)
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push('\n');
    out
}

/// Write an exam file, refusing collections that break `rules`.
pub fn write_exam(path: &Path, exam: &QuestionCollection, rules: &ExamRules) -> Result<()> {
    let violations = exam.exam_violations(rules);
    if !violations.is_empty() {
        return Err(ExamError::InvalidExam { violations }.into());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_exam(exam))
        .with_context(|| format!("failed to write exam to {}", path.display()))?;
    tracing::info!("wrote {} question(s) to {}", exam.len(), path.display());
    Ok(())
}

/// One answer given during an exam session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub question_id: String,
    pub user_answer: String,
}

/// Load responses from a JSON array file.
pub fn load_responses(path: &Path) -> Result<Vec<Response>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read responses from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse responses JSON: {}", path.display()))
}

/// Save responses as a JSON array.
pub fn save_responses(path: &Path, responses: &[Response]) -> Result<()> {
    let json = serde_json::to_string_pretty(responses).context("failed to serialize responses")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write responses to {}", path.display()))?;
    Ok(())
}

/// Outcome for one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScoreDetail {
    Graded {
        question_id: String,
        statement: String,
        user_answer: String,
        correct: bool,
    },
    /// The response names a question that is not in the exam.
    UnknownQuestion { question_id: String },
}

impl ScoreDetail {
    pub fn question_id(&self) -> &str {
        match self {
            ScoreDetail::Graded { question_id, .. } | ScoreDetail::UnknownQuestion { question_id } => {
                question_id
            }
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, ScoreDetail::Graded { correct: true, .. })
    }
}

/// Result of scoring a set of responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamScore {
    /// Number of correct responses.
    pub score: usize,
    /// Number of questions in the exam.
    pub total: usize,
    /// `score / total` as a percentage, 0 for an empty exam.
    pub percent: f64,
    pub details: Vec<ScoreDetail>,
}

impl ExamScore {
    /// Graded responses that were wrong.
    pub fn wrong_count(&self) -> usize {
        self.details
            .iter()
            .filter(|d| matches!(d, ScoreDetail::Graded { correct: false, .. }))
            .count()
    }

    pub fn unknown_count(&self) -> usize {
        self.details
            .iter()
            .filter(|d| matches!(d, ScoreDetail::UnknownQuestion { .. }))
            .count()
    }
}

/// Grade responses against an exam. Unknown ids are reported per item.
pub fn score_exam(exam: &QuestionCollection, responses: &[Response]) -> ExamScore {
    let mut answered = HashSet::new();
    let details: Vec<ScoreDetail> = responses
        .iter()
        .map(|response| match exam.get(&response.question_id) {
            Some(question) => {
                // A repeated response for the same question only counts once.
                let first = answered.insert(question.id());
                ScoreDetail::Graded {
                    question_id: question.id().to_string(),
                    statement: question.statement().to_string(),
                    user_answer: response.user_answer.clone(),
                    correct: first && question.is_correct(&response.user_answer),
                }
            }
            None => {
                tracing::warn!(id = %response.question_id, "response for unknown question");
                ScoreDetail::UnknownQuestion {
                    question_id: response.question_id.clone(),
                }
            }
        })
        .collect();

    let score = details.iter().filter(|d| d.is_correct()).count();
    let total = exam.len();
    let percent = if total == 0 {
        0.0
    } else {
        score as f64 / total as f64 * 100.0
    };

    ExamScore {
        score,
        total,
        percent,
        details,
    }
}
