//! Exam report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collection::QuestionCollection;
use crate::exam::{ExamScore, ScoreDetail};
use crate::statistics::TypeProfile;

/// A scored exam session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    pub exam: ExamSummary,
    pub score: ExamScore,
    /// Question kinds in the exam.
    pub profile: TypeProfile,
}

/// Summary of an exam (without the full questions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamSummary {
    /// Usually the exam file name.
    pub name: String,
    pub question_count: usize,
    pub question_ids: Vec<String>,
}

impl ExamReport {
    pub fn new(name: impl Into<String>, exam: &QuestionCollection, score: ExamScore) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            exam: ExamSummary {
                name: name.into(),
                question_count: exam.len(),
                question_ids: exam.iter().map(|q| q.id().to_string()).collect(),
            },
            score,
            profile: TypeProfile::of(exam),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ExamReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Graded responses that were wrong.
    pub fn missed(&self) -> impl Iterator<Item = &ScoreDetail> {
        self.score
            .details
            .iter()
            .filter(|d| matches!(d, ScoreDetail::Graded { correct: false, .. }))
    }

    /// Plain-text summary for terminals.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{}: {}/{} correct ({:.1}%)\n",
            self.exam.name, self.score.score, self.score.total, self.score.percent
        );
        for detail in &self.score.details {
            match detail {
                ScoreDetail::Graded {
                    question_id,
                    user_answer,
                    correct,
                    ..
                } => {
                    let mark = if *correct { "ok" } else { "wrong" };
                    out.push_str(&format!("  [{mark}] {question_id}: {user_answer}\n"));
                }
                ScoreDetail::UnknownQuestion { question_id } => {
                    out.push_str(&format!("  [unknown] {question_id}\n"));
                }
            }
        }
        out
    }
}
