//! Core data model types for giftbank.
//!
//! A [`Question`] is produced once by the parser and never mutated
//! afterwards: its fields are private and only exposed through accessors.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::infer::{classify, AnswerSummary};

/// Text of the correct-side element of a true/false answer set.
pub const TRUE_LABEL: &str = "TRUE";
/// Text of the false-side element of a true/false answer set.
pub const FALSE_LABEL: &str = "FALSE";

/// The inferred category of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Matching,
    Essay,
    Unknown,
}

impl QuestionKind {
    /// Every kind, in display order.
    pub const ALL: [QuestionKind; 6] = [
        QuestionKind::MultipleChoice,
        QuestionKind::TrueFalse,
        QuestionKind::ShortAnswer,
        QuestionKind::Matching,
        QuestionKind::Essay,
        QuestionKind::Unknown,
    ];

    /// Short label used in listings and histograms.
    pub fn code(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "MC",
            QuestionKind::TrueFalse => "TF",
            QuestionKind::ShortAnswer => "SA",
            QuestionKind::Matching => "MATCH",
            QuestionKind::Essay => "ESSAY",
            QuestionKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mc" | "multiple_choice" => Ok(QuestionKind::MultipleChoice),
            "tf" | "true_false" => Ok(QuestionKind::TrueFalse),
            "sa" | "short_answer" => Ok(QuestionKind::ShortAnswer),
            "match" | "matching" => Ok(QuestionKind::Matching),
            "essay" => Ok(QuestionKind::Essay),
            "unknown" => Ok(QuestionKind::Unknown),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// One candidate answer inside a question's answer block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Answer text, without feedback or matching target.
    pub text: String,
    /// Whether this answer was marked correct.
    pub is_correct: bool,
    /// Right-hand side of a `left -> right` matching pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_target: Option<String>,
    /// Feedback following the `#` delimiter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl Answer {
    /// Build an answer from a raw body such as `Apple -> Fruit` or `Paris#Well done`.
    ///
    /// The body is split on the first `#` into text and feedback, then the
    /// text on the first `->` into text and match target.
    pub fn from_body(body: &str, is_correct: bool) -> Self {
        let (text, feedback) = match body.split_once('#') {
            Some((text, feedback)) => (text, non_empty(feedback)),
            None => (body, None),
        };
        let (text, match_target) = match text.split_once("->") {
            Some((left, right)) => (left, non_empty(right)),
            None => (text, None),
        };

        Self {
            text: text.trim().to_string(),
            is_correct,
            match_target,
            feedback,
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// A parsed question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    id: String,
    statement: String,
    kind: QuestionKind,
    answers: Vec<Answer>,
    metadata: BTreeMap<String, String>,
    source_text: String,
}

impl Question {
    /// Assemble a question and infer its kind from the answer set.
    pub(crate) fn from_parts(
        id: String,
        statement: String,
        answers: Vec<Answer>,
        metadata: BTreeMap<String, String>,
        source_text: String,
    ) -> Self {
        let kind = classify(&AnswerSummary::of(&answers));
        Self {
            id,
            statement,
            kind,
            answers,
            metadata,
            source_text,
        }
    }

    /// The title captured between the first two `::` delimiters.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The question text, with `_____` marking where an inline answer block sat.
    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Answers marked correct, in source order.
    pub fn correct_answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter().filter(|a| a.is_correct)
    }

    /// `[key] value` entries and the optional `format` marker.
    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// The text this question was parsed from, suitable for re-emission.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Grade a candidate answer against this question.
    pub fn is_correct(&self, candidate: &str) -> bool {
        crate::evaluate::is_correct(self, candidate)
    }
}
