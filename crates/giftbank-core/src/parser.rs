//! Recursive-descent parser for the question-bank notation.
//!
//! Grammar rules are methods over an immutable [`TokenStream`]: each takes
//! the position of its first token and returns the parsed node together with
//! the position after it. Structural problems never abort the parse; they
//! are recorded as [`ParseDiagnostic`]s and parsing resumes at the next `::`.
//!
//! ```text
//! bank      = *( stray / question )
//! question  = "::" title "::" *( text / block / bracket / line-break )
//! block     = "{" *( tf-marker / ("=" / "~") answer-text / other ) "}"
//! bracket   = "[" key "]" [ value ]
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::collection::QuestionCollection;
use crate::model::{Answer, Question, FALSE_LABEL, TRUE_LABEL};
use crate::token::{tokenize, TokenKind, TokenStream};

/// Joins statement text written after an inline answer block.
pub const BLANK_MARKER: &str = "_____";

/// Metadata key for a `[html]`-style format marker.
pub const FORMAT_KEY: &str = "format";

const FORMAT_MARKERS: [&str; 4] = ["html", "markdown", "plain", "moodle"];

/// What the parser was looking for when it hit a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    /// A `::` around a question title.
    QuestionDelimiter,
    /// The `}` closing an answer block.
    ClosingBrace,
    /// The `]` closing a metadata key.
    ClosingBracket,
    /// Answer text after `=` or `~`.
    AnswerText,
    /// A key inside `[ ]`.
    MetadataKey,
    /// Statement text, an answer block or metadata.
    QuestionContent,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::QuestionDelimiter => write!(f, "`::`"),
            Expected::ClosingBrace => write!(f, "`}}`"),
            Expected::ClosingBracket => write!(f, "`]`"),
            Expected::AnswerText => write!(f, "answer text"),
            Expected::MetadataKey => write!(f, "metadata key"),
            Expected::QuestionContent => write!(f, "question text or answer block"),
        }
    }
}

/// A structural problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("line {line}: expected {expected}, found {found}")]
pub struct ParseDiagnostic {
    /// Byte offset of the offending token (or end of input).
    pub offset: usize,
    /// 1-based line of `offset`.
    pub line: usize,
    pub expected: Expected,
    pub found: String,
}

/// Questions recovered from a bank plus every problem met along the way.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub questions: Vec<Question>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl ParseOutcome {
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// True when no structural problem was found.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_collection(self) -> QuestionCollection {
        self.questions.into_iter().collect()
    }
}

/// Parse question-bank text.
pub fn parse_str(input: &str) -> ParseOutcome {
    parse_tokens(&tokenize(input))
}

/// Parse an already tokenized bank.
pub fn parse_tokens(stream: &TokenStream) -> ParseOutcome {
    let mut parser = Parser::new(stream);
    let questions = parser.question_list();
    tracing::debug!(
        questions = questions.len(),
        errors = parser.diagnostics.len(),
        "parsed question bank"
    );
    ParseOutcome {
        questions,
        diagnostics: parser.diagnostics,
    }
}

/// Read and parse a question-bank file.
pub fn parse_file(path: &Path) -> Result<ParseOutcome> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;
    let outcome = parse_str(&content);
    if !outcome.is_clean() {
        tracing::warn!(
            "{}: {} parse error(s)",
            path.display(),
            outcome.error_count()
        );
    }
    Ok(outcome)
}

/// Where the question body cursor sits relative to answer blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Before the first answer block.
    Stem,
    /// Right after `}`, on the same line.
    AfterBlock,
    /// On a later line after a block.
    Trailer,
}

enum Bracket<'a> {
    Format(String),
    Metadata { key: &'a str, value: &'a str },
}

struct Parser<'a> {
    stream: &'a TokenStream,
    diagnostics: Vec<ParseDiagnostic>,
}

impl<'a> Parser<'a> {
    fn new(stream: &'a TokenStream) -> Self {
        Self {
            stream,
            diagnostics: Vec::new(),
        }
    }

    fn kind_at(&self, pos: usize) -> Option<TokenKind> {
        self.stream.kind_at(pos)
    }

    fn text_at(&self, pos: usize) -> &'a str {
        self.stream.get(pos).map(|t| self.stream.text(t)).unwrap_or("")
    }

    fn report(&mut self, pos: usize, expected: Expected) {
        let (offset, found) = match self.stream.get(pos) {
            Some(token) if token.kind == TokenKind::Text => (
                token.span.start,
                format!("text {:?}", self.stream.text(token)),
            ),
            Some(token) => (token.span.start, token.kind.to_string()),
            None => (self.stream.source().len(), "end of input".to_string()),
        };
        let diagnostic = ParseDiagnostic {
            offset,
            line: self.stream.line_of(offset),
            expected,
            found,
        };
        tracing::warn!("parse error: {diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    /// `bank`: skip stray tokens, parse every question.
    fn question_list(&mut self) -> Vec<Question> {
        let mut questions = Vec::new();
        let mut pos = 0;

        while pos < self.stream.len() {
            if self.kind_at(pos) == Some(TokenKind::DoubleColon) {
                let (question, next) = self.question(pos);
                questions.extend(question);
                pos = next;
            } else {
                pos += 1;
            }
        }

        questions
    }

    /// `question`: title, then body up to the next `::` or end of input.
    fn question(&mut self, start: usize) -> (Option<Question>, usize) {
        let mut pos = start + 1;

        let title_start = pos;
        while !matches!(
            self.kind_at(pos),
            None | Some(TokenKind::DoubleColon) | Some(TokenKind::LineBreak)
        ) {
            pos += 1;
        }
        if self.kind_at(pos) != Some(TokenKind::DoubleColon) {
            self.report(pos, Expected::QuestionDelimiter);
            return (None, pos);
        }
        let id = self.stream.slice(title_start, pos).trim().to_string();
        pos += 1;

        let mut statement: Vec<&str> = Vec::new();
        let mut answers = Vec::new();
        let mut metadata = BTreeMap::new();
        let mut stage = Stage::Stem;
        let mut pending_blank = false;

        loop {
            match self.kind_at(pos) {
                None | Some(TokenKind::DoubleColon) => break,
                Some(TokenKind::LineBreak) => {
                    if stage == Stage::AfterBlock {
                        stage = Stage::Trailer;
                        pending_blank = false;
                    }
                    pos += 1;
                }
                Some(TokenKind::OpenBrace) => {
                    let (block, next) = self.answer_set(pos);
                    answers.extend(block);
                    stage = Stage::AfterBlock;
                    pending_blank = true;
                    pos = next;
                }
                Some(TokenKind::OpenBracket) => {
                    let (bracket, next) = self.bracket(pos, stage == Stage::Stem);
                    match bracket {
                        Some(Bracket::Format(format)) => {
                            metadata.insert(FORMAT_KEY.to_string(), format);
                        }
                        Some(Bracket::Metadata { key, value }) => {
                            metadata.insert(key.to_string(), value.to_string());
                        }
                        None => {}
                    }
                    pos = next;
                }
                Some(TokenKind::CloseBrace) | Some(TokenKind::CloseBracket) => {
                    self.report(pos, Expected::QuestionContent);
                    pos += 1;
                }
                Some(TokenKind::Text) | Some(TokenKind::Equals) | Some(TokenKind::Tilde) => {
                    let (segment, next) = self.free_text(pos);
                    match stage {
                        Stage::Stem => statement.push(segment),
                        Stage::AfterBlock => {
                            if pending_blank {
                                statement.push(BLANK_MARKER);
                                pending_blank = false;
                            }
                            statement.push(segment);
                        }
                        Stage::Trailer => {}
                    }
                    pos = next;
                }
            }
        }

        let source_text = self.stream.slice(start, pos).trim().to_string();
        let question = Question::from_parts(
            id,
            statement.join(" "),
            answers,
            metadata,
            source_text,
        );
        (Some(question), pos)
    }

    /// A run of text on one line; `=` and `~` outside a block are plain text.
    fn free_text(&self, start: usize) -> (&'a str, usize) {
        let mut pos = start;
        while matches!(
            self.kind_at(pos),
            Some(TokenKind::Text) | Some(TokenKind::Equals) | Some(TokenKind::Tilde)
        ) {
            pos += 1;
        }
        (self.stream.slice(start, pos), pos)
    }

    /// `block`: everything between `{` and `}`.
    ///
    /// An unterminated block ends at the next `::` so the following question
    /// is still parsed.
    fn answer_set(&mut self, start: usize) -> (Vec<Answer>, usize) {
        let mut pos = start + 1;
        let mut answers = Vec::new();

        loop {
            match self.kind_at(pos) {
                Some(TokenKind::CloseBrace) => return (answers, pos + 1),
                None | Some(TokenKind::DoubleColon) => {
                    self.report(pos, Expected::ClosingBrace);
                    return (answers, pos);
                }
                Some(TokenKind::Text) => {
                    if let Some(pair) = true_false_pair(self.text_at(pos)) {
                        answers.extend(pair);
                    }
                    pos += 1;
                }
                Some(marker @ (TokenKind::Equals | TokenKind::Tilde)) => {
                    let (answer, next) = self.answer(pos, marker == TokenKind::Equals);
                    answers.extend(answer);
                    pos = next;
                }
                Some(_) => pos += 1,
            }
        }
    }

    /// One `=` or `~` answer; the marker is at `start`.
    fn answer(&mut self, start: usize, is_correct: bool) -> (Option<Answer>, usize) {
        let mut pos = start + 1;
        while self.kind_at(pos) == Some(TokenKind::LineBreak) {
            pos += 1;
        }

        match self.kind_at(pos) {
            Some(TokenKind::Text) => (
                Some(Answer::from_body(self.text_at(pos), is_correct)),
                pos + 1,
            ),
            Some(TokenKind::Equals | TokenKind::Tilde | TokenKind::CloseBrace) => (None, pos),
            _ => {
                self.report(pos, Expected::AnswerText);
                (None, pos)
            }
        }
    }

    /// `bracket`: a format marker (stem only) or a `[key] value` line.
    fn bracket(&mut self, start: usize, allow_format: bool) -> (Option<Bracket<'a>>, usize) {
        let mut pos = start + 1;

        if self.kind_at(pos) != Some(TokenKind::Text) {
            self.report(pos, Expected::MetadataKey);
            return (None, pos);
        }
        let key = self.text_at(pos);
        pos += 1;

        if self.kind_at(pos) != Some(TokenKind::CloseBracket) {
            self.report(pos, Expected::ClosingBracket);
            return (None, pos);
        }
        pos += 1;

        let lowered = key.to_lowercase();
        if allow_format && FORMAT_MARKERS.contains(&lowered.as_str()) {
            return (Some(Bracket::Format(lowered)), pos);
        }

        let value_start = pos;
        while !matches!(
            self.kind_at(pos),
            None | Some(TokenKind::LineBreak)
                | Some(TokenKind::DoubleColon)
                | Some(TokenKind::OpenBrace)
        ) {
            pos += 1;
        }
        let value = self.stream.slice(value_start, pos);
        (Some(Bracket::Metadata { key, value }), pos)
    }
}

/// Expand a bare `TRUE`/`T`/`FALSE`/`F` marker into the reserved answer pair.
fn true_false_pair(token: &str) -> Option<[Answer; 2]> {
    let (head, feedback) = match token.split_once('#') {
        Some((head, feedback)) => (head.trim(), Some(feedback.trim())),
        None => (token.trim(), None),
    };

    let value = if token.starts_with(TRUE_LABEL) || head == "T" {
        true
    } else if token.starts_with(FALSE_LABEL) || head == "F" {
        false
    } else {
        return None;
    };

    let feedback = feedback.filter(|f| !f.is_empty()).map(str::to_string);
    let element = |label: &str, is_correct: bool| Answer {
        text: label.to_string(),
        is_correct,
        match_target: None,
        feedback: if is_correct { feedback.clone() } else { None },
    };

    Some([element(TRUE_LABEL, value), element(FALSE_LABEL, !value)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionKind;

    fn parse_one(input: &str) -> Question {
        let outcome = parse_str(input);
        assert!(outcome.is_clean(), "diagnostics: {:?}", outcome.diagnostics);
        assert_eq!(outcome.questions.len(), 1);
        outcome.questions.into_iter().next().unwrap()
    }

    fn texts(question: &Question) -> Vec<&str> {
        question.answers().iter().map(|a| a.text.as_str()).collect()
    }

    #[test]
    fn short_answer() {
        let q = parse_one("::Q4:: What is the capital of France?\n{\n=Paris\n}");
        assert_eq!(q.id(), "Q4");
        assert_eq!(q.statement(), "What is the capital of France?");
        assert_eq!(q.kind(), QuestionKind::ShortAnswer);
        assert_eq!(q.answers().len(), 1);
        assert!(q.answers()[0].is_correct);
        assert_eq!(q.answers()[0].text, "Paris");
    }

    #[test]
    fn inline_short_answer() {
        let q = parse_one("::id:: text { = ans }");
        assert_eq!(q.kind(), QuestionKind::ShortAnswer);
        assert_eq!(texts(&q), vec!["ans"]);
        assert_eq!(q.statement(), "text");
    }

    #[test]
    fn multiple_choice() {
        let q = parse_one("::Q5:: What is 2 + 2?{\n=4\n~3\n~5\n}");
        assert_eq!(q.kind(), QuestionKind::MultipleChoice);
        assert_eq!(q.statement(), "What is 2 + 2?");
        assert_eq!(texts(&q), vec!["4", "3", "5"]);
        assert_eq!(q.correct_answers().count(), 1);
    }

    #[test]
    fn multiple_correct_with_one_wrong_is_multiple_choice() {
        let q = parse_one("::Q:: Pick primes {=2 =3 ~4}");
        assert_eq!(q.kind(), QuestionKind::MultipleChoice);
        assert_eq!(q.correct_answers().count(), 2);
    }

    #[test]
    fn true_false_full_marker() {
        let q = parse_one("\n::Q2:: Is the sky blue? {\nTRUE\n}\n");
        assert_eq!(q.kind(), QuestionKind::TrueFalse);
        assert_eq!(q.statement(), "Is the sky blue?");
        assert_eq!(texts(&q), vec![TRUE_LABEL, FALSE_LABEL]);
        let correct: Vec<_> = q.correct_answers().map(|a| a.text.as_str()).collect();
        assert_eq!(correct, vec![TRUE_LABEL]);
    }

    #[test]
    fn true_false_short_markers() {
        let q = parse_one("::Q:: Grass is red. {F#It is green}");
        assert_eq!(q.kind(), QuestionKind::TrueFalse);
        let correct: Vec<_> = q.correct_answers().collect();
        assert_eq!(correct.len(), 1);
        assert_eq!(correct[0].text, FALSE_LABEL);
        assert_eq!(correct[0].feedback.as_deref(), Some("It is green"));

        let q = parse_one("::Q:: Water is wet. {T}");
        assert_eq!(q.kind(), QuestionKind::TrueFalse);
        assert_eq!(q.correct_answers().next().unwrap().text, TRUE_LABEL);
    }

    #[test]
    fn matching() {
        let q = parse_one(
            "::Q1:: Match the following: {\n  =Apple -> Fruit\n  =Carrot -> Vegetable\n  =Dog -> Animal\n}",
        );
        assert_eq!(q.kind(), QuestionKind::Matching);
        assert_eq!(q.statement(), "Match the following:");
        assert_eq!(texts(&q), vec!["Apple", "Carrot", "Dog"]);
        let targets: Vec<_> = q
            .answers()
            .iter()
            .filter_map(|a| a.match_target.as_deref())
            .collect();
        assert_eq!(targets, vec!["Fruit", "Vegetable", "Animal"]);
    }

    #[test]
    fn essay_without_block() {
        let q = parse_one("::E1:: Describe the water cycle.");
        assert_eq!(q.kind(), QuestionKind::Essay);
        assert!(q.answers().is_empty());
    }

    #[test]
    fn essay_with_empty_block() {
        let q = parse_one("::Q3:: Describe the water cycle.\n{ }\n");
        assert_eq!(q.kind(), QuestionKind::Essay);
        assert_eq!(q.statement(), "Describe the water cycle.");
    }

    #[test]
    fn several_questions() {
        let outcome = parse_str(
            "::Q1:: What is 2 + 2?{\n=4\n~3\n~5\n}\n\n::Q2:: Is the sky blue?\n{\n    TRUE\n}\n\n::Q3:: Describe the water cycle.\n{ }\n",
        );
        assert!(outcome.is_clean());
        let kinds: Vec<_> = outcome.questions.iter().map(|q| q.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                QuestionKind::MultipleChoice,
                QuestionKind::TrueFalse,
                QuestionKind::Essay
            ]
        );
    }

    #[test]
    fn feedback_is_split_from_answer() {
        let q = parse_one("::Q:: Capital? {=Paris#Correct! ~Lyon#No, that is a city}");
        assert_eq!(q.answers()[0].feedback.as_deref(), Some("Correct!"));
        assert_eq!(q.answers()[1].text, "Lyon");
        assert_eq!(q.answers()[1].feedback.as_deref(), Some("No, that is a city"));
    }

    #[test]
    fn cloze_text_after_block_uses_blank_marker() {
        let q = parse_one("::C1:: The capital of France is {=Paris} and it is lovely.");
        assert_eq!(
            q.statement(),
            "The capital of France is _____ and it is lovely."
        );
        assert_eq!(q.kind(), QuestionKind::ShortAnswer);
    }

    #[test]
    fn several_blocks_concatenate_answers() {
        let q = parse_one("::C2:: {=Paris} is in {=France ~Spain}.");
        assert_eq!(texts(&q), vec!["Paris", "France", "Spain"]);
        assert_eq!(q.kind(), QuestionKind::MultipleChoice);
        assert_eq!(q.statement(), "_____ is in _____ .");
    }

    #[test]
    fn metadata_after_block() {
        let q = parse_one(
            "::M1:: Capital? {=Paris}\n[difficulty] easy\n[topic] european capitals\n[difficulty] medium\n",
        );
        assert_eq!(q.metadata().get("difficulty").map(String::as_str), Some("medium"));
        assert_eq!(
            q.metadata().get("topic").map(String::as_str),
            Some("european capitals")
        );
        assert_eq!(q.statement(), "Capital?");
    }

    #[test]
    fn format_marker_before_stem() {
        let q = parse_one("::F1::[html]What is <b>bold</b>? {=strong}");
        assert_eq!(q.metadata().get(FORMAT_KEY).map(String::as_str), Some("html"));
        assert_eq!(q.statement(), "What is <b>bold</b>?");
        assert_eq!(q.kind(), QuestionKind::ShortAnswer);
    }

    #[test]
    fn equals_in_stem_is_text() {
        let q = parse_one("::S:: Does 1 + 1 = 2 hold? {T}");
        assert_eq!(q.statement(), "Does 1 + 1 = 2 hold?");
        assert_eq!(q.kind(), QuestionKind::TrueFalse);
    }

    #[test]
    fn stray_text_in_block_is_skipped() {
        let q = parse_one("::Q:: Pick {note =a ~b}");
        assert_eq!(texts(&q), vec!["a", "b"]);
    }

    #[test]
    fn empty_marker_yields_no_answer() {
        let q = parse_one("::Q:: Pick {= ~b =}");
        assert_eq!(texts(&q), vec!["b"]);
        assert_eq!(q.kind(), QuestionKind::MultipleChoice);
    }

    #[test]
    fn stray_text_before_first_question_is_ignored() {
        let outcome = parse_str("some preamble\n\n::Q1:: Capital? {=Paris}");
        assert!(outcome.is_clean());
        assert_eq!(outcome.questions.len(), 1);
        assert_eq!(outcome.questions[0].id(), "Q1");
    }

    #[test]
    fn comments_never_reach_questions() {
        let outcome = parse_str(
            "// comment\n$CATEGORY: geo\n::Q1:: Capital?\n// inner note\n{=Paris}\n",
        );
        let q = &outcome.questions[0];
        assert!(!q.statement().contains("comment"));
        assert!(!q.source_text().contains("inner note"));
        assert!(!q.source_text().contains("CATEGORY"));
    }

    #[test]
    fn source_text_spans_question() {
        let input = "::Q1:: Capital? {=Paris}\n[difficulty] easy\n\n::Q2:: Sky blue? {T}\n";
        let outcome = parse_str(input);
        assert_eq!(
            outcome.questions[0].source_text(),
            "::Q1:: Capital? {=Paris}\n[difficulty] easy"
        );
        assert_eq!(outcome.questions[1].source_text(), "::Q2:: Sky blue? {T}");
    }

    #[test]
    fn missing_closing_brace_is_reported() {
        let input = "::Q1:: Capital? {=Paris}\n::Q2:: Broken {=a ~b\n::Q3:: Sky blue? {T}\n";
        let outcome = parse_str(input);
        assert_eq!(outcome.error_count(), 1);
        assert_eq!(outcome.diagnostics[0].expected, Expected::ClosingBrace);
        assert_eq!(outcome.diagnostics[0].line, 3);
        let ids: Vec<_> = outcome.questions.iter().map(|q| q.id()).collect();
        assert_eq!(ids, vec!["Q1", "Q2", "Q3"]);
        assert_eq!(outcome.questions[0].kind(), QuestionKind::ShortAnswer);
        assert_eq!(outcome.questions[2].kind(), QuestionKind::TrueFalse);
    }

    #[test]
    fn unterminated_block_at_end_of_input() {
        let outcome = parse_str("::Q1:: Capital? {=Paris}\n::Q2:: Broken {=a");
        assert_eq!(outcome.error_count(), 1);
        assert_eq!(outcome.diagnostics[0].found, "end of input");
        assert_eq!(outcome.questions.len(), 2);
    }

    #[test]
    fn unclosed_title_is_skipped() {
        let outcome = parse_str("::Broken title\nstem {=x}\n::Q2:: Fine? {=yes}");
        assert_eq!(outcome.error_count(), 1);
        assert_eq!(outcome.diagnostics[0].expected, Expected::QuestionDelimiter);
        assert_eq!(outcome.questions.len(), 1);
        assert_eq!(outcome.questions[0].id(), "Q2");
    }

    #[test]
    fn stray_closing_brace_is_reported() {
        let outcome = parse_str("::Q1:: Odd } text {=x}");
        assert_eq!(outcome.error_count(), 1);
        assert_eq!(outcome.diagnostics[0].expected, Expected::QuestionContent);
        assert_eq!(outcome.questions[0].kind(), QuestionKind::ShortAnswer);
    }

    #[test]
    fn diagnostic_display() {
        let outcome = parse_str("::Q1:: x {=a");
        assert_eq!(
            outcome.diagnostics[0].to_string(),
            "line 1: expected `}`, found end of input"
        );
    }

    #[test]
    fn title_keeps_inner_spacing() {
        let q = parse_one("::  Geo 1 - Paris  :: Capital? {=Paris}");
        assert_eq!(q.id(), "Geo 1 - Paris");
    }

    #[test]
    fn empty_input() {
        let outcome = parse_str("");
        assert!(outcome.questions.is_empty());
        assert!(outcome.is_clean());
    }

    #[test]
    fn carriage_return_only_bank_with_leading_comment() {
        let outcome = parse_str("// header\r::Q1:: Capital? {=Paris}\r::Q2:: Sky? {T}\r");
        assert!(outcome.is_clean(), "{:?}", outcome.diagnostics);
        assert_eq!(outcome.questions.len(), 2);
        assert_eq!(outcome.questions[0].kind(), QuestionKind::ShortAnswer);
        assert_eq!(outcome.questions[1].id(), "Q2");
        assert_eq!(outcome.questions[1].kind(), QuestionKind::TrueFalse);
    }

    #[test]
    fn parse_file_reads_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.gift");
        std::fs::write(&path, "::Q1:: Capital? {=Paris}\n").unwrap();
        let outcome = parse_file(&path).unwrap();
        assert_eq!(outcome.questions.len(), 1);

        assert!(parse_file(&dir.path().join("missing.gift")).is_err());
    }
}
