//! Interactive exam sessions.
//!
//! The session loop is independent of where answers come from: the CLI feeds
//! it from stdin, tests feed it from a script.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::collection::QuestionCollection;
use crate::exam::{score_exam, ExamScore, Response};
use crate::model::Question;

/// Supplies one answer per question during a session.
#[async_trait]
pub trait AnswerSource: Send {
    /// Answer the question at `index` (0-based). `None` ends the session.
    async fn answer(&mut self, index: usize, question: &Question) -> anyhow::Result<Option<String>>;
}

/// Answers taken from a fixed list, in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    remaining: VecDeque<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            remaining: answers.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn answer(&mut self, _index: usize, _question: &Question) -> anyhow::Result<Option<String>> {
        Ok(self.remaining.pop_front())
    }
}

/// Responses collected during a session and their score.
#[derive(Debug, Clone)]
pub struct SessionResult {
    pub responses: Vec<Response>,
    pub score: ExamScore,
    /// False when the source stopped before the last question.
    pub completed: bool,
}

/// Ask every question in order and score the answers.
pub async fn simulate_exam(
    exam: &QuestionCollection,
    source: &mut dyn AnswerSource,
) -> anyhow::Result<SessionResult> {
    let mut responses = Vec::with_capacity(exam.len());
    let mut completed = true;

    for (index, question) in exam.iter().enumerate() {
        match source.answer(index, question).await? {
            Some(answer) => {
                tracing::debug!(id = question.id(), "answered");
                responses.push(Response {
                    question_id: question.id().to_string(),
                    user_answer: answer,
                });
            }
            None => {
                tracing::info!("session ended after {} of {} question(s)", index, exam.len());
                completed = false;
                break;
            }
        }
    }

    let score = score_exam(exam, &responses);
    Ok(SessionResult {
        responses,
        score,
        completed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    fn exam() -> QuestionCollection {
        parse_str(
            "::Q1:: Capital of France? {=Paris}\n\
             ::Q2:: 2 + 2? {=4 ~3 ~5}\n\
             ::Q3:: The sky is blue. {T}\n",
        )
        .into_collection()
    }

    #[tokio::test]
    async fn scripted_session_scores_answers() {
        let mut source = ScriptedAnswers::new(["paris", "3", "true"]);
        let result = simulate_exam(&exam(), &mut source).await.unwrap();

        assert!(result.completed);
        assert_eq!(result.responses.len(), 3);
        assert_eq!(result.responses[1].question_id, "Q2");
        assert_eq!(result.score.score, 2);
        assert_eq!(result.score.total, 3);
    }

    #[tokio::test]
    async fn exhausted_source_ends_session() {
        let mut source = ScriptedAnswers::new(["Paris"]);
        let result = simulate_exam(&exam(), &mut source).await.unwrap();

        assert!(!result.completed);
        assert_eq!(result.responses.len(), 1);
        assert_eq!(result.score.score, 1);
        assert_eq!(result.score.total, 3);
    }

    struct Failing;

    #[async_trait]
    impl AnswerSource for Failing {
        async fn answer(&mut self, _: usize, _: &Question) -> anyhow::Result<Option<String>> {
            anyhow::bail!("input closed")
        }
    }

    #[tokio::test]
    async fn source_errors_propagate() {
        let err = simulate_exam(&exam(), &mut Failing).await.unwrap_err();
        assert_eq!(err.to_string(), "input closed");
    }
}
