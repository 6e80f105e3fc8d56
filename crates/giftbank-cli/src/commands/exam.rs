//! The `giftbank exam` commands.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use giftbank_core::config::GiftbankConfig;
use giftbank_core::exam::{
    build_exam, load_responses, save_responses, score_exam, select_by_ids, write_exam,
};
use giftbank_core::model::{Question, QuestionKind};
use giftbank_core::parser::parse_file;
use giftbank_core::report::ExamReport;
use giftbank_core::simulate::{simulate_exam, AnswerSource};
use giftbank_core::statistics::TypeProfile;

use super::load_bank;

pub fn build(
    file: PathBuf,
    ids: String,
    output: Option<PathBuf>,
    config: &GiftbankConfig,
) -> Result<()> {
    let bank = load_bank(&file)?;
    let ids: Vec<&str> = ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();

    let selected = select_by_ids(&bank, &ids)?;
    let exam = build_exam(selected, &config.exam)?;

    let output = output.unwrap_or_else(|| config.output_dir.join("exam.gift"));
    write_exam(&output, &exam, &config.exam)?;

    let profile = TypeProfile::of(&exam);
    let kinds: Vec<String> = profile
        .kinds
        .iter()
        .filter(|s| s.count > 0)
        .map(|s| format!("{} {}", s.count, s.kind))
        .collect();
    println!(
        "Wrote {} question(s) to {} ({})",
        exam.len(),
        output.display(),
        kinds.join(", ")
    );
    Ok(())
}

pub fn check(file: PathBuf, config: &GiftbankConfig) -> Result<()> {
    let outcome = parse_file(&file)?;

    println!(
        "{}: {} question(s), {} parse error(s)",
        file.display(),
        outcome.questions.len(),
        outcome.error_count()
    );
    for diagnostic in &outcome.diagnostics {
        println!("  ERROR: {diagnostic}");
    }

    let clean = outcome.is_clean();
    let violations = outcome.into_collection().exam_violations(&config.exam);
    for violation in &violations {
        println!("  INVALID: {violation}");
    }

    if clean && violations.is_empty() {
        println!("Exam is valid.");
        Ok(())
    } else {
        anyhow::bail!("{} is not a valid exam", file.display())
    }
}

pub async fn simulate(file: PathBuf, save: Option<PathBuf>) -> Result<()> {
    let exam = load_bank(&file)?;
    if exam.is_empty() {
        anyhow::bail!("no questions found in {}", file.display());
    }

    println!(
        "Exam: {} ({} questions). Type 'quit' or press Ctrl-D to stop.\n",
        file.display(),
        exam.len()
    );

    let mut source = StdinAnswers::new(exam.len());
    let session = simulate_exam(&exam, &mut source).await?;

    if !session.completed {
        println!("\nSession ended early.");
    }

    let report = ExamReport::new(exam_name(&file), &exam, session.score);
    println!("\n{}", report.to_text().trim_end());

    if let Some(path) = save {
        save_responses(&path, &session.responses)?;
        println!("Responses saved to {}", path.display());
    }

    Ok(())
}

pub fn score(
    exam_path: PathBuf,
    answers: PathBuf,
    format: String,
    output: Option<PathBuf>,
    config: &GiftbankConfig,
) -> Result<()> {
    let exam = load_bank(&exam_path)?;
    let responses = load_responses(&answers)?;
    let score = score_exam(&exam, &responses);
    let report = ExamReport::new(exam_name(&exam_path), &exam, score);

    match format.as_str() {
        "text" => match output {
            Some(path) => write_text(&path, &report.to_text())?,
            None => print!("{}", report.to_text()),
        },
        "json" => match output {
            Some(path) => {
                report.save_json(&path)?;
                println!("JSON report: {}", path.display());
            }
            None => println!("{}", serde_json::to_string_pretty(&report)?),
        },
        "html" => {
            let path = output.unwrap_or_else(|| {
                let timestamp = report.created_at.format("%Y%m%d-%H%M%S");
                config.output_dir.join(format!("report-{timestamp}.html"))
            });
            giftbank_report::write_html_report(&report, &path)?;
            println!(
                "{}/{} correct ({:.1}%)",
                report.score.score, report.score.total, report.score.percent
            );
            println!("HTML report: {}", path.display());
        }
        other => anyhow::bail!("unknown format '{other}' (expected text, json or html)"),
    }

    Ok(())
}

fn exam_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    println!("Text report: {}", path.display());
    Ok(())
}

/// Reads one answer per line from stdin.
struct StdinAnswers {
    lines: Lines<BufReader<Stdin>>,
    total: usize,
}

impl StdinAnswers {
    fn new(total: usize) -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            total,
        }
    }
}

#[async_trait]
impl AnswerSource for StdinAnswers {
    async fn answer(&mut self, index: usize, question: &Question) -> Result<Option<String>> {
        println!("[{}/{}] {} ({})", index + 1, self.total, question.id(), question.kind());
        println!("{}", question.statement());
        for hint in answer_hints(question) {
            println!("  {hint}");
        }
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = self.lines.next_line().await? else {
            return Ok(None);
        };
        println!();
        match line.trim() {
            "quit" | "exit" => Ok(None),
            answer => Ok(Some(answer.to_string())),
        }
    }
}

/// Choices shown under a question, without revealing which are correct.
fn answer_hints(question: &Question) -> Vec<String> {
    match question.kind() {
        QuestionKind::MultipleChoice => question
            .answers()
            .iter()
            .map(|a| format!("- {}", a.text))
            .collect(),
        QuestionKind::TrueFalse => vec!["(TRUE / FALSE)".to_string()],
        QuestionKind::Matching => {
            let mut hints = vec!["Answer as 'item -> match'.".to_string()];
            hints.extend(question.answers().iter().map(|a| format!("- {}", a.text)));
            let targets: Vec<&str> = question
                .answers()
                .iter()
                .filter_map(|a| a.match_target.as_deref())
                .collect();
            hints.push(format!("Matches: {}", targets.join(", ")));
            hints
        }
        QuestionKind::Essay => vec!["(free text, not auto-graded)".to_string()],
        QuestionKind::ShortAnswer | QuestionKind::Unknown => Vec::new(),
    }
}
