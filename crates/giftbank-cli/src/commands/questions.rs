//! The `giftbank questions` commands.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use giftbank_core::model::Question;

use super::{load_bank, truncate};

const STATEMENT_WIDTH: usize = 60;

pub fn list(file: PathBuf, json: bool) -> Result<()> {
    let bank = load_bank(&file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(bank.all())?);
        return Ok(());
    }

    if bank.is_empty() {
        println!("No questions found in {}.", file.display());
        return Ok(());
    }

    println!("{}", question_table(bank.iter()));
    println!("{} question(s)", bank.len());
    Ok(())
}

pub fn show(file: PathBuf, id: String) -> Result<()> {
    let bank = load_bank(&file)?;

    let id = id.trim();
    let question = bank.get(id).or_else(|| {
        id.chars()
            .all(|c| c.is_ascii_digit())
            .then(|| bank.get(&format!("Q{id}")))
            .flatten()
    });
    let Some(question) = question else {
        anyhow::bail!("question '{id}' not found in {}", file.display());
    };

    print_question(question);
    Ok(())
}

pub fn search(file: PathBuf, keyword: String) -> Result<()> {
    let bank = load_bank(&file)?;
    let hits = bank.search(&keyword);

    if hits.is_empty() {
        println!("No questions match '{keyword}'.");
        return Ok(());
    }

    println!("{}", question_table(hits.iter().copied()));
    println!("{} match(es) for '{keyword}'", hits.len());
    Ok(())
}

fn question_table<'a>(questions: impl Iterator<Item = &'a Question>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Type", "Statement", "Answers"]);
    for q in questions {
        table.add_row(vec![
            Cell::new(q.id()),
            Cell::new(q.kind()),
            Cell::new(truncate(q.statement(), STATEMENT_WIDTH)),
            Cell::new(q.answers().len()),
        ]);
    }
    table
}

fn print_question(q: &Question) {
    println!("ID:        {}", q.id());
    println!("Type:      {}", q.kind());
    println!("Statement: {}", q.statement());

    if !q.answers().is_empty() {
        println!("Answers:");
        for a in q.answers() {
            let marker = if a.is_correct { '=' } else { '~' };
            let mut line = format!("  {marker} {}", a.text);
            if let Some(target) = &a.match_target {
                line.push_str(&format!(" -> {target}"));
            }
            if let Some(feedback) = &a.feedback {
                line.push_str(&format!("  # {feedback}"));
            }
            println!("{line}");
        }
    }

    if !q.metadata().is_empty() {
        println!("Metadata:");
        for (key, value) in q.metadata() {
            println!("  {key}: {value}");
        }
    }

    println!("\nSource:\n{}", q.source_text());
}
