pub mod exam;
pub mod init;
pub mod profile;
pub mod questions;
pub mod teacher;

use std::path::Path;

use anyhow::Result;

use giftbank_core::collection::QuestionCollection;
use giftbank_core::parser::parse_file;

/// Parse a bank file. Structural problems are logged and the questions
/// recovered around them are kept.
pub(crate) fn load_bank(path: &Path) -> Result<QuestionCollection> {
    Ok(parse_file(path)?.into_collection())
}

/// Cut `text` to at most `max` characters, marking the cut with `...`.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
