//! vCard 3.0 contact cards for exam authors.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest value accepted for any card field.
pub const MAX_FIELD_LEN: usize = 255;

/// Contact details of the teacher who authored an exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherCard {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub institution: String,
    /// Subject taught, emitted as `CATEGORIES`.
    pub subject: String,
}

/// Reasons a card cannot be emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VCardError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("field '{field}' is too long (maximum {max} characters)")]
    FieldTooLong { field: &'static str, max: usize },
}

impl TeacherCard {
    /// Build a card, trimming every field.
    pub fn new(
        last_name: &str,
        first_name: &str,
        email: &str,
        institution: &str,
        subject: &str,
    ) -> Self {
        Self {
            last_name: last_name.trim().to_string(),
            first_name: first_name.trim().to_string(),
            email: email.trim().to_string(),
            institution: institution.trim().to_string(),
            subject: subject.trim().to_string(),
        }
    }

    fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("last_name", &self.last_name),
            ("first_name", &self.first_name),
            ("email", &self.email),
            ("institution", &self.institution),
            ("subject", &self.subject),
        ]
    }

    pub fn validate(&self) -> Result<(), VCardError> {
        let missing: Vec<&'static str> = self
            .fields()
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(VCardError::MissingFields(missing));
        }

        if !is_plausible_email(&self.email) {
            return Err(VCardError::InvalidEmail(self.email.clone()));
        }

        if let Some((field, _)) = self
            .fields()
            .iter()
            .find(|(_, value)| value.chars().count() > MAX_FIELD_LEN)
        {
            return Err(VCardError::FieldTooLong {
                field: *field,
                max: MAX_FIELD_LEN,
            });
        }

        Ok(())
    }

    /// Render the card as vCard 3.0 text with CRLF line endings.
    pub fn to_vcard(&self, revision: DateTime<Utc>) -> Result<String, VCardError> {
        self.validate()?;

        let lines = [
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!(
                "FN:{}",
                escape_text(&format!("{} {}", self.first_name, self.last_name))
            ),
            format!(
                "N:{};{};;;",
                escape_text(&self.last_name),
                escape_text(&self.first_name)
            ),
            format!("EMAIL;TYPE=INTERNET:{}", escape_text(&self.email)),
            format!("ORG:{}", escape_text(&self.institution)),
            format!("CATEGORIES:{}", escape_text(&self.subject)),
            format!("REV:{}", revision.format("%Y%m%dT%H%M%SZ")),
            "END:VCARD".to_string(),
        ];

        let mut out = lines.join("\r\n");
        out.push_str("\r\n");
        Ok(out)
    }
}

/// One `@`, a non-empty local part, a dotted domain and no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Escape a text value (backslash, comma, semicolon, line breaks).
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out
}

/// Validate a card and write it to `path`, stamped with the current time.
pub fn write_vcard(card: &TeacherCard, path: &Path) -> Result<()> {
    let text = card.to_vcard(Utc::now())?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)
        .with_context(|| format!("failed to write vCard to {}", path.display()))?;
    Ok(())
}
