//! Configuration loading for giftbank.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::collection::ExamRules;

/// Top-level giftbank configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftbankConfig {
    /// Exam size bounds.
    #[serde(default)]
    pub exam: ExamRules,
    #[serde(default)]
    pub histogram: HistogramConfig,
    /// Where exams, reports and contact cards are written by default.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// Terminal histogram appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramConfig {
    /// Cells spanned by the longest bar.
    #[serde(default = "default_width")]
    pub width: usize,
    /// String repeated to draw a bar.
    #[serde(default = "default_bar")]
    pub bar: String,
}

fn default_width() -> usize {
    30
}
fn default_bar() -> String {
    "█".to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./giftbank-output")
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            bar: default_bar(),
        }
    }
}

impl Default for GiftbankConfig {
    fn default() -> Self {
        Self {
            exam: ExamRules::default(),
            histogram: HistogramConfig::default(),
            output_dir: default_output_dir(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        // Substituted values are not scanned again.
        result.push_str(&std::env::var(&rest[start + 2..start + end]).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `giftbank.toml` in the current directory
/// 2. `~/.config/giftbank/config.toml`
///
/// Environment variable override: `GIFTBANK_OUTPUT_DIR`.
pub fn load_config() -> Result<GiftbankConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<GiftbankConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("giftbank.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<GiftbankConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GiftbankConfig::default(),
    };

    if let Ok(dir) = std::env::var("GIFTBANK_OUTPUT_DIR") {
        config.output_dir = PathBuf::from(dir);
    }
    config.output_dir = PathBuf::from(resolve_env_vars(&config.output_dir.to_string_lossy()));

    if config.exam.min_questions > config.exam.max_questions {
        anyhow::bail!(
            "invalid exam bounds: min_questions ({}) exceeds max_questions ({})",
            config.exam.min_questions,
            config.exam.max_questions
        );
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("giftbank"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_GIFTBANK_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_GIFTBANK_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_GIFTBANK_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("open ${brace"), "open ${brace");
        std::env::remove_var("_GIFTBANK_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_expand_values() {
        std::env::set_var("_GIFTBANK_SELF_REF", "${_GIFTBANK_SELF_REF}");
        assert_eq!(
            resolve_env_vars("out/${_GIFTBANK_SELF_REF}/x"),
            "out/${_GIFTBANK_SELF_REF}/x"
        );
        std::env::remove_var("_GIFTBANK_SELF_REF");
    }

    #[test]
    fn default_config() {
        let config = GiftbankConfig::default();
        assert_eq!(config.exam.min_questions, 15);
        assert_eq!(config.exam.max_questions, 20);
        assert_eq!(config.histogram.width, 30);
    }

    #[test]
    fn parse_partial_config() {
        let config: GiftbankConfig = toml::from_str(
            r##"
output_dir = "exams"

[exam]
max_questions = 25

[histogram]
bar = "#"
"##,
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("exams"));
        assert_eq!(config.exam.min_questions, 15);
        assert_eq!(config.exam.max_questions, 25);
        assert_eq!(config.histogram.bar, "#");
        assert_eq!(config.histogram.width, 30);
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("giftbank.toml");
        std::fs::write(&path, "[exam]\nmin_questions = 5\nmax_questions = 8\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.exam.min_questions, 5);
        assert_eq!(config.exam.max_questions, 8);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("giftbank.toml");
        std::fs::write(&path, "[exam]\nmin_questions = 9\nmax_questions = 3\n").unwrap();
        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("invalid exam bounds"));
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "exam = [").unwrap();
        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }
}
