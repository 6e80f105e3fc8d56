//! Tokenizer for the question-bank notation.
//!
//! Comment (`//`) and category (`$CATEGORY:`) lines are blanked out first,
//! keeping their line endings so offsets and line numbers still match the
//! input. The remaining text is scanned once: each symbol is its own token,
//! each line break is its own token, and every run of other characters
//! becomes a trimmed text token. Tokenizing never fails.

use std::fmt;
use std::ops::Range;

/// Prefix of a comment line.
pub const COMMENT_MARKER: &str = "//";
/// Prefix of a category line.
pub const CATEGORY_MARKER: &str = "$CATEGORY:";

/// What a token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `::`
    DoubleColon,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `~`
    Tilde,
    /// `=`
    Equals,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `\n`, `\r\n` or `\r`
    LineBreak,
    /// A trimmed run of non-symbol characters.
    Text,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::DoubleColon => write!(f, "`::`"),
            TokenKind::OpenBrace => write!(f, "`{{`"),
            TokenKind::CloseBrace => write!(f, "`}}`"),
            TokenKind::Tilde => write!(f, "`~`"),
            TokenKind::Equals => write!(f, "`=`"),
            TokenKind::OpenBracket => write!(f, "`[`"),
            TokenKind::CloseBracket => write!(f, "`]`"),
            TokenKind::LineBreak => write!(f, "line break"),
            TokenKind::Text => write!(f, "text"),
        }
    }
}

/// A token and its byte span in the preprocessed source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

/// An immutable token array over the preprocessed source text.
#[derive(Debug, Clone)]
pub struct TokenStream {
    source: String,
    tokens: Vec<Token>,
}

impl TokenStream {
    /// The source text after comment and category lines were blanked out.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&Token> {
        self.tokens.get(pos)
    }

    pub fn kind_at(&self, pos: usize) -> Option<TokenKind> {
        self.tokens.get(pos).map(|t| t.kind)
    }

    /// The source text covered by a token.
    pub fn text(&self, token: &Token) -> &str {
        &self.source[token.span.clone()]
    }

    /// The source text from the start of token `from` to the end of token `to - 1`.
    pub fn slice(&self, from: usize, to: usize) -> &str {
        if from >= to || to > self.tokens.len() {
            return "";
        }
        &self.source[self.tokens[from].span.start..self.tokens[to - 1].span.end]
    }

    /// 1-based line number of a byte offset.
    pub fn line_of(&self, offset: usize) -> usize {
        let end = offset.min(self.source.len());
        let bytes = self.source.as_bytes();
        bytes[..end]
            .iter()
            .enumerate()
            .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
            .count()
            + 1
    }
}

/// Tokenize question-bank text.
pub fn tokenize(input: &str) -> TokenStream {
    let source = blank_ignored_lines(input);
    let tokens = scan(&source);
    tracing::debug!(tokens = tokens.len(), bytes = source.len(), "tokenized");
    TokenStream { source, tokens }
}

/// Replace comment and category lines with empty lines.
pub fn blank_ignored_lines(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while !rest.is_empty() {
        let (line, terminator, tail) = split_line(rest);
        let trimmed = line.trim_start();
        if !(trimmed.starts_with(COMMENT_MARKER) || trimmed.starts_with(CATEGORY_MARKER)) {
            out.push_str(line);
        }
        out.push_str(terminator);
        rest = tail;
    }
    out
}

/// Split off the first line, recognising `\r\n`, `\n` and a bare `\r`.
fn split_line(input: &str) -> (&str, &str, &str) {
    let Some(i) = input.find(['\r', '\n']) else {
        return (input, "", "");
    };
    let len = if input[i..].starts_with("\r\n") { 2 } else { 1 };
    (&input[..i], &input[i..i + len], &input[i + len..])
}

// Symbols are all ASCII, so byte positions at symbol boundaries are always
// valid char boundaries.
fn scan(source: &str) -> Vec<Token> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(&b) = bytes.get(pos) {
        let symbol = match b {
            b':' if bytes.get(pos + 1) == Some(&b':') => Some((TokenKind::DoubleColon, 2)),
            b'{' => Some((TokenKind::OpenBrace, 1)),
            b'}' => Some((TokenKind::CloseBrace, 1)),
            b'~' => Some((TokenKind::Tilde, 1)),
            b'=' => Some((TokenKind::Equals, 1)),
            b'[' => Some((TokenKind::OpenBracket, 1)),
            b']' => Some((TokenKind::CloseBracket, 1)),
            b'\n' => Some((TokenKind::LineBreak, 1)),
            b'\r' if bytes.get(pos + 1) == Some(&b'\n') => Some((TokenKind::LineBreak, 2)),
            b'\r' => Some((TokenKind::LineBreak, 1)),
            _ => None,
        };

        match symbol {
            Some((kind, width)) => {
                push_text(source, text_start..pos, &mut tokens);
                tokens.push(Token {
                    kind,
                    span: pos..pos + width,
                });
                pos += width;
                text_start = pos;
            }
            None => pos += 1,
        }
    }

    push_text(source, text_start..pos, &mut tokens);
    tokens
}

fn push_text(source: &str, range: Range<usize>, tokens: &mut Vec<Token>) {
    let raw = &source[range.clone()];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let start = range.start + (raw.len() - raw.trim_start().len());
    tokens.push(Token {
        kind: TokenKind::Text,
        span: start..start + trimmed.len(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(stream: &TokenStream) -> Vec<TokenKind> {
        stream.tokens().iter().map(|t| t.kind).collect()
    }

    fn texts(stream: &TokenStream) -> Vec<&str> {
        stream.tokens().iter().map(|t| stream.text(t)).collect()
    }

    #[test]
    fn splits_symbols_and_text() {
        let stream = tokenize("::Q1:: What is 2+2? {=4 ~3}");
        assert_eq!(
            texts(&stream),
            vec!["::", "Q1", "::", "What is 2+2?", "{", "=", "4", "~", "3", "}"]
        );
        assert_eq!(stream.kind_at(0), Some(TokenKind::DoubleColon));
        assert_eq!(stream.kind_at(3), Some(TokenKind::Text));
    }

    #[test]
    fn single_colon_is_text() {
        let stream = tokenize("::Q:: Ratio 1:2 {=yes}");
        assert!(texts(&stream).contains(&"Ratio 1:2"));
    }

    #[test]
    fn whitespace_only_runs_are_dropped() {
        let stream = tokenize("{   =   a   }");
        assert_eq!(texts(&stream), vec!["{", "=", "a", "}"]);
    }

    #[test]
    fn line_breaks_are_tokens() {
        let stream = tokenize("a\r\nb\nc\rd");
        assert_eq!(
            kinds(&stream),
            vec![
                TokenKind::Text,
                TokenKind::LineBreak,
                TokenKind::Text,
                TokenKind::LineBreak,
                TokenKind::Text,
                TokenKind::LineBreak,
                TokenKind::Text,
            ]
        );
        assert_eq!(stream.tokens()[1].span, 1..3);
    }

    #[test]
    fn comments_and_categories_are_blanked() {
        let input = "// header comment\n$CATEGORY: geo/europe\n::Q1:: Capital? {=Paris}\n";
        let stream = tokenize(input);
        assert!(!stream.source().contains("header"));
        assert!(!stream.source().contains("CATEGORY"));
        assert_eq!(stream.line_of(stream.tokens()[2].span.start), 3);
        assert!(texts(&stream).contains(&"Capital?"));
    }

    #[test]
    fn carriage_return_only_lines_are_blanked_individually() {
        let stream = tokenize("// header\r::Q1:: Capital? {=Paris}\r$CATEGORY: geo\r::Q2:: Sky? {T}\r");
        assert_eq!(stream.source(), "\r::Q1:: Capital? {=Paris}\r\r::Q2:: Sky? {T}\r");
        assert!(texts(&stream).contains(&"Capital?"));
        assert!(texts(&stream).contains(&"Sky?"));
        let sky = stream
            .tokens()
            .iter()
            .find(|t| stream.text(t) == "Sky?")
            .unwrap();
        assert_eq!(stream.line_of(sky.span.start), 4);
    }

    #[test]
    fn mixed_line_endings_keep_terminators() {
        let input = "// a\r\n// b\n// c\rx";
        assert_eq!(blank_ignored_lines(input), "\r\n\n\rx");
    }

    #[test]
    fn indented_comment_is_blanked() {
        let stream = tokenize("   // indented\n::Q:: x");
        assert!(!stream.source().contains("indented"));
    }

    #[test]
    fn inline_double_slash_is_kept() {
        let stream = tokenize("::Q:: See http://example.com {}");
        assert!(texts(&stream).contains(&"See http://example.com"));
    }

    #[test]
    fn unicode_text_survives() {
        let stream = tokenize("::Q:: Où est la tour Eiffel ? {=à Paris}");
        assert!(texts(&stream).contains(&"Où est la tour Eiffel ?"));
        assert!(texts(&stream).contains(&"à Paris"));
    }

    #[test]
    fn slice_covers_token_range() {
        let stream = tokenize("::Q1::  Hello  {=x}");
        assert_eq!(stream.slice(0, 4), "::Q1::  Hello");
        assert_eq!(stream.slice(3, 3), "");
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }
}
