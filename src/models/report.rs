//! Lexical errors and per-file analysis reports.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::token::{Token, TokenKind};

/// What went wrong at a given source position.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum LexErrorKind {
    #[error("Illegal character '{0}'")]
    IllegalCharacter(char),

    #[error("Unterminated string literal")]
    UnterminatedString,

    #[error("Unterminated rune literal")]
    UnterminatedRune,

    #[error("Empty rune literal")]
    EmptyRune,

    #[error("Unterminated block comment")]
    UnterminatedComment,

    #[error("Malformed number literal '{0}'")]
    MalformedNumber(String),
}

/// A lexical error. Collected alongside tokens; never aborts a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LexError {
    #[serde(flatten)]
    pub kind: LexErrorKind,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}, column {}", self.kind, self.line, self.column)
    }
}

/// Everything the lexer produced for one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

/// Token and error counts for a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    pub tokens: usize,
    pub errors: usize,
    pub keywords: usize,
    pub identifiers: usize,
}

impl Summary {
    /// Compute counts from tokens and errors.
    pub fn from_parts(tokens: &[Token], errors: &[LexError]) -> Self {
        let mut s = Summary {
            tokens: tokens.len(),
            errors: errors.len(),
            ..Summary::default()
        };
        for token in tokens {
            if token.kind.is_keyword() {
                s.keywords += 1;
            } else if token.kind == TokenKind::Id {
                s.identifiers += 1;
            }
        }
        s
    }
}

/// Result of analyzing a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LexReport {
    /// Path of the analyzed file, as given on the command line.
    pub source: String,
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexReport {
    pub fn new(source: impl Into<String>, output: LexOutput) -> Self {
        Self {
            source: source.into(),
            tokens: output.tokens,
            errors: output.errors,
        }
    }

    pub fn summary(&self) -> Summary {
        Summary::from_parts(&self.tokens, &self.errors)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, value: &str) -> Token {
        Token {
            kind,
            value: value.into(),
            line: 1,
            column: 1,
        }
    }

    #[test]
    fn lex_error_display() {
        let err = LexError {
            kind: LexErrorKind::IllegalCharacter('@'),
            line: 3,
            column: 7,
        };
        assert_eq!(err.to_string(), "Illegal character '@' at line 3, column 7");
    }

    #[test]
    fn lex_error_serializes_flat() {
        let err = LexError {
            kind: LexErrorKind::IllegalCharacter('$'),
            line: 2,
            column: 5,
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "illegal_character");
        assert_eq!(json["text"], "$");
        assert_eq!(json["line"], 2);
        assert_eq!(json["column"], 5);
    }

    #[test]
    fn summary_counts_keywords_and_identifiers() {
        let tokens = vec![
            token(TokenKind::Func, "func"),
            token(TokenKind::Id, "average"),
            token(TokenKind::Lparen, "("),
            token(TokenKind::Id, "a"),
            token(TokenKind::Return, "return"),
        ];
        let errors = vec![LexError {
            kind: LexErrorKind::UnterminatedString,
            line: 1,
            column: 1,
        }];
        let s = Summary::from_parts(&tokens, &errors);
        assert_eq!(s.tokens, 5);
        assert_eq!(s.errors, 1);
        assert_eq!(s.keywords, 2);
        assert_eq!(s.identifiers, 2);
    }

    #[test]
    fn report_has_errors() {
        let report = LexReport::new("main.go", LexOutput::default());
        assert!(!report.has_errors());
        assert_eq!(report.summary(), Summary::default());
    }
}
