//! Shared types used across all modules.
//!
//! Tokens, lexical errors and per-file reports live here so the lexer,
//! the log writer and the output renderers agree on one representation.

pub mod report;
pub mod token;

pub use report::{LexError, LexErrorKind, LexOutput, LexReport, Summary};
pub use token::{KEYWORDS, Token, TokenKind};
