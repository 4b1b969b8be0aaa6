//! Lexical analyzer for Go source.
//!
//! [`tokenize`] walks the input once and returns every recognized token
//! together with every lexical error. Errors never stop the scan: the
//! offending text is skipped and scanning resumes right after it.

mod literals;
mod operators;

use tracing::debug;

use crate::models::{LexError, LexErrorKind, LexOutput, Token, TokenKind};

/// Tokenize Go source text.
pub fn tokenize(source: &str) -> LexOutput {
    let output = Lexer::new(source).run();
    debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "tokenized source"
    );
    output
}

/// Position of the first character of a token or error.
#[derive(Debug, Clone, Copy)]
struct Mark {
    pos: usize,
    line: u32,
    column: u32,
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    /// Char index where the current line begins.
    line_start: usize,
    output: LexOutput,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            line_start: 0,
            output: LexOutput::default(),
        }
    }

    fn run(mut self) -> LexOutput {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' | '\u{feff}' => {
                    self.bump();
                }
                '\n' => {
                    self.bump();
                }
                '/' if self.peek_at(1) == Some('/') => self.skip_line_comment(),
                '/' if self.peek_at(1) == Some('*') => self.skip_block_comment(),
                c if is_ident_start(c) => self.scan_word(),
                c if c.is_ascii_digit() => self.scan_number(),
                '.' if self.peek_at(1).is_some_and(|n| n.is_ascii_digit()) => self.scan_number(),
                '"' => self.scan_string(),
                '`' => self.scan_raw_string(),
                '\'' => self.scan_rune(),
                _ => self.scan_operator(),
            }
        }
        self.output
    }

    // ── Cursor ──────────────────────────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Consume one character, tracking line starts.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.line_start = self.pos;
        }
        Some(c)
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            column: (self.pos - self.line_start + 1) as u32,
        }
    }

    fn text_since(&self, mark: Mark) -> String {
        self.chars[mark.pos..self.pos].iter().collect()
    }

    // ── Emitters ────────────────────────────────────────────────────

    fn emit(&mut self, kind: TokenKind, mark: Mark) {
        let value = self.text_since(mark);
        self.output.tokens.push(Token {
            kind,
            value,
            line: mark.line,
            column: mark.column,
        });
    }

    fn error(&mut self, kind: LexErrorKind, mark: Mark) {
        self.output.errors.push(LexError {
            kind,
            line: mark.line,
            column: mark.column,
        });
    }

    // ── Scanners ────────────────────────────────────────────────────

    fn skip_line_comment(&mut self) {
        self.bump_while(|c| c != '\n');
    }

    fn skip_block_comment(&mut self) {
        let start = self.mark();
        self.bump();
        self.bump();
        loop {
            match self.bump() {
                Some('*') if self.peek() == Some('/') => {
                    self.bump();
                    return;
                }
                Some(_) => {}
                None => {
                    self.error(LexErrorKind::UnterminatedComment, start);
                    return;
                }
            }
        }
    }

    fn scan_word(&mut self) {
        let start = self.mark();
        self.bump_while(is_ident_continue);
        let kind = TokenKind::from_word(&self.text_since(start));
        self.emit(kind, start);
    }

    fn scan_operator(&mut self) {
        let start = self.mark();
        match operators::match_operator(&self.chars[self.pos..]) {
            Some((kind, len)) => {
                for _ in 0..len {
                    self.bump();
                }
                self.emit(kind, start);
            }
            None => {
                if let Some(c) = self.bump() {
                    self.error(LexErrorKind::IllegalCharacter(c), start);
                }
            }
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}
