//! Numeric, string and rune literal scanning.

use crate::models::{LexErrorKind, TokenKind};

use super::Lexer;

impl Lexer {
    pub(super) fn scan_number(&mut self) {
        let start = self.mark();

        if self.peek() == Some('0') {
            let radix = match self.peek_at(1) {
                Some('x' | 'X') => Some(16),
                Some('o' | 'O') => Some(8),
                Some('b' | 'B') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                self.bump();
                self.bump();
                let digits_start = self.pos;
                self.bump_while(|c| c == '_' || c.is_digit(radix));
                let has_digit = self.chars[digits_start..self.pos].iter().any(|c| *c != '_');
                if has_digit {
                    self.emit(TokenKind::IntLiteral, start);
                } else {
                    let text = self.text_since(start);
                    self.error(LexErrorKind::MalformedNumber(text), start);
                }
                return;
            }
        }

        let mut is_float = false;
        self.bump_while(is_decimal);

        // `1.` is a float, `1..` never occurs in Go but keep `...` intact.
        if self.peek() == Some('.') && self.peek_at(1) != Some('.') {
            is_float = true;
            self.bump();
            self.bump_while(is_decimal);
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let exponent_follows = match self.peek_at(1) {
                Some(c) if c.is_ascii_digit() => true,
                Some('+' | '-') => self.peek_at(2).is_some_and(|c| c.is_ascii_digit()),
                _ => false,
            };
            if exponent_follows {
                is_float = true;
                self.bump();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.bump();
                }
                self.bump_while(is_decimal);
            }
        }

        if is_float {
            self.emit(TokenKind::FloatLiteral, start);
            return;
        }

        // Legacy octal: a leading zero admits only the digits 0 to 7.
        let text = self.text_since(start);
        if text.starts_with('0') && text.contains(['8', '9']) {
            self.error(LexErrorKind::MalformedNumber(text), start);
        } else {
            self.emit(TokenKind::IntLiteral, start);
        }
    }

    /// Interpreted string: `"..."`, escapes allowed, may not span lines.
    pub(super) fn scan_string(&mut self) {
        let start = self.mark();
        self.bump();
        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.error(LexErrorKind::UnterminatedString, start);
                    return;
                }
                Some('\\') => {
                    self.bump();
                    if self.peek().is_some_and(|c| c != '\n') {
                        self.bump();
                    }
                }
                Some('"') => {
                    self.bump();
                    self.emit(TokenKind::StringLiteral, start);
                    return;
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    /// Raw string: `` `...` ``, no escapes, may span lines.
    pub(super) fn scan_raw_string(&mut self) {
        let start = self.mark();
        self.bump();
        self.bump_while(|c| c != '`');
        if self.bump().is_some() {
            self.emit(TokenKind::StringLiteral, start);
        } else {
            self.error(LexErrorKind::UnterminatedString, start);
        }
    }

    pub(super) fn scan_rune(&mut self) {
        let start = self.mark();
        self.bump();
        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.error(LexErrorKind::UnterminatedRune, start);
                    return;
                }
                Some('\\') => {
                    self.bump();
                    if self.peek().is_some_and(|c| c != '\n') {
                        self.bump();
                    }
                }
                Some('\'') => {
                    self.bump();
                    if self.pos - start.pos == 2 {
                        self.error(LexErrorKind::EmptyRune, start);
                    } else {
                        self.emit(TokenKind::RuneLiteral, start);
                    }
                    return;
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }
}

fn is_decimal(c: char) -> bool {
    c == '_' || c.is_ascii_digit()
}
