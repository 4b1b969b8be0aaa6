//! Token types produced by the Go lexer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a lexical token.
///
/// Serialized names match [`TokenKind::name`] (e.g. `INT_LITERAL`, `FUNC`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Identifiers and literals
    Id,
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    RuneLiteral,
    BoolLiteral,

    // Arithmetic
    Plus,
    Minus,
    Times,
    Divide,
    Mod,
    Increment,
    Decrement,

    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,

    // Logical
    And,
    Or,
    Not,

    // Assignment
    Assign,
    DeclareAssign,
    PlusAssign,
    MinusAssign,
    TimesAssign,
    DivideAssign,
    ModAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    LshiftAssign,
    RshiftAssign,
    AndNotAssign,

    // Bitwise
    Bitand,
    Bitor,
    Bitxor,
    Bitnot,
    Lshift,
    Rshift,
    AndNot,

    // Channels
    ChannelOp,

    // Delimiters
    Lparen,
    Rparen,
    Lbrace,
    Rbrace,
    Lbracket,
    Rbracket,
    Semicolon,
    Comma,
    Dot,
    Colon,
    Ellipsis,

    // Keywords
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    Type,
    Var,
}

/// Go's reserved words and the token kind each one lexes to.
pub const KEYWORDS: [(&str, TokenKind); 25] = [
    ("break", TokenKind::Break),
    ("case", TokenKind::Case),
    ("chan", TokenKind::Chan),
    ("const", TokenKind::Const),
    ("continue", TokenKind::Continue),
    ("default", TokenKind::Default),
    ("defer", TokenKind::Defer),
    ("else", TokenKind::Else),
    ("fallthrough", TokenKind::Fallthrough),
    ("for", TokenKind::For),
    ("func", TokenKind::Func),
    ("go", TokenKind::Go),
    ("goto", TokenKind::Goto),
    ("if", TokenKind::If),
    ("import", TokenKind::Import),
    ("interface", TokenKind::Interface),
    ("map", TokenKind::Map),
    ("package", TokenKind::Package),
    ("range", TokenKind::Range),
    ("return", TokenKind::Return),
    ("select", TokenKind::Select),
    ("struct", TokenKind::Struct),
    ("switch", TokenKind::Switch),
    ("type", TokenKind::Type),
    ("var", TokenKind::Var),
];

impl TokenKind {
    /// Classify an identifier-shaped word: keyword, boolean literal, or `ID`.
    pub fn from_word(word: &str) -> Self {
        if word == "true" || word == "false" {
            return TokenKind::BoolLiteral;
        }
        KEYWORDS
            .iter()
            .find(|(kw, _)| *kw == word)
            .map_or(TokenKind::Id, |(_, kind)| *kind)
    }

    /// Returns `true` for the 25 reserved words.
    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| *kind == self)
    }

    /// Stable upper-snake-case name used in reports and logs.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Id => "ID",
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::RuneLiteral => "RUNE_LITERAL",
            TokenKind::BoolLiteral => "BOOL_LITERAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Mod => "MOD",
            TokenKind::Increment => "INCREMENT",
            TokenKind::Decrement => "DECREMENT",
            TokenKind::Eq => "EQ",
            TokenKind::Ne => "NE",
            TokenKind::Lt => "LT",
            TokenKind::Le => "LE",
            TokenKind::Gt => "GT",
            TokenKind::Ge => "GE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::DeclareAssign => "DECLARE_ASSIGN",
            TokenKind::PlusAssign => "PLUS_ASSIGN",
            TokenKind::MinusAssign => "MINUS_ASSIGN",
            TokenKind::TimesAssign => "TIMES_ASSIGN",
            TokenKind::DivideAssign => "DIVIDE_ASSIGN",
            TokenKind::ModAssign => "MOD_ASSIGN",
            TokenKind::AndAssign => "AND_ASSIGN",
            TokenKind::OrAssign => "OR_ASSIGN",
            TokenKind::XorAssign => "XOR_ASSIGN",
            TokenKind::LshiftAssign => "LSHIFT_ASSIGN",
            TokenKind::RshiftAssign => "RSHIFT_ASSIGN",
            TokenKind::AndNotAssign => "AND_NOT_ASSIGN",
            TokenKind::Bitand => "BITAND",
            TokenKind::Bitor => "BITOR",
            TokenKind::Bitxor => "BITXOR",
            TokenKind::Bitnot => "BITNOT",
            TokenKind::Lshift => "LSHIFT",
            TokenKind::Rshift => "RSHIFT",
            TokenKind::AndNot => "AND_NOT",
            TokenKind::ChannelOp => "CHANNEL_OP",
            TokenKind::Lparen => "LPAREN",
            TokenKind::Rparen => "RPAREN",
            TokenKind::Lbrace => "LBRACE",
            TokenKind::Rbrace => "RBRACE",
            TokenKind::Lbracket => "LBRACKET",
            TokenKind::Rbracket => "RBRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Colon => "COLON",
            TokenKind::Ellipsis => "ELLIPSIS",
            TokenKind::Break => "BREAK",
            TokenKind::Case => "CASE",
            TokenKind::Chan => "CHAN",
            TokenKind::Const => "CONST",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Default => "DEFAULT",
            TokenKind::Defer => "DEFER",
            TokenKind::Else => "ELSE",
            TokenKind::Fallthrough => "FALLTHROUGH",
            TokenKind::For => "FOR",
            TokenKind::Func => "FUNC",
            TokenKind::Go => "GO",
            TokenKind::Goto => "GOTO",
            TokenKind::If => "IF",
            TokenKind::Import => "IMPORT",
            TokenKind::Interface => "INTERFACE",
            TokenKind::Map => "MAP",
            TokenKind::Package => "PACKAGE",
            TokenKind::Range => "RANGE",
            TokenKind::Return => "RETURN",
            TokenKind::Select => "SELECT",
            TokenKind::Struct => "STRUCT",
            TokenKind::Switch => "SWITCH",
            TokenKind::Type => "TYPE",
            TokenKind::Var => "VAR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A recognized token with its source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub value: String,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column, counted in characters.
    pub column: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_word_classifies_keywords_and_bools() {
        assert_eq!(TokenKind::from_word("func"), TokenKind::Func);
        assert_eq!(TokenKind::from_word("fallthrough"), TokenKind::Fallthrough);
        assert_eq!(TokenKind::from_word("true"), TokenKind::BoolLiteral);
        assert_eq!(TokenKind::from_word("false"), TokenKind::BoolLiteral);
        assert_eq!(TokenKind::from_word("Func"), TokenKind::Id);
        assert_eq!(TokenKind::from_word("points"), TokenKind::Id);
    }

    #[test]
    fn keyword_names_are_uppercase_spelling() {
        for (word, kind) in KEYWORDS {
            assert!(kind.is_keyword());
            assert_eq!(kind.name(), word.to_uppercase());
        }
        assert!(!TokenKind::Id.is_keyword());
    }

    #[test]
    fn serde_name_matches_display_name() {
        let kinds = [
            TokenKind::Id,
            TokenKind::IntLiteral,
            TokenKind::DeclareAssign,
            TokenKind::LshiftAssign,
            TokenKind::AndNotAssign,
            TokenKind::Bitnot,
            TokenKind::ChannelOp,
            TokenKind::Lbracket,
            TokenKind::Ellipsis,
            TokenKind::Ne,
        ];
        for kind in kinds {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.name().to_string()));
        }
        for (_, kind) in KEYWORDS {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.name().to_string()));
        }
    }
}
