//! Operator and delimiter table.
//!
//! Ordered longest spelling first so a linear scan yields maximal munch.

use crate::models::TokenKind;

pub(super) const OPERATORS: &[(&str, TokenKind)] = &[
    // Three characters
    ("<<=", TokenKind::LshiftAssign),
    (">>=", TokenKind::RshiftAssign),
    ("&^=", TokenKind::AndNotAssign),
    ("...", TokenKind::Ellipsis),
    // Two characters
    ("<<", TokenKind::Lshift),
    (">>", TokenKind::Rshift),
    ("&^", TokenKind::AndNot),
    ("+=", TokenKind::PlusAssign),
    ("-=", TokenKind::MinusAssign),
    ("*=", TokenKind::TimesAssign),
    ("/=", TokenKind::DivideAssign),
    ("%=", TokenKind::ModAssign),
    ("&=", TokenKind::AndAssign),
    ("|=", TokenKind::OrAssign),
    ("^=", TokenKind::XorAssign),
    ("&&", TokenKind::And),
    ("||", TokenKind::Or),
    ("<-", TokenKind::ChannelOp),
    ("++", TokenKind::Increment),
    ("--", TokenKind::Decrement),
    ("==", TokenKind::Eq),
    ("!=", TokenKind::Ne),
    ("<=", TokenKind::Le),
    (">=", TokenKind::Ge),
    (":=", TokenKind::DeclareAssign),
    // One character
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Times),
    ("/", TokenKind::Divide),
    ("%", TokenKind::Mod),
    ("&", TokenKind::Bitand),
    ("|", TokenKind::Bitor),
    ("^", TokenKind::Bitxor),
    ("~", TokenKind::Bitnot),
    ("<", TokenKind::Lt),
    (">", TokenKind::Gt),
    ("=", TokenKind::Assign),
    ("!", TokenKind::Not),
    ("(", TokenKind::Lparen),
    (")", TokenKind::Rparen),
    ("[", TokenKind::Lbracket),
    ("]", TokenKind::Rbracket),
    ("{", TokenKind::Lbrace),
    ("}", TokenKind::Rbrace),
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    (".", TokenKind::Dot),
    (":", TokenKind::Colon),
];

/// Find the longest operator spelled at the start of `rest`.
///
/// Returns the kind and its length in characters.
pub(super) fn match_operator(rest: &[char]) -> Option<(TokenKind, usize)> {
    OPERATORS.iter().find_map(|(spelling, kind)| {
        let len = spelling.chars().count();
        let matches = rest.len() >= len && spelling.chars().zip(rest).all(|(a, b)| a == *b);
        matches.then_some((*kind, len))
    })
}
