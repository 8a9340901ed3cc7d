//! logos-based lexer for action attribute values such as
//! `switchTab('settings', 2)`.
//!
//! `true` / `false` are literal tokens, so they win over [`Token::Ident`] for
//! equal-length matches.

use logos::Logos;

/// Action token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    #[token("true")]
    True,

    #[token("false")]
    False,

    /// Single-quoted string, backslash escapes allowed.
    #[regex(r"'([^'\\]|\\.)*'")]
    SingleQuoted,

    /// Double-quoted string, backslash escapes allowed.
    #[regex(r#""([^"\\]|\\.)*""#)]
    DoubleQuoted,

    /// Integer, possibly negative.
    #[regex(r"-?[0-9]+")]
    Integer,

    /// Action name or bare argument.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_.-]*")]
    Ident,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(",")]
    Comma,
}

/// Tokenize an action string into `(Token, text)` pairs.
///
/// Input that fails to lex yields `Err` with the byte offset of the bad text.
pub fn tokenize(input: &str) -> Result<Vec<(Token, String)>, usize> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok((token, input[span].to_string())),
            Err(()) => Err(span.start),
        })
        .collect()
}

/// Strip the quotes from a quoted token and resolve backslash escapes.
pub fn unquote(text: &str) -> String {
    let inner = &text[1..text.len().saturating_sub(1).max(1)];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(ch);
        }
    }
    out
}
