//! Parsed action calls.

use std::fmt;

use super::lexer::{tokenize, unquote, Token};
use crate::error::{Result, UiError};

/// One argument of an action call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionArg {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl ActionArg {
    /// The argument as text. Integers and booleans are formatted.
    pub fn as_text(&self) -> String {
        match self {
            ActionArg::Str(s) => s.clone(),
            ActionArg::Int(n) => n.to_string(),
            ActionArg::Bool(b) => b.to_string(),
        }
    }

    /// The argument as an integer, parsing strings.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ActionArg::Int(n) => Some(*n),
            ActionArg::Str(s) => s.trim().parse().ok(),
            ActionArg::Bool(_) => None,
        }
    }
}

impl From<&str> for ActionArg {
    fn from(value: &str) -> Self {
        ActionArg::Str(value.to_owned())
    }
}

impl From<String> for ActionArg {
    fn from(value: String) -> Self {
        ActionArg::Str(value)
    }
}

impl From<i64> for ActionArg {
    fn from(value: i64) -> Self {
        ActionArg::Int(value)
    }
}

impl From<usize> for ActionArg {
    fn from(value: usize) -> Self {
        ActionArg::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<bool> for ActionArg {
    fn from(value: bool) -> Self {
        ActionArg::Bool(value)
    }
}

impl fmt::Display for ActionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionArg::Str(s) => {
                f.write_str("'")?;
                for ch in s.chars() {
                    if ch == '\'' || ch == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{ch}")?;
                }
                f.write_str("'")
            }
            ActionArg::Int(n) => write!(f, "{n}"),
            ActionArg::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// An action name plus its arguments, as carried by `data-action-*`
/// attributes.
///
/// `Display` writes the attribute form and [`ActionCall::parse`] reads it
/// back. A call with no arguments renders with empty parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCall {
    pub name: String,
    pub args: Vec<ActionArg>,
}

impl ActionCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument (builder).
    pub fn arg(mut self, arg: impl Into<ActionArg>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Parse `name`, `name()` or `name(arg, ...)`.
    ///
    /// Arguments are quoted strings, integers, `true`/`false`, or bare
    /// identifiers (read as strings).
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |message: String| UiError::InvalidArguments {
            action: input.to_owned(),
            message,
        };
        let tokens = tokenize(input)
            .map_err(|offset| invalid(format!("unexpected character at offset {offset}")))?;
        let mut iter = tokens.into_iter().peekable();

        let name = match iter.next() {
            Some((Token::Ident, text)) => text,
            _ => return Err(invalid("expected an action name".into())),
        };
        let mut call = ActionCall::new(name);

        match iter.next() {
            None => return Ok(call),
            Some((Token::ParenOpen, _)) => {}
            Some((_, text)) => return Err(invalid(format!("unexpected `{text}` after name"))),
        }

        if matches!(iter.peek(), Some((Token::ParenClose, _))) {
            iter.next();
        } else {
            loop {
                let arg = match iter.next() {
                    Some((Token::SingleQuoted | Token::DoubleQuoted, text)) => {
                        ActionArg::Str(unquote(&text))
                    }
                    Some((Token::Integer, text)) => ActionArg::Int(
                        text.parse()
                            .map_err(|_| invalid(format!("integer `{text}` out of range")))?,
                    ),
                    Some((Token::True, _)) => ActionArg::Bool(true),
                    Some((Token::False, _)) => ActionArg::Bool(false),
                    Some((Token::Ident, text)) => ActionArg::Str(text),
                    Some((_, text)) => return Err(invalid(format!("unexpected `{text}`"))),
                    None => return Err(invalid("unterminated argument list".into())),
                };
                call.args.push(arg);
                match iter.next() {
                    Some((Token::Comma, _)) => continue,
                    Some((Token::ParenClose, _)) => break,
                    Some((_, text)) => return Err(invalid(format!("expected `,` or `)`, got `{text}`"))),
                    None => return Err(invalid("unterminated argument list".into())),
                }
            }
        }

        match iter.next() {
            None => Ok(call),
            Some((_, text)) => Err(invalid(format!("trailing `{text}`"))),
        }
    }

    /// The argument at `index` as text.
    pub fn text(&self, index: usize) -> Option<String> {
        self.args.get(index).map(ActionArg::as_text)
    }
}

impl fmt::Display for ActionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}
