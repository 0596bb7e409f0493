use std::fmt;

use miette::{Diagnostic, LabeledSpan};
use serde::Serialize;
use thiserror::Error;

use crate::lexer::token::{Position, Span};

/// A lexical defect found while scanning, located at the start of the
/// offending lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct LexicalError {
    pub kind: LexErrorKind,
    pub position: Position,
    pub span: Span,
    /// Best-effort text captured before recovery.
    pub lexeme: String,
}

impl LexicalError {
    pub fn new(
        kind: LexErrorKind,
        lexeme: impl Into<String>,
        position: Position,
        span: Span,
    ) -> Self {
        Self {
            kind,
            position,
            span,
            lexeme: lexeme.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// Human-readable explanation built from the kind's parameters.
    pub fn reason(&self) -> String {
        self.kind.to_string()
    }
}

impl Diagnostic for LexicalError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.kind.help().map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some("here".to_owned()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Taxonomy name of a lexical error, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidCharacter,
    MalformedInteger,
    MalformedFloat,
    UnterminatedString,
    UnterminatedChar,
    InvalidCharLiteral,
    InvalidIdentifier,
    UnclosedComment,
    InvalidEscape,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidCharacter => "INVALID_CHARACTER",
            ErrorCode::MalformedInteger => "MALFORMED_INTEGER",
            ErrorCode::MalformedFloat => "MALFORMED_FLOAT",
            ErrorCode::UnterminatedString => "UNTERMINATED_STRING",
            ErrorCode::UnterminatedChar => "UNTERMINATED_CHAR",
            ErrorCode::InvalidCharLiteral => "INVALID_CHAR_LITERAL",
            ErrorCode::InvalidIdentifier => "INVALID_IDENTIFIER",
            ErrorCode::UnclosedComment => "UNCLOSED_COMMENT",
            ErrorCode::InvalidEscape => "INVALID_ESCAPE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What went wrong, with the parameters needed to explain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character outside the source alphabet.
    InvalidCharacter { ch: char },
    MalformedInteger { defect: NumberDefect },
    MalformedFloat { defect: NumberDefect },
    /// Newline or end of input before the closing `"`.
    UnterminatedString,
    /// Newline or end of input before the closing `'`.
    UnterminatedChar,
    InvalidCharLiteral { defect: CharLiteralDefect },
    InvalidIdentifier { defect: IdentifierDefect },
    /// End of input inside `#* ... *#`.
    UnclosedComment,
    /// Unknown escape inside a string literal.
    InvalidEscape { escape: char },
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::InvalidCharacter { .. } => ErrorCode::InvalidCharacter,
            LexErrorKind::MalformedInteger { .. } => ErrorCode::MalformedInteger,
            LexErrorKind::MalformedFloat { .. } => ErrorCode::MalformedFloat,
            LexErrorKind::UnterminatedString => ErrorCode::UnterminatedString,
            LexErrorKind::UnterminatedChar => ErrorCode::UnterminatedChar,
            LexErrorKind::InvalidCharLiteral { .. } => ErrorCode::InvalidCharLiteral,
            LexErrorKind::InvalidIdentifier { .. } => ErrorCode::InvalidIdentifier,
            LexErrorKind::UnclosedComment => ErrorCode::UnclosedComment,
            LexErrorKind::InvalidEscape { .. } => ErrorCode::InvalidEscape,
        }
    }

    fn help(&self) -> Option<&'static str> {
        match self {
            LexErrorKind::UnterminatedString => Some("close the string with '\"' on the same line"),
            LexErrorKind::UnterminatedChar => Some("close the character literal with '''"),
            LexErrorKind::UnclosedComment => Some("close the comment with '*#'"),
            LexErrorKind::InvalidEscape { .. }
            | LexErrorKind::InvalidCharLiteral {
                defect: CharLiteralDefect::InvalidEscape { .. },
            } => Some("valid escapes are \\n \\t \\r \\0 \\\\ \\\" \\'"),
            LexErrorKind::InvalidIdentifier {
                defect: IdentifierDefect::LeadingDigit,
            } => Some("identifiers must start with a letter or '_'"),
            _ => None,
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::InvalidCharacter { ch } => write!(
                f,
                "invalid character '{}' (U+{:04X})",
                ch.escape_debug(),
                u32::from(*ch)
            ),
            LexErrorKind::MalformedInteger { defect } => {
                write!(f, "malformed integer literal: {defect}")
            }
            LexErrorKind::MalformedFloat { defect } => {
                write!(f, "malformed float literal: {defect}")
            }
            LexErrorKind::UnterminatedString => {
                f.write_str("string literal not terminated before end of line")
            }
            LexErrorKind::UnterminatedChar => {
                f.write_str("character literal not properly terminated")
            }
            LexErrorKind::InvalidCharLiteral { defect } => {
                write!(f, "invalid character literal: {defect}")
            }
            LexErrorKind::InvalidIdentifier { defect } => {
                write!(f, "invalid identifier: {defect}")
            }
            LexErrorKind::UnclosedComment => {
                f.write_str("multi-line comment not closed before end of file")
            }
            LexErrorKind::InvalidEscape { escape } => {
                write!(f, "invalid escape sequence '\\{}'", escape.escape_debug())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberDefect {
    /// Does not fit in a signed 64-bit integer.
    OutOfRange,
    /// `3.`
    MissingFractionDigits,
    /// `.5`
    MissingIntegerDigits,
    /// `3.14.5`
    MultipleDecimalPoints { count: usize },
    /// `1.5e`, `1.5e+`
    MalformedExponent,
    /// `1e5`
    ExponentWithoutFraction,
    /// `1.5abc`
    InvalidSuffix { ch: char },
}

impl fmt::Display for NumberDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberDefect::OutOfRange => f.write_str("value out of range for a 64-bit integer"),
            NumberDefect::MissingFractionDigits => {
                f.write_str("expected at least one digit after the decimal point")
            }
            NumberDefect::MissingIntegerDigits => {
                f.write_str("expected at least one digit before the decimal point")
            }
            NumberDefect::MultipleDecimalPoints { count } => {
                write!(f, "multiple decimal points ({count} found)")
            }
            NumberDefect::MalformedExponent => {
                f.write_str("exponent marker must be followed by digits")
            }
            NumberDefect::ExponentWithoutFraction => {
                f.write_str("exponent requires a decimal point")
            }
            NumberDefect::InvalidSuffix { ch } => {
                write!(f, "unexpected character '{}' in numeric literal", ch.escape_debug())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharLiteralDefect {
    Empty,
    TooManyCharacters { count: usize },
    InvalidEscape { escape: char },
}

impl fmt::Display for CharLiteralDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharLiteralDefect::Empty => f.write_str("empty character literal"),
            CharLiteralDefect::TooManyCharacters { count } => write!(
                f,
                "character literal must contain exactly one character, found {count}"
            ),
            CharLiteralDefect::InvalidEscape { escape } => {
                write!(f, "invalid escape sequence '\\{}'", escape.escape_debug())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierDefect {
    LeadingDigit,
    TooLong { length: usize, max: usize },
}

impl fmt::Display for IdentifierDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierDefect::LeadingDigit => f.write_str("identifiers cannot start with a digit"),
            IdentifierDefect::TooLong { length, max } => write!(
                f,
                "identifier is {length} characters long, maximum is {max}"
            ),
        }
    }
}
