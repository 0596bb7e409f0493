//! Append-only ledger of lexical errors.
//!
//! The scanner reports every defect here and keeps going; callers inspect the
//! collector after a full pass and decide whether to stop.

mod lexical_error;

pub use lexical_error::{
    CharLiteralDefect, ErrorCode, IdentifierDefect, LexErrorKind, LexicalError, NumberDefect,
};

use tracing::debug;

use crate::lexer::token::{Position, Span};

/// Accumulates [`LexicalError`]s in detection order.
///
/// One collector may be shared by several scanners run one after another to
/// aggregate diagnostics across inputs; [`Diagnostics::reset`] clears it
/// between unrelated scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<LexicalError>,
    has_errors: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, error: LexicalError) {
        debug!(
            code = %error.code(),
            line = error.position.line,
            column = error.position.column,
            lexeme = %error.lexeme,
            "lexical error"
        );
        self.errors.push(error);
        self.has_errors = true;
    }

    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    pub fn count(&self) -> usize {
        self.errors.len()
    }

    /// Recorded errors in detection order.
    pub fn all(&self) -> &[LexicalError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LexicalError> {
        self.errors.iter()
    }

    /// Number of recorded errors with the given code.
    pub fn count_of(&self, code: ErrorCode) -> usize {
        self.errors.iter().filter(|e| e.code() == code).count()
    }

    pub fn reset(&mut self) {
        self.errors.clear();
        self.has_errors = false;
    }

    pub fn into_errors(self) -> Vec<LexicalError> {
        self.errors
    }

    pub fn report_invalid_character(&mut self, ch: char, position: Position, span: Span) {
        self.record(LexicalError::new(
            LexErrorKind::InvalidCharacter { ch },
            ch.to_string(),
            position,
            span,
        ));
    }

    pub fn report_malformed_integer(
        &mut self,
        lexeme: impl Into<String>,
        position: Position,
        span: Span,
        defect: NumberDefect,
    ) {
        self.record(LexicalError::new(
            LexErrorKind::MalformedInteger { defect },
            lexeme,
            position,
            span,
        ));
    }

    pub fn report_malformed_float(
        &mut self,
        lexeme: impl Into<String>,
        position: Position,
        span: Span,
        defect: NumberDefect,
    ) {
        self.record(LexicalError::new(
            LexErrorKind::MalformedFloat { defect },
            lexeme,
            position,
            span,
        ));
    }

    pub fn report_unterminated_string(
        &mut self,
        lexeme: impl Into<String>,
        position: Position,
        span: Span,
    ) {
        self.record(LexicalError::new(
            LexErrorKind::UnterminatedString,
            lexeme,
            position,
            span,
        ));
    }

    pub fn report_unterminated_char(
        &mut self,
        lexeme: impl Into<String>,
        position: Position,
        span: Span,
    ) {
        self.record(LexicalError::new(
            LexErrorKind::UnterminatedChar,
            lexeme,
            position,
            span,
        ));
    }

    pub fn report_invalid_char_literal(
        &mut self,
        lexeme: impl Into<String>,
        position: Position,
        span: Span,
        defect: CharLiteralDefect,
    ) {
        self.record(LexicalError::new(
            LexErrorKind::InvalidCharLiteral { defect },
            lexeme,
            position,
            span,
        ));
    }

    pub fn report_invalid_identifier(
        &mut self,
        lexeme: impl Into<String>,
        position: Position,
        span: Span,
        defect: IdentifierDefect,
    ) {
        self.record(LexicalError::new(
            LexErrorKind::InvalidIdentifier { defect },
            lexeme,
            position,
            span,
        ));
    }

    pub fn report_unclosed_comment(
        &mut self,
        lexeme: impl Into<String>,
        position: Position,
        span: Span,
    ) {
        self.record(LexicalError::new(
            LexErrorKind::UnclosedComment,
            lexeme,
            position,
            span,
        ));
    }

    pub fn report_invalid_escape(&mut self, escape: char, position: Position, span: Span) {
        self.record(LexicalError::new(
            LexErrorKind::InvalidEscape { escape },
            format!("\\{escape}"),
            position,
            span,
        ));
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a LexicalError;
    type IntoIter = std::slice::Iter<'a, LexicalError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
