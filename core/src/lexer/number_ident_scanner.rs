use super::scanner::Scanner;
use super::token::{Position, TokenKind};
use crate::diagnostics::{IdentifierDefect, NumberDefect};

impl Scanner<'_, '_> {
    /// The first digit has already been consumed.
    pub(super) fn scan_number(&mut self, start: usize, position: Position) -> TokenKind {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.peek() == Some('.') {
            return self.scan_float(start, position, false);
        }

        let marker = matches!(self.cursor.peek(), Some('e' | 'E'))
            && self
                .cursor
                .peek_next()
                .is_some_and(|c| c.is_ascii_digit() || c == '+' || c == '-');
        if marker && self.scan_exponent() {
            self.cursor.eat_while(is_ident_continue);
            self.diagnostics.report_malformed_integer(
                self.cursor.slice_from(start),
                position,
                self.cursor.span_from(start),
                NumberDefect::ExponentWithoutFraction,
            );
            return TokenKind::Error;
        }

        // `3e+x` keeps its consumed `e` as part of the bad word.
        if marker || self.cursor.peek().is_some_and(is_ident_start) {
            self.cursor.eat_while(is_ident_continue);
            self.diagnostics.report_invalid_identifier(
                self.cursor.slice_from(start),
                position,
                self.cursor.span_from(start),
                IdentifierDefect::LeadingDigit,
            );
            return TokenKind::Error;
        }

        let text = self.cursor.slice_from(start);
        if text.parse::<i64>().is_err() {
            self.diagnostics.report_malformed_integer(
                text,
                position,
                self.cursor.span_from(start),
                NumberDefect::OutOfRange,
            );
            return TokenKind::Error;
        }
        TokenKind::IntegerLiteral
    }

    /// Continue a float literal. The cursor sits on the first `.` after the
    /// integer digits, or just past a leading `.` that is followed by a digit.
    ///
    /// Everything that could still belong to the literal is consumed before
    /// it is judged, so a malformed float is always one lexeme.
    pub(super) fn scan_float(
        &mut self,
        start: usize,
        position: Position,
        leading_dot: bool,
    ) -> TokenKind {
        let mut dots = 0;
        let mut missing_fraction = false;

        if leading_dot {
            dots += 1;
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }
        while self.cursor.match_char('.') {
            dots += 1;
            if self.cursor.eat_while(|c| c.is_ascii_digit()) == 0 {
                missing_fraction = true;
            }
        }

        let bad_exponent =
            matches!(self.cursor.peek(), Some('e' | 'E')) && !self.scan_exponent();

        let suffix = self.cursor.peek().filter(|c| is_ident_continue(*c));
        if suffix.is_some() {
            self.cursor.eat_while(is_ident_continue);
        }

        let defect = if dots > 1 {
            Some(NumberDefect::MultipleDecimalPoints { count: dots })
        } else if leading_dot {
            Some(NumberDefect::MissingIntegerDigits)
        } else if missing_fraction {
            Some(NumberDefect::MissingFractionDigits)
        } else if bad_exponent {
            Some(NumberDefect::MalformedExponent)
        } else {
            suffix.map(|ch| NumberDefect::InvalidSuffix { ch })
        };

        match defect {
            Some(defect) => {
                self.diagnostics.report_malformed_float(
                    self.cursor.slice_from(start),
                    position,
                    self.cursor.span_from(start),
                    defect,
                );
                TokenKind::Error
            }
            None => TokenKind::FloatLiteral,
        }
    }

    /// Consume an exponent marker, a sign only when a digit follows it, and
    /// the exponent digits. Returns whether any digits were found.
    fn scan_exponent(&mut self) -> bool {
        self.cursor.advance();
        if matches!(self.cursor.peek(), Some('+' | '-'))
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance();
        }
        self.cursor.eat_while(|c| c.is_ascii_digit()) > 0
    }

    /// The first character has already been consumed.
    pub(super) fn scan_identifier(&mut self, start: usize, position: Position) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(start);
        let kind = self.keywords.classify(text);
        if kind != TokenKind::Identifier {
            return kind;
        }

        if let Some(max) = self.max_identifier_length {
            let length = text.chars().count();
            if length > max {
                self.diagnostics.report_invalid_identifier(
                    text,
                    position,
                    self.cursor.span_from(start),
                    IdentifierDefect::TooLong { length, max },
                );
                return TokenKind::Error;
            }
        }
        TokenKind::Identifier
    }
}

pub(super) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
