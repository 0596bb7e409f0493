use super::scanner::Scanner;
use super::token::{Position, TokenKind};
use crate::diagnostics::CharLiteralDefect;

impl Scanner<'_, '_> {
    /// The opening `"` has already been consumed.
    ///
    /// Invalid escapes are reported and the string keeps its category. A
    /// newline or end of input before the closing quote ends the lexeme
    /// without consuming the newline. Escape errors are recorded after the
    /// unterminated error so diagnostics stay in source order.
    pub(super) fn scan_string(&mut self, start: usize, position: Position) -> TokenKind {
        let mut bad_escapes = Vec::new();
        let kind = loop {
            match self.cursor.peek() {
                None | Some('\n') => {
                    self.diagnostics.report_unterminated_string(
                        self.cursor.slice_from(start),
                        position,
                        self.cursor.span_from(start),
                    );
                    break TokenKind::Error;
                }
                Some('"') => {
                    self.cursor.advance();
                    break TokenKind::StringLiteral;
                }
                Some('\\') => {
                    let escape_start = self.cursor.pos();
                    let escape_position = self.cursor.position();
                    self.cursor.advance();
                    if let Some(escape) = self.cursor.peek().filter(|c| *c != '\n') {
                        self.cursor.advance();
                        if !is_valid_escape(escape) {
                            let span = self.cursor.span_from(escape_start);
                            bad_escapes.push((escape, escape_position, span));
                        }
                    }
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        };

        for (escape, escape_position, span) in bad_escapes {
            self.diagnostics.report_invalid_escape(escape, escape_position, span);
        }
        kind
    }

    /// The opening `'` has already been consumed.
    ///
    /// Reports at most one error per literal: unterminated, then empty, then
    /// too many characters, then an invalid escape.
    pub(super) fn scan_char(&mut self, start: usize, position: Position) -> TokenKind {
        let mut units = 0;
        let mut bad_escape = None;

        loop {
            match self.cursor.peek() {
                None | Some('\n') => {
                    self.diagnostics.report_unterminated_char(
                        self.cursor.slice_from(start),
                        position,
                        self.cursor.span_from(start),
                    );
                    return TokenKind::Error;
                }
                Some('\'') => {
                    self.cursor.advance();
                    break;
                }
                Some('\\') => {
                    self.cursor.advance();
                    if let Some(escape) = self.cursor.peek().filter(|c| *c != '\n') {
                        self.cursor.advance();
                        units += 1;
                        if !is_valid_escape(escape) && bad_escape.is_none() {
                            bad_escape = Some(escape);
                        }
                    }
                }
                Some(_) => {
                    self.cursor.advance();
                    units += 1;
                }
            }
        }

        let defect = match (units, bad_escape) {
            (0, _) => CharLiteralDefect::Empty,
            (1, None) => return TokenKind::CharLiteral,
            (1, Some(escape)) => CharLiteralDefect::InvalidEscape { escape },
            (count, _) => CharLiteralDefect::TooManyCharacters { count },
        };
        self.diagnostics.report_invalid_char_literal(
            self.cursor.slice_from(start),
            position,
            self.cursor.span_from(start),
            defect,
        );
        TokenKind::Error
    }
}

fn is_valid_escape(c: char) -> bool {
    matches!(c, 'n' | 't' | 'r' | '0' | '\\' | '"' | '\'')
}
