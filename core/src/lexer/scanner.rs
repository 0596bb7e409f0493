use std::iter::FusedIterator;

use tracing::trace;

use super::cursor::Cursor;
use super::keywords::KeywordTable;
use super::number_ident_scanner::is_ident_start;
use super::token::{Position, Token, TokenKind};
use crate::config::LexerConfig;
use crate::diagnostics::Diagnostics;

/// Scans source code into a sequence of tokens.
///
/// Single forward pass with at most two characters of lookahead. Malformed
/// input is reported to the borrowed [`Diagnostics`] and delivered as an
/// [`TokenKind::Error`] token; the scanner always moves past the offending
/// span and carries on.
pub struct Scanner<'src, 'diag> {
    pub(super) cursor: Cursor<'src>,
    pub(super) diagnostics: &'diag mut Diagnostics,
    pub(super) keywords: KeywordTable,
    pub(super) max_identifier_length: Option<usize>,
    keep_trivia: bool,
    trivia: Vec<Token>,
    finished: bool,
}

impl<'src, 'diag> Scanner<'src, 'diag> {
    pub fn new(source: &'src str, diagnostics: &'diag mut Diagnostics) -> Self {
        Self::with_config(source, &LexerConfig::default(), diagnostics)
    }

    pub fn with_config(
        source: &'src str,
        config: &LexerConfig,
        diagnostics: &'diag mut Diagnostics,
    ) -> Self {
        Self {
            cursor: Cursor::new(source),
            diagnostics,
            keywords: config.keyword_table(),
            max_identifier_length: config.max_identifier_length,
            keep_trivia: config.keep_trivia,
            trivia: Vec::new(),
            finished: false,
        }
    }

    /// Produce the next delivered token.
    ///
    /// Returns `Some` with an [`TokenKind::Eof`] token exactly once at the end
    /// of input and `None` on every call after that.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        loop {
            let start = self.cursor.pos();
            let position = self.cursor.position();
            let Some(ch) = self.cursor.advance() else {
                self.finished = true;
                trace!(line = position.line, column = position.column, "eof");
                return Some(Token::new(
                    TokenKind::Eof,
                    "",
                    self.cursor.span_from(start),
                    position,
                ));
            };

            let kind = self.scan_token(ch, start, position);
            let token = Token::new(
                kind,
                self.cursor.slice_from(start),
                self.cursor.span_from(start),
                position,
            );

            if token.is_trivia() && !self.keep_trivia {
                self.trivia.push(token);
                continue;
            }

            trace!(
                kind = %token.kind,
                lexeme = %token.lexeme,
                line = position.line,
                column = position.column,
                "token"
            );
            return Some(token);
        }
    }

    /// Scan the rest of the input, EOF included.
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    /// Whitespace and comment tokens held back from the delivered stream.
    pub fn trivia(&self) -> &[Token] {
        &self.trivia
    }

    pub fn into_trivia(self) -> Vec<Token> {
        self.trivia
    }

    fn scan_token(&mut self, ch: char, start: usize, position: Position) -> TokenKind {
        match ch {
            ' ' | '\t' | '\r' | '\n' => {
                self.cursor.eat_while(is_whitespace);
                TokenKind::Whitespace
            }
            '#' => match self.cursor.peek() {
                Some('#') => {
                    self.cursor.eat_while(|c| c != '\n');
                    TokenKind::SingleLineComment
                }
                Some('*') => {
                    self.cursor.advance();
                    self.scan_block_comment(start, position)
                }
                _ => self.invalid_character(ch, start, position),
            },
            '(' | ')' | '{' | '}' | '[' | ']' | ',' | ';' | ':' => TokenKind::Punctuator,
            '+' => {
                if self.cursor.match_char('+') {
                    TokenKind::IncrementOp
                } else if self.cursor.match_char('=') {
                    TokenKind::AssignmentOp
                } else {
                    TokenKind::ArithmeticOp
                }
            }
            '-' => {
                if self.cursor.match_char('-') {
                    TokenKind::DecrementOp
                } else if self.cursor.match_char('=') {
                    TokenKind::AssignmentOp
                } else {
                    TokenKind::ArithmeticOp
                }
            }
            '*' => {
                if self.cursor.match_char('*') {
                    TokenKind::ArithmeticOp
                } else if self.cursor.match_char('=') {
                    TokenKind::AssignmentOp
                } else {
                    TokenKind::ArithmeticOp
                }
            }
            '/' => {
                if self.cursor.match_char('=') {
                    TokenKind::AssignmentOp
                } else {
                    TokenKind::ArithmeticOp
                }
            }
            '%' => TokenKind::ArithmeticOp,
            '=' => {
                if self.cursor.match_char('=') {
                    TokenKind::RelationalOp
                } else {
                    TokenKind::AssignmentOp
                }
            }
            '!' => {
                if self.cursor.match_char('=') {
                    TokenKind::RelationalOp
                } else {
                    TokenKind::LogicalOp
                }
            }
            '<' | '>' => {
                self.cursor.match_char('=');
                TokenKind::RelationalOp
            }
            '&' | '|' => {
                if self.cursor.match_char(ch) {
                    TokenKind::LogicalOp
                } else {
                    self.invalid_character(ch, start, position)
                }
            }
            '"' => self.scan_string(start, position),
            '\'' => self.scan_char(start, position),
            '.' if self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) => {
                self.scan_float(start, position, true)
            }
            c if c.is_ascii_digit() => self.scan_number(start, position),
            c if is_ident_start(c) => self.scan_identifier(start, position),
            _ => self.invalid_character(ch, start, position),
        }
    }

    fn scan_block_comment(&mut self, start: usize, position: Position) -> TokenKind {
        loop {
            match self.cursor.advance() {
                Some('*') if self.cursor.peek() == Some('#') => {
                    self.cursor.advance();
                    return TokenKind::MultiLineComment;
                }
                Some(_) => {}
                None => {
                    self.diagnostics.report_unclosed_comment(
                        self.cursor.slice_from(start),
                        position,
                        self.cursor.span_from(start),
                    );
                    return TokenKind::Error;
                }
            }
        }
    }

    /// The offending character has already been consumed; nothing else is.
    fn invalid_character(&mut self, ch: char, start: usize, position: Position) -> TokenKind {
        self.diagnostics
            .report_invalid_character(ch, position, self.cursor.span_from(start));
        TokenKind::Error
    }
}

impl Iterator for Scanner<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl FusedIterator for Scanner<'_, '_> {}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
