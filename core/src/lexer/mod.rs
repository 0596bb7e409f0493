pub mod cursor;
pub mod keywords;
mod number_ident_scanner;
pub mod scanner;
mod string_scanner;
pub mod token;

use tracing::debug;

use crate::config::LexerConfig;
use crate::diagnostics::Diagnostics;
use scanner::Scanner;
use token::{Token, TokenKind};

/// Everything one scan of a source text produces.
#[derive(Debug, Clone)]
pub struct Lexed {
    /// Delivered tokens, ending with exactly one EOF.
    pub tokens: Vec<Token>,
    /// Whitespace and comments held back from `tokens`.
    pub trivia: Vec<Token>,
    pub diagnostics: Diagnostics,
}

impl Lexed {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

/// Tokenize source code with the default NEXUS configuration.
pub fn lex(source: &str) -> Lexed {
    lex_with_config(source, &LexerConfig::default())
}

pub fn lex_with_config(source: &str, config: &LexerConfig) -> Lexed {
    let mut diagnostics = Diagnostics::new();
    let mut scanner = Scanner::with_config(source, config, &mut diagnostics);
    let tokens = scanner.scan_tokens();
    let trivia = scanner.into_trivia();
    debug!(
        tokens = tokens.len(),
        trivia = trivia.len(),
        errors = diagnostics.count(),
        "scan complete"
    );
    Lexed {
        tokens,
        trivia,
        diagnostics,
    }
}
