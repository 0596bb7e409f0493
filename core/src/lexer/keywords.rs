use std::collections::HashSet;

use super::token::TokenKind;

/// Reserved words of the NEXUS language.
pub const DEFAULT_KEYWORDS: [&str; 20] = [
    "start",
    "finish",
    "loop",
    "condition",
    "declare",
    "output",
    "input",
    "function",
    "return",
    "break",
    "continue",
    "else",
    "if",
    "while",
    "for",
    "int",
    "float",
    "string",
    "char",
    "bool",
];

pub const DEFAULT_BOOLEANS: [&str; 2] = ["true", "false"];

/// Fixed mapping from reserved spellings to their word category.
///
/// Lookups are exact and case-sensitive. Boolean spellings win over keywords
/// and identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    keywords: HashSet<String>,
    booleans: HashSet<String>,
}

impl KeywordTable {
    pub fn new<K, B>(keywords: K, booleans: B) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            booleans: booleans.into_iter().map(Into::into).collect(),
        }
    }

    /// Classify a complete identifier-shaped lexeme.
    pub fn classify(&self, word: &str) -> TokenKind {
        if self.booleans.contains(word) {
            TokenKind::BooleanLiteral
        } else if self.keywords.contains(word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        }
    }

    /// Reserved words and boolean spellings, sorted, for completion and display.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .keywords
            .iter()
            .chain(self.booleans.iter())
            .map(String::as_str)
            .collect();
        words.sort_unstable();
        words
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS, DEFAULT_BOOLEANS)
    }
}
