use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::lexer::keywords::{DEFAULT_BOOLEANS, DEFAULT_KEYWORDS, KeywordTable};

pub const DEFAULT_MAX_IDENTIFIER_LENGTH: usize = 31;

/// Tunable parts of the lexer, loadable from a JSON file.
///
/// ```json
/// { "keywords": ["if", "else"], "max_identifier_length": null, "keep_trivia": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexerConfig {
    pub keywords: Vec<String>,
    pub booleans: Vec<String>,
    /// `None` disables the length check.
    pub max_identifier_length: Option<usize>,
    /// Deliver whitespace and comment tokens inline instead of on the side.
    pub keep_trivia: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| (*k).to_owned()).collect(),
            booleans: DEFAULT_BOOLEANS.iter().map(|b| (*b).to_owned()).collect(),
            max_identifier_length: Some(DEFAULT_MAX_IDENTIFIER_LENGTH),
            keep_trivia: false,
        }
    }
}

impl LexerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn with_keep_trivia(mut self, keep_trivia: bool) -> Self {
        self.keep_trivia = keep_trivia;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_identifier_length == Some(0) {
            return Err(ConfigError::invalid("max_identifier_length must be at least 1"));
        }
        for word in self.keywords.iter().chain(self.booleans.iter()) {
            if !is_word(word) {
                return Err(ConfigError::invalid(format!(
                    "'{word}' is not a valid reserved word"
                )));
            }
        }
        if let Some(word) = self.booleans.iter().find(|b| self.keywords.contains(b)) {
            return Err(ConfigError::invalid(format!(
                "'{word}' is listed both as a keyword and as a boolean literal"
            )));
        }
        Ok(())
    }

    pub fn keyword_table(&self) -> KeywordTable {
        KeywordTable::new(self.keywords.iter().cloned(), self.booleans.iter().cloned())
    }
}

fn is_word(word: &str) -> bool {
    let mut chars = word.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
