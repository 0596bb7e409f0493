use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("could not read config file '{path}'")]
    #[diagnostic(code(nexus::config::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config is not valid JSON: {0}")]
    #[diagnostic(
        code(nexus::config::parse),
        help("expected an object with keys keywords, booleans, max_identifier_length, keep_trivia")
    )]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {message}")]
    #[diagnostic(code(nexus::config::invalid))]
    Invalid { message: String },
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
