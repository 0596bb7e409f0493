mod config_error;

pub use config_error::ConfigError;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for everything that can stop a lexing run outright.
///
/// Lexical defects are not in here: those are recorded in
/// [`Diagnostics`](crate::diagnostics::Diagnostics) and never abort a scan.
#[derive(Debug, Error, Diagnostic)]
pub enum NexusError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("could not read '{path}'")]
    #[diagnostic(code(nexus::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to initialize REPL: {message}")]
    #[diagnostic(code(nexus::repl))]
    Repl { message: String },
}
