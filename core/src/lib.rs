pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod lexer;

pub use config::LexerConfig;
pub use diagnostics::{Diagnostics, ErrorCode, LexicalError};
pub use lexer::token::{Position, Span, Token, TokenKind};
pub use lexer::{Lexed, lex, lex_with_config};
pub use lexer::scanner::Scanner;
