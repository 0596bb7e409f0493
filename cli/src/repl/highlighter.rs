use std::borrow::Cow;

use nexuslex::{LexerConfig, lex_with_config};
use owo_colors::OwoColorize;

use crate::report::paint_kind;

/// Colour a line by running it through the scanner with trivia kept, so
/// every character is painted by the category it actually lexes as.
pub fn highlight_line<'l>(config: &LexerConfig, line: &'l str) -> Cow<'l, str> {
    if line.trim_start().starts_with('.') {
        return Cow::Borrowed(line);
    }
    let lexed = lex_with_config(line, config);
    let mut out = String::with_capacity(line.len() * 2);
    for token in &lexed.tokens {
        out.push_str(&paint_kind(token.kind, &token.lexeme));
    }
    Cow::Owned(out)
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    if prompt == "... " {
        return Cow::Owned(format!("{} ", "...".yellow().bold()));
    }
    Cow::Borrowed(prompt)
}
