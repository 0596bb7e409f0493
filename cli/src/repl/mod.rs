mod completer;
mod helper;
mod highlighter;

use std::fs;

use nexuslex::errors::NexusError;
use nexuslex::{Diagnostics, ErrorCode, LexerConfig, Scanner, lex_with_config};
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};

use self::helper::ReplHelper;
use crate::report;

pub(crate) const COMMANDS: [(&str, &str); 6] = [
    (".help", "show commands"),
    (".trivia", "toggle whitespace and comment tokens"),
    (".errors", "show every error recorded this session"),
    (".reset", "forget recorded errors"),
    (".load", "<file> lex a file"),
    (".exit", "exit REPL"),
];

/// Session state: the lexer config plus one collector shared by every entry.
struct Session {
    config: LexerConfig,
    diagnostics: Diagnostics,
}

pub fn run(config: LexerConfig) -> Result<(), NexusError> {
    let editor_config = Config::builder()
        .history_ignore_dups(true)
        .map_err(to_repl_error)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(editor_config).map_err(to_repl_error)?;
    rl.set_helper(Some(ReplHelper::new(&config)));

    let mut session = Session {
        config,
        diagnostics: Diagnostics::new(),
    };

    println!(
        "{} {}",
        "nexuslex".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for REPL commands".bright_black());

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                if handle_command(trimmed, &mut session) {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);
                lex_entry(&mut session, &line);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => {
                eprintln!("{} {err}", "repl error:".red().bold());
                break;
            }
        }
    }

    Ok(())
}

fn handle_command(trimmed: &str, session: &mut Session) -> bool {
    if trimmed == ".exit" || trimmed == "exit" {
        std::process::exit(0);
    }
    if trimmed == ".help" {
        for (name, help) in COMMANDS {
            println!("{}", format!("{name:<20} {help}").bright_blue());
        }
        return true;
    }
    if trimmed == ".trivia" {
        session.config.keep_trivia = !session.config.keep_trivia;
        let state = if session.config.keep_trivia { "on" } else { "off" };
        println!("{}", format!("trivia {state}").green());
        return true;
    }
    if trimmed == ".errors" {
        print!("{}", report::render_errors(&session.diagnostics));
        return true;
    }
    if trimmed == ".reset" {
        session.diagnostics.reset();
        println!("{}", "diagnostics cleared".green());
        return true;
    }
    if let Some(path) = trimmed.strip_prefix(".load ") {
        let path = path.trim();
        match fs::read_to_string(path) {
            Ok(source) => lex_entry(session, &source),
            Err(err) => eprintln!("{} {err}", "load error:".red().bold()),
        }
        return true;
    }
    false
}

/// Lex one entry into the shared collector and print what it produced.
fn lex_entry(session: &mut Session, source: &str) {
    let before = session.diagnostics.count();
    let tokens =
        Scanner::with_config(source, &session.config, &mut session.diagnostics).scan_tokens();
    print!("{}", report::render_tokens(&tokens));

    for error in &session.diagnostics.all()[before..] {
        eprintln!(
            "{} {} {}",
            format!("[{}]", error.code()).red().bold(),
            error.position.bright_black(),
            error.reason()
        );
    }
}

/// An entry is incomplete while a multi-line comment is still open.
pub fn needs_more_input(config: &LexerConfig, source: &str) -> bool {
    let lexed = lex_with_config(source, config);
    lexed.diagnostics.count_of(ErrorCode::UnclosedComment) > 0
}

fn to_repl_error(err: ReadlineError) -> NexusError {
    NexusError::Repl {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_block_comment_needs_more_input() {
        let config = LexerConfig::default();
        assert!(needs_more_input(&config, "x = 1 #* still"));
        assert!(!needs_more_input(&config, "x = 1 #* done *#"));
    }

    #[test]
    fn continuation_uses_the_session_config() {
        let config = LexerConfig::from_json_str(r#"{ "max_identifier_length": 4 }"#)
            .expect("valid config");
        assert!(needs_more_input(&config, "longname #* open"));
        assert!(!needs_more_input(&config, "longname"));
    }
}
