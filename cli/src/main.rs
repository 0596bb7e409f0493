use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use nexuslex::errors::NexusError;
use nexuslex::{LexerConfig, lex_with_config};
use owo_colors::OwoColorize;

mod report;
mod repl;

#[derive(Parser)]
#[command(name = "nexuslex", about = "Lexical analyzer for the NEXUS language")]
struct Cli {
    /// Path to a NEXUS source file
    file: Option<String>,
    /// Lex inline source instead of a file
    #[arg(long)]
    eval: Option<String>,
    /// Print token stream
    #[arg(long)]
    tokens: bool,
    /// Deliver whitespace and comment tokens inline
    #[arg(long)]
    trivia: bool,
    /// Print tokens and errors as JSON
    #[arg(long)]
    json: bool,
    /// Render each error with an annotated source excerpt
    #[arg(long)]
    fancy: bool,
    /// Lexer configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if cli.version {
        println!(
            "{} {}",
            "nexuslex".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config.with_keep_trivia(cli.trivia),
        Err(err) => fail(err),
    };

    let (source, source_name) = match (cli.eval, cli.file) {
        (Some(code), _) => (code, "<eval>".to_owned()),
        (None, Some(file)) => match fs::read_to_string(&file) {
            Ok(s) => (s, file),
            Err(source) => fail(NexusError::Io { path: file, source }),
        },
        (None, None) => {
            if let Err(err) = repl::run(config) {
                fail(err);
            }
            return;
        }
    };

    let lexed = lex_with_config(&source, &config);
    tracing::debug!(
        file = %source_name,
        tokens = lexed.tokens.len(),
        errors = lexed.diagnostics.count(),
        "lexed input"
    );

    if cli.json {
        match report::render_json(&lexed) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                process::exit(2);
            }
        }
    } else {
        if cli.tokens {
            print!("{}", report::render_tokens(&lexed.tokens));
        }
        if cli.fancy {
            report::print_fancy(&source, &source_name, &lexed.diagnostics);
        } else {
            print!("{}", report::render_errors(&lexed.diagnostics));
        }
    }

    if lexed.has_errors() {
        process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<LexerConfig, NexusError> {
    match path {
        Some(path) => Ok(LexerConfig::load(path)?),
        None => Ok(LexerConfig::default()),
    }
}

fn fail(err: NexusError) -> ! {
    eprintln!("{:?}", miette::Report::new(err));
    process::exit(2);
}

/// Logging is opt-in: enable with `RUST_LOG=nexuslex=debug` or `=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}
