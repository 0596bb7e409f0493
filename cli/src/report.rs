use miette::NamedSource;
use nexuslex::{Diagnostics, ErrorCode, Lexed, Token, TokenKind};
use owo_colors::OwoColorize;
use serde::Serialize;

const BOX_WIDTH: usize = 78;

pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (idx, token) in tokens.iter().enumerate() {
        let location = format!("{}:{}", token.line(), token.column());
        let kind = format!("{:<20}", token.kind.as_str());
        out.push_str(&format!(
            "{:>4}  {:<9} {} {}\n",
            (idx + 1).bright_black(),
            location.bright_black(),
            paint_kind(token.kind, &kind),
            token.lexeme.escape_debug()
        ));
    }
    out
}

/// Boxed summary table of every recorded error.
pub fn render_errors(diagnostics: &Diagnostics) -> String {
    if !diagnostics.has_errors() {
        return format!("{}\n", "✓ No lexical errors found!".green());
    }

    let rule = "═".repeat(BOX_WIDTH);
    let mut out = String::new();
    out.push_str(&format!("╔{rule}╗\n"));
    out.push_str(&format!(
        "║{}║\n",
        format!("{:^width$}", "LEXICAL ERRORS", width = BOX_WIDTH).red().bold()
    ));
    out.push_str(&format!("╠{rule}╣\n"));
    for (idx, error) in diagnostics.iter().enumerate() {
        let row = format!(
            " {}. [{}] Line {}, Col {}: '{}' - {}",
            idx + 1,
            error.code(),
            error.line(),
            error.column(),
            error.lexeme.escape_debug(),
            error.reason()
        );
        out.push_str(&format!("║{}║\n", pad(&row).yellow()));
    }
    out.push_str(&format!("╠{rule}╣\n"));
    let total = format!(" Total Errors: {}", diagnostics.count());
    out.push_str(&format!("║{}║\n", pad(&total).bold()));
    out.push_str(&format!("╚{rule}╝\n"));
    out
}

/// Render each error through miette with the offending source attached.
pub fn print_fancy(source: &str, source_name: &str, diagnostics: &Diagnostics) {
    if !diagnostics.has_errors() {
        print!("{}", render_errors(diagnostics));
        return;
    }
    for error in diagnostics {
        let report = miette::Report::new(error.clone())
            .with_source_code(NamedSource::new(source_name, source.to_owned()));
        eprintln!("{report:?}");
    }
    eprintln!(
        "{} {}",
        "total errors:".red().bold(),
        diagnostics.count()
    );
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tokens: &'a [Token],
    trivia: &'a [Token],
    errors: Vec<JsonError<'a>>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    code: ErrorCode,
    line: usize,
    column: usize,
    lexeme: &'a str,
    reason: String,
}

pub fn render_json(lexed: &Lexed) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        tokens: &lexed.tokens,
        trivia: &lexed.trivia,
        errors: lexed
            .diagnostics
            .iter()
            .map(|e| JsonError {
                code: e.code(),
                line: e.line(),
                column: e.column(),
                lexeme: &e.lexeme,
                reason: e.reason(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}

pub fn paint_kind(kind: TokenKind, text: &str) -> String {
    match kind {
        TokenKind::Keyword => text.blue().bold().to_string(),
        TokenKind::Identifier => text.to_string(),
        TokenKind::IntegerLiteral | TokenKind::FloatLiteral => text.magenta().to_string(),
        TokenKind::StringLiteral | TokenKind::CharLiteral => text.green().to_string(),
        TokenKind::BooleanLiteral => text.cyan().to_string(),
        TokenKind::ArithmeticOp
        | TokenKind::RelationalOp
        | TokenKind::LogicalOp
        | TokenKind::AssignmentOp
        | TokenKind::IncrementOp
        | TokenKind::DecrementOp => text.yellow().to_string(),
        TokenKind::Punctuator => text.bright_white().to_string(),
        TokenKind::SingleLineComment | TokenKind::MultiLineComment => {
            text.bright_black().italic().to_string()
        }
        TokenKind::Whitespace | TokenKind::Eof => text.to_string(),
        TokenKind::Error => text.red().underline().to_string(),
    }
}

fn pad(text: &str) -> String {
    format!("{text:<width$}", width = BOX_WIDTH)
}
