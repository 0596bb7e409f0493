use nexuslex::diagnostics::{CharLiteralDefect, IdentifierDefect, LexErrorKind, NumberDefect};
use nexuslex::{Diagnostics, ErrorCode, LexicalError, Position, Scanner, Span};
use pretty_assertions::assert_eq;

fn invalid_char(ch: char, column: usize) -> LexicalError {
    LexicalError::new(
        LexErrorKind::InvalidCharacter { ch },
        ch.to_string(),
        Position::new(1, column),
        Span::new(column - 1, column),
    )
}

#[test]
fn new_collector_is_empty() {
    let diagnostics = Diagnostics::new();
    assert!(!diagnostics.has_errors());
    assert_eq!(diagnostics.count(), 0);
    assert!(diagnostics.all().is_empty());
}

#[test]
fn record_appends_without_deduplication() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.record(invalid_char('@', 1));
    diagnostics.record(invalid_char('@', 1));
    assert!(diagnostics.has_errors());
    assert_eq!(diagnostics.count(), 2);
    assert_eq!(diagnostics.all()[0], diagnostics.all()[1]);
}

#[test]
fn all_is_stable_between_records() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.record(invalid_char('$', 4));
    let first = diagnostics.all().to_vec();
    let second = diagnostics.all().to_vec();
    assert_eq!(first, second);

    let mut snapshot = diagnostics.all().to_vec();
    snapshot.clear();
    assert_eq!(diagnostics.count(), 1);
}

#[test]
fn reset_clears_errors_and_flag() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.record(invalid_char('$', 1));
    diagnostics.reset();
    assert!(!diagnostics.has_errors());
    assert!(diagnostics.all().is_empty());
}

#[test]
fn report_helpers_cover_the_taxonomy() {
    let mut diagnostics = Diagnostics::new();
    let at = Position::new(3, 7);
    let span = Span::new(10, 12);
    diagnostics.report_invalid_character('~', at, span);
    diagnostics.report_malformed_integer("99", at, span, NumberDefect::OutOfRange);
    diagnostics.report_malformed_float("1.", at, span, NumberDefect::MissingFractionDigits);
    diagnostics.report_unterminated_string("\"a", at, span);
    diagnostics.report_unterminated_char("'a", at, span);
    diagnostics.report_invalid_char_literal("''", at, span, CharLiteralDefect::Empty);
    diagnostics.report_invalid_identifier("1x", at, span, IdentifierDefect::LeadingDigit);
    diagnostics.report_unclosed_comment("#*", at, span);
    diagnostics.report_invalid_escape('q', at, span);

    let codes: Vec<ErrorCode> = diagnostics.iter().map(LexicalError::code).collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::InvalidCharacter,
            ErrorCode::MalformedInteger,
            ErrorCode::MalformedFloat,
            ErrorCode::UnterminatedString,
            ErrorCode::UnterminatedChar,
            ErrorCode::InvalidCharLiteral,
            ErrorCode::InvalidIdentifier,
            ErrorCode::UnclosedComment,
            ErrorCode::InvalidEscape,
        ]
    );
    assert!(diagnostics.iter().all(|e| e.position == at && e.span == span));
    assert_eq!(diagnostics.all()[8].lexeme, "\\q");
    assert_eq!(diagnostics.count_of(ErrorCode::MalformedFloat), 1);
}

#[test]
fn reasons_are_derived_from_parameters() {
    let error = invalid_char('@', 1);
    assert_eq!(error.reason(), "invalid character '@' (U+0040)");
    assert_eq!(error.to_string(), error.reason());
    assert_eq!(error.code().to_string(), "INVALID_CHARACTER");
}

#[test]
fn one_collector_can_aggregate_sequential_scans() {
    let mut diagnostics = Diagnostics::new();
    Scanner::new("@", &mut diagnostics).scan_tokens();
    Scanner::new("x = 1.2.3", &mut diagnostics).scan_tokens();
    assert_eq!(diagnostics.count(), 2);
    assert_eq!(diagnostics.count_of(ErrorCode::InvalidCharacter), 1);
    assert_eq!(diagnostics.count_of(ErrorCode::MalformedFloat), 1);

    diagnostics.reset();
    Scanner::new("clean", &mut diagnostics).scan_tokens();
    assert!(!diagnostics.has_errors());
}

#[test]
fn lexical_error_is_a_miette_diagnostic() {
    use miette::Diagnostic;

    let error = invalid_char('@', 5);
    assert_eq!(
        Diagnostic::code(&error).map(|c| c.to_string()),
        Some("INVALID_CHARACTER".to_owned())
    );
    let labels: Vec<_> = error.labels().into_iter().flatten().collect();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].offset(), 4);
    assert_eq!(labels[0].len(), 1);
}
