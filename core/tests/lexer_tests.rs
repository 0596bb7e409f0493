use nexuslex::{Diagnostics, Position, Scanner, TokenKind, lex};
use pretty_assertions::assert_eq;

fn token_kinds(source: &str) -> Vec<TokenKind> {
    let lexed = lex(source);
    assert!(
        !lexed.has_errors(),
        "unexpected lexical errors: {:?}",
        lexed.diagnostics.all()
    );
    lexed.kinds()
}

fn lexemes(source: &str) -> Vec<String> {
    lex(source).tokens.into_iter().map(|t| t.lexeme).collect()
}

#[test]
fn lex_declaration() {
    let kinds = token_kinds("declare int Count = 42;");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword,
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::AssignmentOp,
            TokenKind::IntegerLiteral,
            TokenKind::Punctuator,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keyword_versus_identifier() {
    assert_eq!(token_kinds("if"), vec![TokenKind::Keyword, TokenKind::Eof]);
    assert_eq!(token_kinds("ifx"), vec![TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(token_kinds("If"), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn booleans_take_priority_over_identifiers() {
    assert_eq!(
        token_kinds("true false truth"),
        vec![
            TokenKind::BooleanLiteral,
            TokenKind::BooleanLiteral,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn double_equals_is_one_relational_operator() {
    let lexed = lex("==");
    assert_eq!(lexed.kinds(), vec![TokenKind::RelationalOp, TokenKind::Eof]);
    assert_eq!(lexed.tokens[0].lexeme, "==");
}

#[test]
fn lex_arithmetic_operators() {
    let source = "a + b - c * d / e % f ** g";
    assert_eq!(
        lexemes(source),
        vec!["a", "+", "b", "-", "c", "*", "d", "/", "e", "%", "f", "**", "g", ""]
    );
    let kinds = token_kinds(source);
    assert_eq!(
        kinds
            .iter()
            .filter(|k| **k == TokenKind::ArithmeticOp)
            .count(),
        6
    );
}

#[test]
fn lex_relational_operators() {
    let kinds = token_kinds("a <= b >= c == d != e < f > g");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::RelationalOp,
            TokenKind::Identifier,
            TokenKind::RelationalOp,
            TokenKind::Identifier,
            TokenKind::RelationalOp,
            TokenKind::Identifier,
            TokenKind::RelationalOp,
            TokenKind::Identifier,
            TokenKind::RelationalOp,
            TokenKind::Identifier,
            TokenKind::RelationalOp,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_logical_operators() {
    assert_eq!(lexemes("a && !b || c"), vec!["a", "&&", "!", "b", "||", "c", ""]);
    assert_eq!(
        token_kinds("&& || !"),
        vec![
            TokenKind::LogicalOp,
            TokenKind::LogicalOp,
            TokenKind::LogicalOp,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn compound_assignment_beats_plain_operators() {
    assert_eq!(lexemes("x += 1"), vec!["x", "+=", "1", ""]);
    assert_eq!(
        token_kinds("+= -= *= /= ="),
        vec![
            TokenKind::AssignmentOp,
            TokenKind::AssignmentOp,
            TokenKind::AssignmentOp,
            TokenKind::AssignmentOp,
            TokenKind::AssignmentOp,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn increment_and_decrement() {
    assert_eq!(
        token_kinds("i++ j--"),
        vec![
            TokenKind::Identifier,
            TokenKind::IncrementOp,
            TokenKind::Identifier,
            TokenKind::DecrementOp,
            TokenKind::Eof,
        ]
    );
    assert_eq!(lexemes("a+++b"), vec!["a", "++", "+", "b", ""]);
}

#[test]
fn lex_punctuators() {
    let kinds = token_kinds("( ) { } [ ] , ; :");
    assert_eq!(kinds.len(), 10);
    assert!(kinds[..9].iter().all(|k| *k == TokenKind::Punctuator));
}

#[test]
fn lex_numeric_literals() {
    assert_eq!(
        token_kinds("0 42 3.14 2.5e10 1.0E-3 6.02e+23"),
        vec![
            TokenKind::IntegerLiteral,
            TokenKind::IntegerLiteral,
            TokenKind::FloatLiteral,
            TokenKind::FloatLiteral,
            TokenKind::FloatLiteral,
            TokenKind::FloatLiteral,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_string_and_char_literals() {
    let lexed = lex(r#"output("tab\there \"quoted\"") 'a' '\n' '\''"#);
    assert!(!lexed.has_errors());
    assert_eq!(
        lexed.kinds(),
        vec![
            TokenKind::Keyword,
            TokenKind::Punctuator,
            TokenKind::StringLiteral,
            TokenKind::Punctuator,
            TokenKind::CharLiteral,
            TokenKind::CharLiteral,
            TokenKind::CharLiteral,
            TokenKind::Eof,
        ]
    );
    assert_eq!(lexed.tokens[2].lexeme, r#""tab\there \"quoted\"""#);
}

#[test]
fn comments_and_whitespace_are_not_delivered() {
    let lexed = lex("## heading\nstart #* block\n comment *# finish");
    assert_eq!(
        lexed.kinds(),
        vec![TokenKind::Keyword, TokenKind::Keyword, TokenKind::Eof]
    );
    let trivia_kinds: Vec<TokenKind> = lexed.trivia.iter().map(|t| t.kind).collect();
    assert_eq!(
        trivia_kinds,
        vec![
            TokenKind::SingleLineComment,
            TokenKind::Whitespace,
            TokenKind::Whitespace,
            TokenKind::MultiLineComment,
            TokenKind::Whitespace,
        ]
    );
    assert_eq!(lexed.trivia[0].lexeme, "## heading");
    assert_eq!(lexed.trivia[3].lexeme, "#* block\n comment *#");
}

#[test]
fn single_line_comment_leaves_newline_for_line_tracking() {
    let lexed = lex("## note\nx");
    assert_eq!(lexed.tokens[0].position, Position::new(2, 1));
}

#[test]
fn line_and_column_tracking() {
    let lexed = lex("a\nbb");
    assert_eq!(lexed.tokens[1].lexeme, "bb");
    assert_eq!(lexed.tokens[1].line(), 2);
    assert_eq!(lexed.tokens[1].column(), 1);

    let lexed = lex("start\n\tx = 1;\nfinish");
    let positions: Vec<(usize, usize)> = lexed
        .tokens
        .iter()
        .map(|t| (t.line(), t.column()))
        .collect();
    assert_eq!(
        positions,
        vec![(1, 1), (2, 2), (2, 4), (2, 6), (2, 7), (3, 1), (3, 7)]
    );
}

#[test]
fn columns_count_characters_not_bytes() {
    let lexed = lex("\"héllo\" x");
    assert_eq!(lexed.tokens[1].column(), 9);
    assert_eq!(lexed.tokens[1].span.start, 9);
}

#[test]
fn empty_source_yields_single_eof() {
    let lexed = lex("");
    assert_eq!(lexed.kinds(), vec![TokenKind::Eof]);
    assert_eq!(lexed.tokens[0].position, Position::new(1, 1));
}

#[test]
fn eof_is_produced_exactly_once() {
    let mut diagnostics = Diagnostics::new();
    let mut scanner = Scanner::new("x", &mut diagnostics);
    assert_eq!(scanner.next_token().map(|t| t.kind), Some(TokenKind::Identifier));
    assert_eq!(scanner.next_token().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(scanner.next_token(), None);
    assert_eq!(scanner.next_token(), None);
}

#[test]
fn scanner_is_an_iterator() {
    let mut diagnostics = Diagnostics::new();
    let kinds: Vec<TokenKind> = Scanner::new("loop (i < 10) { i++; }", &mut diagnostics)
        .map(|t| t.kind)
        .collect();
    assert_eq!(kinds.len(), 12);
    assert_eq!(kinds.last(), Some(&TokenKind::Eof));
    assert!(!diagnostics.has_errors());
}

#[test]
fn lex_small_program() {
    let source = "\
start
    declare int Total = 0;
    ## sum the first ten numbers
    for (declare int I = 1; I <= 10; I++) {
        Total += I;
    }
    output(Total);
finish
";
    let lexed = lex(source);
    assert!(!lexed.has_errors());
    assert_eq!(lexed.tokens.first().map(|t| t.lexeme.as_str()), Some("start"));
    assert_eq!(lexed.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    let keywords = lexed
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Keyword)
        .count();
    // start declare int for declare int output finish
    assert_eq!(keywords, 8);
}

#[test]
fn category_names_are_distinct() {
    let mut names: Vec<&str> = TokenKind::ALL.iter().map(|k| k.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), TokenKind::ALL.len());
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
    assert!(TokenKind::ALL.iter().filter(|k| k.is_trivia()).count() == 3);
}
