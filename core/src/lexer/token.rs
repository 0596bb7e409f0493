use std::fmt;

use serde::Serialize;

/// A single token with its category, exact lexeme and source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
    #[serde(flatten)]
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
            position,
        }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// Whitespace and comments, which are kept out of the delivered stream by default.
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

/// Byte offset span in the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// 1-based line and column of a lexeme's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Words
    Keyword,
    Identifier,

    // Literals
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    CharLiteral,
    BooleanLiteral,

    // Operators
    ArithmeticOp,
    RelationalOp,
    LogicalOp,
    AssignmentOp,
    IncrementOp,
    DecrementOp,

    // Punctuation
    Punctuator,

    // Trivia
    SingleLineComment,
    MultiLineComment,
    Whitespace,

    // Special
    Error,
    Eof,
}

impl TokenKind {
    pub const ALL: [TokenKind; 19] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::IntegerLiteral,
        TokenKind::FloatLiteral,
        TokenKind::StringLiteral,
        TokenKind::CharLiteral,
        TokenKind::BooleanLiteral,
        TokenKind::ArithmeticOp,
        TokenKind::RelationalOp,
        TokenKind::LogicalOp,
        TokenKind::AssignmentOp,
        TokenKind::IncrementOp,
        TokenKind::DecrementOp,
        TokenKind::Punctuator,
        TokenKind::SingleLineComment,
        TokenKind::MultiLineComment,
        TokenKind::Whitespace,
        TokenKind::Error,
        TokenKind::Eof,
    ];

    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::SingleLineComment | TokenKind::MultiLineComment | TokenKind::Whitespace
        )
    }

    /// The category name as it appears in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::CharLiteral => "CHAR_LITERAL",
            TokenKind::BooleanLiteral => "BOOLEAN_LITERAL",
            TokenKind::ArithmeticOp => "ARITHMETIC_OP",
            TokenKind::RelationalOp => "RELATIONAL_OP",
            TokenKind::LogicalOp => "LOGICAL_OP",
            TokenKind::AssignmentOp => "ASSIGNMENT_OP",
            TokenKind::IncrementOp => "INCREMENT_OP",
            TokenKind::DecrementOp => "DECREMENT_OP",
            TokenKind::Punctuator => "PUNCTUATOR",
            TokenKind::SingleLineComment => "SINGLE_LINE_COMMENT",
            TokenKind::MultiLineComment => "MULTI_LINE_COMMENT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Error => "ERROR",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
