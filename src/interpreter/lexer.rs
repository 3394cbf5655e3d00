use logos::{FilterResult, Lexer, Logos};

use crate::error::SyntaxError;

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are consumed, including the ones hidden inside
/// multi-line strings and block comments.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A failure produced while recognizing one token.
///
/// Carried as the logos error type; the scan driver turns each of these into
/// a located [`SyntaxError`] and keeps scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanError {
    /// A character that starts no token.
    #[default]
    UnexpectedCharacter,
    /// A string literal without a closing quote.
    UnterminatedString,
    /// A block comment without a closing `*/`.
    UnterminatedBlockComment,
}

/// Raw token produced by logos, before the end-of-input marker is added.
///
/// Whitespace and comments never reach the token list: they are skipped here,
/// with newline counting folded into the skip callbacks.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(extras = LexerExtras)]
#[logos(error = ScanError)]
#[logos(skip r"[ \t\r\f]+")]
enum RawToken {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
    /// String literal tokens. The payload excludes the surrounding quotes.
    #[token("\"", read_string)]
    Str(String),
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `null`
    #[token("null")]
    Null,
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `for`
    #[token("for")]
    For,
    /// `while`
    #[token("while")]
    While,
    /// `function`
    #[token("function")]
    Function,
    /// `return`
    #[token("return")]
    Return,
    /// `print`
    #[token("print")]
    Print,
    /// `class` (reserved; not yet part of the grammar)
    #[token("class")]
    Class,
    /// `super` (reserved; not yet part of the grammar)
    #[token("super")]
    Super,
    /// `this` (reserved; not yet part of the grammar)
    #[token("this")]
    This,

    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `&&`; a bare `&` is an unexpected character.
    #[token("&&")]
    And,
    /// `||`; a bare `|` is an unexpected character.
    #[token("||")]
    Or,

    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,
    /// `/* Block comments. */`
    #[token("/*", skip_block_comment)]
    BlockComment,
    /// Newlines are skipped but counted for error locations.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
}

/// Reads a string literal after its opening quote.
///
/// Strings may span multiple lines; every newline consumed is counted. When
/// no closing quote exists the rest of the input is consumed and an
/// unterminated-string error is produced instead of a token.
fn read_string(lex: &mut Lexer<RawToken>) -> Result<String, ScanError> {
    let remainder = lex.remainder();
    match remainder.find('"') {
        Some(index) => {
            let contents = &remainder[..index];
            lex.extras.line += contents.matches('\n').count();
            lex.bump(index + 1);
            Ok(contents.to_string())
        },
        None => {
            lex.extras.line += remainder.matches('\n').count();
            lex.bump(remainder.len());
            Err(ScanError::UnterminatedString)
        },
    }
}

/// Skips a block comment after its opening `/*`.
///
/// Block comments do not nest: the first `*/` ends the comment. An unclosed
/// comment consumes the rest of the input and reports an error.
fn skip_block_comment(lex: &mut Lexer<RawToken>) -> FilterResult<(), ScanError> {
    let remainder = lex.remainder();
    match remainder.find("*/") {
        Some(index) => {
            lex.extras.line += remainder[..index].matches('\n').count();
            lex.bump(index + 2);
            FilterResult::Skip
        },
        None => {
            lex.extras.line += remainder.matches('\n').count();
            lex.bump(remainder.len());
            FilterResult::Error(ScanError::UnterminatedBlockComment)
        },
    }
}

/// The kind of a scanned token, including the end-of-input marker.
///
/// Literal payloads live directly on the variant: a `Number` carries its
/// parsed value and a `Str` its unquoted contents, so no separate literal
/// field is needed on [`Token`].
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A numeric literal and its parsed value.
    Number(f64),
    /// A string literal and its unquoted contents.
    Str(String),
    /// An identifier and its name.
    Identifier(String),
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `let`
    Let,
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `while`
    While,
    /// `function`
    Function,
    /// `return`
    Return,
    /// `print`
    Print,
    /// `class`
    Class,
    /// `super`
    Super,
    /// `this`
    This,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `;`
    Semicolon,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `&&`
    And,
    /// `||`
    Or,
    /// End of input. Every token sequence ends with exactly one of these.
    Eof,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Number(n) => Self::Number(n),
            RawToken::Str(s) => Self::Str(s),
            RawToken::Identifier(name) => Self::Identifier(name),
            RawToken::True => Self::True,
            RawToken::False => Self::False,
            RawToken::Null => Self::Null,
            RawToken::Let => Self::Let,
            RawToken::If => Self::If,
            RawToken::Else => Self::Else,
            RawToken::For => Self::For,
            RawToken::While => Self::While,
            RawToken::Function => Self::Function,
            RawToken::Return => Self::Return,
            RawToken::Print => Self::Print,
            RawToken::Class => Self::Class,
            RawToken::Super => Self::Super,
            RawToken::This => Self::This,
            RawToken::LeftParen => Self::LeftParen,
            RawToken::RightParen => Self::RightParen,
            RawToken::LeftBrace => Self::LeftBrace,
            RawToken::RightBrace => Self::RightBrace,
            RawToken::Comma => Self::Comma,
            RawToken::Dot => Self::Dot,
            RawToken::Semicolon => Self::Semicolon,
            RawToken::Question => Self::Question,
            RawToken::Colon => Self::Colon,
            RawToken::Plus => Self::Plus,
            RawToken::Minus => Self::Minus,
            RawToken::Star => Self::Star,
            RawToken::Slash => Self::Slash,
            RawToken::Bang => Self::Bang,
            RawToken::BangEqual => Self::BangEqual,
            RawToken::Equal => Self::Equal,
            RawToken::EqualEqual => Self::EqualEqual,
            RawToken::Greater => Self::Greater,
            RawToken::GreaterEqual => Self::GreaterEqual,
            RawToken::Less => Self::Less,
            RawToken::LessEqual => Self::LessEqual,
            RawToken::And => Self::And,
            RawToken::Or => Self::Or,
            // Skipped by logos; never observed by the driver.
            RawToken::LineComment | RawToken::BlockComment | RawToken::NewLine => unreachable!(),
        }
    }
}

/// One scanned token.
///
/// Immutable after scanning. The lexeme is the exact source substring the
/// token was produced from (for a string literal it still includes the
/// quotes), and the line is where the token ended, 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was scanned, with any literal payload.
    pub kind: TokenKind,
    /// The exact source substring of the token; empty for end of input.
    pub lexeme: String,
    /// 1-based source line, for error reporting.
    pub line: usize,
}

/// Scans a complete source text into tokens.
///
/// A single left-to-right pass that never aborts: every lexical error is
/// collected and scanning continues with the next character. The returned
/// token list always ends with a single end-of-input token, even when the
/// source is empty or ends mid-error.
///
/// # Parameters
/// - `source`: The complete source text to scan.
///
/// # Returns
/// The scanned tokens and every lexical error found, in source order.
#[must_use]
pub fn scan(source: &str) -> (Vec<Token>, Vec<SyntaxError>) {
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(raw) => tokens.push(Token {
                kind: TokenKind::from(raw),
                lexeme: lexer.slice().to_string(),
                line: lexer.extras.line,
            }),
            Err(error) => errors.push(match error {
                ScanError::UnexpectedCharacter => SyntaxError::UnexpectedCharacter {
                    lexeme: lexer.slice().to_string(),
                    line: lexer.extras.line,
                },
                ScanError::UnterminatedString => SyntaxError::UnterminatedString {
                    line: lexer.extras.line,
                },
                ScanError::UnterminatedBlockComment => SyntaxError::UnterminatedBlockComment {
                    line: lexer.extras.line,
                },
            }),
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        lexeme: String::new(),
        line: lexer.extras.line,
    });

    (tokens, errors)
}
