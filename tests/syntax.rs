use min::{
    ast::{BinaryOperator, Expr, LiteralValue, Stmt},
    error::SyntaxError,
    interpreter::{
        lexer::{self, TokenKind},
        parser,
    },
};

/// Scans and returns just the token kinds, asserting no lexical errors.
fn kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, errors) = lexer::scan(source);
    assert!(errors.is_empty(), "unexpected scan errors: {errors:?}");

    tokens.into_iter().map(|token| token.kind).collect()
}

/// Parses source all the way from text, asserting no errors at any stage.
fn parse_clean(source: &str) -> Vec<Stmt> {
    let (tokens, scan_errors) = lexer::scan(source);
    assert!(scan_errors.is_empty(), "unexpected scan errors: {scan_errors:?}");

    let (statements, parse_errors) = parser::parse(&tokens);
    assert!(parse_errors.is_empty(), "unexpected parse errors: {parse_errors:?}");

    statements
}

fn parse_errors(source: &str) -> (Vec<Stmt>, Vec<SyntaxError>) {
    let (tokens, scan_errors) = lexer::scan(source);
    assert!(scan_errors.is_empty(), "unexpected scan errors: {scan_errors:?}");

    parser::parse(&tokens)
}

#[test]
fn scans_punctuation_and_operators() {
    assert_eq!(kinds("( ) { } , ; ? :"),
               vec![TokenKind::LeftParen,
                    TokenKind::RightParen,
                    TokenKind::LeftBrace,
                    TokenKind::RightBrace,
                    TokenKind::Comma,
                    TokenKind::Semicolon,
                    TokenKind::Question,
                    TokenKind::Colon,
                    TokenKind::Eof]);
}

#[test]
fn maximal_munch_on_two_character_operators() {
    assert_eq!(kinds("== = != ! <= < >= >"),
               vec![TokenKind::EqualEqual,
                    TokenKind::Equal,
                    TokenKind::BangEqual,
                    TokenKind::Bang,
                    TokenKind::LessEqual,
                    TokenKind::Less,
                    TokenKind::GreaterEqual,
                    TokenKind::Greater,
                    TokenKind::Eof]);

    // No space: `===` must scan as `==` then `=`.
    assert_eq!(kinds("==="),
               vec![TokenKind::EqualEqual, TokenKind::Equal, TokenKind::Eof]);
}

#[test]
fn scans_keywords_and_identifiers() {
    assert_eq!(kinds("let letter"),
               vec![TokenKind::Let,
                    TokenKind::Identifier("letter".to_string()),
                    TokenKind::Eof]);
    assert_eq!(kinds("if ifx _x x_1"),
               vec![TokenKind::If,
                    TokenKind::Identifier("ifx".to_string()),
                    TokenKind::Identifier("_x".to_string()),
                    TokenKind::Identifier("x_1".to_string()),
                    TokenKind::Eof]);
}

#[test]
fn reserved_words_scan_but_never_parse() {
    assert_eq!(kinds("class super this"),
               vec![TokenKind::Class, TokenKind::Super, TokenKind::This, TokenKind::Eof]);

    let (_, errors) = parse_errors("class;");
    assert!(!errors.is_empty());
}

#[test]
fn scans_number_literals() {
    assert_eq!(kinds("0 42 3.14"),
               vec![TokenKind::Number(0.0),
                    TokenKind::Number(42.0),
                    TokenKind::Number(3.14),
                    TokenKind::Eof]);

    // A leading dot is not part of a number literal.
    assert_eq!(kinds(".5"),
               vec![TokenKind::Dot, TokenKind::Number(5.0), TokenKind::Eof]);
}

#[test]
fn scans_string_literals_without_quotes() {
    assert_eq!(kinds("\"hi there\""),
               vec![TokenKind::Str("hi there".to_string()), TokenKind::Eof]);
    assert_eq!(kinds("\"\""), vec![TokenKind::Str(String::new()), TokenKind::Eof]);
}

#[test]
fn strings_may_span_lines_and_lines_keep_counting() {
    let (tokens, errors) = lexer::scan("\"a\nb\"\nlet");
    assert!(errors.is_empty());

    assert_eq!(tokens[0].kind, TokenKind::Str("a\nb".to_string()));
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[1].line, 3);
}

#[test]
fn comments_are_skipped() {
    assert_eq!(kinds("1 // rest of line\n2"),
               vec![TokenKind::Number(1.0), TokenKind::Number(2.0), TokenKind::Eof]);
    assert_eq!(kinds("1 /* spans\nlines */ 2"),
               vec![TokenKind::Number(1.0), TokenKind::Number(2.0), TokenKind::Eof]);
}

#[test]
fn unterminated_string_is_reported() {
    let (tokens, errors) = lexer::scan("let s = \"oops");
    assert_eq!(errors, vec![SyntaxError::UnterminatedString { line: 1 }]);

    // The tokens before the error are still delivered.
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens.last().map(|t| t.kind.clone()), Some(TokenKind::Eof));
}

#[test]
fn unterminated_block_comment_is_reported() {
    let (_, errors) = lexer::scan("1 /* never closed");
    assert_eq!(errors, vec![SyntaxError::UnterminatedBlockComment { line: 1 }]);
}

#[test]
fn unexpected_characters_are_collected_and_scanning_continues() {
    let (tokens, errors) = lexer::scan("let @ x # = 1;");
    assert_eq!(errors,
               vec![SyntaxError::UnexpectedCharacter { lexeme: "@".to_string(), line: 1 },
                    SyntaxError::UnexpectedCharacter { lexeme: "#".to_string(), line: 1 }]);

    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds,
               vec![TokenKind::Let,
                    TokenKind::Identifier("x".to_string()),
                    TokenKind::Equal,
                    TokenKind::Number(1.0),
                    TokenKind::Semicolon,
                    TokenKind::Eof]);
}

#[test]
fn bare_ampersand_and_pipe_are_errors() {
    let (_, errors) = lexer::scan("a & b");
    assert_eq!(errors,
               vec![SyntaxError::UnexpectedCharacter { lexeme: "&".to_string(), line: 1 }]);

    let (_, errors) = lexer::scan("a | b");
    assert_eq!(errors,
               vec![SyntaxError::UnexpectedCharacter { lexeme: "|".to_string(), line: 1 }]);

    assert_eq!(kinds("a && b")[1], TokenKind::And);
    assert_eq!(kinds("a || b")[1], TokenKind::Or);
}

#[test]
fn line_numbers_are_one_based_and_advance_on_newlines() {
    let (tokens, errors) = lexer::scan("1\n2\n\n3");
    assert!(errors.is_empty());

    let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn parsing_is_deterministic() {
    let source = "let x = 1 + 2 * 3;\nfunction f(a, b) { return a < b ? a : b; }\nprint f(x, 4);";
    let (tokens, _) = lexer::scan(source);

    let (first, _) = parser::parse(&tokens);
    let (second, _) = parser::parse(&tokens);
    assert_eq!(first, second);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let statements = parse_clean("1 + 2 * 3;");

    let Stmt::Expression { expr: Expr::Binary { op, right, .. } } = &statements[0] else {
        panic!("expected a binary expression statement, got {statements:?}");
    };
    assert_eq!(*op, BinaryOperator::Add);
    assert!(matches!(**right, Expr::Binary { op: BinaryOperator::Mul, .. }));
}

#[test]
fn subtraction_is_left_associative() {
    let statements = parse_clean("10 - 4 - 3;");

    let Stmt::Expression { expr: Expr::Binary { op, left, .. } } = &statements[0] else {
        panic!("expected a binary expression statement, got {statements:?}");
    };
    assert_eq!(*op, BinaryOperator::Sub);
    assert!(matches!(**left, Expr::Binary { op: BinaryOperator::Sub, .. }));
}

#[test]
fn ternary_parses_right_associative() {
    let statements = parse_clean("a ? 1 : b ? 2 : 3;");

    let Stmt::Expression { expr: Expr::Ternary { else_branch, .. } } = &statements[0] else {
        panic!("expected a ternary expression statement, got {statements:?}");
    };
    assert!(matches!(**else_branch, Expr::Ternary { .. }));
}

#[test]
fn comma_has_lowest_precedence() {
    let statements = parse_clean("a = 1, b = 2;");

    let Stmt::Expression { expr: Expr::Binary { op, left, right, .. } } = &statements[0] else {
        panic!("expected a comma expression statement, got {statements:?}");
    };
    assert_eq!(*op, BinaryOperator::Comma);
    assert!(matches!(**left, Expr::Assign { .. }));
    assert!(matches!(**right, Expr::Assign { .. }));
}

#[test]
fn call_arguments_are_not_comma_expressions() {
    let statements = parse_clean("f(1, 2);");

    let Stmt::Expression { expr: Expr::Call { arguments, .. } } = &statements[0] else {
        panic!("expected a call expression statement, got {statements:?}");
    };
    assert_eq!(arguments.len(), 2);
}

#[test]
fn calls_chain_left_to_right() {
    let statements = parse_clean("f(1)(2);");

    let Stmt::Expression { expr: Expr::Call { callee, .. } } = &statements[0] else {
        panic!("expected a call expression statement, got {statements:?}");
    };
    assert!(matches!(**callee, Expr::Call { .. }));
}

#[test]
fn let_initializer_stops_at_commas() {
    // The comma operator would swallow the rest; a declaration must not.
    let (_, errors) = parse_errors("let x = 1, 2;");
    assert!(!errors.is_empty());
}

#[test]
fn for_loops_lower_to_while() {
    let statements = parse_clean("for (let i = 0; i < 3; i = i + 1) print i;");

    let Stmt::Block { statements: outer } = &statements[0] else {
        panic!("expected the initializer block, got {statements:?}");
    };
    assert!(matches!(outer[0], Stmt::Let { .. }));
    assert!(matches!(outer[1], Stmt::While { .. }));
}

#[test]
fn for_loop_without_condition_loops_on_true() {
    let statements = parse_clean("for (;;) print 1;");

    let Stmt::While { condition, .. } = &statements[0] else {
        panic!("expected a while statement, got {statements:?}");
    };
    assert_eq!(*condition,
               Expr::Literal { value: LiteralValue::Bool(true), line: 1 });
}

#[test]
fn missing_paren_reports_one_error_and_parsing_continues() {
    let (statements, errors) = parse_errors("print (1 + 2;\nlet ok = 1;\nprint ok;");

    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], SyntaxError::Expected { .. }));

    // Synchronization resumes at the next statement boundary.
    assert_eq!(statements.len(), 2);
    assert!(matches!(statements[0], Stmt::Let { .. }));
    assert!(matches!(statements[1], Stmt::Print { .. }));
}

#[test]
fn synchronization_stops_at_a_class_keyword() {
    // Recovery from the first error must halt at `class`, so the reserved
    // word gets its own diagnostic instead of being skipped over.
    let (statements, errors) = parse_errors("print (1 + 2 oops\nclass Foo {}\nlet ok = 1;");

    assert_eq!(errors.len(), 2);
    assert!(errors[1].to_string().contains("'class'"), "got: {}", errors[1]);
    assert!(matches!(statements[0], Stmt::Let { .. }));
}

#[test]
fn each_bad_statement_reports_its_own_error() {
    let (_, errors) = parse_errors("let = 1;\nprint ;\nlet x = ;");
    assert_eq!(errors.len(), 3);
}

#[test]
fn invalid_assignment_target_is_reported_without_abandoning_the_statement() {
    let (statements, errors) = parse_errors("a + b = c;\nprint 1;");

    assert_eq!(errors,
               vec![SyntaxError::InvalidAssignmentTarget { line: 1 }]);
    assert_eq!(statements.len(), 2);
}

#[test]
fn argument_and_parameter_caps() {
    let (_, errors) = parse_errors("f(1, 2, 3, 4, 5, 6, 7, 8, 9);");
    assert_eq!(errors, vec![SyntaxError::TooManyArguments { line: 1 }]);

    let (_, errors) = parse_errors("function f(a, b, c, d, e, g, h, i, j, k) {}");
    assert_eq!(errors,
               vec![SyntaxError::TooManyParameters { line: 1 },
                    SyntaxError::TooManyParameters { line: 1 }]);

    let (_, errors) = parse_errors("f(1, 2, 3, 4, 5, 6, 7, 8);");
    assert!(errors.is_empty());
}

#[test]
fn error_at_end_of_input() {
    let (_, errors) = parse_errors("print 1");

    assert_eq!(errors.len(), 1);
    let message = errors[0].to_string();
    assert!(message.contains("Error at end"), "got: {message}");
}

#[test]
fn expected_errors_name_the_found_lexeme() {
    let (_, errors) = parse_errors("if 1 print 2;");

    assert_eq!(errors[0].to_string(),
               "[line 1] Error at '1': Expect '(' after 'if'.");
}
