use lalg::{
    ast::{Command, Factor, LogicalExpr, Program, WriteItem},
    error::SyntaxError,
    interpreter::{
        lexer::{TokenKind, tokenize},
        parser::core::{MAX_NESTING_DEPTH, parse},
        value::Type,
    },
};

fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    parse(&tokenize(source).unwrap())
}

fn body(source: &str) -> Vec<Command> {
    parse_source(source).unwrap().block.commands
}

#[test]
fn minimal_program() {
    let program = parse_source("programa vazio; início escrever(\"oi\") fim.").unwrap();

    assert_eq!(program.name.text, "vazio");
    assert!(program.declarations.is_none());
    assert_eq!(program.block.commands.len(), 1);
}

#[test]
fn declaration_groups() {
    let program = parse_source("programa p; var a, b: inteiro; c: lógico; início a := 1 fim.").unwrap();
    let groups = program.declarations.unwrap().declarations;

    assert_eq!(groups.len(), 2);
    let names: Vec<_> = groups[0].names.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(groups[0].ty.ty, Type::Integer);
    assert_eq!(groups[1].ty.ty, Type::Boolean);
}

#[test]
fn var_needs_at_least_one_group() {
    let error = parse_source("programa p; var início a := 1 fim.").unwrap_err();
    assert!(matches!(error,
                     SyntaxError::ExpectedToken { expected: TokenKind::Identifier,
                                                  found: TokenKind::Begin,
                                                  .. }));
}

#[test]
fn semicolon_before_fim_is_allowed() {
    assert_eq!(body("programa p; início a := 1; b := 2; fim.").len(), 2);
}

#[test]
fn empty_block_is_rejected() {
    let error = parse_source("programa p; início fim.").unwrap_err();
    assert!(matches!(error,
                     SyntaxError::UnexpectedToken { context: "a command",
                                                    found: TokenKind::End,
                                                    .. }));
}

#[test]
fn missing_semicolon_reports_what_was_found() {
    let error = parse_source("programa p\ninício a := 1 fim.").unwrap_err();

    assert_eq!(error,
               SyntaxError::ExpectedToken { expected: TokenKind::Semicolon,
                                            found:    TokenKind::Begin,
                                            text:     "início".to_string(),
                                            line:     2,
                                            column:   1, });
    assert_eq!(error.location(), Some((2, 1)));
}

#[test]
fn running_out_of_tokens_is_distinct() {
    let error = parse_source("programa p; início a := 1").unwrap_err();
    assert!(matches!(error, SyntaxError::UnexpectedEndOfInput { .. }));
    assert_eq!(error.location(), None);
}

#[test]
fn tokens_after_the_final_dot_are_rejected() {
    let error = parse_source("programa p; início a := 1 fim. a").unwrap_err();
    assert!(matches!(error, SyntaxError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn oversized_literals_are_rejected() {
    let error = parse_source("programa p; início a := 99999999999999999999 fim.").unwrap_err();
    assert!(matches!(error, SyntaxError::LiteralTooLarge { .. }));
}

#[test]
fn expression_chains_link_to_the_right() {
    let commands = body("programa p; início a := a - b - c fim.");
    let Command::Assignment { value, .. } = &commands[0] else {
        panic!("expected an assignment");
    };

    let first = value.rest.as_deref().unwrap();
    assert_eq!(first.operator.kind, TokenKind::Minus);
    assert_eq!(first.term.first_token().text, "b");

    let second = first.rest.as_deref().unwrap();
    assert_eq!(second.term.first_token().text, "c");
    assert!(second.rest.is_none());
}

#[test]
fn multiplication_binds_tighter() {
    let commands = body("programa p; início a := 1 + 2 * 3 fim.");
    let Command::Assignment { value, .. } = &commands[0] else {
        panic!("expected an assignment");
    };

    assert!(value.term.rest.is_none());
    let plus = value.rest.as_deref().unwrap();
    assert_eq!(plus.operator.kind, TokenKind::Plus);
    assert_eq!(plus.term.rest.as_deref().unwrap().operator.kind, TokenKind::Star);
}

#[test]
fn signs_and_parentheses() {
    let commands = body("programa p; início a := -(b + 1) fim.");
    let Command::Assignment { value, .. } = &commands[0] else {
        panic!("expected an assignment");
    };

    let Factor::Unary { operator, operand } = &value.term.factor else {
        panic!("expected a unary factor");
    };
    assert_eq!(operator.kind, TokenKind::Minus);
    assert!(matches!(**operand, Factor::Grouped { .. }));
}

#[test]
fn bare_identifier_conditions() {
    let commands = body("programa p; início se ok então a := 1; enquanto x < 3 faça x := x + 1 fim.");

    let Command::If { condition, .. } = &commands[0] else {
        panic!("expected an if");
    };
    assert!(matches!(condition, LogicalExpr::Bare(token) if token.text == "ok"));

    let Command::While { condition, .. } = &commands[1] else {
        panic!("expected a while");
    };
    assert!(matches!(condition, LogicalExpr::Comparison { operator, .. } if operator.kind == TokenKind::Less));
}

#[test]
fn identifier_followed_by_arithmetic_is_still_bare() {
    let error = parse_source("programa p; início se x + 1 > 2 então a := 1 fim.").unwrap_err();
    assert!(matches!(error,
                     SyntaxError::ExpectedToken { expected: TokenKind::Then,
                                                  found: TokenKind::Plus,
                                                  .. }));
}

#[test]
fn literals_in_conditions_need_a_comparison() {
    assert!(parse_source("programa p; início se 1 + x > 2 então a := 1 fim.").is_ok());
    assert!(parse_source("programa p; início se 1 então a := 1 fim.").is_err());
}

#[test]
fn else_belongs_to_the_inner_if() {
    let commands = body("programa p; início se a < 1 então se b < 1 então c := 1 senão c := 2 fim.");
    let Command::If { then_branch, else_branch, .. } = &commands[0] else {
        panic!("expected an if");
    };

    assert!(else_branch.is_none());
    assert!(matches!(**then_branch, Command::If { else_branch: Some(_), .. }));
}

#[test]
fn read_and_write_arguments() {
    let commands = body("programa p; início ler(a, b); escrever(\"soma: \", a + b) fim.");

    let Command::Read { variables } = &commands[0] else {
        panic!("expected a read");
    };
    assert_eq!(variables.len(), 2);

    let Command::Write { items } = &commands[1] else {
        panic!("expected a write");
    };
    assert!(matches!(&items[0], WriteItem::Text(text) if text.value == "soma: "));
    assert!(matches!(&items[1], WriteItem::Expr(_)));
}

#[test]
fn nested_blocks() {
    let commands = body("programa p; início início a := 1 fim; b := 2 fim.");
    assert!(matches!(&commands[0], Command::Compound(block) if block.commands.len() == 1));
}

fn nested_parens(depth: usize) -> String {
    format!("programa p; início a := {}1{} fim.", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn nesting_up_to_the_limit_parses() {
    assert!(parse_source(&nested_parens(MAX_NESTING_DEPTH)).is_ok());
}

#[test]
fn parentheses_nested_too_deep_are_rejected() {
    let error = parse_source(&nested_parens(5_000)).unwrap_err();

    let SyntaxError::NestingTooDeep { limit, line, column } = error else {
        panic!("expected a nesting error, got {error:?}");
    };
    assert_eq!(limit, MAX_NESTING_DEPTH);
    assert_eq!((line, column), (1, 25 + MAX_NESTING_DEPTH));
}

#[test]
fn signs_nested_too_deep_are_rejected() {
    let source = format!("programa p; início a := {}1 fim.", "-".repeat(5_000));
    assert!(matches!(parse_source(&source), Err(SyntaxError::NestingTooDeep { .. })));
}

#[test]
fn commands_nested_too_deep_are_rejected() {
    let blocks = format!("programa p; início {}a := 1{} fim.",
                         "início ".repeat(5_000),
                         " fim".repeat(5_000));
    assert!(matches!(parse_source(&blocks), Err(SyntaxError::NestingTooDeep { .. })));

    let loops = format!("programa p; início {}a := 1 fim.", "enquanto a < 1 faça ".repeat(5_000));
    assert!(matches!(parse_source(&loops), Err(SyntaxError::NestingTooDeep { .. })));
}
