use std::iter::Peekable;

use crate::{
    ast::{Expr, ExprCont, Factor, LogicalExpr, Number, Term, TermCont},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            utils::{expect, nested, peek_kind, peek_second, unexpected},
        },
    },
};

/// Parses an arithmetic expression.
///
/// Grammar:
/// ```text
///     expr  := term expr2
///     expr2 := ('+' | '-') term expr2 | ε
/// ```
///
/// The `(operator, term)` pairs are collected first and then linked from the
/// back, so long chains do not deepen the call stack.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_expression_at(tokens, 0)
}

fn parse_expression_at<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let term = parse_term_at(tokens, depth)?;

    let mut steps = Vec::new();
    while let Some(operator) = tokens.next_if(|t| matches!(t.kind, TokenKind::Plus | TokenKind::Minus)) {
        steps.push((operator.clone(), parse_term_at(tokens, depth)?));
    }

    let rest = steps.into_iter()
                    .rev()
                    .fold(None, |rest, (operator, term)| {
                        Some(Box::new(ExprCont { operator, term, rest }))
                    });

    Ok(Expr { term, rest })
}

/// Parses a term.
///
/// Grammar:
/// ```text
///     term  := factor term2
///     term2 := ('*' | '/') factor term2 | ε
/// ```
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Term>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_term_at(tokens, 0)
}

fn parse_term_at<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Term>
    where I: Iterator<Item = &'a Token> + Clone
{
    let factor = parse_factor_at(tokens, depth)?;

    let mut steps = Vec::new();
    while let Some(operator) = tokens.next_if(|t| matches!(t.kind, TokenKind::Star | TokenKind::Slash)) {
        steps.push((operator.clone(), parse_factor_at(tokens, depth)?));
    }

    let rest = steps.into_iter()
                    .rev()
                    .fold(None, |rest, (operator, factor)| {
                        Some(Box::new(TermCont { operator, factor, rest }))
                    });

    Ok(Term { factor, rest })
}

/// Parses a factor.
///
/// Grammar:
/// ```text
///     factor := '(' expr ')' | ('-' | '+') factor | ID | NUMBER
/// ```
///
/// # Errors
/// - `UnexpectedToken` if no alternative starts with the next token.
/// - `LiteralTooLarge` for numbers outside the `i64` range.
/// - `NestingTooDeep` when parentheses and signs nest past
///   [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH).
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Factor>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_factor_at(tokens, 0)
}

fn parse_factor_at<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Factor>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token: &'a Token =
        tokens.next()
              .ok_or_else(|| SyntaxError::UnexpectedEndOfInput { expected: "a factor".to_string() })?;

    match token.kind {
        TokenKind::LParen => {
            let expr = parse_expression_at(tokens, nested(token, depth)?)?;
            expect(tokens, TokenKind::RParen)?;
            Ok(Factor::Grouped { open: token.clone(),
                                 expr: Box::new(expr), })
        },
        TokenKind::Minus | TokenKind::Plus => {
            let operand = parse_factor_at(tokens, nested(token, depth)?)?;
            Ok(Factor::Unary { operator: token.clone(),
                               operand:  Box::new(operand), })
        },
        TokenKind::Identifier => Ok(Factor::Variable(token.clone())),
        TokenKind::Number => {
            let value =
                token.text
                     .parse()
                     .map_err(|_| SyntaxError::LiteralTooLarge { text:   token.text.clone(),
                                                                 line:   token.line,
                                                                 column: token.column, })?;
            Ok(Factor::Number(Number { value,
                                       token: token.clone() }))
        },
        _ => Err(unexpected(token, "a factor")),
    }
}

/// Parses the condition of `se` or `enquanto`.
///
/// Grammar:
/// ```text
///     exprLogico := expr relop expr | ID
///     relop      := '<' | '<=' | '>' | '>=' | '=' | '<>'
/// ```
///
/// An identifier that is not directly followed by a relational operator is
/// taken as the bare form, even if an arithmetic operator follows it. Only
/// identifiers get this treatment; literals and parenthesised expressions
/// always need a comparison.
///
/// # Example
/// ```
/// use lalg::{
///     ast::LogicalExpr,
///     interpreter::{lexer::tokenize, parser::expression::parse_logical},
/// };
///
/// let tokens = tokenize("pronto").unwrap();
/// let condition = parse_logical(&mut tokens.iter().peekable()).unwrap();
/// assert!(matches!(condition, LogicalExpr::Bare(_)));
///
/// let tokens = tokenize("i < 10").unwrap();
/// let condition = parse_logical(&mut tokens.iter().peekable()).unwrap();
/// assert!(matches!(condition, LogicalExpr::Comparison { .. }));
/// ```
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<LogicalExpr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if peek_kind(tokens) == Some(TokenKind::Identifier)
       && !peek_second(tokens).is_some_and(TokenKind::is_relational)
    {
        let id = expect(tokens, TokenKind::Identifier)?.clone();
        return Ok(LogicalExpr::Bare(id));
    }

    let left = parse_expression(tokens)?;

    let operator = match tokens.next() {
        Some(token) if token.kind.is_relational() => token.clone(),
        Some(token) => return Err(unexpected(token, "a comparison")),
        None => {
            return Err(SyntaxError::UnexpectedEndOfInput { expected:
                                                               "a relational operator".to_string(), });
        },
    };

    let right = parse_expression(tokens)?;

    Ok(LogicalExpr::Comparison { left,
                                 operator,
                                 right })
}
