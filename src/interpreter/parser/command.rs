use std::iter::Peekable;

use crate::{
    ast::{Command, StringLiteral, WriteItem},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_block_at},
            expression::{parse_expression, parse_logical},
            utils::{expect, nested, parse_comma_separated, parse_identifier, peek_kind, unexpected},
        },
    },
};

/// Parses a single command, dispatching on the leading token.
///
/// Grammar:
/// ```text
///     command := assignment | read | write | block | if | while
/// ```
///
/// # Errors
/// - `UnexpectedToken` if the leading token starts no command.
/// - `NestingTooDeep` if blocks and bodies nest past the limit.
pub fn parse_command<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Command>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_command_at(tokens, 0)
}

/// Parses a command sitting `depth` levels deep.
pub(in crate::interpreter::parser) fn parse_command_at<'a, I>(tokens: &mut Peekable<I>,
                                                              depth: usize)
                                                              -> ParseResult<Command>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token: &'a Token =
        tokens.peek()
              .copied()
              .ok_or_else(|| SyntaxError::UnexpectedEndOfInput { expected: "a command".to_string() })?;

    match token.kind {
        TokenKind::Identifier => parse_assignment(tokens),
        TokenKind::Read => parse_read(tokens),
        TokenKind::Write => parse_write(tokens),
        TokenKind::Begin => Ok(Command::Compound(parse_block_at(tokens, nested(token, depth)?)?)),
        TokenKind::If => parse_if(tokens, nested(token, depth)?),
        TokenKind::While => parse_while(tokens, nested(token, depth)?),
        _ => Err(unexpected(token, "a command")),
    }
}

/// Grammar: `assignment := ID ':=' expr`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Command>
    where I: Iterator<Item = &'a Token> + Clone
{
    let target = parse_identifier(tokens)?;
    let operator = expect(tokens, TokenKind::Assign)?.clone();
    let value = parse_expression(tokens)?;

    Ok(Command::Assignment { target,
                             operator,
                             value })
}

/// Grammar: `read := 'ler' '(' ID (',' ID)* ')'`
fn parse_read<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Command>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::Read)?;
    expect(tokens, TokenKind::LParen)?;
    let variables = parse_comma_separated(tokens, parse_identifier)?;
    expect(tokens, TokenKind::RParen)?;

    Ok(Command::Read { variables })
}

/// Grammar:
/// ```text
///     write     := 'escrever' '(' stringvar (',' stringvar)* ')'
///     stringvar := STRING | expr
/// ```
fn parse_write<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Command>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::Write)?;
    expect(tokens, TokenKind::LParen)?;
    let items = parse_comma_separated(tokens, parse_write_item)?;
    expect(tokens, TokenKind::RParen)?;

    Ok(Command::Write { items })
}

fn parse_write_item<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<WriteItem>
    where I: Iterator<Item = &'a Token> + Clone
{
    if peek_kind(tokens) == Some(TokenKind::String) {
        let token = expect(tokens, TokenKind::String)?.clone();
        return Ok(WriteItem::Text(StringLiteral::from_token(token)));
    }

    Ok(WriteItem::Expr(parse_expression(tokens)?))
}

/// Grammar: `if := 'se' exprLogico 'então' command ('senão' command)?`
///
/// A `senão` always binds to the nearest `se`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Command>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, TokenKind::If)?.clone();
    let condition = parse_logical(tokens)?;
    expect(tokens, TokenKind::Then)?;
    let then_branch = Box::new(parse_command_at(tokens, depth)?);

    let else_branch = if peek_kind(tokens) == Some(TokenKind::Else) {
        tokens.next();
        Some(Box::new(parse_command_at(tokens, depth)?))
    } else {
        None
    };

    Ok(Command::If { keyword,
                     condition,
                     then_branch,
                     else_branch })
}

/// Grammar: `while := 'enquanto' exprLogico 'faça' command`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Command>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, TokenKind::While)?.clone();
    let condition = parse_logical(tokens)?;
    expect(tokens, TokenKind::Do)?;
    let body = Box::new(parse_command_at(tokens, depth)?);

    Ok(Command::While { keyword,
                        condition,
                        body })
}
