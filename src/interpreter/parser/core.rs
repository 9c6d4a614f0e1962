use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Block, Command, Declarations, Program, TypeSpec, VarDeclaration},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            command::parse_command_at,
            utils::{expect, parse_comma_separated, parse_identifier, peek_kind, unexpected},
        },
        value::Type,
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// How deep parentheses, signs, blocks and conditional or loop bodies may
/// nest before parsing fails. Every later stage recurses along the same
/// paths, so this also bounds their stack use.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a complete token stream into a [`Program`].
///
/// This is the entry point of the parser. Every token must belong to the
/// program: anything after the closing `.` is rejected.
///
/// # Errors
/// Returns the first [`SyntaxError`] met. There is no recovery.
///
/// # Example
/// ```
/// use lalg::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("programa p; início escrever(\"oi\") fim.").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.name.text, "p");
/// assert!(program.declarations.is_none());
/// assert_eq!(program.block.commands.len(), 1);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter)?;

    if let Some(extra) = iter.next() {
        return Err(SyntaxError::UnexpectedTrailingTokens { text:   extra.text.clone(),
                                                           line:   extra.line,
                                                           column: extra.column, });
    }

    debug!(name = %program.name.text, "parsed program");
    Ok(program)
}

/// Parses the whole program.
///
/// Grammar: `program := 'programa' ID ';' declarations? block '.'`
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::Program)?;
    let name = parse_identifier(tokens)?;
    expect(tokens, TokenKind::Semicolon)?;

    let declarations = if peek_kind(tokens) == Some(TokenKind::Var) {
        Some(parse_declarations(tokens)?)
    } else {
        None
    };

    let block = parse_block(tokens)?;
    expect(tokens, TokenKind::Dot)?;

    Ok(Program { name,
                 declarations,
                 block })
}

/// Parses the `var` section.
///
/// Grammar: `declarations := 'var' (ID (',' ID)* ':' type ';')+`
///
/// Groups are read for as long as the next token is an identifier.
pub fn parse_declarations<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Declarations>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::Var)?;

    let mut declarations = vec![parse_var_declaration(tokens)?];
    while peek_kind(tokens) == Some(TokenKind::Identifier) {
        declarations.push(parse_var_declaration(tokens)?);
    }

    Ok(Declarations { declarations })
}

fn parse_var_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<VarDeclaration>
    where I: Iterator<Item = &'a Token> + Clone
{
    let names = parse_comma_separated(tokens, parse_identifier)?;
    expect(tokens, TokenKind::Colon)?;
    let ty = parse_type(tokens)?;
    expect(tokens, TokenKind::Semicolon)?;

    Ok(VarDeclaration { names, ty })
}

/// Parses a type name.
///
/// Grammar: `type := 'inteiro' | 'lógico'`
///
/// # Errors
/// `UnexpectedToken` for any other token.
pub fn parse_type<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<TypeSpec>
    where I: Iterator<Item = &'a Token>
{
    let token =
        tokens.next()
              .ok_or_else(|| SyntaxError::UnexpectedEndOfInput { expected: "a type".to_string() })?;
    let ty = match token.kind {
        TokenKind::Integer => Type::Integer,
        TokenKind::Boolean => Type::Boolean,
        _ => return Err(unexpected(token, "a type")),
    };

    Ok(TypeSpec { ty,
                  token: token.clone() })
}

/// Parses a block.
///
/// Grammar:
/// ```text
///     block       := 'início' commandList 'fim'
///     commandList := command (';' command)* ';'?
/// ```
/// A `;` directly before `fim` closes the list instead of starting an empty
/// command.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_block_at(tokens, 0)
}

/// Parses a block opened `depth` levels deep.
pub(in crate::interpreter::parser) fn parse_block_at<'a, I>(tokens: &mut Peekable<I>,
                                                            depth: usize)
                                                            -> ParseResult<Block>
    where I: Iterator<Item = &'a Token> + Clone
{
    let begin = expect(tokens, TokenKind::Begin)?.clone();

    let mut commands: Vec<Command> = vec![parse_command_at(tokens, depth)?];
    while peek_kind(tokens) == Some(TokenKind::Semicolon) {
        tokens.next();
        if peek_kind(tokens) == Some(TokenKind::End) {
            break;
        }
        commands.push(parse_command_at(tokens, depth)?);
    }

    expect(tokens, TokenKind::End)?;
    Ok(Block { begin, commands })
}
