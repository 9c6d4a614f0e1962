use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Consumes the next token if it has the expected kind.
///
/// # Errors
/// - `ExpectedToken` if the next token has another kind.
/// - `UnexpectedEndOfInput` if there are no tokens left.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == expected => Ok(token),
        Some(token) => Err(SyntaxError::ExpectedToken { expected,
                                                        found: token.kind,
                                                        text: token.text.clone(),
                                                        line: token.line,
                                                        column: token.column }),
        None => Err(SyntaxError::UnexpectedEndOfInput { expected: expected.to_string() }),
    }
}

/// Kind of the next token, without consuming it.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>)
                                                       -> Option<TokenKind>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map(|token| token.kind)
}

/// Kind of the token after the next one, without consuming anything.
///
/// Works on a clone of the iterator, which is why the parser requires
/// `Clone` iterators.
pub(in crate::interpreter::parser) fn peek_second<'a, I>(tokens: &Peekable<I>)
                                                         -> Option<TokenKind>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut ahead = tokens.clone();
    ahead.next();
    ahead.peek().map(|token| token.kind)
}

/// Builds the error for a token no alternative of `context` accepts.
pub(in crate::interpreter::parser) fn unexpected(token: &Token,
                                                 context: &'static str)
                                                 -> SyntaxError {
    SyntaxError::UnexpectedToken { context,
                                   found: token.kind,
                                   text: token.text.clone(),
                                   line: token.line,
                                   column: token.column }
}

/// Moves one nesting level down from `depth`, opened by `token`.
///
/// # Errors
/// `NestingTooDeep` once [`MAX_NESTING_DEPTH`] levels are open.
pub(in crate::interpreter::parser) fn nested(token: &Token, depth: usize) -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(SyntaxError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                 line:   token.line,
                                                 column: token.column, });
    }
    Ok(depth + 1)
}

/// Parses an identifier and returns its token.
///
/// # Errors
/// Returns a `SyntaxError` if the next token is not an identifier or the
/// input ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<Token>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Identifier).cloned()
}

/// Parses a non-empty comma-separated list of items.
///
/// Grammar: `list := item ("," item)*`
///
/// The list ends at the first token after an item that is not a comma; the
/// caller checks whatever closes it.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item.
/// - `parse_item`: Function used to parse each element.
///
/// # Errors
/// Propagates the first error of `parse_item`.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = vec![parse_item(tokens)?];
    while peek_kind(tokens) == Some(TokenKind::Comma) {
        tokens.next();
        items.push(parse_item(tokens)?);
    }
    Ok(items)
}
