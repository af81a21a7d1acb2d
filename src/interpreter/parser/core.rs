use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{MAX_DEPTH, lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition/subtraction, and recursively descends
/// through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// The `depth` parameter counts how many nested expressions enclose this
/// one; groupings, call arguments, and prefix operators each add a level.
/// Crossing [`MAX_DEPTH`] aborts with `ExpressionTooDeep` instead of
/// overflowing the call stack.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Current nesting depth, `0` at the top level.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if depth > MAX_DEPTH {
        return Err(ParseError::ExpressionTooDeep { limit: MAX_DEPTH });
    }
    parse_additive(tokens, depth)
}

/// Parses a complete token stream into a single expression tree.
///
/// Wraps [`parse_expression`] with the two whole-stream checks: an empty
/// stream is an `EmptyExpression`, and tokens left over after a complete
/// expression are `TrailingTokens`.
///
/// # Parameters
/// - `tokens`: The full token stream produced by the lexer.
///
/// # Returns
/// The root of the expression tree.
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    if iter.peek().is_none() {
        return Err(ParseError::EmptyExpression);
    }

    let expr = parse_expression(&mut iter, 0)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::TrailingTokens { token:    token.to_string(),
                                                position: *position, });
    }

    Ok(expr)
}
