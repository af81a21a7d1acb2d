use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        MAX_DEPTH,
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
        registry,
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation is
/// right-associative, so `--x` parses as `-(-x)`. Each stacked negation adds
/// a nesting level, bounded by [`MAX_DEPTH`].
///
/// If no prefix operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, _)) = tokens.peek() {
        if depth > MAX_DEPTH {
            return Err(ParseError::ExpressionTooDeep { limit: MAX_DEPTH });
        }
        tokens.next();
        let expr = parse_unary(tokens, depth + 1)?;
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                  expr: Box::new(expr), });
    }

    parse_primary(tokens, depth)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar and include:
/// - numeric literals
/// - constants
/// - function calls
/// - parenthesized expressions
///
/// This function does not handle prefix operators. It dispatches to
/// specialized parsing functions depending on the leading token.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | identifier_or_call
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        (Token::Number(_), _) => parse_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens, depth),
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens, depth),
        (tok, position) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                             position: *position, }),
    }
}

/// Parses a numeric literal.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), _)) => Ok(Expr::Number(*n)),
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression one level deeper, and then requires a closing `)`. Failure to
/// find the closing parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, position) = *tokens.next().unwrap();
    let expr = parse_expression(tokens, depth + 1)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}

/// Parses a constant reference or a function call.
///
/// Supported forms:
///
/// - `identifier`, resolved against the constant registry (`pi`, `e`).
/// - `identifier ( expression )`, resolved against the function registry.
///
/// Registry validation happens here, at parse time: a bare identifier that
/// is not a constant fails with `UnknownIdentifier`, a called identifier
/// that is not a function fails with `UnknownFunction`, and a comma inside
/// the call's parentheses fails with `FunctionArity`, since every registered
/// function takes exactly one argument.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// - [`Expr::FunctionCall`] if followed by parentheses,
/// - [`Expr::Constant`] otherwise.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(n), position)) => (n.clone(), *position),
        _ => unreachable!(),
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            if registry::lookup_function(&name).is_none() {
                return Err(ParseError::UnknownFunction { name, position });
            }

            tokens.next();
            let arg = parse_expression(tokens, depth + 1)?;

            match tokens.next() {
                Some((Token::RParen, _)) => Ok(Expr::FunctionCall { name,
                                                                    arg: Box::new(arg) }),
                Some((Token::Comma, comma_position)) => {
                    Err(ParseError::FunctionArity { name,
                                                    position: *comma_position, })
                },
                _ => Err(ParseError::ExpectedClosingParen { position }),
            }
        },
        _ => {
            if registry::lookup_constant(&name).is_none() {
                return Err(ParseError::UnknownIdentifier { name, position });
            }
            Ok(Expr::Constant { name })
        },
    }
}
