//! # numeval
//!
//! numeval evaluates arithmetic and scientific expressions supplied as text
//! and returns a single `f64` result or a precisely classified error.
//! The pipeline is: sanitize the raw string, tokenize it, parse it into an
//! immutable expression tree, and evaluate the tree with function/constant
//! resolution and numeric-failure detection.
//!
//! Supported syntax: `+`, `-`, `*`, `/`, the right-associative power
//! operator `^`, unary minus, parentheses, decimal/exponent numeric
//! literals, the constants `pi` and `e`, and the single-argument functions
//! `sqrt`, `sin`, `cos`, `tan`, `cot`, `ln`, `exp`. Trigonometric arguments
//! are radians by default and degrees on request.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{CalcError, EvalError, ParseError},
    interpreter::{lexer, parser, sanitizer},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that
/// represent an expression as an immutable tree. Trees are built by the
/// parser, traversed by the evaluator, and serialize to a canonical
/// functional form.
///
/// # Responsibilities
/// - Defines the expression node and operator types.
/// - Guarantees trees are owned top-down with no sharing or cycles.
/// - Provides the canonical `Display` serialization.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while sanitizing,
/// tokenizing, parsing, or evaluating an expression, plus the union type
/// returned by [`calculate`]. Each failure kind is a distinct variant; no
/// layer catches and re-wraps another layer's errors.
///
/// # Responsibilities
/// - Defines `ParseError`, `EvalError`, and the `CalcError` union.
/// - Attaches offsets and names for precise messages.
/// - Implements the standard error traits.
pub mod error;
/// Orchestrates the whole text-to-value pipeline.
///
/// This module ties together the sanitizer, lexer, parser, registries, and
/// evaluator. The registries are process-wide, read-only tables consulted by
/// several stages; everything else is stateless per invocation.
///
/// # Responsibilities
/// - Coordinates the pipeline stages.
/// - Hosts the shared recursion bound.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use interpreter::evaluator::{AngleUnit, evaluate};

/// Parses expression text into a tree.
///
/// Runs the sanitizer, the lexer, and the parser in order. A tree returned
/// from here is fully validated: every function and constant name it
/// contains exists in the registries.
///
/// # Parameters
/// - `text`: The raw expression.
///
/// # Returns
/// The root of the expression tree.
///
/// # Example
/// ```
/// let tree = numeval::parse("4 + 5").unwrap();
/// assert_eq!(tree.to_string(), "Add(4, 5)");
///
/// assert!(numeval::parse("4 +").is_err());
/// assert!(numeval::parse("1 0").is_err());
/// ```
pub fn parse(text: &str) -> Result<ast::Expr, ParseError> {
    let sanitized = sanitizer::sanitize(text)?;
    let tokens = lexer::tokenize(&sanitized)?;
    parser::core::parse_tokens(&tokens)
}

/// Evaluates an already-parsed tree and classifies the result.
///
/// This is the node-input half of [`calculate`]: it evaluates the tree and
/// then inspects the final value: an infinite or NaN result fails with
/// [`EvalError::Overflow`] no matter which sub-expression produced it.
///
/// # Parameters
/// - `expr`: Root of the tree to evaluate.
/// - `unit`: Interpretation of trigonometric arguments.
///
/// # Returns
/// The finite computed value.
///
/// # Example
/// ```
/// use numeval::{AngleUnit, calculate_tree, parse};
///
/// let tree = parse("1e300 / 1e-300").unwrap();
/// assert!(calculate_tree(&tree, AngleUnit::Radian).is_err());
/// ```
pub fn calculate_tree(expr: &ast::Expr, unit: AngleUnit) -> Result<f64, EvalError> {
    let result = evaluate(expr, unit)?;

    if !result.is_finite() {
        return Err(EvalError::Overflow);
    }

    Ok(result)
}

/// Evaluates expression text to a finite number.
///
/// This is the main entry point: parse the text, evaluate the tree, and
/// classify the result. Each invocation is independent and stateless aside
/// from the read-only registries, so repeated calls with the same input are
/// deterministic.
///
/// # Parameters
/// - `text`: The raw expression.
/// - `unit`: Interpretation of trigonometric arguments.
///
/// # Returns
/// The finite computed value, or the first failure from any stage.
///
/// # Example
/// ```
/// use numeval::{AngleUnit, calculate};
///
/// let v = calculate("6 / 3", AngleUnit::Radian).unwrap();
/// assert!((v - 2.0).abs() < f64::EPSILON);
///
/// let v = calculate("sin(90)", AngleUnit::Degree).unwrap();
/// assert!((v - 1.0).abs() < 1e-12);
///
/// assert!(calculate("1 / 0", AngleUnit::Radian).is_err());
/// ```
pub fn calculate(text: &str, unit: AngleUnit) -> Result<f64, CalcError> {
    let expr = parse(text)?;
    Ok(calculate_tree(&expr, unit)?)
}
