use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::EvalError,
    interpreter::{MAX_DEPTH, registry},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// How trigonometric function arguments are interpreted.
///
/// The unit only affects the angle-sensitive registry subset (`sin`, `cos`,
/// `tan`, `cot`): in degree mode their arguments are converted to radians
/// immediately before the real function is applied. `sqrt`, `ln` and `exp`
/// never see a conversion.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum AngleUnit {
    /// Arguments are radians (the default).
    #[default]
    Radian,
    /// Arguments are degrees.
    Degree,
}

/// Evaluates an expression tree.
///
/// Evaluation is a pure post-order recursion: children are computed before
/// their parent, no state is shared between invocations, and re-evaluating
/// the same tree yields the same result. Tree depth is bounded by
/// [`MAX_DEPTH`]; trees built by the parser always fit, but a hand-built
/// tree that nests deeper fails with `RecursionLimitExceeded` instead of
/// overflowing the stack.
///
/// The result is returned as computed, including infinities and NaN; the
/// final overflow classification belongs to [`crate::calculate_tree`].
///
/// # Parameters
/// - `expr`: Root of the tree to evaluate.
/// - `unit`: Interpretation of trigonometric arguments.
///
/// # Returns
/// The computed value.
///
/// # Example
/// ```
/// use numeval::{AngleUnit, evaluate, parse};
///
/// let tree = parse("2 ^ 3 ^ 2").unwrap();
/// let v = evaluate(&tree, AngleUnit::Radian).unwrap();
/// assert!((v - 512.0).abs() < f64::EPSILON);
/// ```
pub fn evaluate(expr: &Expr, unit: AngleUnit) -> EvalResult<f64> {
    eval_node(expr, unit, 0)
}

/// Evaluates one node, dispatching on its variant.
///
/// The match is exhaustive over `Expr`, so adding a node type without
/// teaching the evaluator about it is a compile error rather than a runtime
/// surprise.
fn eval_node(expr: &Expr, unit: AngleUnit, depth: usize) -> EvalResult<f64> {
    if depth > MAX_DEPTH {
        return Err(EvalError::RecursionLimitExceeded { limit: MAX_DEPTH });
    }

    match expr {
        Expr::Number(value) => Ok(*value),

        Expr::UnaryOp { op, expr } => {
            let operand = eval_node(expr, unit, depth + 1)?;
            Ok(apply_unary(*op, operand))
        },

        Expr::BinaryOp { left, op, right } => {
            let lhs = eval_node(left, unit, depth + 1)?;
            let rhs = eval_node(right, unit, depth + 1)?;
            apply_binary(*op, lhs, rhs)
        },

        Expr::FunctionCall { name, arg } => {
            let argument = eval_node(arg, unit, depth + 1)?;
            apply_function(name, argument, unit)
        },

        Expr::Constant { name } => {
            registry::lookup_constant(name).ok_or_else(|| {
                                               EvalError::UnknownConstant { name: name.clone() }
                                           })
        },
    }
}

/// Applies a unary operator to an evaluated operand.
const fn apply_unary(op: UnaryOperator, operand: f64) -> f64 {
    match op {
        UnaryOperator::Negate => -operand,
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// Division checks the right operand for exact zero *before* dividing:
/// the error is raised from the operand value, never recovered from a
/// hardware result. Exponentiation is `f64::powf`: fractional and negative
/// exponents follow IEEE-754 real semantics, and a NaN from a negative base
/// with a fractional exponent is left for the final overflow check.
fn apply_binary(op: BinaryOperator, lhs: f64, rhs: f64) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(lhs + rhs),
        BinaryOperator::Sub => Ok(lhs - rhs),
        BinaryOperator::Mul => Ok(lhs * rhs),
        BinaryOperator::Div => {
            if rhs == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(lhs / rhs)
        },
        BinaryOperator::Pow => Ok(lhs.powf(rhs)),
    }
}

/// Applies a registered function to its evaluated argument.
///
/// For the angle-sensitive subset in degree mode, the argument is converted
/// degrees→radians here, immediately before the real function runs. A name
/// that misses the registry is an internal invariant violation: the parser
/// only ever emits registered names.
fn apply_function(name: &str, argument: f64, unit: AngleUnit) -> EvalResult<f64> {
    let def = registry::lookup_function(name).ok_or_else(|| {
                                                 EvalError::UnknownFunction { name:
                                                                                  name.to_string() }
                                             })?;

    let argument = if def.angle_sensitive && unit == AngleUnit::Degree {
        argument.to_radians()
    } else {
        argument
    };

    Ok((def.apply)(argument))
}
