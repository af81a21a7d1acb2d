/// Parsing errors.
///
/// Defines all error types that can occur while sanitizing, tokenizing, or
/// parsing an expression. Every variant corresponds to input the grammar
/// rejects before any evaluation takes place.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// tree: division by zero, arithmetic overflow of the final result, the
/// recursion bound, and internal registry misses.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// The union of everything `calculate` can fail with.
///
/// Callers that go from text straight to a number receive either a parse
/// failure or an evaluation failure; the two phases never re-wrap each
/// other's errors.
#[derive(Debug)]
pub enum CalcError {
    /// The expression was rejected before evaluation.
    Parse(ParseError),
    /// The expression parsed but could not be evaluated to a finite number.
    Eval(EvalError),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for CalcError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
