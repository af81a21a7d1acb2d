#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a parsed tree.
pub enum EvalError {
    /// The right operand of `/` evaluated to exactly zero. Detected before
    /// the division is performed, never by inspecting its result.
    DivisionByZero,
    /// The final result is infinite or NaN. Overflow is a property of the
    /// whole evaluation, not of any individual operator application.
    Overflow,
    /// A constant name survived parsing but is missing from the registry.
    /// The parser validates names, so this indicates an internal invariant
    /// violation, not bad user input.
    UnknownConstant {
        /// The name that failed to resolve.
        name: String,
    },
    /// A function name survived parsing but is missing from the registry.
    /// Same invariant violation as [`EvalError::UnknownConstant`].
    UnknownFunction {
        /// The name that failed to resolve.
        name: String,
    },
    /// Tree depth exceeded the evaluator's recursion bound.
    RecursionLimitExceeded {
        /// The configured depth limit.
        limit: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Evaluation error: division by zero."),

            Self::Overflow => write!(f, "Evaluation error: arithmetic overflow."),

            Self::UnknownConstant { name } => {
                write!(f, "Evaluation error: constant '{name}' is not registered.")
            },

            Self::UnknownFunction { name } => {
                write!(f, "Evaluation error: function '{name}' is not registered.")
            },

            Self::RecursionLimitExceeded { limit } => {
                write!(f, "Evaluation error: tree depth exceeds {limit} levels.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
