/// An abstract syntax tree (AST) node representing a parsed expression.
///
/// `Expr` covers every construct the expression language accepts: numeric
/// literals, unary negation, the five binary operators, single-argument
/// function calls, and named constants. Children are owned (`Box`ed) by their
/// parent, so a tree is a strict hierarchy with no sharing and no cycles, and
/// it is immutable once the parser has built it.
///
/// Function and constant names stored in a tree are guaranteed to exist in
/// the registries: the parser rejects unknown names, so the evaluator treats
/// a failed lookup as an internal invariant violation rather than user error.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal. All numbers are IEEE-754 doubles; `6 / 3` follows
    /// float semantics and there is no separate integer representation.
    Number(f64),
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A call of a registered function with exactly one argument, such as
    /// `sin(x)`.
    FunctionCall {
        /// Name of the function being called.
        name: String,
        /// The single argument expression.
        arg:  Box<Self>,
    },
    /// A named constant such as `pi`, resolved against the constant registry.
    Constant {
        /// Name of the constant.
        name: String,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`), right-associative.
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl BinaryOperator {
    /// The canonical tag used when serializing a tree, e.g. `Add` in
    /// `Add(4, 5)`.
    #[must_use]
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
            Self::Pow => "Pow",
        }
    }
}

/// Serializes the tree into its canonical functional form.
///
/// The canonical form spells each operator out as a tagged call, which makes
/// precedence and associativity visible without parentheses.
///
/// # Example
/// ```
/// let tree = numeval::parse("-34.5 / 6.78 + 901.2 * 0.345").unwrap();
/// assert_eq!(tree.to_string(),
///            "Add(Div(Neg(34.5), 6.78), Mul(901.2, 0.345))");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::UnaryOp { op: UnaryOperator::Negate,
                            expr, } => write!(f, "Neg({expr})"),
            Self::BinaryOp { left, op, right } => {
                write!(f, "{}({left}, {right})", op.canonical_name())
            },
            Self::FunctionCall { name, arg } => write!(f, "{name}({arg})"),
            Self::Constant { name } => write!(f, "{name}"),
        }
    }
}
