#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while sanitizing, tokenizing, or
/// parsing an expression.
///
/// Positions are byte offsets: sanitizer variants index into the raw input,
/// lexer and grammar variants into the whitespace-collapsed (sanitized) text.
pub enum ParseError {
    /// Two pieces of a numeric literal were separated only by whitespace,
    /// such as `1 0` or `1e 10`.
    SpacedDigits {
        /// Offset of the offending whitespace.
        position: usize,
    },
    /// An alphabetic word that is neither a registered function or constant
    /// name nor an exponent marker inside a numeric literal.
    DisallowedWord {
        /// The offending word.
        word:     String,
        /// Offset of the word.
        position: usize,
    },
    /// A character the lexer does not recognize at all.
    UnknownToken {
        /// The unrecognized slice.
        token:    String,
        /// Offset of the slice.
        position: usize,
    },
    /// The input contained no tokens.
    EmptyExpression,
    /// Found a token the grammar does not allow at this point.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Offset of the token.
        position: usize,
    },
    /// Reached the end of input while the grammar expected more, e.g. after
    /// a trailing operator.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Offset of the opening parenthesis left unmatched.
        position: usize,
    },
    /// Extra tokens remained after a complete expression.
    TrailingTokens {
        /// The first leftover token.
        token:    String,
        /// Offset of that token.
        position: usize,
    },
    /// An identifier used as a value does not name a registered constant.
    UnknownIdentifier {
        /// The identifier.
        name:     String,
        /// Offset of the identifier.
        position: usize,
    },
    /// An identifier used as a call does not name a registered function.
    UnknownFunction {
        /// The identifier.
        name:     String,
        /// Offset of the identifier.
        position: usize,
    },
    /// A function call supplied more than one argument.
    FunctionArity {
        /// The function name.
        name:     String,
        /// Offset of the argument separator.
        position: usize,
    },
    /// Expression nesting exceeded the parser's recursion bound.
    ExpressionTooDeep {
        /// The configured depth limit.
        limit: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SpacedDigits { position } => write!(f,
                                                      "Syntax error at offset {position}: whitespace is not allowed inside a number."),

            Self::DisallowedWord { word, position } => write!(f,
                                                              "Syntax error at offset {position}: '{word}' is not a known function or constant."),

            Self::UnknownToken { token, position } => {
                write!(f, "Syntax error at offset {position}: unrecognized input '{token}'.")
            },

            Self::EmptyExpression => write!(f, "Syntax error: the expression is empty."),

            Self::UnexpectedToken { token, position } => {
                write!(f, "Syntax error at offset {position}: unexpected token {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Syntax error: unexpected end of input."),

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Syntax error at offset {position}: expected closing parenthesis ')' but none found."),

            Self::TrailingTokens { token, position } => write!(f,
                                                               "Syntax error at offset {position}: extra tokens after the expression, starting with {token}."),

            Self::UnknownIdentifier { name, position } => {
                write!(f, "Syntax error at offset {position}: unknown constant '{name}'.")
            },

            Self::UnknownFunction { name, position } => {
                write!(f, "Syntax error at offset {position}: unknown function '{name}'.")
            },

            Self::FunctionArity { name, position } => write!(f,
                                                             "Syntax error at offset {position}: function '{name}' takes exactly one argument."),

            Self::ExpressionTooDeep { limit } => {
                write!(f, "Syntax error: expression nesting exceeds {limit} levels.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
