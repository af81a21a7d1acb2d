/// The sanitizer module validates raw input before tokenization.
///
/// The sanitizer rejects malformed whitespace and character patterns that
/// signal broken input (digits split by spaces, stray letters) and
/// normalizes whitespace so that later stages see a canonical string.
///
/// # Responsibilities
/// - Rejects numeric literals accidentally split by whitespace.
/// - Collapses whitespace runs and trims the ends.
/// - Rejects alphabetic words that name nothing in the registries.
pub mod sanitizer;
/// The lexer module tokenizes sanitized input for the parser.
///
/// The lexer reads the sanitized text and produces a stream of tokens, each
/// paired with its byte offset for error reporting. This is the first
/// structural stage of interpretation.
///
/// # Responsibilities
/// - Converts the character stream into tokens with positions.
/// - Parses numeric literals in decimal/exponent notation as `f64`.
/// - Reports unrecognized characters as errors.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an `Expr` tree following the expression grammar. Function and
/// constant names are validated against the registries here, so a
/// successfully parsed tree never contains an unknown name.
///
/// # Responsibilities
/// - Converts tokens into structured `Expr` nodes.
/// - Enforces precedence, associativity, and the single-argument call form.
/// - Bounds expression nesting depth.
pub mod parser;
/// The registry module holds the process-wide function and constant tables.
///
/// Both tables are static and read-only: they are consulted by the sanitizer
/// (allowed words), the parser (name validation), and the evaluator
/// (dispatch), and never change at runtime.
///
/// # Responsibilities
/// - Maps function names to unary real functions and angle sensitivity.
/// - Maps constant names to their `f64` values.
pub mod registry;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the tree bottom-up, applies operators and
/// registered functions, converts angle-sensitive arguments when evaluating
/// in degrees, and reports numeric failures.
///
/// # Responsibilities
/// - Evaluates `Expr` nodes with pure post-order recursion.
/// - Detects division by zero before dividing.
/// - Bounds tree depth during traversal.
pub mod evaluator;

/// Maximum nesting depth shared by the parser and the evaluator.
///
/// Both phases recurse proportionally to expression nesting; the bound turns
/// a potential stack overflow into a reported error. Flat operator chains
/// parse iteratively and do not consume depth.
pub const MAX_DEPTH: usize = 128;
