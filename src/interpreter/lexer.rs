use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the sanitized input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens in decimal/exponent notation, such as `123`,
    /// `4.5`, `.5` or `1.25e+03`. Every number lexes as an `f64`; there is
    /// no integer token.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; function or constant names such as `sin` or `pi`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`, the power operator.
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`. Only ever found inside call parentheses, where it is an arity
    /// error.
    #[token(",")]
    Comma,
    /// Spaces left by the sanitizer.
    #[regex(r" +", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(v) => write!(f, "'{v}'"),
            Self::Identifier(name) => write!(f, "'{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Caret => write!(f, "'^'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::Ignored => write!(f, "' '"),
        }
    }
}

/// Tokenizes a sanitized string.
///
/// Each token is paired with its byte offset into the sanitized text, which
/// parser errors report back to the caller.
///
/// # Parameters
/// - `src`: Sanitized expression text.
///
/// # Returns
/// The token stream, or `ParseError::UnknownToken` for the first character
/// the lexer does not recognize.
///
/// # Example
/// ```
/// use numeval::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens[1], (Token::Plus, 2));
/// assert!(tokenize("1 % 2").is_err());
/// ```
pub fn tokenize(src: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(src);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span().start)),
            Err(()) => {
                return Err(ParseError::UnknownToken { token:    lexer.slice().to_string(),
                                                      position: lexer.span().start, });
            },
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid float.
/// - `None`: Otherwise, which surfaces as a lexing error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
