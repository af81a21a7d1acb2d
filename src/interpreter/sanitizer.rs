use crate::{error::ParseError, interpreter::registry};

/// Validates and normalizes raw input before tokenization.
///
/// Three checks run in order:
/// 1. No two pieces of a numeric literal may be separated only by
///    whitespace: a digit next to a digit, a digit next to the exponent
///    marker `e`/`E`, or the marker next to a digit. `"1 0"`, `"1e 10"` and
///    `"1 e10"` are all rejected, regardless of what surrounds them.
/// 2. Whitespace runs collapse to single spaces and the ends are trimmed.
/// 3. Every maximal alphabetic word must name a registered function or
///    constant, or be the exponent marker immediately following a digit.
///    This rejects stray letters (including an imaginary-unit suffix like
///    `j`) before any token exists.
///
/// The caret `^` passes through untouched; the lexer maps it directly to the
/// power operator token.
///
/// # Parameters
/// - `raw`: The expression text as supplied by the caller.
///
/// # Returns
/// The sanitized string all later stages operate on.
///
/// # Example
/// ```
/// use numeval::interpreter::sanitizer::sanitize;
///
/// assert_eq!(sanitize("  2 +   sin(0) ").unwrap(), "2 + sin(0)");
/// assert!(sanitize("1 0").is_err());
/// assert!(sanitize("5+6j").is_err());
/// ```
pub fn sanitize(raw: &str) -> Result<String, ParseError> {
    reject_spaced_digits(raw)?;

    let sanitized = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    reject_disallowed_words(&sanitized)?;

    Ok(sanitized)
}

/// Returns `true` when `c` is the exponent marker of a numeric literal.
const fn is_exponent_marker(c: char) -> bool {
    matches!(c, 'e' | 'E')
}

/// Scans every whitespace run and inspects the characters on both sides.
///
/// A run is illegal when it separates digit/digit, digit/marker, or
/// marker/digit. Runs at either end of the input have only one neighbor and
/// are always legal (they are trimmed away later).
fn reject_spaced_digits(raw: &str) -> Result<(), ParseError> {
    let mut prev: Option<char> = None;
    let mut run_start: Option<usize> = None;

    for (idx, c) in raw.char_indices() {
        if c.is_whitespace() {
            if run_start.is_none() {
                run_start = Some(idx);
            }
            continue;
        }

        if let Some(start) = run_start.take()
           && let Some(before) = prev
           && splits_literal(before, c)
        {
            return Err(ParseError::SpacedDigits { position: start });
        }

        prev = Some(c);
    }

    Ok(())
}

/// Tests whether two characters around a whitespace run look like one
/// numeric literal torn in half.
const fn splits_literal(prev: char, next: char) -> bool {
    (prev.is_ascii_digit() && next.is_ascii_digit())
    || (prev.is_ascii_digit() && is_exponent_marker(next))
    || (is_exponent_marker(prev) && next.is_ascii_digit())
}

/// Validates every alphabetic word in the sanitized text.
///
/// `e` doubles as a constant name, so it always passes; the uppercase `E` is
/// only an exponent marker and is accepted solely when it immediately
/// follows a digit (as in `1E10`).
fn reject_disallowed_words(sanitized: &str) -> Result<(), ParseError> {
    let mut iter = sanitized.char_indices().peekable();
    let mut prev: Option<char> = None;

    while let Some((start, c)) = iter.next() {
        if !c.is_alphabetic() {
            prev = Some(c);
            continue;
        }

        let mut word = String::from(c);
        while let Some(&(_, next)) = iter.peek() {
            if !next.is_alphabetic() {
                break;
            }
            word.push(next);
            iter.next();
        }

        let exponent_position = is_exponent_marker(c)
                                && word.len() == 1
                                && prev.is_some_and(|p| p.is_ascii_digit());

        if !(registry::is_registered_word(&word) || exponent_position) {
            return Err(ParseError::DisallowedWord { word,
                                                    position: start });
        }

        prev = word.chars().last();
    }

    Ok(())
}
