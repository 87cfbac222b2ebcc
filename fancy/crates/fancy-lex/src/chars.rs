//! Character classes of the tokenizer.
//!
//! All sets are small and closed, so membership is a `matches!` on the
//! character. Identifiers are ASCII-only; any other letter becomes an
//! error token.

/// Checks if a character is whitespace.
///
/// Only space, tab, vertical tab, form feed and U+00A0 count. Newlines
/// never appear inside a line, and `\r` is not whitespace.
///
/// # Example
///
/// ```
/// use fancy_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\u{00A0}'));
/// assert!(!is_whitespace('\r'));
/// ```
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{000B}' | '\u{000C}' | '\u{00A0}')
}

/// Checks if a character is a punctuator character, `/` included.
pub fn is_punctuator(c: char) -> bool {
    matches!(
        c,
        '.' | ';' | ',' | '<' | '>' | '=' | '!' | '+' | '-' | '*' | '%' | '&' | '|' | '^' | '~'
            | '?' | ':' | '/'
    )
}

/// Checks if a character may continue a punctuator run.
///
/// A `/` always ends a run, so that `+/* c */` and `=/re/` split at the
/// slash.
pub fn is_punctuator_continue(c: char) -> bool {
    c != '/' && is_punctuator(c)
}

/// Checks if a character is a brace, parenthesis or bracket.
pub fn is_balanced_punctuator(c: char) -> bool {
    matches!(c, '{' | '}' | '(' | ')' | '[' | ']')
}

/// Checks if a character can start an identifier: `[a-zA-Z_$]`.
///
/// # Example
///
/// ```
/// use fancy_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('$'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('é'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

/// Checks if a character can continue an identifier: `[a-zA-Z0-9_$]`.
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Checks if a character can continue a decimal number: `[0-9.eE]`.
///
/// The set is looser than real numeric syntax, so `1.2.3` and `1e` are
/// single tokens.
pub fn is_number_continue(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E')
}
