//! Token and line-state definitions.
//!
//! A [`Token`] is a classified slice of one source line. A [`LineInfo`]
//! records whether a line ends inside a block comment or a triple-quoted
//! string, and is handed to the tokenizer together with the next line.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of token classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TokenType {
    /// A run of spaces, tabs, vertical tabs, form feeds or no-break spaces.
    WhiteSpace,
    /// A single- or double-quoted string, or a regular expression literal.
    StringLiteral,
    /// A `"""`-delimited string, possibly spanning lines.
    MultiLineString,
    /// A decimal or hexadecimal number.
    NumericLiteral,
    /// A run of operator characters such as `+=` or `===`.
    Punctuator,
    /// One of `{ } ( ) [ ]`.
    BalancedPunctuator,
    /// A line comment or (a line's share of) a block comment.
    Comment,
    /// A reserved word.
    Keyword,
    /// `true`, `false` or `null`.
    NativeLiteral,
    /// Any other name.
    Identifier,
    /// A single character the tokenizer does not recognize.
    Error,
}

impl TokenType {
    /// Every token type, in declaration order.
    pub const ALL: [TokenType; 11] = [
        TokenType::WhiteSpace,
        TokenType::StringLiteral,
        TokenType::MultiLineString,
        TokenType::NumericLiteral,
        TokenType::Punctuator,
        TokenType::BalancedPunctuator,
        TokenType::Comment,
        TokenType::Keyword,
        TokenType::NativeLiteral,
        TokenType::Identifier,
        TokenType::Error,
    ];

    /// Returns the class name the IDE attaches to spans of this type.
    pub fn class_name(self) -> &'static str {
        match self {
            TokenType::WhiteSpace => "whitespace",
            TokenType::StringLiteral => "stringliteral",
            TokenType::MultiLineString => "multilinestring",
            TokenType::NumericLiteral => "numericliteral",
            TokenType::Punctuator => "punctuator",
            TokenType::BalancedPunctuator => "balancedpunctuator",
            TokenType::Comment => "comment",
            TokenType::Keyword => "keyword",
            TokenType::NativeLiteral => "nativeliteral",
            TokenType::Identifier => "identifier",
            TokenType::Error => "error",
        }
    }

    /// Returns the upper-case name, e.g. `WHITE_SPACE`.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::WhiteSpace => "WHITE_SPACE",
            TokenType::StringLiteral => "STRING_LITERAL",
            TokenType::MultiLineString => "MULTI_LINE_STRING",
            TokenType::NumericLiteral => "NUMERIC_LITERAL",
            TokenType::Punctuator => "PUNCTUATOR",
            TokenType::BalancedPunctuator => "BALANCED_PUNCTUATOR",
            TokenType::Comment => "COMMENT",
            TokenType::Keyword => "KEYWORD",
            TokenType::NativeLiteral => "NATIVE_LITERAL",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::Error => "ERROR",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified substring of a source line.
///
/// `text` is exactly the covered part of the line, so concatenating the
/// texts of a line's tokens gives the line back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The covered source text.
    pub text: String,
    /// The classification.
    pub kind: TokenType,
}

impl Token {
    /// Creates a token.
    pub fn new(text: impl Into<String>, kind: TokenType) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Returns true for whitespace tokens.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenType::WhiteSpace
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}

/// State carried from the end of one line to the start of the next.
///
/// At most one of the flags is set for any line the tokenizer produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineInfo {
    /// The line ends inside an unclosed `/* ... */` comment.
    pub ends_inside_multiline_comment: bool,
    /// The line ends inside an unclosed `""" ... """` string.
    pub ends_inside_multiline_string: bool,
}

impl LineInfo {
    /// Returns true if the line ends inside either multi-line construct.
    pub fn is_open(&self) -> bool {
        self.ends_inside_multiline_comment || self.ends_inside_multiline_string
    }
}

/// Returns true if replacing `old` with `new` as a line's carried state
/// means the following line has to be tokenized again.
///
/// Returns false when either side is missing.
///
/// # Example
///
/// ```
/// use fancy_lex::{changes_require_propagation, LineInfo};
///
/// let closed = LineInfo::default();
/// let open = LineInfo {
///     ends_inside_multiline_comment: true,
///     ..LineInfo::default()
/// };
///
/// assert!(changes_require_propagation(Some(&closed), Some(&open)));
/// assert!(!changes_require_propagation(Some(&open), Some(&open)));
/// assert!(!changes_require_propagation(None, Some(&open)));
/// ```
pub fn changes_require_propagation(old: Option<&LineInfo>, new: Option<&LineInfo>) -> bool {
    match (old, new) {
        (Some(old), Some(new)) => {
            old.ends_inside_multiline_comment != new.ends_inside_multiline_comment
                || old.ends_inside_multiline_string != new.ends_inside_multiline_string
        },
        _ => false,
    }
}

/// The result of tokenizing one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenizedLine {
    /// The tokens, in source order, covering the whole line.
    pub tokens: Vec<Token>,
    /// The state to pass along with the next line.
    pub line_info: LineInfo,
}

impl TokenizedLine {
    /// Reassembles the line from its tokens.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }

    /// Iterates over the tokens that are not whitespace.
    pub fn significant_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| !token.is_whitespace())
    }
}

/// Classifies an identifier-shaped word.
///
/// Returns [`TokenType::Keyword`], [`TokenType::NativeLiteral`] or
/// [`TokenType::Identifier`].
pub fn classify_word(word: &str) -> TokenType {
    if is_keyword(word) {
        TokenType::Keyword
    } else if is_native_literal(word) {
        TokenType::NativeLiteral
    } else {
        TokenType::Identifier
    }
}

/// Returns true for the reserved words of the dialect.
///
/// `import` is not reserved: the hosting environment defines a function
/// with that name.
pub fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "break"
            | "else"
            | "new"
            | "var"
            | "case"
            | "finally"
            | "return"
            | "void"
            | "catch"
            | "for"
            | "switch"
            | "while"
            | "continue"
            | "function"
            | "this"
            | "with"
            | "default"
            | "if"
            | "throw"
            | "delete"
            | "in"
            | "try"
            | "do"
            | "instanceof"
            | "typeof"
            | "abstract"
            | "enum"
            | "int"
            | "short"
            | "boolean"
            | "export"
            | "interface"
            | "static"
            | "byte"
            | "extends"
            | "long"
            | "super"
            | "char"
            | "final"
            | "native"
            | "synchronized"
            | "class"
            | "float"
            | "package"
            | "throws"
            | "const"
            | "goto"
            | "private"
            | "transient"
            | "debugger"
            | "implements"
            | "protected"
            | "volatile"
            | "double"
            | "public"
            | "each"
    )
}

/// Returns true for `true`, `false` and `null`.
pub fn is_native_literal(word: &str) -> bool {
    matches!(word, "true" | "false" | "null")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_keyword() {
        assert_eq!(classify_word("function"), TokenType::Keyword);
        assert_eq!(classify_word("each"), TokenType::Keyword);
        assert_eq!(classify_word("typeof"), TokenType::Keyword);
    }

    #[test]
    fn test_classify_native_literal() {
        assert_eq!(classify_word("true"), TokenType::NativeLiteral);
        assert_eq!(classify_word("false"), TokenType::NativeLiteral);
        assert_eq!(classify_word("null"), TokenType::NativeLiteral);
    }

    #[test]
    fn test_import_is_not_reserved() {
        assert_eq!(classify_word("import"), TokenType::Identifier);
        assert!(!is_keyword("import"));
    }

    #[test]
    fn test_undefined_is_identifier() {
        assert_eq!(classify_word("undefined"), TokenType::Identifier);
        assert_eq!(classify_word("Function"), TokenType::Identifier);
    }

    #[test]
    fn test_class_names_are_distinct() {
        let mut names: Vec<_> = TokenType::ALL.iter().map(|t| t.class_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TokenType::ALL.len());
    }

    #[test]
    fn test_display_uses_upper_case_name() {
        assert_eq!(TokenType::WhiteSpace.to_string(), "WHITE_SPACE");
        assert_eq!(TokenType::BalancedPunctuator.to_string(), "BALANCED_PUNCTUATOR");
        assert_eq!(
            Token::new("x", TokenType::Identifier).to_string(),
            "IDENTIFIER \"x\""
        );
    }

    #[test]
    fn test_propagation_on_each_flag() {
        let base = LineInfo::default();
        let comment = LineInfo {
            ends_inside_multiline_comment: true,
            ends_inside_multiline_string: false,
        };
        let string = LineInfo {
            ends_inside_multiline_comment: false,
            ends_inside_multiline_string: true,
        };

        assert!(changes_require_propagation(Some(&base), Some(&comment)));
        assert!(changes_require_propagation(Some(&base), Some(&string)));
        assert!(changes_require_propagation(Some(&comment), Some(&string)));
        assert!(!changes_require_propagation(Some(&base), Some(&base)));
    }

    #[test]
    fn test_propagation_needs_both_sides() {
        let open = LineInfo {
            ends_inside_multiline_comment: true,
            ends_inside_multiline_string: false,
        };
        assert!(!changes_require_propagation(None, None));
        assert!(!changes_require_propagation(Some(&open), None));
        assert!(!changes_require_propagation(None, Some(&open)));
    }

    #[test]
    fn test_significant_tokens_skip_whitespace() {
        let line = TokenizedLine {
            tokens: vec![
                Token::new("a", TokenType::Identifier),
                Token::new(" ", TokenType::WhiteSpace),
                Token::new("/* c */", TokenType::Comment),
            ],
            line_info: LineInfo::default(),
        };
        let texts: Vec<&str> = line.significant_tokens().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "/* c */"]);
        assert_eq!(line.text(), "a /* c */");
    }

    #[test]
    fn test_line_info_default_is_closed() {
        let info = LineInfo::default();
        assert!(!info.ends_inside_multiline_comment);
        assert!(!info.ends_inside_multiline_string);
        assert!(!info.is_open());
    }
}
