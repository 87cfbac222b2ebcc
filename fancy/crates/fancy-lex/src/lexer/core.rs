//! Core tokenizer implementation.
//!
//! This module contains the `LineTokenizer` struct, the dispatch loop and
//! the public entry points.

use crate::chars::{is_balanced_punctuator, is_ident_start, is_punctuator, is_whitespace};
use crate::cursor::Cursor;
use crate::token::{LineInfo, Token, TokenType, TokenizedLine};

/// Opening and closing delimiter of a multi-line string.
pub(crate) const TRIPLE_QUOTE: &str = "\"\"\"";

/// Tokenizer for a single line.
///
/// The tokenizer starts from the state the previous line ended in and
/// produces one token per step until the line is exhausted. It owns no
/// state beyond the line, so it is consumed by [`run`](Self::run).
pub struct LineTokenizer<'a> {
    /// Character cursor over the line.
    pub(crate) cursor: Cursor<'a>,

    /// Tokens produced so far.
    pub(crate) tokens: Vec<Token>,

    /// State to hand to the next line.
    pub(crate) line_info: LineInfo,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,
}

impl<'a> LineTokenizer<'a> {
    /// Creates a tokenizer for `line`, continuing from `previous`.
    ///
    /// `None` means the line is the first of its document.
    pub fn new(line: &'a str, previous: Option<&LineInfo>) -> Self {
        Self {
            cursor: Cursor::new(line),
            tokens: Vec::new(),
            line_info: previous.copied().unwrap_or_default(),
            token_start: 0,
        }
    }

    /// Tokenizes the whole line.
    pub fn run(mut self) -> TokenizedLine {
        self.resume_open_construct();

        while !self.cursor.is_at_end() {
            self.next_token();
        }

        TokenizedLine {
            tokens: self.tokens,
            line_info: self.line_info,
        }
    }

    /// Finishes a block comment or triple-quoted string left open by the
    /// previous line.
    ///
    /// The carried token is pushed even if it is empty, so an empty line
    /// inside a comment still reads as comment.
    fn resume_open_construct(&mut self) {
        self.token_start = self.cursor.position();

        if self.line_info.ends_inside_multiline_comment {
            self.lex_block_comment();
        } else if self.line_info.ends_inside_multiline_string {
            self.lex_multiline_string();
        }
    }

    /// Produces exactly one token, always consuming at least one character.
    ///
    /// Arms are tried in order and the first match wins; the order is what
    /// separates `//` from `/*` from a regexp from a divide.
    fn next_token(&mut self) {
        self.token_start = self.cursor.position();

        match self.cursor.current_char() {
            c if is_whitespace(c) => self.lex_whitespace(),
            '/' if self.cursor.peek_char(1) == '/' => self.lex_line_comment(),
            '/' if self.cursor.peek_char(1) == '*' => {
                self.cursor.advance_n(2);
                self.lex_block_comment();
            },
            '"' if self.cursor.starts_with(TRIPLE_QUOTE) => {
                self.cursor.advance_n(3);
                self.lex_multiline_string();
            },
            quote @ ('\'' | '"') => self.lex_string(quote),
            '0' if matches!(self.cursor.peek_char(1), 'x' | 'X') => self.lex_hex_number(),
            c if c.is_ascii_digit() => self.lex_number(),
            '/' if self.regexp_allowed() => self.lex_regexp(),
            c if is_balanced_punctuator(c) => {
                self.cursor.advance();
                self.push(TokenType::BalancedPunctuator);
            },
            c if is_punctuator(c) => self.lex_punctuator(),
            c if is_ident_start(c) => self.lex_identifier(),
            _ => {
                self.cursor.advance();
                self.push(TokenType::Error);
            },
        }
    }

    /// Consumes a run of whitespace.
    fn lex_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
        self.push(TokenType::WhiteSpace);
    }

    /// Pushes the text from `token_start` to the cursor as a token.
    pub(crate) fn push(&mut self, kind: TokenType) {
        let text = self.cursor.slice_from(self.token_start);
        self.tokens.push(Token::new(text, kind));
    }
}

/// Tokenizes one line, continuing from the previous line's state.
///
/// Pass `None` for the first line of a document. The result covers the
/// entire line and carries the state for the next call.
///
/// # Example
///
/// ```
/// use fancy_lex::{tokenize_line, TokenType};
///
/// let first = tokenize_line("x = 1; /* note", None);
/// assert!(first.line_info.ends_inside_multiline_comment);
///
/// let second = tokenize_line("done */ y", Some(&first.line_info));
/// assert_eq!(second.tokens[0].text, "done */");
/// assert_eq!(second.tokens[0].kind, TokenType::Comment);
/// assert!(!second.line_info.ends_inside_multiline_comment);
/// ```
pub fn tokenize_line(line: &str, previous: Option<&LineInfo>) -> TokenizedLine {
    LineTokenizer::new(line, previous).run()
}

/// Tokenizes a whole text, one line at a time.
///
/// Lines are split on `\n`; a `\r` right before the newline is dropped.
/// The state of each line is passed on to the next.
///
/// # Example
///
/// ```
/// use fancy_lex::{tokenize, TokenType};
///
/// let lines = tokenize("s = \"\"\"a\nb\"\"\";");
/// assert_eq!(lines.len(), 2);
/// assert!(lines[0].line_info.ends_inside_multiline_string);
/// assert_eq!(lines[1].tokens[0].kind, TokenType::MultiLineString);
/// ```
pub fn tokenize(source: &str) -> Vec<TokenizedLine> {
    let mut previous: Option<LineInfo> = None;

    source
        .split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let tokenized = tokenize_line(line, previous.as_ref());
            previous = Some(tokenized.line_info);
            tokenized
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<TokenType> {
        tokenize_line(line, None)
            .tokens
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_empty_line() {
        let result = tokenize_line("", None);
        assert!(result.tokens.is_empty());
        assert_eq!(result.line_info, LineInfo::default());
    }

    #[test]
    fn test_whitespace_run_is_one_token() {
        let result = tokenize_line(" \t\u{000B}\u{000C}\u{00A0}x", None);
        assert_eq!(result.tokens.len(), 2);
        assert_eq!(result.tokens[0].kind, TokenType::WhiteSpace);
        assert_eq!(result.tokens[0].text, " \t\u{000B}\u{000C}\u{00A0}");
    }

    #[test]
    fn test_simple_statement() {
        assert_eq!(
            kinds("var x = 42;"),
            vec![
                TokenType::Keyword,
                TokenType::WhiteSpace,
                TokenType::Identifier,
                TokenType::WhiteSpace,
                TokenType::Punctuator,
                TokenType::WhiteSpace,
                TokenType::NumericLiteral,
                TokenType::Punctuator,
            ]
        );
    }

    #[test]
    fn test_unknown_characters_are_single_errors() {
        let result = tokenize_line("#@", None);
        assert_eq!(result.tokens.len(), 2);
        assert!(result.tokens.iter().all(|t| t.kind == TokenType::Error));
        assert_eq!(result.tokens[0].text, "#");
    }

    #[test]
    fn test_error_token_is_whole_character() {
        let result = tokenize_line("é", None);
        assert_eq!(result.tokens, vec![Token::new("é", TokenType::Error)]);
    }

    #[test]
    fn test_carriage_return_is_an_error() {
        let result = tokenize_line("x\r", None);
        assert_eq!(result.tokens[1], Token::new("\r", TokenType::Error));
    }

    #[test]
    fn test_tokenize_threads_state() {
        let lines = tokenize("a /* b\nc\nd */ e");
        assert_eq!(lines.len(), 3);
        assert!(lines[0].line_info.ends_inside_multiline_comment);
        assert!(lines[1].line_info.ends_inside_multiline_comment);
        assert_eq!(lines[1].tokens, vec![Token::new("c", TokenType::Comment)]);
        assert!(!lines[2].line_info.ends_inside_multiline_comment);
    }

    #[test]
    fn test_tokenize_drops_carriage_returns() {
        let lines = tokenize("a\r\nb\r\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text(), "a");
        assert_eq!(lines[1].text(), "b");
        assert!(lines[2].tokens.is_empty());
    }
}
