//! String literal lexing.
//!
//! This module handles quoted strings, triple-quoted multi-line strings and
//! regular expression literals, which share the quoted-string scan.

use crate::lexer::core::TRIPLE_QUOTE;
use crate::lexer::LineTokenizer;
use crate::token::TokenType;

/// A backslash followed by `"""`, which does not close a multi-line string.
const ESCAPED_TRIPLE_QUOTE: &str = "\\\"\"\"";

impl<'a> LineTokenizer<'a> {
    /// Lexes a string delimited by `quote`, starting at the opening quote.
    ///
    /// A backslash consumes the character after it. An unterminated string
    /// ends at the end of the line and does not carry over.
    pub(crate) fn lex_string(&mut self, quote: char) {
        self.scan_quoted(quote);
        self.push(TokenType::StringLiteral);
    }

    /// Lexes a regular expression literal, starting at the opening `/`.
    ///
    /// Flags after the closing slash are lexed separately as an identifier.
    pub(crate) fn lex_regexp(&mut self) {
        self.scan_quoted('/');
        self.push(TokenType::StringLiteral);
    }

    /// Consumes the body of a multi-line string whose opening `"""` is
    /// already behind the cursor (or was on an earlier line).
    pub(crate) fn lex_multiline_string(&mut self) {
        let mut closed = false;

        while !self.cursor.is_at_end() {
            if self.cursor.starts_with(ESCAPED_TRIPLE_QUOTE) {
                self.cursor.advance_n(4);
                continue;
            }
            if self.cursor.starts_with(TRIPLE_QUOTE) {
                self.cursor.advance_n(3);
                closed = true;
                break;
            }
            self.cursor.advance();
        }

        self.line_info.ends_inside_multiline_string = !closed;
        self.push(TokenType::MultiLineString);
    }

    /// Advances past the opening delimiter and through the matching
    /// unescaped closing one, or to the end of the line.
    fn scan_quoted(&mut self, quote: char) {
        self.cursor.advance();

        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            self.cursor.advance();

            if c == quote {
                return;
            }
            if c == '\\' {
                self.cursor.advance();
            }
        }
    }
}
