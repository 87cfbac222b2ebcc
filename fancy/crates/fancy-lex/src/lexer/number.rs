//! Number literal lexing.
//!
//! Numbers are recognized loosely: the tokenizer only needs to color them,
//! so malformed literals such as `1.2.3` stay a single token.

use crate::chars::is_number_continue;
use crate::lexer::LineTokenizer;
use crate::token::TokenType;

impl<'a> LineTokenizer<'a> {
    /// Lexes a decimal number: a digit followed by `[0-9.eE]*`.
    pub(crate) fn lex_number(&mut self) {
        self.cursor.advance();
        self.cursor.eat_while(is_number_continue);
        self.push(TokenType::NumericLiteral);
    }

    /// Lexes a hexadecimal number: `0x` or `0X` followed by hex digits.
    pub(crate) fn lex_hex_number(&mut self) {
        self.cursor.advance_n(2);
        self.cursor.eat_while(|c| c.is_ascii_hexdigit());
        self.push(TokenType::NumericLiteral);
    }
}
