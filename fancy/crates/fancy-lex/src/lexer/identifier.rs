//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::lexer::LineTokenizer;
use crate::token::classify_word;

impl<'a> LineTokenizer<'a> {
    /// Lexes an identifier, keyword or native literal.
    ///
    /// Reads a maximal `[a-zA-Z0-9_$]` run, then classifies the whole word,
    /// so `importx` and `returned` stay identifiers.
    pub(crate) fn lex_identifier(&mut self) {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);

        let kind = classify_word(self.cursor.slice_from(self.token_start));
        self.push(kind);
    }
}
