//! Punctuator lexing and the regexp-or-divide decision.
//!
//! A `/` that is not a comment opener is either a divide operator or the
//! start of a regular expression. The tokenizer cannot parse, so it looks
//! at the token before the slash: after an operand (a name, a keyword, a
//! literal, a closing paren or an increment) it is a divide, after an
//! operator or an opening bracket it starts a regexp.

use crate::chars::is_punctuator_continue;
use crate::lexer::LineTokenizer;
use crate::token::{Token, TokenType};

/// Punctuators after which a `/` divides.
const PUNCTUATORS_NOT_BEFORE_REGEXP: [&str; 6] = [")", ".", "+", "++", "-", "--"];

impl<'a> LineTokenizer<'a> {
    /// Lexes a punctuator run starting at the current character.
    ///
    /// The first character may be `/`; after that a `/` ends the run.
    pub(crate) fn lex_punctuator(&mut self) {
        self.cursor.advance();
        self.cursor.eat_while(is_punctuator_continue);
        self.push(TokenType::Punctuator);
    }

    /// Decides whether the `/` under the cursor starts a regexp.
    ///
    /// Requires a second `/` later on the line and a preceding token that
    /// leaves the tokenizer expecting an operand.
    pub(crate) fn regexp_allowed(&self) -> bool {
        if !self.cursor.occurs_later('/') {
            return false;
        }

        match self.last_significant_token() {
            None => true,
            Some(token) => can_precede_regexp(token),
        }
    }

    /// Returns the last token, or the one before it if the last token is
    /// whitespace.
    ///
    /// Whitespace runs are maximal, so two steps back is enough.
    fn last_significant_token(&self) -> Option<&Token> {
        let mut previous = self.tokens.iter().rev();
        match previous.next() {
            Some(token) if token.is_whitespace() => previous.next(),
            last => last,
        }
    }
}

/// Returns true if a `/` right after `token` starts a regexp.
pub(crate) fn can_precede_regexp(token: &Token) -> bool {
    match token.kind {
        TokenType::Punctuator | TokenType::BalancedPunctuator => {
            !PUNCTUATORS_NOT_BEFORE_REGEXP.contains(&token.text.as_str())
        },
        _ => false,
    }
}
