//! Comment lexing.
//!
//! Line comments run to the end of the line. Block comments may stay open
//! at the end of a line, which is recorded in the line's `LineInfo`.

use crate::lexer::LineTokenizer;
use crate::token::TokenType;

impl<'a> LineTokenizer<'a> {
    /// Consumes a `//` comment through the end of the line.
    pub(crate) fn lex_line_comment(&mut self) {
        self.cursor.advance_to_end();
        self.push(TokenType::Comment);
    }

    /// Consumes the body of a block comment whose `/*` is already behind
    /// the cursor (or was on an earlier line).
    ///
    /// Block comments do not nest: the first `*/` closes.
    pub(crate) fn lex_block_comment(&mut self) {
        let closed = self.cursor.eat_through("*/");
        self.line_info.ends_inside_multiline_comment = !closed;
        self.push(TokenType::Comment);
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{LineInfo, Token, TokenType};
    use crate::tokenize_line;

    fn inside_comment() -> LineInfo {
        LineInfo {
            ends_inside_multiline_comment: true,
            ends_inside_multiline_string: false,
        }
    }

    #[test]
    fn test_line_comment_takes_rest_of_line() {
        let result = tokenize_line("x // y /* z", None);
        assert_eq!(result.tokens.last(), Some(&Token::new("// y /* z", TokenType::Comment)));
        assert!(!result.line_info.ends_inside_multiline_comment);
    }

    #[test]
    fn test_closed_block_comment() {
        let result = tokenize_line("/* a */b", None);
        assert_eq!(result.tokens[0], Token::new("/* a */", TokenType::Comment));
        assert_eq!(result.tokens[1], Token::new("b", TokenType::Identifier));
        assert!(!result.line_info.ends_inside_multiline_comment);
    }

    #[test]
    fn test_open_block_comment() {
        let result = tokenize_line("/* abc", None);
        assert_eq!(result.tokens, vec![Token::new("/* abc", TokenType::Comment)]);
        assert!(result.line_info.ends_inside_multiline_comment);
    }

    #[test]
    fn test_block_comment_does_not_reuse_opening_star() {
        let result = tokenize_line("/*/", None);
        assert_eq!(result.tokens, vec![Token::new("/*/", TokenType::Comment)]);
        assert!(result.line_info.ends_inside_multiline_comment);
    }

    #[test]
    fn test_empty_block_comment() {
        let result = tokenize_line("/**/x", None);
        assert_eq!(result.tokens[0].text, "/**/");
        assert!(!result.line_info.ends_inside_multiline_comment);
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        let result = tokenize_line("/* a /* b */ c */", None);
        assert_eq!(result.tokens[0].text, "/* a /* b */");
        assert_eq!(result.tokens[2], Token::new("c", TokenType::Identifier));
    }

    #[test]
    fn test_carried_comment_closes() {
        let result = tokenize_line("def */ x", Some(&inside_comment()));
        assert_eq!(
            result.tokens,
            vec![
                Token::new("def */", TokenType::Comment),
                Token::new(" ", TokenType::WhiteSpace),
                Token::new("x", TokenType::Identifier),
            ]
        );
        assert!(!result.line_info.ends_inside_multiline_comment);
    }

    #[test]
    fn test_carried_comment_stays_open() {
        let result = tokenize_line("still // inside", Some(&inside_comment()));
        assert_eq!(result.tokens, vec![Token::new("still // inside", TokenType::Comment)]);
        assert!(result.line_info.ends_inside_multiline_comment);
    }

    #[test]
    fn test_carried_comment_closing_at_start() {
        let result = tokenize_line("*/", Some(&inside_comment()));
        assert_eq!(result.tokens, vec![Token::new("*/", TokenType::Comment)]);
        assert!(!result.line_info.ends_inside_multiline_comment);
    }

    #[test]
    fn test_carried_comment_on_empty_line() {
        let result = tokenize_line("", Some(&inside_comment()));
        assert_eq!(result.tokens, vec![Token::new("", TokenType::Comment)]);
        assert!(result.line_info.ends_inside_multiline_comment);
    }

    #[test]
    fn test_comment_reopened_after_close() {
        let result = tokenize_line("*/ x /* y", Some(&inside_comment()));
        assert_eq!(result.tokens.last(), Some(&Token::new("/* y", TokenType::Comment)));
        assert!(result.line_info.ends_inside_multiline_comment);
    }
}
