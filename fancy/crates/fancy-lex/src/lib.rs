//! fancy-lex - Incremental line tokenizer for the Fancypants editor
//!
//! This crate tokenizes source code of the AppJet server-side JavaScript
//! dialect one line at a time. Each call takes the line and the state the
//! previous line ended in, and returns the line's tokens together with the
//! state to hand to the next line. An editor can therefore re-tokenize only
//! the line that changed, and continue to the following lines only while
//! that state keeps changing.
//!
//! # Example Usage
//!
//! ```
//! use fancy_lex::{changes_require_propagation, tokenize_line, TokenType};
//!
//! let first = tokenize_line("var s = \"\"\"multi", None);
//! assert!(first.line_info.ends_inside_multiline_string);
//!
//! let second = tokenize_line("line\"\"\";", Some(&first.line_info));
//! assert_eq!(second.tokens[0].kind, TokenType::MultiLineString);
//!
//! // Closing the string changed the state the next line starts in.
//! assert!(changes_require_propagation(
//!     Some(&first.line_info),
//!     Some(&second.line_info),
//! ));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token type and line state definitions
//! - [`lexer`] - The line tokenizer
//! - [`cursor`] - Character cursor over a line
//! - [`chars`] - Character classes
//!
//! # Guarantees
//!
//! - **Lossless**: the token texts of a line concatenate to the line.
//! - **Total**: every input produces tokens; unknown characters become
//!   one-character [`TokenType::Error`] tokens and unterminated constructs
//!   run to the end of the line.
//! - **Pure**: the result depends only on the line and the previous state.
//!
//! Only block comments and `"""` strings carry over to the next line.
//! Unterminated quoted strings and regexps end with their line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{tokenize, tokenize_line, LineTokenizer};
pub use token::{
    changes_require_propagation, classify_word, is_keyword, is_native_literal, LineInfo, Token,
    TokenType, TokenizedLine,
};
