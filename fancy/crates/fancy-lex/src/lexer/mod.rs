//! Line tokenizer.
//!
//! This module organizes the tokenizer into smaller, focused components:
//! - `core` - `LineTokenizer` struct, dispatch and entry points
//! - `comment` - Line and block comments
//! - `string` - Quoted strings, multi-line strings and regexps
//! - `number` - Decimal and hexadecimal numbers
//! - `operator` - Punctuators and the regexp-or-divide decision
//! - `identifier` - Identifiers, keywords and native literals

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{tokenize, tokenize_line, LineTokenizer};
