//! Edge case tests for fancy-lex
