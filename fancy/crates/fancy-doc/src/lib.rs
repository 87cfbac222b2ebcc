//! fancy-doc - Tokenized documents with incremental re-lexing
//!
//! Holds a document as a list of tokenized lines and keeps it in sync with
//! its text as lines are replaced, inserted and removed. Each edit
//! re-tokenizes the edited line and then only the following lines whose
//! starting state changed, using
//! [`changes_require_propagation`](fancy_lex::changes_require_propagation)
//! to decide when to stop.
//!
//! After any sequence of edits the stored tokens equal what
//! [`fancy_lex::tokenize`] returns for [`Document::text`].

#![warn(missing_docs)]

pub mod document;
pub mod error;

pub use document::{Document, Line, Relexed};
pub use error::{DocumentError, Result};
