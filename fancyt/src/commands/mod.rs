//! Command modules for the fancyt CLI.
//!
//! Each subcommand lives in its own file and implements
//! [`traits::Command`].

pub mod common;
pub mod traits;

pub mod check;
pub mod init;
pub mod tokenize;

pub use check::{CheckArgs, CheckCommand};
pub use init::{InitArgs, InitCommand};
pub use tokenize::{TokenizeArgs, TokenizeCommand};
pub use traits::Command;
