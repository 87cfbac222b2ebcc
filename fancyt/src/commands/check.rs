//! Check command implementation.
//!
//! Reports characters the tokenizer does not recognize and files that end
//! inside a block comment or a `"""` string.

use std::fmt;
use std::path::{Path, PathBuf};

use fancy_doc::Document;
use fancy_lex::TokenType;

use crate::commands::common::{error_messages, output_messages, process_files, validate_inputs};
use crate::commands::traits::Command;
use crate::config::CheckConfig;
use crate::error::{FancytError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Files to check.
    pub input: Vec<PathBuf>,
    /// Report unterminated constructs without failing.
    pub allow_unterminated: bool,
    /// Configured defaults.
    pub config: CheckConfig,
}

/// What is wrong at a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemKind {
    /// A character no token rule accepts.
    UnexpectedCharacter(String),
    /// The file ends inside a block comment.
    UnterminatedComment,
    /// The file ends inside a `"""` string.
    UnterminatedString,
}

/// One reported problem. Lines and columns count from 1; columns count
/// characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// The file as given on the command line.
    pub path: String,
    /// Line number.
    pub line: usize,
    /// Column number.
    pub column: usize,
    /// What was found.
    pub kind: ProblemKind,
}

impl Problem {
    /// Returns true for problems that end the file in an open construct.
    pub fn is_unterminated(&self) -> bool {
        !matches!(self.kind, ProblemKind::UnexpectedCharacter(_))
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ProblemKind::UnexpectedCharacter(c) => write!(
                f,
                "{}:{}:{}: unexpected character '{}'",
                self.path, self.line, self.column, c
            ),
            ProblemKind::UnterminatedComment => {
                write!(f, "{}:{}: unterminated block comment", self.path, self.line)
            },
            ProblemKind::UnterminatedString => {
                write!(f, "{}:{}: unterminated multi-line string", self.path, self.line)
            },
        }
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        validate_inputs(&self.args.input)?;

        let reports = process_files(&self.args.input, |path, source| {
            check_document(path, &Document::from_source(&source))
        })?;

        let fail_on_unterminated =
            self.args.config.fail_on_unterminated && !self.args.allow_unterminated;
        let mut failures = 0;

        for problem in reports.iter().flatten() {
            println!("{}", problem);
            if fail_on_unterminated || !problem.is_unterminated() {
                failures += 1;
            }
        }

        if failures > 0 {
            return Err(FancytError::CommandExecution(format!(
                "{} {}",
                failures,
                error_messages::PROBLEMS_FOUND
            )));
        }

        if self.args.verbose {
            eprintln!(
                "{} {} file(s)",
                output_messages::CHECK_PASSED,
                self.args.input.len()
            );
        }
        Ok(())
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Collects the problems in one tokenized document.
pub fn check_document(path: &Path, document: &Document) -> Vec<Problem> {
    let path = path.display().to_string();
    let mut problems = Vec::new();

    for (index, line) in document.lines().enumerate() {
        let mut column = 1;
        for token in line.tokens() {
            if token.kind == TokenType::Error {
                problems.push(Problem {
                    path: path.clone(),
                    line: index + 1,
                    column,
                    kind: ProblemKind::UnexpectedCharacter(token.text.clone()),
                });
            }
            column += token.text.chars().count();
        }
    }

    let last_line_info = document.last_line_info();
    let unterminated = if last_line_info.ends_inside_multiline_comment {
        Some(ProblemKind::UnterminatedComment)
    } else if last_line_info.ends_inside_multiline_string {
        Some(ProblemKind::UnterminatedString)
    } else {
        None
    };

    if let Some(kind) = unterminated {
        problems.push(Problem {
            path,
            line: document.len(),
            column: 1,
            kind,
        });
    }

    problems
}
