//! Tokenize command implementation.
//!
//! Prints the tokens of each input file, as text or JSON.

use std::path::{Path, PathBuf};

use fancy_lex::{tokenize, TokenizedLine};
use serde::Serialize;

use crate::commands::common::{output_messages, process_files, validate_inputs, OutputFormat};
use crate::commands::traits::Command;
use crate::config::TokenizeConfig;
use crate::error::Result;

/// Arguments for the tokenize command.
#[derive(Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Files to tokenize.
    pub input: Vec<PathBuf>,
    /// Write output here instead of stdout.
    pub output: Option<PathBuf>,
    /// Output format; falls back to the configured one.
    pub format: Option<String>,
    /// Leave whitespace tokens out of the output.
    pub skip_whitespace: bool,
    /// Configured defaults.
    pub config: TokenizeConfig,
}

/// The tokens of one file, as written in JSON output.
#[derive(Debug, Serialize)]
pub struct FileTokens {
    /// The file as given on the command line.
    pub path: String,
    /// One entry per source line.
    pub lines: Vec<TokenizedLine>,
}

/// Tokenize command handler.
pub struct TokenizeCommand {
    args: TokenizeArgs,
}

impl TokenizeCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        validate_inputs(&self.args.input)?;
        let format = self.output_format()?;
        let skip_whitespace = self.args.skip_whitespace || self.args.config.skip_whitespace;

        let files = process_files(&self.args.input, |path, source| {
            tokenize_file(path, &source, skip_whitespace)
        })?;

        let rendered = match format {
            OutputFormat::Text => render_text(&files),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&files)?;
                json.push('\n');
                json
            },
        };

        self.write_output(&rendered)
    }

    /// The format from the command line, or else from the configuration.
    fn output_format(&self) -> Result<OutputFormat> {
        self.args
            .format
            .as_deref()
            .unwrap_or(&self.args.config.format)
            .parse()
    }

    fn write_output(&self, rendered: &str) -> Result<()> {
        match &self.args.output {
            Some(path) => {
                std::fs::write(path, rendered)?;
                if self.args.verbose {
                    eprintln!("{} {}", output_messages::WROTE_OUTPUT, path.display());
                }
            },
            None => print!("{}", rendered),
        }
        Ok(())
    }
}

impl Command for TokenizeCommand {
    type Args = TokenizeArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "tokenize"
    }
}

/// Tokenizes one file, optionally dropping whitespace tokens.
pub fn tokenize_file(path: &Path, source: &str, skip_whitespace: bool) -> FileTokens {
    let mut lines = tokenize(source);
    if skip_whitespace {
        for line in &mut lines {
            line.tokens = line.significant_tokens().cloned().collect();
        }
    }

    FileTokens {
        path: path.display().to_string(),
        lines,
    }
}

/// Renders files as `<line>: KIND "text" ...`, with a `==> path <==`
/// header before each file when there is more than one.
pub fn render_text(files: &[FileTokens]) -> String {
    let mut out = String::new();
    let headers = files.len() > 1;

    for (index, file) in files.iter().enumerate() {
        if headers {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&format!("==> {} <==\n", file.path));
        }

        for (number, line) in file.lines.iter().enumerate() {
            out.push_str(&(number + 1).to_string());
            out.push(':');
            for token in &line.tokens {
                out.push_str(&format!(" {}", token));
            }
            out.push('\n');
        }
    }

    out
}
