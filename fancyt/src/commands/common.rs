//! Common types and utilities for fancyt commands.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rayon::prelude::*;

use crate::error::{FancytError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for `tokenize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line of `KIND "text"` pairs per source line
    Text,
    /// A JSON array with one entry per file
    Json,
}

impl FromStr for OutputFormat {
    type Err = FancytError;

    /// Parses a format name, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(FancytError::Validation(format!(
                "{} {}",
                error_messages::UNKNOWN_FORMAT,
                s
            ))),
        }
    }
}

// ============================================================================
// File Utilities
// ============================================================================

/// Checks that there is at least one input and that each one is a file.
pub fn validate_inputs(inputs: &[PathBuf]) -> Result<()> {
    if inputs.is_empty() {
        return Err(FancytError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }

    for path in inputs {
        if !path.exists() {
            return Err(FancytError::Validation(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_EXIST,
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(FancytError::Validation(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_FILE,
                path.display()
            )));
        }
    }

    Ok(())
}

/// Reads a source file as UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        FancytError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
    })
}

/// Runs `process` on every input on the rayon pool, keeping input order.
///
/// Fails if any input cannot be read.
pub fn process_files<T, F>(inputs: &[PathBuf], process: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&Path, String) -> T + Sync,
{
    inputs
        .par_iter()
        .map(|path| {
            let source = read_source(path)?;
            tracing::debug!(path = %path.display(), bytes = source.len(), "processing file");
            Ok(process(path, source))
        })
        .collect()
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when the init target is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";

    /// Error when `init` would overwrite a configuration file.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force):";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when `check` found problems.
    pub const PROBLEMS_FOUND: &str = "problem(s) found";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message templates.
pub mod output_messages {
    /// Message when a file is created.
    pub const CREATED_FILE: &str = "✅ Created file:";

    /// Message when every checked file is clean.
    pub const CHECK_PASSED: &str = "✅ No problems found in";

    /// Message when output was written to a file.
    pub const WROTE_OUTPUT: &str = "✅ Wrote tokens to";
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(FancytError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_inputs() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.js");
        std::fs::write(&file, "x").unwrap();

        assert!(validate_inputs(&[file]).is_ok());
        assert!(validate_inputs(&[]).is_err());
        assert!(validate_inputs(&[temp_dir.path().join("missing.js")]).is_err());
        assert!(validate_inputs(&[temp_dir.path().to_path_buf()]).is_err());
    }

    #[test]
    fn test_process_files_keeps_order() {
        let temp_dir = TempDir::new().unwrap();
        let inputs: Vec<PathBuf> = (0..8)
            .map(|i| {
                let path = temp_dir.path().join(format!("{}.js", i));
                std::fs::write(&path, i.to_string()).unwrap();
                path
            })
            .collect();

        let contents = process_files(&inputs, |_, source| source).unwrap();
        let expected: Vec<String> = (0..8).map(|i| i.to_string()).collect();
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_process_files_reports_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let result = process_files(&[temp_dir.path().join("gone.js")], |_, source| source);
        assert!(matches!(result, Err(FancytError::FileOperation(_))));
    }
}
