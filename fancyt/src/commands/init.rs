//! Init command implementation.
//!
//! Writes a `fancyt.toml` holding the default settings.

use std::path::{Path, PathBuf};

use crate::commands::common::{error_messages, output_messages};
use crate::commands::traits::Command;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{FancytError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to write into (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Execute the command and return the path of the written file.
    pub fn run(&self) -> Result<PathBuf> {
        let target = self.args.path.clone().unwrap_or_else(|| PathBuf::from("."));
        self.validate_directory(&target)?;

        let config_path = target.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            return Err(FancytError::Validation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        tracing::info!(path = %config_path.display(), "wrote configuration");

        if self.args.verbose {
            eprintln!("{} {}", output_messages::CREATED_FILE, config_path.display());
        }
        Ok(config_path)
    }

    /// Creates the target directory if needed and rejects non-directories.
    fn validate_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "creating directory");
            std::fs::create_dir_all(path).map_err(|e| {
                FancytError::FileOperation(format!(
                    "Failed to create directory {}: {}",
                    path.display(),
                    e
                ))
            })?;
            return Ok(());
        }

        if !path.is_dir() {
            return Err(FancytError::Validation(format!(
                "{} {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }

        Ok(())
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}
