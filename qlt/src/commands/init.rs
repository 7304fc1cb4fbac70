//! Init command implementation.
//!
//! Writes a default `qlt.toml` so the settings can be edited by hand.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::commands::common::error_messages;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{QltError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// File or directory to write to (default: `./qlt.toml`).
    pub path: Option<PathBuf>,
    /// Overwrite an existing configuration file.
    pub force: bool,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Create a new InitCommand.
    pub fn new(args: InitArgs) -> Self {
        Self { args }
    }

    /// Execute the command, reporting the written file on `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<PathBuf> {
        let target = self.target_path();
        self.validate_target(&target)?;

        Config::default().save_to_path(&target)?;
        tracing::debug!(path = %target.display(), "wrote default configuration");

        writeln!(out, "Created {}", target.display())?;
        Ok(target)
    }

    /// A directory argument gets the default file name appended.
    fn target_path(&self) -> PathBuf {
        match &self.args.path {
            Some(path) if path.is_dir() => path.join(CONFIG_FILE_NAME),
            Some(path) => path.clone(),
            None => PathBuf::from(CONFIG_FILE_NAME),
        }
    }

    fn validate_target(&self, target: &Path) -> Result<()> {
        if target.exists() && !self.args.force {
            return Err(QltError::Validation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                target.display()
            )));
        }
        Ok(())
    }
}

/// Run the init command.
pub fn run_init<W: Write>(args: InitArgs, out: &mut W) -> Result<PathBuf> {
    InitCommand::new(args).run(out)
}
