//! Backup command implementation.

use crate::error::CliError;
use crate::utils::{resolve_config_path, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Copy the ssh config to a target file.
#[derive(Args)]
pub struct BackupCommand {
    /// Where to write the copy
    pub target: PathBuf,
}

impl BackupCommand {
    /// Execute the backup command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = resolve_config_path(global)?;
        squall::store::backup_to(&path, &self.target)?;

        if !global.quiet {
            println!("backed up to {}.", self.target.display());
        }
        Ok(())
    }
}
