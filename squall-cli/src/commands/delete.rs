//! Delete command implementation.

use crate::error::CliError;
use crate::utils::{load_document, save_document, GlobalOptions};
use clap::Args;
use squall::delete;

/// Delete a single entry.
#[derive(Args)]
pub struct DeleteCommand {
    /// Name of the host entry
    pub name: String,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (mut doc, path) = load_document(global)?;
        delete(&mut doc, &self.name)?;
        save_document(&doc, &path)?;

        if !global.quiet {
            println!("hostname \"{}\" deleted successfully.", self.name);
        }
        Ok(())
    }
}
