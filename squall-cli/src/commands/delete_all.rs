//! Delete-all command implementation.

use crate::error::CliError;
use crate::utils::{load_document, save_document, GlobalOptions};
use clap::Args;
use squall::delete_all;

/// Delete all entries.
#[derive(Args)]
pub struct DeleteAllCommand {}

impl DeleteAllCommand {
    /// Execute the delete-all command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (mut doc, path) = load_document(global)?;
        let removed = delete_all(&mut doc);
        save_document(&doc, &path)?;

        if !global.quiet {
            println!("all entries deleted. ({removed} removed)");
        }
        Ok(())
    }
}
