//! Clone command implementation.

use crate::error::CliError;
use crate::utils::{load_document, save_document, validate_name, GlobalOptions};
use clap::Args;
use squall::clone_block;

/// Clone an entry under a new name.
#[derive(Args)]
pub struct CloneCommand {
    /// Name of the entry to clone
    pub name: String,

    /// Name for the new entry
    pub clone_name: String,
}

impl CloneCommand {
    /// Execute the clone command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        validate_name(&self.name)?;
        validate_name(&self.clone_name)?;

        let (mut doc, path) = load_document(global)?;
        clone_block(&mut doc, &self.name, &self.clone_name)?;
        save_document(&doc, &path)?;

        if !global.quiet {
            println!(
                "{} added to your ssh config. you can connect it by typing \"ssh {}\".",
                self.clone_name, self.clone_name
            );
        }
        Ok(())
    }
}
