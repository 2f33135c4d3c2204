//! Move command implementation.

use crate::error::CliError;
use crate::utils::{load_document, save_document, GlobalOptions};
use clap::Args;
use squall::move_block;

/// Move an entry to a new position in the file.
#[derive(Args)]
pub struct MoveCommand {
    /// Name of the host entry
    pub name: String,

    /// Target position, counted from 0 at the top of the file
    pub position: usize,
}

impl MoveCommand {
    /// Execute the move command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (mut doc, path) = load_document(global)?;
        move_block(&mut doc, &self.name, self.position)?;
        save_document(&doc, &path)?;

        if !global.quiet {
            println!("\"{}\" moved to position {}.", self.name, self.position);
        }
        Ok(())
    }
}
