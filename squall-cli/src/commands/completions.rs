//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completion scripts.
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, "squall", &mut io::stdout());
        Ok(())
    }
}
