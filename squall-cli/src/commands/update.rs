//! Update command implementation.

use crate::error::CliError;
use crate::utils::{
    directive, load_document, parse_custom_options, quote_identity_file, save_document,
    GlobalOptions,
};
use clap::Args;
use squall::{update, UpdateOptions};

/// Merge changes into an existing entry.
#[derive(Args)]
pub struct UpdateCommand {
    /// Name of the host entry
    pub name: String,

    /// Option to set as KEY=VALUE (repeatable)
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// Identity file for the entry
    #[arg(long, value_name = "PATH")]
    pub id_file: Option<String>,

    /// Option key to remove (repeatable)
    #[arg(long, value_name = "KEY")]
    pub unset: Vec<String>,
}

impl UpdateCommand {
    /// Execute the update command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.options.is_empty() && self.id_file.is_none() && self.unset.is_empty() {
            return Err(CliError::InvalidArguments(
                "nothing to update: pass --option, --id-file, or --unset".to_string(),
            ));
        }

        let mut directives = parse_custom_options(&self.options)?;
        if let Some(ref id_file) = self.id_file {
            directives.push(directive("IdentityFile", &quote_identity_file(id_file))?);
        }

        let (mut doc, path) = load_document(global)?;
        update(
            &mut doc,
            UpdateOptions::new(&self.name, directives).with_unset_keys(self.unset),
        )?;
        save_document(&doc, &path)?;

        if !global.quiet {
            println!("\"{}\" updated successfully.", self.name);
        }
        Ok(())
    }
}
