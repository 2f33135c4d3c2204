//! Add command implementation.

use crate::error::CliError;
use crate::uri::parse_connection_uri;
use crate::utils::{build_directives, load_document, save_document, validate_name, GlobalOptions};
use clap::Args;
use squall::{add, AddOptions, Settings};

/// Add a new entry to the ssh config.
#[derive(Args)]
pub struct AddCommand {
    /// Name of the host entry
    pub name: String,

    /// Connection target as [user@]host[:port]
    pub connection_uri: String,

    /// Identity file for the entry
    #[arg(long, value_name = "PATH")]
    pub id_file: Option<String>,

    /// Additional option as KEY=VALUE (repeatable)
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// Overwrite an existing entry with the same name
    #[arg(long)]
    pub force: bool,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        validate_name(&self.name)?;

        let settings = Settings::load();
        let (user, host, port) = parse_connection_uri(
            &self.connection_uri,
            &settings.defaults.user(),
            settings.defaults.port(),
        )?;
        let directives =
            build_directives(&host, &user, port, self.id_file.as_deref(), &self.options)?;

        let (mut doc, path) = load_document(global)?;
        add(
            &mut doc,
            AddOptions::new(&self.name, directives).with_overwrite(self.force),
        )?;
        save_document(&doc, &path)?;

        if !global.quiet {
            println!(
                "{} added to your ssh config. you can connect it by typing \"ssh {}\".",
                self.name, self.name
            );
        }
        Ok(())
    }
}
