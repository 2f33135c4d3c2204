//! Edit command implementation.
//!
//! Edit replaces the whole entry with settings built from a fresh
//! connection target, unlike `update` which merges into what is there.

use crate::error::CliError;
use crate::uri::parse_connection_uri;
use crate::utils::{build_directives, load_document, save_document, GlobalOptions};
use clap::Args;
use squall::{update, Settings, UpdateMode, UpdateOptions};

/// Replace an entry's settings with a new connection target.
#[derive(Args)]
pub struct EditCommand {
    /// Name of the host entry (comma-separated names become one
    /// multi-pattern entry)
    pub name: String,

    /// Connection target as [user@]host[:port]
    pub connection_uri: String,

    /// Identity file for the entry
    #[arg(long, value_name = "PATH")]
    pub id_file: Option<String>,

    /// Additional option as KEY=VALUE (repeatable)
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,
}

impl EditCommand {
    /// Execute the edit command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let name = if self.name.contains(',') {
            self.name.split(',').collect::<Vec<_>>().join(" ")
        } else {
            self.name.clone()
        };

        let settings = Settings::load();
        let (user, host, port) = parse_connection_uri(
            &self.connection_uri,
            &settings.defaults.user(),
            settings.defaults.port(),
        )?;
        let directives =
            build_directives(&host, &user, port, self.id_file.as_deref(), &self.options)?;

        let (mut doc, path) = load_document(global)?;
        update(
            &mut doc,
            UpdateOptions::new(&name, directives).with_mode(UpdateMode::Replace),
        )?;
        save_document(&doc, &path)?;

        if !global.quiet {
            println!("\"{name}\" updated successfully.");
        }
        Ok(())
    }
}
