//! Search command implementation.

use crate::error::CliError;
use crate::utils::{describe_block, load_document, GlobalOptions};
use clap::Args;
use squall::{search, Settings};

/// Search entries by text.
#[derive(Args)]
pub struct SearchCommand {
    /// Text to look for in host names and option values
    pub query: String,
}

impl SearchCommand {
    /// Execute the search command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (doc, _path) = load_document(global)?;
        let settings = Settings::load();

        let results: Vec<String> = search(&doc, &self.query)
            .map(|block| describe_block(block, &settings.defaults))
            .collect();

        if results.is_empty() {
            println!("no results found.");
        } else {
            println!("Listing results for {}:", self.query);
            for result in results {
                println!("    {result}");
            }
        }
        Ok(())
    }
}
