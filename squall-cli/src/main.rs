//! Main entry point for the squall CLI.
//!
//! This is the command-line interface for managing SSH client
//! configuration entries:
//! - `add`/`edit`/`update`: create and change host entries
//! - `delete`/`delete-all`: remove host entries
//! - `list`/`search`: inspect the config
//! - `clone`/`move`: copy and reorder entries
//! - `backup`: copy the config file elsewhere

mod cli;
mod commands;
mod error;
mod uri;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Expand a leading settings alias, then parse CLI arguments
    let args = expand_alias(std::env::args().collect());
    let cli = Cli::parse_from(args);

    // Initialize logging based on verbosity
    let _logger = squall::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Add(cmd) => cmd.execute(&global),
        cli::Command::Edit(cmd) => cmd.execute(&global),
        cli::Command::Update(cmd) => cmd.execute(&global),
        cli::Command::Delete(cmd) => cmd.execute(&global),
        cli::Command::DeleteAll(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Search(cmd) => cmd.execute(&global),
        cli::Command::Clone(cmd) => cmd.execute(&global),
        cli::Command::Move(cmd) => cmd.execute(&global),
        cli::Command::Backup(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

/// Replaces a first-argument alias with the subcommand words it maps to
/// in the settings file. Unknown names pass through untouched.
fn expand_alias(mut args: Vec<String>) -> Vec<String> {
    if args.len() < 2 {
        return args;
    }
    let aliases = squall::Settings::load().aliases;
    if let Some(target) = aliases.get(&args[1]) {
        let words: Vec<String> = target.split_whitespace().map(str::to_string).collect();
        if !words.is_empty() {
            args.splice(1..2, words);
        }
    }
    args
}
