//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCommand, BackupCommand, CloneCommand, CompletionsCommand, DeleteAllCommand, DeleteCommand,
    EditCommand, ListCommand, MoveCommand, SearchCommand, UpdateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing SSH client configuration entries.
#[derive(Parser)]
#[command(name = "squall")]
#[command(version, about = "Manage SSH client configuration entries", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the SSH config file location
    #[arg(long, value_name = "PATH", global = true, env = "SQUALL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Add a new entry to the ssh config
    Add(AddCommand),

    /// Replace an entry's settings with a new connection target
    Edit(EditCommand),

    /// Merge changes into an existing entry
    Update(UpdateCommand),

    /// Delete a single entry
    Delete(DeleteCommand),

    /// Delete all entries
    DeleteAll(DeleteAllCommand),

    /// List all entries
    List(ListCommand),

    /// Search entries by text
    Search(SearchCommand),

    /// Clone an entry under a new name
    Clone(CloneCommand),

    /// Move an entry to a new position in the file
    Move(MoveCommand),

    /// Copy the ssh config to a target file
    Backup(BackupCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
