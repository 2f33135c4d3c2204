//! Build script for squall-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("squall")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage SSH client configuration entries")
        .long_about("Command-line tool for adding, editing, and organizing entries in an SSH client configuration file")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Override the SSH config file location")
                .value_name("PATH")
                .global(true)
                .env("SQUALL_CONFIG"),
        )
        .subcommands(vec![
            Command::new("add")
                .about("Add a new entry to the ssh config")
                .long_about("Add a host entry built from a [user@]host[:port] connection target"),
            Command::new("edit")
                .about("Replace an entry's settings with a new connection target")
                .long_about("Rebuild an existing entry from a fresh connection target"),
            Command::new("update")
                .about("Merge changes into an existing entry")
                .long_about("Set, change, or unset individual options without touching the rest"),
            Command::new("delete")
                .about("Delete a single entry")
                .long_about("Remove a host entry and its attached comments"),
            Command::new("delete-all")
                .about("Delete all entries")
                .long_about("Remove every host entry, keeping global directives"),
            Command::new("list")
                .about("List all entries")
                .long_about("Display all host entries in table, JSON, CSV, or TSV form"),
            Command::new("search")
                .about("Search entries by text")
                .long_about("Find entries whose name or option values contain the given text"),
            Command::new("clone")
                .about("Clone an entry under a new name")
                .long_about("Copy an entry's options into a new entry appended at the end"),
            Command::new("move")
                .about("Move an entry to a new position in the file")
                .long_about("Reorder an entry to the given 0-based position"),
            Command::new("backup")
                .about("Copy the ssh config to a target file")
                .long_about("Write a copy of the managed config file to the given path"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main squall.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("squall.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
