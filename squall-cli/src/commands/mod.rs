//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `add`: Add a new entry to the ssh config
//! - `edit`: Replace an entry's settings with a new connection target
//! - `update`: Merge changes into an existing entry
//! - `delete`: Delete a single entry
//! - `delete_all`: Delete all entries
//! - `list`: List all entries
//! - `search`: Search entries by text
//! - `clone`: Clone an entry under a new name
//! - `move_entry`: Move an entry to a new position in the file
//! - `backup`: Copy the ssh config to a target file
//! - `completions`: Generate shell completion scripts

pub mod add;
pub mod backup;
pub mod clone;
pub mod completions;
pub mod delete;
pub mod delete_all;
pub mod edit;
pub mod list;
pub mod move_entry;
pub mod search;
pub mod update;

pub use add::AddCommand;
pub use backup::BackupCommand;
pub use clone::CloneCommand;
pub use completions::CompletionsCommand;
pub use delete::DeleteCommand;
pub use delete_all::DeleteAllCommand;
pub use edit::EditCommand;
pub use list::ListCommand;
pub use move_entry::MoveCommand;
pub use search::SearchCommand;
pub use update::UpdateCommand;
