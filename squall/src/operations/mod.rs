//! Mutation operations over a [`crate::ConfigDocument`].
//!
//! Each operation works on an in-memory document passed in explicitly;
//! none of them touch the disk. Persistence is an explicit
//! [`crate::store::save`]. Every operation validates before it mutates,
//! so a failed call leaves the document exactly as it was.
//!
//! # Examples
//!
//! ```
//! use squall::{add, search, AddOptions, ConfigDocument, Directive};
//!
//! let mut doc = ConfigDocument::new();
//! let directives = vec![Directive::new("HostName", "10.0.0.1").unwrap()];
//! add(&mut doc, AddOptions::new("web", directives)).unwrap();
//!
//! assert_eq!(search(&doc, "web").count(), 1);
//! ```

pub mod add;
pub mod clone;
pub mod delete;
pub mod reorder;
pub mod search;
pub mod update;

pub use add::{add, AddOptions};
pub use clone::clone_block;
pub use delete::{delete, delete_all};
pub use reorder::move_block;
pub use search::{search, Search};
pub use update::{update, UpdateMode, UpdateOptions};
