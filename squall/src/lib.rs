#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # squall
//!
//! A library for managing SSH client configuration files.
//!
//! squall parses a `~/.ssh/config`-style file into an ordered, lossless
//! in-memory document, offers add/update/delete/clone/move/search
//! operations over it, and writes it back preserving comments, blank
//! lines, and block ordering. Parsing a file and serializing it without
//! mutation reproduces the original bytes exactly.
//!
//! ## Core Types
//!
//! - [`ConfigDocument`], [`HostBlock`], [`Directive`]: the document model
//! - [`Error`] and [`Result`]: error handling types
//! - [`Settings`]: the tool's own defaults and aliases
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use squall::{add, AddOptions, ConfigDocument, Directive};
//!
//! let text = "Host web\n    HostName 10.0.0.1\n";
//! let mut doc = ConfigDocument::parse(text).unwrap();
//!
//! // Unmutated round-trip is byte-identical.
//! assert_eq!(doc.to_text(), text);
//!
//! let directives = vec![Directive::new("HostName", "10.0.0.2").unwrap()];
//! add(&mut doc, AddOptions::new("db", directives)).unwrap();
//! assert!(doc.contains("db"));
//! ```

pub mod document;
pub mod error;
pub mod logging;
pub mod operations;
pub mod parser;
pub mod serializer;
pub mod settings;
pub mod store;
pub mod tokenizer;

// Re-export key types at crate root for convenience
pub use document::{ConfigDocument, Directive, HostBlock, Preamble};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    add, clone_block, delete, delete_all, move_block, search, update, AddOptions, Search,
    UpdateMode, UpdateOptions,
};
pub use parser::parse;
pub use serializer::serialize;
pub use settings::{Defaults, Settings};
