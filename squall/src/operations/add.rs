//! Add operation: append a new host block to a document.

use crate::document::{ConfigDocument, Directive, HostBlock};
use crate::error::{Error, Result};

/// Options for an add operation.
#[derive(Debug, Clone)]
pub struct AddOptions {
    /// The pattern of the block to create (space-separated globs).
    pub pattern: String,

    /// The directives of the new block, in emission order.
    pub directives: Vec<Directive>,

    /// Replace the directives of an existing block instead of failing.
    pub overwrite: bool,
}

impl AddOptions {
    /// Creates add options with overwrite disabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use squall::AddOptions;
    ///
    /// let options = AddOptions::new("web", Vec::new());
    /// assert!(!options.overwrite);
    /// ```
    #[must_use]
    pub fn new(pattern: impl Into<String>, directives: Vec<Directive>) -> Self {
        Self {
            pattern: pattern.into(),
            directives,
            overwrite: false,
        }
    }

    /// Sets the overwrite flag.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Adds a host block to the document.
///
/// A new block is appended at the end with the next dense `order` value.
/// If the pattern already exists and `overwrite` is set, the existing
/// block keeps its position, patterns, and attached comments, and only
/// its directives are replaced.
///
/// # Errors
///
/// - [`Error::DuplicateHost`] if the pattern exists and `overwrite` is
///   not set.
/// - [`Error::Validation`] if the pattern is empty.
pub fn add(doc: &mut ConfigDocument, options: AddOptions) -> Result<()> {
    if let Some(index) = doc.position(&options.pattern) {
        if !options.overwrite {
            return Err(Error::DuplicateHost {
                pattern: options.pattern,
            });
        }
        doc.blocks_mut()[index].set_directives(options.directives);
        return Ok(());
    }

    let patterns = options
        .pattern
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let mut block = HostBlock::new(patterns, options.directives)?;
    if !doc.is_empty() {
        // Separate the new block from whatever precedes it.
        block.set_leading(vec![String::new()]);
    }
    doc.push_block(block);
    Ok(())
}
