//! Update operation: change the directives of an existing host block.

use crate::document::{ConfigDocument, Directive};
use crate::error::{Error, Result};

/// How an update combines new directives with the existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Keep existing keys that the update does not mention. A mentioned
    /// key replaces the first existing occurrence in place; later
    /// duplicates of that key are dropped; unmatched keys are appended.
    #[default]
    Merge,
    /// Replace the whole directive list with the new one.
    Replace,
}

/// Options for an update operation.
#[derive(Debug, Clone)]
pub struct UpdateOptions {
    /// The pattern of the block to update (exact match).
    pub pattern: String,

    /// The directives to apply.
    pub directives: Vec<Directive>,

    /// Merge or replace semantics.
    pub mode: UpdateMode,

    /// Keys to remove from the block (merge mode only).
    pub unset_keys: Vec<String>,
}

impl UpdateOptions {
    /// Creates update options in merge mode with nothing unset.
    #[must_use]
    pub fn new(pattern: impl Into<String>, directives: Vec<Directive>) -> Self {
        Self {
            pattern: pattern.into(),
            directives,
            mode: UpdateMode::Merge,
            unset_keys: Vec::new(),
        }
    }

    /// Sets the update mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: UpdateMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the keys to remove during a merge.
    #[must_use]
    pub fn with_unset_keys(mut self, unset_keys: Vec<String>) -> Self {
        self.unset_keys = unset_keys;
        self
    }
}

/// Updates an existing host block's directives.
///
/// The block's position, patterns, and attached comments are preserved in
/// both modes.
///
/// # Errors
///
/// Returns [`Error::HostNotFound`] if no block matches the pattern; the
/// document is left unchanged.
pub fn update(doc: &mut ConfigDocument, options: UpdateOptions) -> Result<()> {
    let index = doc
        .position(&options.pattern)
        .ok_or_else(|| Error::HostNotFound {
            pattern: options.pattern.clone(),
        })?;

    let block = &mut doc.blocks_mut()[index];
    match options.mode {
        UpdateMode::Replace => block.set_directives(options.directives),
        UpdateMode::Merge => {
            for directive in options.directives {
                block.merge_directive(directive);
            }
            for key in &options.unset_keys {
                block.remove_directives(key);
            }
        }
    }
    Ok(())
}
