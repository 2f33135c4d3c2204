//! Clone operation: copy a host block under a new pattern.

use crate::document::{ConfigDocument, HostBlock};
use crate::error::{Error, Result};

/// Clones the block matching `source` into a new block appended at the
/// end under `new_pattern`.
///
/// Directives are deep-copied: mutating one block afterwards never
/// affects the other. The source block's comments stay with the source.
///
/// # Errors
///
/// - [`Error::HostNotFound`] if `source` does not match any block.
/// - [`Error::DuplicateHost`] if `new_pattern` already exists (including
///   `new_pattern == source`).
///
/// # Examples
///
/// ```
/// use squall::{clone_block, ConfigDocument};
///
/// let mut doc = ConfigDocument::parse("Host a\n    Port 1\n").unwrap();
/// clone_block(&mut doc, "a", "b").unwrap();
/// assert_eq!(doc.find("b").unwrap().directives()[0].value(), "1");
/// ```
pub fn clone_block(doc: &mut ConfigDocument, source: &str, new_pattern: &str) -> Result<()> {
    let index = doc.position(source).ok_or_else(|| Error::HostNotFound {
        pattern: source.to_string(),
    })?;
    if doc.contains(new_pattern) {
        return Err(Error::DuplicateHost {
            pattern: new_pattern.to_string(),
        });
    }

    let directives = doc.blocks()[index].directives().to_vec();
    let patterns = new_pattern
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let mut block = HostBlock::new(patterns, directives)?;
    // The source exists, so the document is never empty here.
    block.set_leading(vec![String::new()]);
    doc.push_block(block);
    Ok(())
}
