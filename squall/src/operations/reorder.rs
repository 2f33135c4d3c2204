//! Move operation: reposition a host block within a document.

use crate::document::ConfigDocument;
use crate::error::{Error, Result};

/// Moves the block matching `pattern` to position `new_order`.
///
/// The block travels with its attached comments and blank lines; all
/// intervening blocks are renumbered so `order` stays dense and matches
/// file position.
///
/// # Errors
///
/// - [`Error::HostNotFound`] if no block matches `pattern`.
/// - [`Error::InvalidPosition`] if `new_order` is not a valid position.
///
/// # Examples
///
/// ```
/// use squall::{move_block, ConfigDocument};
///
/// let mut doc = ConfigDocument::parse("Host a\nHost b\nHost c\n").unwrap();
/// move_block(&mut doc, "c", 0).unwrap();
/// let patterns: Vec<String> = doc.blocks().iter().map(|b| b.pattern()).collect();
/// assert_eq!(patterns, ["c", "a", "b"]);
/// ```
pub fn move_block(doc: &mut ConfigDocument, pattern: &str, new_order: usize) -> Result<()> {
    let index = doc.position(pattern).ok_or_else(|| Error::HostNotFound {
        pattern: pattern.to_string(),
    })?;
    let count = doc.blocks().len();
    if new_order >= count {
        return Err(Error::InvalidPosition {
            position: new_order,
            count,
        });
    }

    let block = doc.remove_block(index);
    doc.insert_block(new_order, block);
    Ok(())
}
