//! Delete operations: remove host blocks from a document.

use crate::document::{ConfigDocument, HostBlock};
use crate::error::{Error, Result};

/// Deletes the host block matching `pattern`.
///
/// The block's attached comments and blank lines go with it, and the
/// `order` values of the remaining blocks are renumbered densely. The
/// removed block is returned.
///
/// # Errors
///
/// Returns [`Error::HostNotFound`] if no block matches; the document is
/// left unchanged.
///
/// # Examples
///
/// ```
/// use squall::{delete, ConfigDocument};
///
/// let mut doc = ConfigDocument::parse("Host a\nHost b\n").unwrap();
/// let removed = delete(&mut doc, "a").unwrap();
/// assert_eq!(removed.pattern(), "a");
/// assert_eq!(doc.blocks()[0].order(), 0);
/// ```
pub fn delete(doc: &mut ConfigDocument, pattern: &str) -> Result<HostBlock> {
    let index = doc.position(pattern).ok_or_else(|| Error::HostNotFound {
        pattern: pattern.to_string(),
    })?;
    Ok(doc.remove_block(index))
}

/// Deletes every host block, returning how many were removed.
///
/// The preamble is untouched.
pub fn delete_all(doc: &mut ConfigDocument) -> usize {
    let count = doc.blocks().len();
    doc.clear_blocks();
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "# a box\nHost a\n    Port 1\n\nHost b\n    Port 2\n\nHost c\n    Port 3\n";

    #[test]
    fn test_delete_removes_block_and_comments() {
        let mut doc = ConfigDocument::parse(TEXT).unwrap();
        delete(&mut doc, "a").unwrap();

        assert!(!doc.contains("a"));
        let text = doc.to_text();
        assert!(!text.contains("# a box"));
        assert!(!text.contains("Port 1"));
    }

    #[test]
    fn test_delete_renumbers_densely() {
        let mut doc = ConfigDocument::parse(TEXT).unwrap();
        delete(&mut doc, "b").unwrap();

        let orders: Vec<usize> = doc.blocks().iter().map(HostBlock::order).collect();
        assert_eq!(orders, vec![0, 1]);
        assert_eq!(doc.blocks()[1].pattern(), "c");
    }

    #[test]
    fn test_delete_missing_fails_unchanged() {
        let mut doc = ConfigDocument::parse(TEXT).unwrap();
        let before = doc.to_text();

        let err = delete(&mut doc, "nope").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(doc.to_text(), before);
    }

    #[test]
    fn test_delete_returns_removed_block() {
        let mut doc = ConfigDocument::parse(TEXT).unwrap();
        let removed = delete(&mut doc, "c").unwrap();
        assert_eq!(removed.pattern(), "c");
        assert_eq!(removed.directives()[0].value(), "3");
    }

    #[test]
    fn test_delete_all() {
        let mut doc = ConfigDocument::parse(TEXT).unwrap();
        assert_eq!(delete_all(&mut doc), 3);
        assert!(doc.blocks().is_empty());
        assert_eq!(delete_all(&mut doc), 0);
    }

    #[test]
    fn test_delete_all_keeps_preamble() {
        let mut doc =
            ConfigDocument::parse("ServerAliveInterval 60\n\nHost a\n    Port 1\n").unwrap();
        delete_all(&mut doc);
        assert_eq!(doc.preamble().directives().len(), 1);
        assert_eq!(doc.to_text(), "ServerAliveInterval 60\n");
    }
}
