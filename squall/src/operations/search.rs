//! Search operation: lazily find host blocks matching a query.

use crate::document::{ConfigDocument, HostBlock};

/// A lazy iterator over matching host blocks.
///
/// Produced by [`search`]; restart by calling [`search`] again. The
/// iterator borrows the document and never mutates it.
#[derive(Debug, Clone)]
pub struct Search<'a> {
    blocks: std::slice::Iter<'a, HostBlock>,
    query: String,
}

impl<'a> Iterator for Search<'a> {
    type Item = &'a HostBlock;

    fn next(&mut self) -> Option<Self::Item> {
        let query = &self.query;
        self.blocks.by_ref().find(|block| block_matches(block, query))
    }
}

/// Searches the document for blocks matching `query`.
///
/// A block matches when `query` is a case-insensitive substring of its
/// joined pattern or of any directive value.
///
/// # Examples
///
/// ```
/// use squall::{search, ConfigDocument};
///
/// let doc = ConfigDocument::parse(
///     "Host a\n    HostName 1.2.3.4\n\nHost b\n    HostName 5.6.7.8\n",
/// )
/// .unwrap();
///
/// let hits: Vec<String> = search(&doc, "a").map(|b| b.pattern()).collect();
/// assert_eq!(hits, ["a"]);
/// ```
#[must_use]
pub fn search<'a>(doc: &'a ConfigDocument, query: &str) -> Search<'a> {
    Search {
        blocks: doc.blocks().iter(),
        query: query.to_lowercase(),
    }
}

fn block_matches(block: &HostBlock, query: &str) -> bool {
    block.pattern().to_lowercase().contains(query)
        || block
            .directives()
            .iter()
            .any(|d| d.value().to_lowercase().contains(query))
}
