//! Serializer for [`ConfigDocument`].
//!
//! Rendering is the inverse of parsing: every stored line is emitted
//! exactly once, in document order, so an unmutated document reproduces
//! its source text byte for byte. Output is deterministic: identical
//! document state always serializes to identical bytes.

use crate::document::ConfigDocument;

/// Renders a document to config text.
///
/// The preamble is emitted first (unindented, no `Host` line), then each
/// block in `order`: its leading lines, its `Host` line, its directives
/// (each preceded by its own leading lines), and its trailing lines.
///
/// # Examples
///
/// ```
/// use squall::{parse, serialize};
///
/// let text = "# box\nHost web\n    HostName 10.0.0.1\n";
/// let doc = parse(text).unwrap();
/// assert_eq!(serialize(&doc), text);
/// ```
#[must_use]
pub fn serialize(doc: &ConfigDocument) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for directive in doc.preamble().directives() {
        lines.extend(directive.leading().iter().map(String::as_str));
        lines.push(directive.raw());
    }
    lines.extend(doc.preamble().trailing().iter().map(String::as_str));

    for block in doc.blocks() {
        lines.extend(block.leading().iter().map(String::as_str));
        lines.push(block.host_line());
        for directive in block.directives() {
            lines.extend(directive.leading().iter().map(String::as_str));
            lines.push(directive.raw());
        }
        lines.extend(block.trailing().iter().map(String::as_str));
    }

    if lines.is_empty() {
        return String::new();
    }

    let mut text = lines.join("\n");
    if doc.trailing_newline() {
        text.push('\n');
    }
    text
}
