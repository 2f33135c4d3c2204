//! Document model for SSH client configuration files.
//!
//! This module provides the typed records a parsed config file is held in:
//! [`Directive`], [`HostBlock`], [`Preamble`], and the root owner
//! [`ConfigDocument`]. Every record carries the verbatim text it was parsed
//! from, plus the comment and blank lines that precede it, so a document
//! can be written back byte-for-byte.
//!
//! The document is an explicit value: it is created by parsing, passed to
//! each operation, and persisted by an explicit save. Nothing in this
//! crate holds a document in global state.

use crate::error::Result;
use crate::{parser, serializer};

/// Indentation used for directive lines generated by the library.
///
/// Lines read from an existing file keep whatever indentation they had.
const DIRECTIVE_INDENT: &str = "    ";

/// A single `Key Value` configuration directive.
///
/// Keys are matched case-insensitively, as the SSH client does. Keys may
/// repeat within a block for multi-valued options such as `IdentityFile`
/// or `LocalForward`; ordering within a block is significant and preserved.
///
/// # Examples
///
/// ```
/// use squall::Directive;
///
/// let directive = Directive::new("HostName", "10.0.0.1").unwrap();
/// assert_eq!(directive.key(), "HostName");
/// assert_eq!(directive.value(), "10.0.0.1");
/// assert!(directive.matches_key("hostname"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    key: String,
    value: String,
    raw: String,
    leading: Vec<String>,
}

impl Directive {
    /// Creates a new directive with canonical formatting.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty after trimming whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use squall::Directive;
    ///
    /// assert!(Directive::new("User", "deploy").is_ok());
    /// assert!(Directive::new("  ", "deploy").is_err());
    /// ```
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> std::result::Result<Self, ValidationError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(ValidationError {
                field: "key".into(),
                message: "directive key must be non-empty".into(),
            });
        }
        let value = value.into().trim().to_string();
        let raw = render_directive(&key, &value);
        Ok(Self {
            key,
            value,
            raw,
            leading: Vec::new(),
        })
    }

    /// Creates a directive from a parsed line, preserving its raw text.
    pub(crate) fn from_raw(raw: String, key: String, value: String, leading: Vec<String>) -> Self {
        Self {
            key,
            value,
            raw,
            leading,
        }
    }

    /// Returns the directive keyword as written.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the directive value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the verbatim line this directive renders as.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the comment and blank lines attached above this directive.
    #[must_use]
    pub fn leading(&self) -> &[String] {
        &self.leading
    }

    /// Checks whether this directive's key matches, ignoring ASCII case.
    #[must_use]
    pub fn matches_key(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }

    /// Replaces the value, re-rendering the line canonically.
    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value.trim().to_string();
        self.raw = render_directive(&self.key, &self.value);
    }
}

fn render_directive(key: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{DIRECTIVE_INDENT}{key}")
    } else {
        format!("{DIRECTIVE_INDENT}{key} {value}")
    }
}

/// A host block: a `Host` line, its patterns, and its directives.
///
/// Blocks own the comment and blank lines written above their `Host` line
/// (`leading`) and, for the final block of a file, any lines left after
/// the last directive (`trailing`). The `order` index is the block's dense
/// position in the document and is maintained by the document on every
/// structural edit.
///
/// # Examples
///
/// ```
/// use squall::{Directive, HostBlock};
///
/// let block = HostBlock::new(
///     vec!["web".to_string()],
///     vec![Directive::new("HostName", "10.0.0.1").unwrap()],
/// )
/// .unwrap();
/// assert_eq!(block.pattern(), "web");
/// assert_eq!(block.host_line(), "Host web");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBlock {
    patterns: Vec<String>,
    host_line: String,
    directives: Vec<Directive>,
    leading: Vec<String>,
    trailing: Vec<String>,
    order: usize,
}

impl HostBlock {
    /// Creates a new block with canonical formatting.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern list is empty or any pattern is
    /// empty after trimming whitespace.
    pub fn new(
        patterns: Vec<String>,
        directives: Vec<Directive>,
    ) -> std::result::Result<Self, ValidationError> {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| p.trim().to_string())
            .collect();
        if patterns.is_empty() || patterns.iter().any(String::is_empty) {
            return Err(ValidationError {
                field: "patterns".into(),
                message: "host block must have at least one non-empty pattern".into(),
            });
        }
        let host_line = format!("Host {}", patterns.join(" "));
        Ok(Self {
            patterns,
            host_line,
            directives,
            leading: Vec::new(),
            trailing: Vec::new(),
            order: 0,
        })
    }

    /// Creates a block from a parsed `Host` line, preserving its raw text.
    pub(crate) fn from_parts(host_line: String, patterns: Vec<String>, leading: Vec<String>) -> Self {
        Self {
            patterns,
            host_line,
            directives: Vec::new(),
            leading,
            trailing: Vec::new(),
            order: 0,
        }
    }

    /// Returns the host patterns of this block.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns the joined pattern string, the block's lookup identity.
    ///
    /// This is the text after `Host`, with patterns joined by single
    /// spaces. Exact-match operations compare against it case-sensitively.
    #[must_use]
    pub fn pattern(&self) -> String {
        self.patterns.join(" ")
    }

    /// Returns the verbatim `Host` line.
    #[must_use]
    pub fn host_line(&self) -> &str {
        &self.host_line
    }

    /// Returns the directives of this block, in file order.
    #[must_use]
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Returns the comment and blank lines attached above the `Host` line.
    #[must_use]
    pub fn leading(&self) -> &[String] {
        &self.leading
    }

    /// Returns the lines trailing the last directive (end-of-file only).
    #[must_use]
    pub fn trailing(&self) -> &[String] {
        &self.trailing
    }

    /// Returns the block's dense position index within the document.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Checks whether this block's joined pattern equals `pattern` exactly.
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        self.pattern() == pattern
    }

    /// Returns the first directive whose key matches, ignoring ASCII case.
    #[must_use]
    pub fn find_directive(&self, key: &str) -> Option<&Directive> {
        self.directives.iter().find(|d| d.matches_key(key))
    }

    pub(crate) fn push_directive(&mut self, directive: Directive) {
        self.directives.push(directive);
    }

    pub(crate) fn set_directives(&mut self, directives: Vec<Directive>) {
        self.directives = directives;
    }

    pub(crate) fn set_leading(&mut self, leading: Vec<String>) {
        self.leading = leading;
    }

    pub(crate) fn set_trailing(&mut self, trailing: Vec<String>) {
        self.trailing = trailing;
    }

    pub(crate) fn set_order(&mut self, order: usize) {
        self.order = order;
    }

    /// Merges one directive: the first existing directive with the same
    /// key keeps its position and takes the new value (later duplicates of
    /// that key are dropped); an unmatched key is appended at the end.
    pub(crate) fn merge_directive(&mut self, directive: Directive) {
        if let Some(first) = self
            .directives
            .iter()
            .position(|d| d.matches_key(directive.key()))
        {
            self.directives[first].set_value(directive.value().to_string());
            let mut index = self.directives.len();
            while index > first + 1 {
                index -= 1;
                if self.directives[index].matches_key(directive.key()) {
                    self.directives.remove(index);
                }
            }
        } else {
            self.directives.push(directive);
        }
    }

    /// Removes every directive whose key matches, ignoring ASCII case.
    pub(crate) fn remove_directives(&mut self, key: &str) {
        self.directives.retain(|d| !d.matches_key(key));
    }
}

/// Directives and comments appearing before the first `Host` line.
///
/// The preamble is emitted unindented and has no `Host` line of its own.
/// It also owns the trailing lines of a file that contains no host blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preamble {
    directives: Vec<Directive>,
    trailing: Vec<String>,
}

impl Preamble {
    pub(crate) fn from_parts(directives: Vec<Directive>, trailing: Vec<String>) -> Self {
        Self {
            directives,
            trailing,
        }
    }

    /// Returns the preamble directives, in file order.
    #[must_use]
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Returns the trailing lines owned by the preamble.
    #[must_use]
    pub fn trailing(&self) -> &[String] {
        &self.trailing
    }

    /// Checks whether the preamble holds no directives and no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty() && self.trailing.is_empty()
    }
}

/// An in-memory SSH client configuration document.
///
/// The document is the root owner of every block, directive, and comment
/// parsed from a file. Blocks are kept in file order; their `order` fields
/// form a dense `0..n` sequence that is renumbered on every insert,
/// delete, and move.
///
/// # Examples
///
/// ```
/// use squall::ConfigDocument;
///
/// let doc = ConfigDocument::parse("Host web\n    HostName 10.0.0.1\n").unwrap();
/// assert_eq!(doc.blocks().len(), 1);
/// assert!(doc.contains("web"));
/// assert_eq!(doc.to_text(), "Host web\n    HostName 10.0.0.1\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    preamble: Preamble,
    blocks: Vec<HostBlock>,
    trailing_newline: bool,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            preamble: Preamble::default(),
            blocks: Vec::new(),
            trailing_newline: true,
        }
    }

    /// Parses a document from config text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Parse`] for a `Host` line with no patterns;
    /// every other input is accepted.
    pub fn parse(text: &str) -> Result<Self> {
        parser::parse(text)
    }

    /// Renders the document back to config text.
    ///
    /// An unmutated document reproduces its source bytes exactly.
    #[must_use]
    pub fn to_text(&self) -> String {
        serializer::serialize(self)
    }

    pub(crate) fn from_parts(
        preamble: Preamble,
        blocks: Vec<HostBlock>,
        trailing_newline: bool,
    ) -> Self {
        let mut doc = Self {
            preamble,
            blocks,
            trailing_newline,
        };
        doc.renumber();
        doc
    }

    /// Returns the preamble.
    #[must_use]
    pub fn preamble(&self) -> &Preamble {
        &self.preamble
    }

    /// Returns the host blocks, in `order`.
    #[must_use]
    pub fn blocks(&self) -> &[HostBlock] {
        &self.blocks
    }

    /// Checks whether the document has no blocks and an empty preamble.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.preamble.is_empty()
    }

    /// Returns the first block whose joined pattern equals `pattern`.
    ///
    /// A file that already contained two blocks with the same pattern
    /// parses into two independent blocks; lookups resolve to the first.
    #[must_use]
    pub fn find(&self, pattern: &str) -> Option<&HostBlock> {
        self.blocks.iter().find(|b| b.matches(pattern))
    }

    /// Returns the position of the first block matching `pattern`.
    #[must_use]
    pub fn position(&self, pattern: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.matches(pattern))
    }

    /// Checks whether any block's joined pattern equals `pattern`.
    #[must_use]
    pub fn contains(&self, pattern: &str) -> bool {
        self.position(pattern).is_some()
    }

    pub(crate) fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut [HostBlock] {
        &mut self.blocks
    }

    pub(crate) fn push_block(&mut self, block: HostBlock) {
        self.blocks.push(block);
        self.renumber();
    }

    pub(crate) fn insert_block(&mut self, position: usize, block: HostBlock) {
        self.blocks.insert(position, block);
        self.renumber();
    }

    pub(crate) fn remove_block(&mut self, position: usize) -> HostBlock {
        let block = self.blocks.remove(position);
        self.renumber();
        block
    }

    pub(crate) fn clear_blocks(&mut self) {
        self.blocks.clear();
    }

    fn renumber(&mut self) {
        for (index, block) in self.blocks.iter_mut().enumerate() {
            block.set_order(index);
        }
    }
}

/// Error type for record construction failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
