//! Line tokenizer for SSH client configuration text.
//!
//! The tokenizer splits raw config text into logical lines and classifies
//! each one without losing a single byte: the verbatim text of every line
//! travels with its classification so the document can be written back
//! exactly as it was read.
//!
//! The format has no strict grammar, so classification is permissive:
//! anything that is not blank, a comment, a `Host` line, or a `Key Value`
//! directive is treated as comment-like passthrough.

/// Classification of a single configuration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// An empty or whitespace-only line.
    Blank,
    /// A `#` comment, or an unrecognized line preserved as passthrough.
    Comment,
    /// A `Host <pattern>...` line opening a new block.
    ///
    /// The pattern list may be empty here; the parser rejects that case,
    /// since an unkeyed block cannot be represented in the model.
    HostOpen {
        /// The whitespace-separated host patterns on the line.
        patterns: Vec<String>,
    },
    /// A `Key Value` or `Key=Value` directive line.
    Directive {
        /// The directive keyword, exactly as written.
        key: String,
        /// The directive value with surrounding whitespace removed.
        value: String,
    },
}

/// A classified configuration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// The 1-based line number within the source text.
    pub number: usize,
    /// The verbatim line text, without its terminating newline.
    pub raw: &'a str,
    /// The classification of the line.
    pub kind: LineKind,
}

/// A lazy iterator over the classified lines of a config text.
///
/// The tokenizer is a pure function of its input: constructing a new
/// tokenizer over the same text yields the same sequence, which makes
/// re-tokenization the restart mechanism.
///
/// # Examples
///
/// ```
/// use squall::tokenizer::{LineKind, Tokenizer};
///
/// let mut lines = Tokenizer::new("Host web\n    User deploy\n");
/// assert!(matches!(lines.next().unwrap().kind, LineKind::HostOpen { .. }));
/// assert!(matches!(lines.next().unwrap().kind, LineKind::Directive { .. }));
/// assert!(lines.next().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    remaining: &'a str,
    number: usize,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over the given config text.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            remaining: text,
            number: 0,
            done: text.is_empty(),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let raw = match self.remaining.find('\n') {
            Some(index) => {
                let line = &self.remaining[..index];
                self.remaining = &self.remaining[index + 1..];
                // A final newline terminates the last line; it does not
                // open an extra empty one.
                if self.remaining.is_empty() {
                    self.done = true;
                }
                line
            }
            None => {
                self.done = true;
                self.remaining
            }
        };

        self.number += 1;
        Some(Line {
            number: self.number,
            raw,
            kind: classify(raw),
        })
    }
}

/// Classifies a single line of configuration text.
fn classify(raw: &str) -> LineKind {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with('#') {
        return LineKind::Comment;
    }

    let key_len = trimmed
        .find(|c: char| c.is_whitespace() || c == '=')
        .unwrap_or(trimmed.len());
    let key = &trimmed[..key_len];
    if key.is_empty() {
        // e.g. a line starting with '=': opaque passthrough
        return LineKind::Comment;
    }

    let mut rest = trimmed[key_len..].trim_start();
    if let Some(after_equals) = rest.strip_prefix('=') {
        rest = after_equals.trim_start();
    }

    if key.eq_ignore_ascii_case("host") {
        let patterns = rest.split_whitespace().map(str::to_string).collect();
        LineKind::HostOpen { patterns }
    } else {
        LineKind::Directive {
            key: key.to_string(),
            value: rest.to_string(),
        }
    }
}
