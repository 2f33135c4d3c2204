//! Config model builder.
//!
//! One pass over the token stream assembles a [`ConfigDocument`]: a
//! `Host` token opens a new block and closes the previous one, directive
//! tokens attach to the current block (or to the preamble before any
//! `Host` line), and comment/blank lines buffer until the next structural
//! line claims them as its `leading` text. Whatever is still buffered at
//! end-of-file becomes the trailing text of the last block, or of the
//! preamble in a host-less file.

use crate::document::{ConfigDocument, Directive, HostBlock, Preamble};
use crate::error::{Error, Result};
use crate::tokenizer::{LineKind, Tokenizer};

/// Parses config text into a [`ConfigDocument`].
///
/// Parsing is permissive; the single rejected malformation is a `Host`
/// line with no patterns, which cannot be represented as a block.
///
/// # Errors
///
/// Returns [`Error::Parse`] with the offending line number for a
/// patternless `Host` line.
///
/// # Examples
///
/// ```
/// use squall::parse;
///
/// let doc = parse("# prod box\nHost web\n    HostName 10.0.0.1\n").unwrap();
/// assert_eq!(doc.blocks().len(), 1);
/// assert_eq!(doc.blocks()[0].leading(), ["# prod box"]);
/// ```
pub fn parse(text: &str) -> Result<ConfigDocument> {
    let trailing_newline = text.is_empty() || text.ends_with('\n');

    let mut preamble_directives: Vec<Directive> = Vec::new();
    let mut blocks: Vec<HostBlock> = Vec::new();
    let mut current: Option<HostBlock> = None;
    let mut pending: Vec<String> = Vec::new();

    for line in Tokenizer::new(text) {
        match line.kind {
            LineKind::Blank | LineKind::Comment => {
                pending.push(line.raw.to_string());
            }
            LineKind::Directive { key, value } => {
                let directive = Directive::from_raw(
                    line.raw.to_string(),
                    key,
                    value,
                    std::mem::take(&mut pending),
                );
                match current.as_mut() {
                    Some(block) => block.push_directive(directive),
                    None => preamble_directives.push(directive),
                }
            }
            LineKind::HostOpen { patterns } => {
                if patterns.is_empty() {
                    return Err(Error::Parse {
                        line: line.number,
                        message: "Host line has no patterns".to_string(),
                    });
                }
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
                current = Some(HostBlock::from_parts(
                    line.raw.to_string(),
                    patterns,
                    std::mem::take(&mut pending),
                ));
            }
        }
    }

    // End-of-file leftovers belong to the last container seen.
    let mut preamble_trailing = Vec::new();
    if let Some(mut block) = current.take() {
        block.set_trailing(pending);
        blocks.push(block);
    } else {
        preamble_trailing = pending;
    }

    let doc = ConfigDocument::from_parts(
        Preamble::from_parts(preamble_directives, preamble_trailing),
        blocks,
        trailing_newline,
    );
    log::debug!("parsed config with {} host block(s)", doc.blocks().len());
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let doc = parse("").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_single_block() {
        let doc = parse("Host web\n    HostName 10.0.0.1\n    User deploy\n").unwrap();
        assert_eq!(doc.blocks().len(), 1);
        let block = &doc.blocks()[0];
        assert_eq!(block.pattern(), "web");
        assert_eq!(block.directives().len(), 2);
        assert_eq!(block.directives()[0].key(), "HostName");
        assert_eq!(block.directives()[1].value(), "deploy");
    }

    #[test]
    fn test_preamble_directives() {
        let doc = parse("ServerAliveInterval 60\n\nHost web\n    User deploy\n").unwrap();
        assert_eq!(doc.preamble().directives().len(), 1);
        assert_eq!(doc.preamble().directives()[0].key(), "ServerAliveInterval");
        // The blank line after the preamble belongs to the next block.
        assert_eq!(doc.blocks()[0].leading(), [""]);
    }

    #[test]
    fn test_comments_attach_to_following_block() {
        let doc = parse("# prod\n# web tier\nHost web\n    User deploy\n").unwrap();
        assert_eq!(doc.blocks()[0].leading(), ["# prod", "# web tier"]);
    }

    #[test]
    fn test_comments_attach_to_following_directive() {
        let doc = parse("Host web\n    # key rotated 2024\n    IdentityFile ~/.ssh/web\n").unwrap();
        let directive = &doc.blocks()[0].directives()[0];
        assert_eq!(directive.leading(), ["    # key rotated 2024"]);
    }

    #[test]
    fn test_trailing_lines_attach_to_last_block() {
        let doc = parse("Host web\n    User deploy\n\n# end of file\n").unwrap();
        assert_eq!(doc.blocks()[0].trailing(), ["", "# end of file"]);
    }

    #[test]
    fn test_trailing_lines_attach_to_preamble_without_hosts() {
        let doc = parse("# just a comment file\n\n").unwrap();
        assert!(doc.blocks().is_empty());
        assert_eq!(doc.preamble().trailing(), ["# just a comment file", ""]);
    }

    #[test]
    fn test_orders_are_dense() {
        let doc = parse("Host a\nHost b\nHost c\n").unwrap();
        let orders: Vec<usize> = doc.blocks().iter().map(|b| b.order()).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_patternless_host_rejected() {
        let err = parse("Host web\n    User deploy\nHost\n").unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("no patterns"));
            }
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn test_duplicate_patterns_kept_independent() {
        let doc = parse("Host dup\n    Port 1\nHost dup\n    Port 2\n").unwrap();
        assert_eq!(doc.blocks().len(), 2);
        assert_eq!(doc.blocks()[0].directives()[0].value(), "1");
        assert_eq!(doc.blocks()[1].directives()[0].value(), "2");
    }

    #[test]
    fn test_unrecognized_line_passes_through() {
        let doc = parse("Host web\n=oops\n    User deploy\n").unwrap();
        let directive = &doc.blocks()[0].directives()[0];
        assert_eq!(directive.leading(), ["=oops"]);
    }

    #[test]
    fn test_equals_form_parsed() {
        let doc = parse("Host web\n    Port=2222\n").unwrap();
        assert_eq!(doc.blocks()[0].directives()[0].key(), "Port");
        assert_eq!(doc.blocks()[0].directives()[0].value(), "2222");
    }
}
