//! File store: load and save documents on disk.
//!
//! The config file on disk is the only shared external resource. Every
//! access here is scoped: the file is opened, fully read or written, and
//! closed on every exit path. A save over an existing file first copies
//! it to a derived backup path so an interrupted write can be recovered.
//! Concurrent external edits between load and save are not detected;
//! last writer wins.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::ConfigDocument;
use crate::error::Result;
use crate::parser::parse;
use crate::serializer::serialize;

/// Loads a document from the config file at `path`.
///
/// A missing file yields an empty document, so a fresh config can be
/// built up and saved without touching the disk first.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the file exists but cannot be read,
/// or [`crate::Error::Parse`] if its content is rejected by the parser.
pub fn load(path: &Path) -> Result<ConfigDocument> {
    if !path.exists() {
        log::debug!("config file {} does not exist, starting empty", path.display());
        return Ok(ConfigDocument::new());
    }
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Saves a document to the config file at `path`.
///
/// If the file already exists it is first copied to [`backup_path`];
/// otherwise missing parent directories are created. The document is
/// then serialized and written in full.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the backup copy or the write fails.
pub fn save(doc: &ConfigDocument, path: &Path) -> Result<()> {
    if path.exists() {
        let backup = backup_path(path);
        fs::copy(path, &backup)?;
        log::debug!("backed up {} to {}", path.display(), backup.display());
    } else if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serialize(doc))?;
    log::debug!("wrote {} host block(s) to {}", doc.blocks().len(), path.display());
    Ok(())
}

/// Returns the derived backup path for a config file: the same file name
/// with `.bak` appended, in the same directory.
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("config"), OsString::from);
    name.push(".bak");
    path.with_file_name(name)
}

/// Copies the config file at `path` to an explicit `target`, returning
/// the number of bytes copied.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the source is unreadable or the
/// target is unwritable.
pub fn backup_to(path: &Path, target: &Path) -> Result<u64> {
    Ok(fs::copy(path, target)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{add, AddOptions};
    use crate::Directive;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_empty_document() {
        let dir = tempdir().unwrap();
        let doc = load(&dir.path().join("config")).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config");

        let text = "# note\nHost web\n    HostName 10.0.0.1\n";
        let doc = crate::parse(text).unwrap();
        save(&doc, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), text);
        let reloaded = load(&path).unwrap();
        assert_eq!(reloaded.to_text(), text);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".ssh").join("config");

        save(&ConfigDocument::new(), &path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_save_backs_up_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config");
        fs::write(&path, "Host old\n").unwrap();

        let mut doc = load(&path).unwrap();
        add(
            &mut doc,
            AddOptions::new("new", vec![Directive::new("Port", "22").unwrap()]),
        )
        .unwrap();
        save(&doc, &path).unwrap();

        let backup = backup_path(&path);
        assert_eq!(fs::read_to_string(&backup).unwrap(), "Host old\n");
        assert!(fs::read_to_string(&path).unwrap().contains("Host new"));
    }

    #[test]
    fn test_first_save_writes_no_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config");

        save(&ConfigDocument::new(), &path).unwrap();

        assert!(!backup_path(&path).exists());
    }

    #[test]
    fn test_backup_path_derivation() {
        assert_eq!(
            backup_path(Path::new("/home/x/.ssh/config")),
            PathBuf::from("/home/x/.ssh/config.bak")
        );
    }

    #[test]
    fn test_backup_to_explicit_target() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config");
        let target = dir.path().join("saved");
        fs::write(&path, "Host a\n").unwrap();

        let bytes = backup_to(&path, &target).unwrap();

        assert_eq!(bytes, 7);
        assert_eq!(fs::read_to_string(&target).unwrap(), "Host a\n");
    }

    #[test]
    fn test_backup_to_missing_source_fails() {
        let dir = tempdir().unwrap();
        let result = backup_to(&dir.path().join("absent"), &dir.path().join("t"));
        assert!(result.is_err());
    }
}
