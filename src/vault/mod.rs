//! Destination vault - a rooted container for generated notes.
//!
//! All access goes through relative file names; anything that could escape
//! the root (separators, `..`, absolute paths) is rejected before touching
//! the filesystem.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// An open vault directory.
///
/// The conflict pre-pass reads it, node materialization writes to it; the
/// two phases never overlap, and no two notes in a run share a file name,
/// so no locking is needed.
#[derive(Debug)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    /// Open an existing vault directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let meta = std::fs::metadata(root)
            .with_context(|| format!("failed to open vault: {}", root.display()))?;
        if !meta.is_dir() {
            bail!("vault path is not a directory: {}", root.display());
        }
        Ok(Vault {
            root: root.to_path_buf(),
        })
    }

    /// Identity string for error messages.
    pub fn name(&self) -> String {
        self.root.display().to_string()
    }

    /// Check whether a note already exists.
    ///
    /// "Not found" is `Ok(false)`; any other failure (permissions, I/O)
    /// surfaces as an error so callers can abort instead of misreading a
    /// broken store as conflict-free.
    pub fn exists(&self, name: &str) -> io::Result<bool> {
        let path = self.resolve(name)?;
        match std::fs::metadata(&path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Create or truncate a note and open it for writing.
    ///
    /// Truncation is safe only because the conflict pre-pass already
    /// guaranteed the name was absent at the start of the run.
    pub fn create(&self, name: &str) -> io::Result<File> {
        let path = self.resolve(name)?;
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
    }

    /// Resolve a relative note name, refusing traversal outside the root.
    fn resolve(&self, name: &str) -> io::Result<PathBuf> {
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains('\\')
            || Path::new(name).is_absolute()
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("note name escapes vault root: `{name}`"),
            ));
        }
        Ok(self.root.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_exists_distinguishes_not_found() {
        let tmp = TempDir::new().unwrap();
        let vault = Vault::open(tmp.path()).unwrap();

        assert!(!vault.exists("missing.md").unwrap());

        std::fs::write(tmp.path().join("present.md"), "x").unwrap();
        assert!(vault.exists("present.md").unwrap());
    }

    #[test]
    fn test_create_truncates() {
        let tmp = TempDir::new().unwrap();
        let vault = Vault::open(tmp.path()).unwrap();

        std::fs::write(tmp.path().join("note.md"), "old content").unwrap();

        let mut file = vault.create("note.md").unwrap();
        write!(file, "new").unwrap();
        drop(file);

        assert_eq!(
            std::fs::read_to_string(tmp.path().join("note.md")).unwrap(),
            "new"
        );
    }

    #[test]
    fn test_rejects_traversal() {
        let tmp = TempDir::new().unwrap();
        let vault = Vault::open(tmp.path()).unwrap();

        for name in ["../escape.md", "a/b.md", "..", "", "/etc/passwd"] {
            let err = vault.exists(name).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "name: {name:?}");
        }
    }

    #[test]
    fn test_open_requires_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(Vault::open(&file).is_err());
        assert!(Vault::open(tmp.path().join("nope")).is_err());
    }
}
