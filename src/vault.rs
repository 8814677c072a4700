//! Vault access: note IO, image resolution, physical renames
//!
//! A `Vault` wraps the directory tree holding notes and their images. All
//! paths handed out stay inside the root; reference arguments go through the
//! traversal guard in `util`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::constants as C;
use crate::util;

/// Handle to a vault directory
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    /// Open a vault rooted at `root`. The directory must exist.
    pub fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Vault directory not found: {}", root.display()),
            ));
        }
        let root = dunce::canonicalize(&root).unwrap_or(root);
        Ok(Vault { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a note argument to an existing Markdown file inside the vault.
    ///
    /// Arguments without an extension get `.md` appended. Anything that is
    /// not a Markdown file is rejected.
    pub fn resolve_note(&self, name: &str) -> io::Result<PathBuf> {
        let mut path = util::secure_join(&self.root, name)?;
        if path.extension().is_none() {
            path.set_extension(C::MARKDOWN_EXTENSION);
        }

        if !path.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Note not found: {}", name),
            ));
        }
        if path.extension().and_then(|e| e.to_str()) != Some(C::MARKDOWN_EXTENSION) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Only Markdown notes are supported",
            ));
        }

        Ok(path)
    }

    pub fn read_note(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    pub fn write_note(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }

    /// Resolve an image reference to an existing file.
    ///
    /// References containing a path separator resolve against the vault root.
    /// Bare names are looked up next to the referencing note, then at the
    /// root, then by a recursive scan. Returns `None` when nothing matches
    /// (including references the traversal guard rejects).
    pub fn resolve_reference(&self, name: &str, relative_to: &Path) -> Option<PathBuf> {
        if name.contains('/') || name.contains('\\') {
            let path = util::secure_join(&self.root, name).ok()?;
            return path.is_file().then_some(path);
        }

        let note_dir = relative_to.parent().unwrap_or(&self.root);
        let beside_note = note_dir.join(name);
        if beside_note.is_file() {
            return Some(beside_note);
        }

        let at_root = self.root.join(name);
        if at_root.is_file() {
            return Some(at_root);
        }

        self.find_by_name(&self.root, name)
    }

    /// Depth-first search for a file by exact name, directories visited in
    /// sorted order, dot-entries skipped.
    fn find_by_name(&self, dir: &Path, name: &str) -> Option<PathBuf> {
        let mut entries: Vec<PathBuf> = fs::read_dir(dir)
            .ok()?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| !n.starts_with('.'))
                    .unwrap_or(false)
            })
            .collect();
        entries.sort();

        for path in &entries {
            if path.is_file() && path.file_name().and_then(|n| n.to_str()) == Some(name) {
                return Some(path.clone());
            }
        }
        for path in &entries {
            if path.is_dir() {
                if let Some(found) = self.find_by_name(path, name) {
                    return Some(found);
                }
            }
        }
        None
    }

    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Physically rename a file. The destination's parent is the source's
    /// parent, so no directories need creating.
    pub fn rename_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    /// Reference timestamp of a note: creation time preferred, modification
    /// time as fallback, now when the filesystem reports neither.
    pub fn note_timestamp(&self, path: &Path) -> io::Result<DateTime<Local>> {
        let meta = fs::metadata(path)?;
        let time = match meta.created().or_else(|_| meta.modified()) {
            Ok(t) => DateTime::from(t),
            Err(_) => Local::now(),
        };
        Ok(time)
    }
}
