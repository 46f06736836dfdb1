//! Reading the `Music/Artist/Album/Track` hierarchy.
//!
//! Nothing is cached: every call lists the directory again. Entries come
//! back sorted by name so that "natural order" is stable across platforms.

use crate::error::{Result, SplayError};
use log::debug;
use std::fs;
use std::path::Path;

/// Finder metadata that macOS drops into every directory.
pub const DS_STORE: &str = ".DS_Store";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    /// Dangling symlinks, FIFOs, sockets and devices.
    Other,
}

/// A direct child of a directory: an artist, an album or a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: EntryKind::Dir }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: EntryKind::File }
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Lists every direct child of `path`.
///
/// Symlinks are followed when deciding what kind a child is; one whose
/// target is missing is [`EntryKind::Other`].
/// Children whose names are not valid UTF-8 are skipped with a debug log.
///
/// # Errors
///
/// Returns [`SplayError::ReadDir`] if `path` does not exist or cannot be read.
pub fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    let read_err = |source| SplayError::ReadDir { path: path.to_path_buf(), source };

    let mut entries = Vec::new();
    for child in fs::read_dir(path).map_err(read_err)? {
        let child = child.map_err(read_err)?;
        let Ok(name) = child.file_name().into_string() else {
            debug!("Skipping non UTF-8 name in {}", path.display());
            continue;
        };
        if name.is_empty() {
            continue;
        }
        let kind = match fs::metadata(child.path()) {
            Ok(meta) if meta.is_dir() => EntryKind::Dir,
            Ok(meta) if meta.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        };
        entries.push(Entry { name, kind });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("Read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Subdirectories of `path` (artists under the root, albums under an artist).
pub fn directories(path: &Path) -> Result<Vec<Entry>> {
    Ok(read_entries(path)?.into_iter().filter(Entry::is_dir).collect())
}

/// Regular files of `path`, minus `.DS_Store`.
pub fn tracks(path: &Path) -> Result<Vec<Entry>> {
    Ok(read_entries(path)?
        .into_iter()
        .filter(|e| e.is_file() && e.name != DS_STORE)
        .collect())
}

/// Returns `name` minus its last extension, e.g. `"dog.txt.orig"` becomes
/// `"dog.txt"`. Dotfiles keep their name.
#[must_use]
pub fn trim_ext(name: &str) -> &str {
    match Path::new(name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => &name[..name.len() - ext.len() - 1],
        None => name,
    }
}
