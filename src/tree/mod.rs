//! Read-only view of the input root: a plain directory or a zip archive.
//!
//! The rest of the pipeline only sees [`FileTree`]; which backend is in use is
//! decided once by [`open`].

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::error::{Result, SliceError};

/// Catalog paths are `/`-separated and relative to the tree root.
pub trait FileTree {
    fn exists(&mut self, path: &str) -> bool;

    fn read(&mut self, path: &str) -> Result<Vec<u8>>;

    /// Human-readable location of `path`, used in diagnostics.
    fn describe(&self, path: &str) -> String;
}

/// Picks a backend for `input`.
///
/// Directories are read in place; `.zip` and `.jar` files are opened as
/// archives. Anything else is rejected before a single atlas is looked at.
pub fn open(input: &Path) -> Result<Box<dyn FileTree>> {
    if input.is_dir() {
        return Ok(Box::new(DirTree::new(input)));
    }

    if input.is_file() && is_archive(input) {
        return Ok(Box::new(ZipTree::open(input)?));
    }

    Err(SliceError::InvalidInput(input.to_path_buf()))
}

fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("zip") || e.eq_ignore_ascii_case("jar"))
        .unwrap_or(false)
}

/// Drops a leading `/`, so catalog paths always resolve below a root.
pub(crate) fn normalize(path: &str) -> &str {
    path.trim_start_matches('/')
}

// ─────────────────────────────────────────────────────
// Directory backend
// ─────────────────────────────────────────────────────

#[derive(Debug)]
pub struct DirTree {
    root: PathBuf,
}

impl DirTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(normalize(path))
    }
}

impl FileTree for DirTree {
    fn exists(&mut self, path: &str) -> bool {
        self.resolve(path).is_file()
    }

    fn read(&mut self, path: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.resolve(path))?)
    }

    fn describe(&self, path: &str) -> String {
        let resolved = self.resolve(path);
        std::path::absolute(&resolved)
            .unwrap_or(resolved)
            .display()
            .to_string()
    }
}

// ─────────────────────────────────────────────────────
// Archive backend
// ─────────────────────────────────────────────────────

pub struct ZipTree {
    archive_path: PathBuf,
    archive: ZipArchive<File>,
}

impl ZipTree {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let archive = ZipArchive::new(file)?;
        Ok(Self {
            archive_path: path.to_path_buf(),
            archive,
        })
    }
}

impl FileTree for ZipTree {
    fn exists(&mut self, path: &str) -> bool {
        self.archive.index_for_name(normalize(path)).is_some()
    }

    fn read(&mut self, path: &str) -> Result<Vec<u8>> {
        let mut entry = self.archive.by_name(normalize(path))?;
        // the declared size comes from the archive header, so grow as data arrives
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    fn describe(&self, path: &str) -> String {
        format!("{}!/{}", self.archive_path.display(), normalize(path))
    }
}
