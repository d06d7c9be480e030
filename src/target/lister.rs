//! Directory listing behind a trait so resolution can run on fixed listings.

use std::fs;
use std::io;
use std::path::Path;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    pub name: String,
    pub is_file: bool,
}

impl ListedFile {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_file: true,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_file: false,
        }
    }
}

/// Directory listing capability used to guess a missing extension.
pub trait DirectoryLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<ListedFile>>;
}

/// Lists the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<ListedFile>> {
        let mut listed = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // Names that are not valid UTF-8 can't match a UTF-8 target anyway.
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            let is_file = entry.file_type()?.is_file();
            listed.push(ListedFile { name, is_file });
        }
        Ok(listed)
    }
}

/// Fixed listing, returned for every directory. Keeps listing order stable
/// for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticLister {
    files: Vec<ListedFile>,
}

impl StaticLister {
    pub fn new(files: Vec<ListedFile>) -> Self {
        Self { files }
    }

    /// Listing of regular files with the given names.
    pub fn files<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(names.into_iter().map(ListedFile::file).collect())
    }
}

impl DirectoryLister for StaticLister {
    fn list(&self, _dir: &Path) -> io::Result<Vec<ListedFile>> {
        Ok(self.files.clone())
    }
}
